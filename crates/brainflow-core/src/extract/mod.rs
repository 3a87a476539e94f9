//! Brain dump task extraction.
//!
//! Turns one freeform text blob (typed, or transcribed from speech) into an
//! ordered list of task fragments. The pipeline is rule-based and offline:
//!
//! 1. split into lines; lines are never merged
//! 2. normalize speech artifacts and strip list markers
//! 3. split on semicolons, then connectors, then commas, then "and"
//! 4. clean up, validate and deduplicate fragments
//! 5. retry aggressively when the text clearly held several tasks but only
//!    one fragment survived
//!
//! Extraction never fails: non-blank input always yields at least one
//! fragment.

pub mod dedup;
pub mod normalize;
pub mod signals;
pub mod split;
pub mod validity;

use serde::{Deserialize, Serialize};

pub use split::SplitMode;
pub use validity::{is_strong_segment, is_valid_segment, NounPhraseRule, ACTION_VERBS};

/// Extractor settings, stored under `[extractor]` in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Retry with aggressive splitting when a single fragment survives but
    /// the text signals several tasks.
    #[serde(default = "default_true")]
    pub aggressive_fallback: bool,
    /// Drop exact and near-duplicate fragments.
    #[serde(default = "default_true")]
    pub dedupe: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            aggressive_fallback: true,
            dedupe: true,
        }
    }
}

/// Rule-based task extractor.
#[derive(Debug, Clone, Default)]
pub struct TaskExtractor {
    config: ExtractorConfig,
}

impl TaskExtractor {
    /// Create an extractor with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with custom settings.
    pub fn with_config(config: ExtractorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract task fragments from raw text.
    pub fn extract(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let mut fragments = self.run_pass(text, SplitMode::Standard);
        tracing::debug!(count = fragments.len(), "standard extraction pass");

        if fragments.len() == 1
            && self.config.aggressive_fallback
            && signals::signals_multiple_tasks(text)
        {
            let aggressive = self.run_pass(text, SplitMode::Aggressive);
            tracing::debug!(count = aggressive.len(), "aggressive extraction pass");
            if aggressive.len() > fragments.len() {
                fragments = aggressive;
            }
        }

        if fragments.is_empty() {
            tracing::debug!("no fragment survived, keeping the whole input");
            return vec![normalize::collapse_whitespace(text)];
        }
        fragments
    }

    fn run_pass(&self, text: &str, mode: SplitMode) -> Vec<String> {
        let fragments: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .flat_map(|line| split_line(line, mode))
            .map(|fragment| normalize::clean_fragment(&fragment))
            .filter(|fragment| is_valid_segment(fragment))
            .collect();

        if self.config.dedupe {
            dedup::dedupe(fragments)
        } else {
            fragments
        }
    }
}

fn split_line(line: &str, mode: SplitMode) -> Vec<String> {
    let line = normalize::strip_list_marker(&normalize::normalize_speech(line));
    split::split_semicolons(&line)
        .iter()
        .flat_map(|piece| split::split_piece(piece, mode))
        .collect()
}

/// Extract task fragments with default settings.
pub fn extract_tasks(text: &str) -> Vec<String> {
    TaskExtractor::new().extract(text)
}
