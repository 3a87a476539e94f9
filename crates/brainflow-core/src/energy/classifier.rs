//! Keyword-scoring energy classifier.
//!
//! Each category owns a fixed keyword vocabulary. A task scores one point
//! per keyword occurrence, then complexity and time cues add fixed bonuses.
//! A single strict winner is taken as-is; ties and zero-signal inputs fall
//! through an ordered list of heuristics so every valid input resolves to
//! exactly one category.

use serde::{Deserialize, Serialize};

use super::category::{Confidence, EnergyCategory};
use super::signals::{Complexity, TimeEstimate};
use crate::error::ClassificationError;

/// Minimum trimmed length of a classifiable description.
pub const MIN_DESCRIPTION_CHARS: usize = 3;

/// Descriptions shorter than this fall back to [`EnergyCategory::None`].
const SHORT_DESCRIPTION_CHARS: usize = 20;

const DEEP_KEYWORDS: &[&str] = &[
    "design", "architect", "architecture", "research", "debug", "learn", "analyze", "analysis",
    "strategy", "strategic", "brainstorm", "innovate", "conceptualize", "solve", "invent",
    "algorithm", "study", "investigate", "plan", "creative",
];

const STEADY_KEYWORDS: &[&str] = &[
    "implement", "build", "test", "deploy", "meeting", "code", "coding", "develop", "refactor",
    "fix", "integrate", "configure", "setup", "present", "prepare", "collaborate", "coordinate",
    "train", "draft", "report",
];

const LOW_KEYWORDS: &[&str] = &[
    "read", "check", "email", "routine", "quick", "reply", "respond", "browse", "watch", "listen",
    "call", "review", "message", "scan", "inbox",
];

const NONE_KEYWORDS: &[&str] = &[
    "file", "sort", "delete", "archive", "mindless", "data entry", "data-entry", "organize",
    "clean", "tidy", "copy", "paste", "rename", "backup", "laundry", "dishes",
];

/// Keyword vocabulary for a category.
pub fn keywords(category: EnergyCategory) -> &'static [&'static str] {
    match category {
        EnergyCategory::Deep => DEEP_KEYWORDS,
        EnergyCategory::Steady => STEADY_KEYWORDS,
        EnergyCategory::Low => LOW_KEYWORDS,
        EnergyCategory::None => NONE_KEYWORDS,
    }
}

/// Adjusted score per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyScores {
    pub deep: u32,
    pub steady: u32,
    pub low: u32,
    pub none: u32,
}

impl EnergyScores {
    pub fn get(&self, category: EnergyCategory) -> u32 {
        match category {
            EnergyCategory::Deep => self.deep,
            EnergyCategory::Steady => self.steady,
            EnergyCategory::Low => self.low,
            EnergyCategory::None => self.none,
        }
    }

    fn add(&mut self, category: EnergyCategory, points: u32) {
        match category {
            EnergyCategory::Deep => self.deep += points,
            EnergyCategory::Steady => self.steady += points,
            EnergyCategory::Low => self.low += points,
            EnergyCategory::None => self.none += points,
        }
    }

    /// Highest score across categories.
    pub fn max(&self) -> u32 {
        EnergyCategory::ALL
            .iter()
            .map(|c| self.get(*c))
            .max()
            .unwrap_or(0)
    }

    /// The category holding the maximum, if exactly one does and it is above zero.
    pub fn strict_winner(&self) -> Option<EnergyCategory> {
        let max = self.max();
        if max == 0 {
            return None;
        }
        let mut leaders = EnergyCategory::ALL.iter().filter(|c| self.get(**c) == max);
        match (leaders.next(), leaders.next()) {
            (Some(category), None) => Some(*category),
            _ => None,
        }
    }
}

/// Result of classifying one task description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub category: EnergyCategory,
    pub explanation: String,
    pub confidence: Confidence,
}

/// Classification with the signals that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationDetail {
    #[serde(flatten)]
    pub classification: Classification,
    pub scores: EnergyScores,
    pub complexity: Complexity,
    pub time_estimate: Option<TimeEstimate>,
}

/// Wire shape: either the classification or `{ "error": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClassificationOutcome {
    Classified(Classification),
    Rejected { error: String },
}

impl From<Result<Classification, ClassificationError>> for ClassificationOutcome {
    fn from(result: Result<Classification, ClassificationError>) -> Self {
        match result {
            Ok(classification) => ClassificationOutcome::Classified(classification),
            Err(err) => ClassificationOutcome::Rejected {
                error: err.to_string(),
            },
        }
    }
}

/// Deterministic energy classifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnergyClassifier;

impl EnergyClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a task description.
    ///
    /// # Errors
    ///
    /// Returns [`ClassificationError::Empty`] for blank input and
    /// [`ClassificationError::TooShort`] when fewer than
    /// [`MIN_DESCRIPTION_CHARS`] characters remain after trimming.
    pub fn classify(&self, text: &str) -> Result<Classification, ClassificationError> {
        self.classify_detailed(text).map(|d| d.classification)
    }

    /// Classify and keep the scores and detected cues.
    pub fn classify_detailed(
        &self,
        text: &str,
    ) -> Result<ClassificationDetail, ClassificationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ClassificationError::Empty);
        }
        let length = text.chars().count();
        if length < MIN_DESCRIPTION_CHARS {
            return Err(ClassificationError::TooShort {
                min: MIN_DESCRIPTION_CHARS,
            });
        }

        let complexity = Complexity::detect(text);
        let time_estimate = TimeEstimate::detect(text);
        let scores = score(text, complexity, time_estimate);

        let (category, confidence) = match scores.strict_winner() {
            Some(category) => (category, Confidence::from_score(scores.max())),
            None => (
                fallback_category(complexity, time_estimate, length),
                Confidence::Low,
            ),
        };
        tracing::debug!(%category, %confidence, max_score = scores.max(), "classified task");

        Ok(ClassificationDetail {
            classification: Classification {
                category,
                explanation: explain(category, confidence, complexity, time_estimate),
                confidence,
            },
            scores,
            complexity,
            time_estimate,
        })
    }
}

/// Keyword counts plus complexity and time bonuses.
pub fn score(text: &str, complexity: Complexity, time: Option<TimeEstimate>) -> EnergyScores {
    let lower = text.to_lowercase();
    let mut scores = EnergyScores::default();
    for category in EnergyCategory::ALL {
        let hits: usize = keywords(category)
            .iter()
            .map(|keyword| lower.matches(*keyword).count())
            .sum();
        scores.add(category, u32::try_from(hits).unwrap_or(u32::MAX));
    }

    match complexity {
        Complexity::High => {
            scores.add(EnergyCategory::Deep, 2);
            scores.add(EnergyCategory::Steady, 1);
        }
        Complexity::Low => {
            scores.add(EnergyCategory::Low, 1);
            scores.add(EnergyCategory::None, 2);
        }
        Complexity::Medium => {}
    }

    match time {
        Some(TimeEstimate::Quick) => {
            scores.add(EnergyCategory::Low, 1);
            scores.add(EnergyCategory::None, 1);
        }
        Some(TimeEstimate::Long) => {
            scores.add(EnergyCategory::Deep, 1);
            scores.add(EnergyCategory::Steady, 1);
        }
        Some(TimeEstimate::Medium) | None => {}
    }

    scores
}

/// Ordered heuristics for ties and zero-signal input.
fn fallback_category(
    complexity: Complexity,
    time: Option<TimeEstimate>,
    length: usize,
) -> EnergyCategory {
    if complexity == Complexity::High {
        EnergyCategory::Deep
    } else if time == Some(TimeEstimate::Quick) {
        EnergyCategory::Low
    } else if length < SHORT_DESCRIPTION_CHARS {
        EnergyCategory::None
    } else {
        EnergyCategory::Steady
    }
}

fn explain(
    category: EnergyCategory,
    confidence: Confidence,
    complexity: Complexity,
    time: Option<TimeEstimate>,
) -> String {
    let mut explanation = category.description().to_string();

    if complexity == Complexity::High && category == EnergyCategory::Deep {
        explanation.push_str(" due to its complexity");
    }
    match (time, category) {
        (Some(TimeEstimate::Quick), EnergyCategory::Low | EnergyCategory::None) => {
            explanation.push_str(" and should be quick to complete");
        }
        (Some(TimeEstimate::Long), EnergyCategory::Deep | EnergyCategory::Steady) => {
            explanation.push_str(" and may take significant time");
        }
        _ => {}
    }
    explanation.push('.');

    if confidence == Confidence::Low {
        format!("Best guess: {explanation} Add more detail for a more accurate classification.")
    } else {
        explanation
    }
}

/// Classify with the default classifier.
pub fn classify(text: &str) -> Result<Classification, ClassificationError> {
    EnergyClassifier::new().classify(text)
}
