//! Splitting stages of the extraction pipeline.
//!
//! Each stage takes a list of segments and returns a new list. Splits are
//! gated: a pattern is only applied to a segment when the resulting parts
//! pass the stage's acceptance test, otherwise the segment is kept intact.

use std::sync::LazyLock;

use regex::Regex;

use super::validity::{
    count_action_verbs, is_strong_segment, is_valid_segment, NounPhraseRule,
};

/// How aggressively a pass splits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitMode {
    /// Every split is gated by its acceptance test.
    Standard,
    /// Connector splits are unconditional; comma and "and" splits are always
    /// attempted and share one threshold.
    Aggressive,
}

/// Share of parts that must pass the strong test for a multi-part split.
const STRONG_SHARE_NUMERATOR: usize = 6;
const STRONG_SHARE_DENOMINATOR: usize = 10;

/// Comma splitting is only considered with at least this many action verbs.
const MIN_VERBS_FOR_COMMA_SPLIT: usize = 2;

/// One row of the connector table.
pub struct ConnectorPattern {
    pub name: &'static str,
    regex: Regex,
}

fn connector(name: &'static str, pattern: &str) -> ConnectorPattern {
    match Regex::new(pattern) {
        Ok(regex) => ConnectorPattern { name, regex },
        Err(err) => panic!("connector pattern {name} is invalid: {err}"),
    }
}

/// Ordinal connectors (and "next") only split in list position: after a
/// comma, after "and", or directly followed by a comma. "review the second
/// draft" and "prepare next week's report" stay whole.
fn ordinal(name: &'static str, word: &str) -> ConnectorPattern {
    connector(
        name,
        &format!(r"(?i)(?:,\s*(?:and\s+)?|\s+and\s+){word}\b,?\s*|\s+{word},\s*"),
    )
}

/// Connector patterns, most specific first. A comma or "and" form always
/// precedes the bare form it contains.
pub static CONNECTOR_PATTERNS: LazyLock<Vec<ConnectorPattern>> = LazyLock::new(|| {
    vec![
        connector("comma_and_then", r"(?i),\s*and\s+then\b,?\s*"),
        connector("comma_then", r"(?i),\s*then\b,?\s*"),
        connector("and_then", r"(?i)\s+and\s+then\b,?\s*"),
        connector("comma_after_that", r"(?i),\s*after\s+that\b,?\s*"),
        connector("after_that", r"(?i)\s+after\s+that\b,?\s*"),
        connector("comma_also", r"(?i),\s*also\b,?\s*"),
        connector("and_also", r"(?i)\s+and\s+also\b,?\s*"),
        connector("then", r"(?i)\s+then\b,?\s*"),
        connector("also", r"(?i)\s+also\b,?\s*"),
        connector("comma_next", r"(?i),\s*next\b,?\s*"),
        ordinal("next", "next"),
        ordinal("first", "first"),
        ordinal("second", "second"),
        ordinal("third", "third"),
        ordinal("last", "last"),
        ordinal("finally", "finally"),
    ]
});

static COMMA_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r",\s+") {
    Ok(regex) => regex,
    Err(err) => panic!("comma separator is invalid: {err}"),
});

static AND_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"(?i)\s+and\s+") {
    Ok(regex) => regex,
    Err(err) => panic!("and separator is invalid: {err}"),
});

fn split_trimmed<'a>(parts: impl Iterator<Item = &'a str>) -> Vec<String> {
    parts
        .map(|p| p.trim_matches(|c: char| c.is_whitespace() || c == ','))
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

fn meets_strong_share(parts: &[String], rule: NounPhraseRule) -> bool {
    let strong = parts.iter().filter(|p| is_strong_segment(p, rule)).count();
    strong * STRONG_SHARE_DENOMINATOR >= parts.len() * STRONG_SHARE_NUMERATOR
}

/// Keep the parts that pass the plain test, or the original if none do.
fn filter_valid(parts: Vec<String>, original: &str) -> Vec<String> {
    let kept: Vec<String> = parts.into_iter().filter(|p| is_valid_segment(p)).collect();
    if kept.is_empty() {
        vec![original.to_string()]
    } else {
        kept
    }
}

/// Hard split on semicolons.
pub fn split_semicolons(line: &str) -> Vec<String> {
    split_trimmed(line.split(';'))
}

/// Apply the connector table in order to a single segment.
pub fn split_connectors(segment: &str, mode: SplitMode) -> Vec<String> {
    let mut segments = vec![segment.to_string()];
    for pattern in CONNECTOR_PATTERNS.iter() {
        segments = segments
            .into_iter()
            .flat_map(|seg| apply_connector(pattern, seg, mode))
            .collect();
    }
    segments
}

fn apply_connector(pattern: &ConnectorPattern, segment: String, mode: SplitMode) -> Vec<String> {
    let parts = split_trimmed(pattern.regex.split(&segment));
    if parts.len() < 2 {
        return vec![segment];
    }
    let accepted = match mode {
        SplitMode::Aggressive => true,
        SplitMode::Standard => parts.iter().all(|p| is_valid_segment(p)),
    };
    if accepted {
        tracing::trace!(pattern = pattern.name, parts = parts.len(), "connector split");
        parts
    } else {
        vec![segment]
    }
}

/// Split on ", " when the segment carries several action verbs. A comma
/// with no space after it ("1,200") is part of the word.
pub fn split_commas(segment: &str, mode: SplitMode) -> Vec<String> {
    if !segment.contains(',') {
        return vec![segment.to_string()];
    }
    if mode == SplitMode::Standard && count_action_verbs(segment) < MIN_VERBS_FOR_COMMA_SPLIT {
        return vec![segment.to_string()];
    }

    let parts = split_trimmed(COMMA_SEPARATOR.split(segment));
    if parts.len() < 2 || !meets_strong_share(&parts, NounPhraseRule::Relaxed) {
        return vec![segment.to_string()];
    }
    tracing::trace!(parts = parts.len(), "comma split");
    filter_valid(parts, segment)
}

/// Last-resort split on " and ".
pub fn split_and(segment: &str, mode: SplitMode) -> Vec<String> {
    let parts = split_trimmed(AND_SEPARATOR.split(segment));
    if parts.len() < 2 {
        return vec![segment.to_string()];
    }

    let accepted = match (parts.len(), mode) {
        (2, SplitMode::Standard) => parts
            .iter()
            .all(|p| is_strong_segment(p, NounPhraseRule::Strict)),
        _ => meets_strong_share(&parts, NounPhraseRule::Relaxed),
    };
    if !accepted {
        return vec![segment.to_string()];
    }
    tracing::trace!(parts = parts.len(), "and split");
    filter_valid(parts, segment)
}

/// Split one semicolon piece through the connector, comma and "and" stages.
pub fn split_piece(piece: &str, mode: SplitMode) -> Vec<String> {
    let segments: Vec<String> = split_connectors(piece, mode)
        .into_iter()
        .flat_map(|seg| split_commas(&seg, mode))
        .collect();

    if segments.len() >= 2 && mode == SplitMode::Standard {
        return segments;
    }
    segments
        .into_iter()
        .flat_map(|seg| split_and(&seg, mode))
        .collect()
}
