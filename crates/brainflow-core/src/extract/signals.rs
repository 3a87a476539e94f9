//! Whole-text signals that the input holds more than one task.
//!
//! When the standard pass collapses to a single fragment but these signals
//! fire, the extractor retries with the aggressive split mode.

use std::sync::LazyLock;

use regex::Regex;

use super::validity::count_action_verbs;

/// Signals at or above this count suggest multiple tasks.
pub const MULTI_TASK_THRESHOLD: usize = 2;

static LINE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"(?m)^\s*(?:[•\-*+]|\d+[.):\-])\s*") {
        Ok(regex) => regex,
        Err(err) => panic!("line marker regex is invalid: {err}"),
    }
});

static CONNECTOR_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"(?i)\band\s+then\b|\bthen\b|\bafter\s+that\b|\bnext\b|\balso\b|,\s*and\b") {
        Ok(regex) => regex,
        Err(err) => panic!("connector phrase regex is invalid: {err}"),
    }
});

/// Count structural separators across the whole raw text.
///
/// Line breaks count only between non-blank lines, so trailing newlines do
/// not inflate the total. "and then" counts once as a phrase and once for
/// its "then".
pub fn count_separators(text: &str) -> usize {
    let line_breaks = text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .count()
        .saturating_sub(1);
    let markers = LINE_MARKER.find_iter(text).count();
    let semicolons = text.matches(';').count();
    let connectors = text
        .lines()
        .map(|line| {
            let and_then = line.to_lowercase().matches("and then").count();
            CONNECTOR_PHRASE.find_iter(line).count() + and_then
        })
        .sum::<usize>();

    line_breaks + markers + semicolons + connectors
}

/// Whether the raw text signals several tasks.
pub fn signals_multiple_tasks(text: &str) -> bool {
    count_separators(text) >= MULTI_TASK_THRESHOLD
        || count_action_verbs(text) >= MULTI_TASK_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_lines_markers_and_semicolons() {
        assert_eq!(count_separators("- a\n- b\n"), 3);
        assert_eq!(count_separators("one; two; three"), 2);
        assert_eq!(count_separators("plain sentence"), 0);
    }

    #[test]
    fn counts_connector_phrases() {
        assert_eq!(count_separators("x and then y"), 2);
        assert_eq!(count_separators("do this next"), 1);
        assert_eq!(count_separators("eggs, and milk"), 1);
    }

    #[test]
    fn verbs_or_separators_signal_multiple() {
        assert!(signals_multiple_tasks("call mom pay rent"));
        assert!(signals_multiple_tasks("groceries; laundry; dishes"));
        assert!(!signals_multiple_tasks("groceries"));
    }
}
