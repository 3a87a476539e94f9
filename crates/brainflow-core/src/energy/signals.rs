//! Complexity and time-estimate cues in a task description.

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use regex::Regex;

fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(err) => panic!("energy signal regex {pattern:?} is invalid: {err}"),
    }
}

static HIGH_COMPLEXITY: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\b(?:complex|difficult|challeng|advanced|deep|critical|important)")
});

static LOW_COMPLEXITY: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\b(?:simple|easy|basic|straightforward|routine|trivial)")
});

static QUICK_TIME: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\b(?:quick|fast|brief|5\s*min|10\s*min)")
});

static LONG_TIME: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"(?i)\b(?:[2-9]\s*(?:hrs?|hours)\b",
        r"|half\s+(?:a\s+)?day|full\s+day|all\s+day|several\s+hours)",
    ))
});

static MEDIUM_TIME: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\b(?:30\s*min|1\s*hrs?\b|hour)")
});

/// Stated complexity of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    High,
    Medium,
    Low,
}

impl Complexity {
    /// High cues win over low cues; no cue means medium.
    pub fn detect(text: &str) -> Self {
        if HIGH_COMPLEXITY.is_match(text) {
            Complexity::High
        } else if LOW_COMPLEXITY.is_match(text) {
            Complexity::Low
        } else {
            Complexity::Medium
        }
    }
}

/// Stated duration of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeEstimate {
    Quick,
    Medium,
    Long,
}

impl TimeEstimate {
    /// Checked in order quick, long, medium.
    pub fn detect(text: &str) -> Option<Self> {
        if QUICK_TIME.is_match(text) {
            Some(TimeEstimate::Quick)
        } else if LONG_TIME.is_match(text) {
            Some(TimeEstimate::Long)
        } else if MEDIUM_TIME.is_match(text) {
            Some(TimeEstimate::Medium)
        } else {
            None
        }
    }
}
