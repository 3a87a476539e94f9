//! Segment validity tests and the action-verb vocabulary.
//!
//! Two acceptance tests gate every split the extractor makes:
//!
//! - the **plain** test rejects fragments that are too short or consist of a
//!   lone pronoun, article, conjunction or connector word;
//! - the **strong** test additionally requires the fragment to look like a
//!   standalone task: it either starts with an action verb or is long enough
//!   to be a noun phrase.

/// Common action verb stems. A word counts as an action verb when it starts
/// with one of these (so "emails" and "fixing" both match).
pub const ACTION_VERBS: &[&str] = &[
    "add", "build", "call", "check", "clean", "complete", "create", "debug", "delete", "design",
    "develop", "document", "draft", "email", "file", "finish", "fix", "follow", "implement",
    "make", "meet", "organize", "plan", "prepare", "read", "refactor", "reply", "research",
    "review", "schedule", "send", "setup", "test", "update", "write", "contact", "analyze",
    "configure", "deploy", "integrate", "migrate", "optimize", "prototype", "coordinate",
    "monitor", "track", "respond", "browse", "watch", "listen", "sort", "archive", "backup",
    "copy", "format", "rename", "move", "download", "upload", "brainstorm", "innovate",
    "conceptualize", "learn", "study", "practice", "exercise", "meditate", "buy", "get", "pick",
    "drop", "take", "bring", "fetch", "collect", "submit", "approve", "reject", "validate",
    "verify", "confirm", "pay", "book", "reserve", "order", "purchase", "return", "cancel",
    "reschedule", "attend", "visit", "go", "come", "arrive", "leave", "start", "stop", "open",
    "close", "lock", "unlock", "turn", "switch", "change", "adjust",
];

/// Words that cannot stand alone as a task.
const FRAGMENT_WORDS: &[&str] = &[
    "it", "that", "this", "them", "those", "these", "the", "a", "an", "and", "or", "but",
];

/// Connector words that cannot stand alone as a task.
const CONNECTOR_WORDS: &[&str] = &[
    "then", "also", "next", "after", "before", "first", "second", "last",
];

/// Minimum trimmed length of any accepted fragment.
const MIN_FRAGMENT_CHARS: usize = 3;

/// Minimum length of a fragment made of a single word.
const MIN_SINGLE_WORD_CHARS: usize = 4;

/// How many words a fragment without a leading verb needs to count as strong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NounPhraseRule {
    /// Two words are enough.
    Relaxed,
    /// Three words are required.
    Strict,
}

impl NounPhraseRule {
    fn min_words(self) -> usize {
        match self {
            NounPhraseRule::Relaxed => 2,
            NounPhraseRule::Strict => 3,
        }
    }
}

/// Lowercase a token and strip surrounding punctuation.
pub(crate) fn normalize_word(word: &str) -> String {
    word.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
        .to_lowercase()
}

/// Whether a single word starts with a known action verb stem.
pub fn is_action_verb(word: &str) -> bool {
    let word = normalize_word(word);
    !word.is_empty() && ACTION_VERBS.iter().any(|verb| word.starts_with(verb))
}

/// Count the whitespace-separated words that start with an action verb.
pub fn count_action_verbs(text: &str) -> usize {
    text.split_whitespace().filter(|w| is_action_verb(w)).count()
}

/// Plain segment validity test.
pub fn is_valid_segment(segment: &str) -> bool {
    let trimmed = segment.trim();
    if trimmed.chars().count() < MIN_FRAGMENT_CHARS {
        return false;
    }

    let mut words = trimmed.split_whitespace();
    let (Some(first), None) = (words.next(), words.next()) else {
        return true;
    };

    if first.chars().count() < MIN_SINGLE_WORD_CHARS {
        return false;
    }
    let word = normalize_word(first);
    !FRAGMENT_WORDS.contains(&word.as_str()) && !CONNECTOR_WORDS.contains(&word.as_str())
}

/// Strong segment test: valid, and either verb-led or a long enough noun phrase.
pub fn is_strong_segment(segment: &str, rule: NounPhraseRule) -> bool {
    if !is_valid_segment(segment) {
        return false;
    }
    let mut words = segment.split_whitespace().peekable();
    if words.peek().is_some_and(|w| is_action_verb(w)) {
        return true;
    }
    words.count() >= rule.min_words()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_and_lone_words() {
        assert!(!is_valid_segment(""));
        assert!(!is_valid_segment("  ab "));
        assert!(!is_valid_segment("fix"));
        assert!(!is_valid_segment("then"));
        assert!(!is_valid_segment("those"));
        assert!(!is_valid_segment("After"));
        assert!(!is_valid_segment("them,"));
    }

    #[test]
    fn accepts_multi_word_and_long_single_words() {
        assert!(is_valid_segment("fix bug"));
        assert!(is_valid_segment("groceries"));
        assert!(is_valid_segment("in it"));
    }

    #[test]
    fn verb_prefix_matching() {
        assert!(is_action_verb("Emails"));
        assert!(is_action_verb("fixing,"));
        assert!(!is_action_verb("mom"));
        assert!(!is_action_verb("---"));
        assert_eq!(count_action_verbs("call mom and email boss"), 2);
    }

    #[test]
    fn strong_segment_rules() {
        assert!(is_strong_segment("read", NounPhraseRule::Strict));
        assert!(is_strong_segment("groceries for dinner", NounPhraseRule::Strict));
        assert!(!is_strong_segment("the team", NounPhraseRule::Strict));
        assert!(is_strong_segment("the team", NounPhraseRule::Relaxed));
        assert!(!is_strong_segment("butter", NounPhraseRule::Relaxed));
    }
}
