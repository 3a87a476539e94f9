//! Line normalization and fragment cleanup.
//!
//! Speech recognizers and quick typing leave artifacts at the edges of each
//! thought: filler lead-ins ("I need to ..."), doubled connectors ("and and"),
//! list markers, and dangling connector words once a line has been split.

use std::sync::LazyLock;

use regex::Regex;

fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(err) => panic!("normalization regex {pattern:?} is invalid: {err}"),
    }
}

/// Filler lead-ins, anchored at the start of a line.
static FILLER_LEAD_IN: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"(?i)^(?:i\s+need\s+to|i\s+should|i\s+want\s+to|i\s+have\s+to|i\s+must",
        r"|i['’]d\s+like\s+to|i\s+would\s+like\s+to|let\s+me|let['’]s",
        r"|we\s+need\s+to|we\s+should)\b[\s,]*",
    ))
});

static BULLET_MARKER: LazyLock<Regex> = LazyLock::new(|| compile(r"^[•\-*+]\s*"));

static NUMBER_MARKER: LazyLock<Regex> = LazyLock::new(|| compile(r"^\d+[.):\-]\s*"));

/// Connector words left dangling at the start of a fragment after splitting.
static LEADING_CONNECTOR: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)^(?:and|then|also|next|after\s+that|first|second|third|last|finally)\b[\s,:]*")
});

static TRAILING_PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| compile(r"[\s,;]+$"));

/// Connector word left dangling at the end of a fragment.
static TRAILING_CONNECTOR: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)[\s,;]+(?:and|then|also)$"));

/// Connector words that collapse when immediately repeated.
const REPEATABLE_CONNECTORS: &[&str] = &["and", "then", "also", "next", "or", "so"];

/// Collapse every run of whitespace to a single space and trim.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip filler lead-ins and collapse doubled connectors and whitespace.
pub fn normalize_speech(line: &str) -> String {
    let mut words: Vec<&str> = Vec::new();
    for word in line.split_whitespace() {
        let repeated = words.last().is_some_and(|prev| {
            prev.eq_ignore_ascii_case(word)
                && REPEATABLE_CONNECTORS
                    .iter()
                    .any(|c| c.eq_ignore_ascii_case(word))
        });
        if !repeated {
            words.push(word);
        }
    }
    let collapsed = words.join(" ");
    strip_filler(&collapsed)
}

fn strip_filler(line: &str) -> String {
    let stripped = FILLER_LEAD_IN.replace(line, "");
    if stripped.trim().is_empty() {
        // A line that is nothing but filler is kept for the validity filter.
        line.to_string()
    } else {
        stripped.trim().to_string()
    }
}

/// Remove one leading bullet glyph and one leading numbered-list marker.
pub fn strip_list_marker(line: &str) -> String {
    let line = line.trim();
    let line = BULLET_MARKER.replace(line, "");
    let line = NUMBER_MARKER.replace(&line, "");
    // Filler often follows the marker: "- I need to ..."
    strip_filler(line.trim())
}

/// Final cleanup applied to every fragment before validation.
pub fn clean_fragment(fragment: &str) -> String {
    let mut text = strip_list_marker(&collapse_whitespace(fragment));

    loop {
        let stripped = LEADING_CONNECTOR.replace(&text, "");
        if stripped.len() == text.len() || stripped.trim().is_empty() {
            break;
        }
        text = stripped.trim().to_string();
    }

    let mut text = TRAILING_PUNCTUATION.replace(&text, "").into_owned();
    loop {
        let stripped = TRAILING_CONNECTOR.replace(&text, "");
        if stripped.len() == text.len() || stripped.trim().is_empty() {
            break;
        }
        text = TRAILING_PUNCTUATION.replace(stripped.trim(), "").into_owned();
    }
    collapse_whitespace(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_filler_lead_ins() {
        assert_eq!(normalize_speech("I need to call mom"), "call mom");
        assert_eq!(normalize_speech("let's ship it"), "ship it");
        assert_eq!(normalize_speech("I'd like to   book a table"), "book a table");
        assert_eq!(normalize_speech("We should, plan the trip"), "plan the trip");
    }

    #[test]
    fn filler_only_matches_at_line_start() {
        assert_eq!(
            normalize_speech("tell Sam I need to leave"),
            "tell Sam I need to leave"
        );
    }

    #[test]
    fn collapses_repeated_connectors() {
        assert_eq!(normalize_speech("call mom and and pay rent"), "call mom and pay rent");
        assert_eq!(normalize_speech("fix it then THEN test"), "fix it then test");
        assert_eq!(normalize_speech("bye bye"), "bye bye");
    }

    #[test]
    fn strips_single_list_markers() {
        assert_eq!(strip_list_marker("- buy milk"), "buy milk");
        assert_eq!(strip_list_marker("• water plants"), "water plants");
        assert_eq!(strip_list_marker("12) file taxes"), "file taxes");
        assert_eq!(strip_list_marker("3.walk dog"), "walk dog");
        assert_eq!(strip_list_marker("- 2. nested"), "nested");
    }

    #[test]
    fn cleanup_removes_orphaned_connectors() {
        assert_eq!(clean_fragment("and then pay rent,"), "pay rent");
        assert_eq!(clean_fragment("finally, book flights;"), "book flights");
        assert_eq!(clean_fragment("after that   email Alex"), "email Alex");
        assert_eq!(clean_fragment("then"), "then");
    }

    #[test]
    fn cleanup_removes_trailing_connectors() {
        assert_eq!(clean_fragment("check email and"), "check email");
        assert_eq!(clean_fragment("check email, and"), "check email");
        assert_eq!(clean_fragment("wash the car and then,"), "wash the car");
        assert_eq!(clean_fragment("buy the brand"), "buy the brand");
        assert_eq!(clean_fragment("also"), "also");
    }
}
