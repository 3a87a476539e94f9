//! Property tests for the extractor and classifier.

use brainflow_core::{classify, extract_tasks, ClassificationError};
use proptest::prelude::*;

fn brain_dump_text() -> impl Strategy<Value = String> {
    let word = prop::sample::select(vec![
        "call", "mom", "and", "then", "pay", "rent", "fix", "bug", ";", ",", "-", "1.", "also",
        "the", "second", "draft", "review", "next", "finally", "it", "\n", "email", "Alex",
    ]);
    prop::collection::vec(word, 0..24).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn extraction_is_deterministic(text in brain_dump_text()) {
        prop_assert_eq!(extract_tasks(&text), extract_tasks(&text));
    }

    #[test]
    fn non_blank_input_is_never_lost(text in "\\PC{0,80}") {
        let fragments = extract_tasks(&text);
        if text.trim().is_empty() {
            prop_assert!(fragments.is_empty());
        } else {
            prop_assert!(!fragments.is_empty());
        }
    }

    #[test]
    fn fragments_are_trimmed_and_non_empty(text in brain_dump_text()) {
        for fragment in extract_tasks(&text) {
            prop_assert!(!fragment.is_empty());
            prop_assert_eq!(fragment.trim(), fragment.as_str());
        }
    }

    #[test]
    fn classification_is_total(text in "\\PC{0,40}") {
        match classify(&text) {
            Ok(result) => {
                prop_assert!(text.trim().chars().count() >= 3);
                prop_assert!(!result.explanation.is_empty());
            }
            Err(ClassificationError::Empty) => prop_assert!(text.trim().is_empty()),
            Err(ClassificationError::TooShort { .. }) => {
                prop_assert!(text.trim().chars().count() < 3);
            }
        }
        prop_assert_eq!(classify(&text), classify(&text));
    }
}
