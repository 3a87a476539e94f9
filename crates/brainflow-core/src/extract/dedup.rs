//! Exact and near-duplicate removal.

use super::normalize::collapse_whitespace;

fn normalized(fragment: &str) -> String {
    collapse_whitespace(fragment).to_lowercase()
}

/// Remove duplicates, case-insensitively.
///
/// When one fragment's text contains another's, the longer one survives in
/// its own position and the shorter one is dropped. Exact duplicates keep
/// the first occurrence.
pub fn dedupe(fragments: Vec<String>) -> Vec<String> {
    let keys: Vec<String> = fragments.iter().map(|f| normalized(f)).collect();
    let mut dropped = vec![false; fragments.len()];

    for i in 0..keys.len() {
        if dropped[i] {
            continue;
        }
        for j in (i + 1)..keys.len() {
            if dropped[j] {
                continue;
            }
            if keys[i] == keys[j] || keys[i].contains(keys[j].as_str()) {
                dropped[j] = true;
            } else if keys[j].contains(keys[i].as_str()) {
                dropped[i] = true;
                break;
            }
        }
    }

    fragments
        .into_iter()
        .zip(dropped)
        .filter_map(|(fragment, dropped)| (!dropped).then_some(fragment))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn exact_duplicates_keep_first() {
        let out = dedupe(strings(&["Call Mom", "pay rent", "call  mom"]));
        assert_eq!(out, strings(&["Call Mom", "pay rent"]));
    }

    #[test]
    fn substring_keeps_longer_in_its_position() {
        let out = dedupe(strings(&["call mom", "pay rent", "call mom please"]));
        assert_eq!(out, strings(&["pay rent", "call mom please"]));

        let out = dedupe(strings(&["call mom please", "pay rent", "call mom"]));
        assert_eq!(out, strings(&["call mom please", "pay rent"]));
    }

    #[test]
    fn chains_collapse_to_longest() {
        let out = dedupe(strings(&["buy", "buy milk", "buy milk today"]));
        assert_eq!(out, strings(&["buy milk today"]));
    }
}
