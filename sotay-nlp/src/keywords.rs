//! Keyword extraction: drop every amount phrase and digit, keep the words.

use regex::Regex;
use std::sync::OnceLock;

use crate::amount::amount_patterns;

/// Tokens shorter than this (in characters) are dropped
pub const MIN_KEYWORD_CHARS: usize = 2;

fn digits_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9]+").expect("invalid digits regex"))
}

/// Split a message into lowercase candidate keywords.
///
/// Every amount notation is removed (all occurrences, in notation priority
/// order), then any leftover digit runs. Order and duplicates are kept.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let mut cleaned = text.trim().to_lowercase();

    for pattern in amount_patterns() {
        cleaned = pattern.regex.replace_all(&cleaned, "").into_owned();
    }
    cleaned = digits_re().replace_all(&cleaned, "").into_owned();

    cleaned
        .split_whitespace()
        .filter(|word| word.chars().count() >= MIN_KEYWORD_CHARS)
        .map(str::to_string)
        .collect()
}
