// src/core/extract/heuristics.rs
//! Approximate rules, kept apart so they can be tuned or replaced alone.

use std::collections::{BTreeSet, HashMap};

use crate::core::text::{is_stop_word, words};

pub const MAX_PLAIN_HEADER_CHARS: usize = 60;
pub const MAX_PLAIN_HEADER_WORDS: usize = 8;

/// Keywords must be longer than this many characters.
pub const MIN_KEYWORD_LEN_EXCLUSIVE: usize = 3;
/// ...and occur more than this many times.
pub const MIN_KEYWORD_OCCURRENCES_EXCLUSIVE: usize = 1;

/// A plain-text line counts as a header when it is short and written
/// entirely in upper case.
#[must_use]
pub fn is_plain_text_header(line: &str) -> bool {
    let line = line.trim();
    if line.is_empty()
        || line.chars().count() > MAX_PLAIN_HEADER_CHARS
        || line.split_whitespace().count() > MAX_PLAIN_HEADER_WORDS
    {
        return false;
    }
    line.chars().any(char::is_alphabetic) && !line.chars().any(char::is_lowercase)
}

/// Recurring significant words: lower-cased, not stop words, longer than
/// three characters, containing a letter and seen at least twice.
///
/// This is a coarse filter and is independent of the ranked word frequency
/// computed during analysis.
#[must_use]
pub fn significant_keywords(text: &str) -> BTreeSet<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for word in words(text) {
        let word = word.to_lowercase();
        if word.chars().count() <= MIN_KEYWORD_LEN_EXCLUSIVE
            || is_stop_word(&word)
            || !word.chars().any(char::is_alphabetic)
        {
            continue;
        }
        let count = counts.entry(word).or_default();
        *count = count.saturating_add(1);
    }

    counts
        .into_iter()
        .filter(|(_, count)| *count > MIN_KEYWORD_OCCURRENCES_EXCLUSIVE)
        .map(|(word, _)| word)
        .collect()
}
