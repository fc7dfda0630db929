// src/core/text.rs
//! Shared text primitives: lines, sentences, words and stop words.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Common English function words left out of frequency rankings and
/// keyword selection.
pub const STOP_WORDS: [&str; 67] = [
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "as",
    "is", "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did", "will",
    "would", "could", "should", "may", "might", "can", "must", "this", "that", "these", "those",
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my", "your",
    "his", "its", "our", "their", "myself", "yourself", "himself", "herself", "itself",
    "ourselves", "yourselves", "themselves", "not", "so",
];

static STOP_WORD_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| STOP_WORDS.into_iter().collect());

/// `word` must already be lower-case.
#[inline]
#[must_use]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}

/// Lines paired with their 1-based line number. Blank lines are kept so
/// numbering matches the source.
pub fn numbered_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines().enumerate().map(|(index, line)| (index.saturating_add(1), line))
}

/// Splits on `.`, `!` and `?`. A run of terminators is one boundary and
/// blank pieces are dropped.
pub fn sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
}

/// Whitespace-separated tokens with leading and trailing punctuation
/// stripped. Inner punctuation (`don't`, `re-use`) is kept.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|word| !word.is_empty())
}

/// Maximal runs of alphanumerics and `_`, the same units a regex `\b\w+\b`
/// would find.
pub fn boundary_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|word| !word.is_empty())
}

/// Counts items and ranks them by descending count. Ties keep the order in
/// which items first appeared. At most `limit` entries are returned.
pub fn rank_by_frequency<I>(items: I, limit: usize) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = String>,
{
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (position, item) in items.into_iter().enumerate() {
        counts
            .entry(item)
            .and_modify(|(count, _)| *count = count.saturating_add(1))
            .or_insert((1, position));
    }

    let mut ranked: Vec<(String, (usize, usize))> = counts.into_iter().collect();
    ranked.sort_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
        count_b.cmp(count_a).then(first_a.cmp(first_b))
    });
    ranked
        .into_iter()
        .take(limit)
        .map(|(item, (count, _))| (item, count))
        .collect()
}
