// src/core/analyze/frequency.rs
use crate::core::text::{is_stop_word, rank_by_frequency};
use crate::models::{PhraseCount, WordCount};

pub const MIN_PHRASE_WORDS: usize = 2;
pub const MAX_PHRASE_WORDS: usize = 4;
/// Words shorter than this never take part in a key phrase.
pub const MIN_PHRASE_WORD_LEN: usize = 3;

/// Ranked word counts over already lower-cased words.
pub(super) fn word_frequency(
    lowered: &[String],
    include_stop_words: bool,
    top_n: usize,
) -> Vec<WordCount> {
    let candidates = lowered
        .iter()
        .filter(|word| include_stop_words || !is_stop_word(word))
        .cloned();
    rank_by_frequency(candidates, top_n)
        .into_iter()
        .map(|(word, count)| WordCount::new(word, count))
        .collect()
}

/// Ranked n-grams of consecutive significant words.
///
/// Stop words and short words are removed first, so a phrase may bridge
/// words that were not adjacent in the source text.
pub(super) fn key_phrases(lowered: &[String], top_n: usize) -> Vec<PhraseCount> {
    let significant: Vec<&str> = lowered
        .iter()
        .map(String::as_str)
        .filter(|word| word.chars().count() >= MIN_PHRASE_WORD_LEN && !is_stop_word(word))
        .collect();

    let phrases = (MIN_PHRASE_WORDS..=MAX_PHRASE_WORDS)
        .flat_map(|size| significant.windows(size).map(|window| window.join(" ")));
    rank_by_frequency(phrases, top_n)
        .into_iter()
        .map(|(phrase, count)| PhraseCount { phrase, count })
        .collect()
}
