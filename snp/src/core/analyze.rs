// src/core/analyze.rs
//! Text metrics: word frequency, readability, sentiment indicators and key
//! phrases.

mod frequency;
mod readability;
mod sentiment;

use crate::config::Config;
use crate::core::text::{boundary_words, sentences, words};
use crate::models::{AnalysisResult, TextStats};

pub use frequency::{MAX_PHRASE_WORDS, MIN_PHRASE_WORD_LEN, MIN_PHRASE_WORDS};
pub use readability::{count_syllables, flesch_reading_ease};
pub use sentiment::{DEFAULT_NEGATIVE_WORDS, DEFAULT_POSITIVE_WORDS, DEFAULT_URGENT_WORDS};

/// Computes every metric for `text`.
///
/// Total over any input: text without sentences or words yields zero
/// scores and empty rankings.
#[must_use]
pub fn analyze(text: &str, config: &Config) -> AnalysisResult {
    let settings = &config.analysis;

    let sentence_words: Vec<Vec<&str>> = sentences(text)
        .map(|sentence| words(sentence).collect::<Vec<_>>())
        .filter(|sentence| !sentence.is_empty())
        .collect();
    let lowered: Vec<String> = sentence_words
        .iter()
        .flatten()
        .map(|word| word.to_lowercase())
        .collect();

    let sentence_count = sentence_words.len();
    let word_count = lowered.len();
    let syllables = lowered
        .iter()
        .map(|word| count_syllables(word))
        .fold(0_usize, usize::saturating_add);

    let lowered_boundary: Vec<String> = boundary_words(text).map(str::to_lowercase).collect();

    AnalysisResult {
        word_frequency: frequency::word_frequency(
            &lowered,
            settings.include_stop_words,
            settings.word_frequency_top_n,
        ),
        readability_score: flesch_reading_ease(sentence_count, word_count, syllables),
        avg_words_per_sentence: ratio(word_count, sentence_count),
        sentiment_counts: sentiment::count_indicators(&lowered_boundary, &settings.sentiment),
        key_phrases: frequency::key_phrases(&lowered_boundary, settings.key_phrases_top_n),
        text_stats: TextStats {
            sentences: sentence_count,
            words: word_count,
            syllables,
            avg_syllables_per_word: ratio(syllables, word_count),
        },
    }
}

/// `numerator / denominator`, or 0 when the denominator is 0.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    numerator as f64 / denominator as f64
}
