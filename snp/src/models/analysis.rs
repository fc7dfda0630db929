// src/models/analysis.rs
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

impl WordCount {
    #[inline]
    #[must_use]
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhraseCount {
    pub phrase: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentCounts {
    pub positive: usize,
    pub negative: usize,
    pub urgent: usize,
}

/// Raw counts behind the readability score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TextStats {
    pub sentences: usize,
    pub words: usize,
    pub syllables: usize,
    pub avg_syllables_per_word: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub word_frequency: Vec<WordCount>,
    /// Flesch Reading Ease, unclamped.
    pub readability_score: f64,
    pub avg_words_per_sentence: f64,
    pub sentiment_counts: SentimentCounts,
    pub key_phrases: Vec<PhraseCount>,
    pub text_stats: TextStats,
}
