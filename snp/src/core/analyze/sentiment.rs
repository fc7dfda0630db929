// src/core/analyze/sentiment.rs
use std::collections::BTreeSet;

use crate::config::SentimentLexicon;
use crate::models::SentimentCounts;

pub const DEFAULT_POSITIVE_WORDS: [&str; 20] = [
    "good", "great", "excellent", "amazing", "wonderful", "fantastic", "awesome", "love", "like",
    "enjoy", "happy", "pleased", "satisfied", "excited", "success", "successful", "achievement",
    "accomplish", "complete", "done",
];

pub const DEFAULT_NEGATIVE_WORDS: [&str; 21] = [
    "bad", "terrible", "awful", "horrible", "hate", "dislike", "angry", "upset", "frustrated",
    "annoyed", "disappointed", "fail", "failure", "problem", "issue", "bug", "error", "broken",
    "difficult", "hard", "challenging",
];

pub const DEFAULT_URGENT_WORDS: [&str; 12] = [
    "urgent", "asap", "immediately", "critical", "important", "priority", "deadline", "due",
    "emergency", "fix", "resolve", "address",
];

/// Counts occurrences (not distinct words) of each lexicon list.
pub(super) fn count_indicators(lowered: &[String], lexicon: &SentimentLexicon) -> SentimentCounts {
    let occurrences = |list: &BTreeSet<String>| {
        lowered
            .iter()
            .filter(|word| list.contains(word.as_str()))
            .count()
    };
    SentimentCounts {
        positive: occurrences(&lexicon.positive),
        negative: occurrences(&lexicon.negative),
        urgent: occurrences(&lexicon.urgent),
    }
}
