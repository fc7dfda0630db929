// src/core/analyze/readability.rs
use super::ratio;

const VOWELS: &str = "aeiouy";

/// Approximate syllable count of one word.
///
/// Words of at most three letters count as one. Longer words count runs of
/// vowels, with a trailing silent `e` removed. Never returns less than 1.
#[must_use]
pub fn count_syllables(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();
    if letters.len() <= 3 {
        return 1;
    }

    let mut count = 0_usize;
    let mut previous_was_vowel = false;
    for &letter in &letters {
        let is_vowel = VOWELS.contains(letter);
        if is_vowel && !previous_was_vowel {
            count = count.saturating_add(1);
        }
        previous_was_vowel = is_vowel;
    }
    if letters.last() == Some(&'e') {
        count = count.saturating_sub(1);
    }
    count.max(1)
}

/// Flesch Reading Ease. Unclamped; 0.0 when there is nothing to score.
#[must_use]
pub fn flesch_reading_ease(sentences: usize, words: usize, syllables: usize) -> f64 {
    if sentences == 0 || words == 0 {
        return 0.0;
    }
    206.835 - 1.015 * ratio(words, sentences) - 84.6 * ratio(syllables, words)
}
