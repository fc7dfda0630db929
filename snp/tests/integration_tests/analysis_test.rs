// tests/integration_tests/analysis_test.rs
use super::common::MEETING_NOTE;
use anyhow::Result;
use pretty_assertions::assert_eq;
use snp::Config;
use snp::core::analyze::analyze;
use snp::models::WordCount;

#[test]
fn test_word_frequency_with_stop_words() -> Result<()> {
    let config = Config::from_toml_str(
        "[analysis]\ninclude_stop_words = true\nword_frequency_top_n = 2\n",
    )?;
    let result = analyze("a a a b b c", &config);
    assert_eq!(
        result.word_frequency,
        vec![WordCount::new("a", 3), WordCount::new("b", 2)]
    );
    Ok(())
}

#[test]
fn test_meeting_note_metrics() {
    let result = analyze(MEETING_NOTE, &Config::default());

    assert_eq!(result.word_frequency.first(), Some(&WordCount::new("release", 3)));
    assert!(result.word_frequency.len() <= 20);
    assert_eq!(result.sentiment_counts.positive, 2);
    assert_eq!(result.sentiment_counts.negative, 1);
    assert!(result.text_stats.sentences > 0);
    assert!(result.avg_words_per_sentence > 0.0);
    assert!(
        result
            .key_phrases
            .iter()
            .all(|phrase| phrase.phrase.split(' ').count() >= 2)
    );
}

#[test]
fn test_custom_lexicon_from_yaml() -> Result<()> {
    let config = Config::from_yaml_str(
        "analysis:\n  urgent_words: [blocker]\n  positive_words: []\n",
    )?;
    let result = analyze("Blocker! This blocker is great.", &config);
    assert_eq!(result.sentiment_counts.urgent, 2);
    assert_eq!(result.sentiment_counts.positive, 0);
    Ok(())
}
