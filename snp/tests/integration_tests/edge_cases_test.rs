// tests/integration_tests/edge_cases_test.rs
use anyhow::Result;
use pretty_assertions::assert_eq;
use snp::models::{AnalysisResult, RawDocument};
use snp::{Config, Stages, process_document};

fn all_stages() -> Stages {
    Stages {
        analysis: true,
        summary: true,
    }
}

#[test]
fn test_empty_input() -> Result<()> {
    let doc = process_document(&RawDocument::new("empty.md", ""), &Config::default(), all_stages())?;

    assert!(doc.extraction.is_empty());
    assert_eq!(doc.analysis, Some(AnalysisResult::default()));
    let summary = doc.summary.ok_or_else(|| anyhow::anyhow!("summary missing"))?;
    assert_eq!(summary.header_count, 0);
    assert_eq!(summary.top_words, Some(Vec::new()));
    Ok(())
}

#[test]
fn test_whitespace_only_input() -> Result<()> {
    let doc = process_document(
        &RawDocument::new("blank.txt", "  \n\t\n   \n"),
        &Config::default(),
        all_stages(),
    )?;
    assert!(doc.extraction.is_empty());
    assert_eq!(doc.analysis.map(|a| a.readability_score), Some(0.0));
    Ok(())
}

#[test]
fn test_unterminated_fence_uses_plain_text_headers() -> Result<()> {
    let text = "# not used\nAGENDA\n```rust\nfn main() {}\n";
    let doc = process_document(&RawDocument::new("broken.md", text), &Config::default(), Stages::default())?;
    let headers: Vec<&str> = doc
        .extraction
        .headers
        .iter()
        .map(|header| header.text.as_str())
        .collect();
    assert_eq!(headers, vec!["AGENDA"]);
    Ok(())
}

#[test]
fn test_unicode_text() -> Result<()> {
    let text = "Café notes #déjà-vu with @zoë. TODO: réserver la salle\n";
    let doc = process_document(&RawDocument::new("fr.md", text), &Config::default(), all_stages())?;

    assert!(doc.extraction.tags.contains("déjà-vu"));
    assert!(doc.extraction.mentions.contains("zoë"));
    assert_eq!(
        doc.extraction.todos.first().map(|todo| todo.text.as_str()),
        Some("réserver la salle")
    );
    Ok(())
}
