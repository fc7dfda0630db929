// tests/integration_tests/extraction_test.rs
use super::common::{MEETING_NOTE, PLAIN_NOTE};
use pretty_assertions::assert_eq;
use snp::Config;
use snp::core::extract::extract;
use snp::models::{DocumentFormat, Header, TodoItem};
use std::collections::BTreeSet;

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

#[test]
fn test_markdown_note() {
    let result = extract(MEETING_NOTE, DocumentFormat::Markdown, &Config::default());

    assert_eq!(
        result.headers,
        vec![
            Header {
                level: 1,
                text: String::from("Weekly sync"),
            },
            Header {
                level: 2,
                text: String::from("Decisions"),
            },
        ]
    );
    assert_eq!(result.tags, set(&["infra", "meetings", "q3", "release"]));
    assert_eq!(result.mentions, set(&["priya"]));
    assert_eq!(
        result.urls,
        Some(set(&["https://wiki.example.com/Team/Sync"]))
    );
    assert_eq!(result.emails, None);
    assert!(result.keywords.contains("release"));

    let markers: Vec<(&str, usize)> = result
        .todos
        .iter()
        .map(|todo| (todo.pattern_matched.as_str(), todo.line_number))
        .collect();
    assert_eq!(markers, vec![("TODO:", 8), ("FIXME:", 9), ("- [ ]", 10)]);
}

#[test]
fn test_plain_text_note() {
    let result = extract(PLAIN_NOTE, DocumentFormat::Text, &Config::default());

    assert_eq!(
        result.headers,
        vec![Header {
            level: 1,
            text: String::from("SHOPPING LIST"),
        }]
    );
    assert_eq!(
        result.todos,
        vec![TodoItem {
            pattern_matched: String::from("TODO"),
            text: String::from("buy coffee asap"),
            line_number: 3,
        }]
    );
    assert!(result.tags.is_empty());
}

#[test]
fn test_extraction_settings() -> anyhow::Result<()> {
    let config = Config::from_toml_str(
        "[parsing]\nextract_urls = false\nextract_emails = true\ncustom_todo_patterns = [\"ASK:\"]\n",
    )?;
    let result = extract(
        "ASK: who owns this? mail ops@example.org or see https://example.org\nNOTE: not a marker now",
        DocumentFormat::Text,
        &config,
    );

    assert_eq!(result.urls, None);
    assert_eq!(result.emails, Some(set(&["ops@example.org"])));
    let markers: Vec<&str> = result
        .todos
        .iter()
        .map(|todo| todo.pattern_matched.as_str())
        .collect();
    assert_eq!(markers, vec!["ASK:"]);
    Ok(())
}
