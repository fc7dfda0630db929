// src/core/extract.rs
//! Structural extraction: headers, tags, mentions, keywords, TODOs, URLs.

mod headers;
pub mod heuristics;
mod markers;
mod todos;

use tracing::debug;

use crate::config::Config;
use crate::models::{DocumentFormat, ExtractionResult};
use crate::utils::parse_frontmatter;

pub use headers::extract_headers;
pub use heuristics::{is_plain_text_header, significant_keywords};
pub use todos::TodoMatcher;

/// Extracts every structural element of `text`.
///
/// Never fails: malformed markdown and empty input simply produce fewer (or
/// no) elements.
#[must_use]
pub fn extract(text: &str, format: DocumentFormat, config: &Config) -> ExtractionResult {
    let parsing = &config.parsing;

    let mut tags = markers::tags(text);
    if format == DocumentFormat::Markdown {
        match parse_frontmatter(text) {
            Ok(frontmatter) => tags.extend(
                frontmatter
                    .tags()
                    .iter()
                    .filter_map(|tag| markers::normalize_name(tag)),
            ),
            Err(err) => debug!(%err, "ignoring unparsable frontmatter"),
        }
    }

    ExtractionResult {
        headers: extract_headers(text, format),
        tags,
        mentions: markers::mentions(text),
        keywords: significant_keywords(text),
        todos: TodoMatcher::new(&parsing.custom_todo_patterns, format).find_all(text),
        urls: parsing.extract_urls.then(|| markers::urls(text)),
        emails: parsing.extract_emails.then(|| markers::emails(text)),
    }
}
