// src/models/extraction.rs
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub level: u8,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoItem {
    /// The configured marker that matched, e.g. `TODO:` or `- [ ]`.
    pub pattern_matched: String,
    pub text: String,
    /// 1-based.
    pub line_number: usize,
}

/// Structural elements found in one document.
///
/// `headers` and `todos` keep document order. The remaining collections are
/// lower-cased, deduplicated and kept sorted so that serialized output is
/// stable between runs. `urls` and `emails` are `None` when their extraction
/// is disabled in the configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    pub headers: Vec<Header>,
    pub tags: BTreeSet<String>,
    pub mentions: BTreeSet<String>,
    pub keywords: BTreeSet<String>,
    pub todos: Vec<TodoItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urls: Option<BTreeSet<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emails: Option<BTreeSet<String>>,
}

impl ExtractionResult {
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
            && self.tags.is_empty()
            && self.mentions.is_empty()
            && self.keywords.is_empty()
            && self.todos.is_empty()
            && self.urls.as_ref().is_none_or(BTreeSet::is_empty)
            && self.emails.as_ref().is_none_or(BTreeSet::is_empty)
    }

    #[inline]
    #[must_use]
    pub fn url_count(&self) -> usize {
        self.urls.as_ref().map_or(0, BTreeSet::len)
    }
}
