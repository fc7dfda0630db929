// src/models/summary.rs
use serde::Serialize;

use crate::models::WordCount;

/// A short digest of a [`Document`](crate::models::Document).
///
/// Every field is copied or counted from the document; nothing new is
/// computed. `top_words` is absent when it was not requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub header_count: usize,
    pub tag_list: Vec<String>,
    pub keyword_list: Vec<String>,
    pub todo_count: usize,
    pub mention_count: usize,
    pub url_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_words: Option<Vec<WordCount>>,
}
