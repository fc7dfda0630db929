// src/models/batch.rs
use serde::Serialize;
use std::collections::BTreeSet;

use crate::models::Document;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchTotals {
    pub total_files: usize,
    pub total_todos: usize,
    pub total_tags: usize,
    /// Union of the tags of every document.
    pub tags: BTreeSet<String>,
}

/// Documents of one run, in traversal order, plus their totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchResult {
    pub documents: Vec<Document>,
    pub totals: BatchTotals,
}
