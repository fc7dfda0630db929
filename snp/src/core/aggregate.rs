// src/core/aggregate.rs
use crate::models::{BatchResult, BatchTotals, Document};

/// Collects documents into a [`BatchResult`], keeping their order.
#[must_use]
pub fn aggregate<I>(docs: I) -> BatchResult
where
    I: IntoIterator<Item = Document>,
{
    let documents: Vec<Document> = docs.into_iter().collect();

    let mut totals = BatchTotals {
        total_files: documents.len(),
        ..BatchTotals::default()
    };
    for doc in &documents {
        totals.total_todos = totals.total_todos.saturating_add(doc.extraction.todos.len());
        totals.tags.extend(doc.extraction.tags.iter().cloned());
    }
    totals.total_tags = totals.tags.len();

    BatchResult { documents, totals }
}
