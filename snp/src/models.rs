// src/models.rs
mod analysis;
mod batch;
mod document;
mod document_format;
mod extraction;
mod frontmatter;
mod raw_document;
mod summary;

pub use analysis::{AnalysisResult, PhraseCount, SentimentCounts, TextStats, WordCount};
pub use batch::{BatchResult, BatchTotals};
pub use document::{Document, Source};
pub use document_format::DocumentFormat;
pub use extraction::{ExtractionResult, Header, TodoItem};
pub use frontmatter::{Frontmatter, TagList};
pub use raw_document::RawDocument;
pub use summary::Summary;
