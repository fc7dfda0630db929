// src/models/document.rs
use serde::Serialize;
use std::path::PathBuf;

use crate::models::{AnalysisResult, DocumentFormat, ExtractionResult, Summary};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Source {
    pub path: PathBuf,
    pub format: DocumentFormat,
    /// Raw text, only kept when `include_content` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// The complete structured record for one input file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub source: Source,
    pub extraction: ExtractionResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,
}

impl Document {
    /// Returns this document with its summary attached.
    #[inline]
    #[must_use]
    pub fn with_summary(self, summary: Summary) -> Self {
        Self {
            summary: Some(summary),
            ..self
        }
    }
}
