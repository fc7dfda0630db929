// src/models/raw_document.rs
use std::path::{Path, PathBuf};

use crate::models::DocumentFormat;

/// The text of one input file together with where it came from.
///
/// Created once per file by the scanner (or by a caller that already holds
/// the text) and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    path: PathBuf,
    text: String,
    format: DocumentFormat,
}

impl RawDocument {
    /// Builds a document, detecting its format from the path's extension.
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        let path = path.into();
        let format = DocumentFormat::from_path(&path);
        Self {
            path,
            text: text.into(),
            format,
        }
    }

    /// Builds a document with an explicit format, ignoring the extension.
    #[inline]
    #[must_use]
    pub fn with_format(
        path: impl Into<PathBuf>,
        text: impl Into<String>,
        format: DocumentFormat,
    ) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
            format,
        }
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn format(&self) -> DocumentFormat {
        self.format
    }
}
