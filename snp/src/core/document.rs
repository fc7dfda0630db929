// src/core/document.rs
use tracing::debug;

use crate::config::Config;
use crate::core::analyze::analyze;
use crate::core::extract::extract;
use crate::models::{Document, RawDocument, Source};

/// Builds the [`Document`] for one input.
///
/// Extraction always runs; analysis only when `want_analysis` is set. The
/// raw text is kept in `source.content` only when `include_content` is
/// enabled. Same input and config give an identical document.
#[must_use]
pub fn build(raw: &RawDocument, config: &Config, want_analysis: bool) -> Document {
    debug!(
        path = %raw.path().display(),
        format = %raw.format(),
        want_analysis,
        "building document"
    );

    let text = raw.text();
    Document {
        source: Source {
            path: raw.path().to_path_buf(),
            format: raw.format(),
            content: config.export.include_content.then(|| text.to_owned()),
        },
        extraction: extract(text, raw.format(), config),
        analysis: want_analysis.then(|| analyze(text, config)),
        summary: None,
    }
}
