// src/pipeline.rs
//! Build, summarize and aggregate, one document or a batch at a time.

use std::path::PathBuf;
use tracing::{info, warn};

use crate::config::{Config, SummaryConfig};
use crate::core::aggregate::aggregate;
use crate::core::document::build;
use crate::core::scanner::read_document;
use crate::core::summary::summarize;
use crate::error::{Error, Result};
use crate::models::{BatchResult, Document, RawDocument};

/// Optional stages. Extraction always runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stages {
    pub analysis: bool,
    pub summary: bool,
}

/// Runs every requested stage for one document.
///
/// A summary that asks for top words on a document built without analysis
/// is produced without them and a warning is logged.
///
/// # Errors
///
/// Returns any summary error other than [`Error::MissingAnalysis`].
pub fn process_document(raw: &RawDocument, config: &Config, stages: Stages) -> Result<Document> {
    let doc = build(raw, config, stages.analysis);
    if !stages.summary {
        return Ok(doc);
    }

    let summary = match summarize(&doc, &config.summary) {
        Ok(summary) => summary,
        Err(Error::MissingAnalysis { field }) => {
            warn!(
                path = %raw.path().display(),
                field,
                "summary requested without analysis; leaving the field out"
            );
            let without_top_words = SummaryConfig {
                include_top_words: false,
                ..config.summary.clone()
            };
            summarize(&doc, &without_top_words)?
        }
        Err(err) => return Err(err),
    };
    Ok(doc.with_summary(summary))
}

/// Reads and processes `paths` in order.
///
/// Files that cannot be read are logged and skipped; the batch carries on.
///
/// # Errors
///
/// Returns the first processing error other than an unreadable input.
pub fn process_files<I>(paths: I, config: &Config, stages: Stages) -> Result<BatchResult>
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut documents = Vec::new();
    for path in paths {
        let raw = match read_document(&path) {
            Ok(raw) => raw,
            Err(err @ Error::UnreadableInput { .. }) => {
                warn!(path = %path.display(), error = %err, "skipping unreadable file");
                continue;
            }
            Err(err) => return Err(err),
        };
        documents.push(process_document(&raw, config, stages)?);
    }

    let batch = aggregate(documents);
    info!(
        files = batch.totals.total_files,
        todos = batch.totals.total_todos,
        tags = batch.totals.total_tags,
        "processed batch"
    );
    Ok(batch)
}
