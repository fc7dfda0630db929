// src/core/summary.rs
use crate::config::SummaryConfig;
use crate::error::{Error, Result};
use crate::models::{Document, Summary};

/// Condenses a document into a [`Summary`].
///
/// # Errors
///
/// Returns [`Error::MissingAnalysis`] when top words are requested but the
/// document was built without analysis.
#[inline]
pub fn summarize(doc: &Document, config: &SummaryConfig) -> Result<Summary> {
    let extraction = &doc.extraction;

    let top_words = if config.include_top_words {
        let analysis = doc
            .analysis
            .as_ref()
            .ok_or(Error::MissingAnalysis { field: "top_words" })?;
        Some(
            analysis
                .word_frequency
                .iter()
                .take(config.top_words_shown)
                .cloned()
                .collect(),
        )
    } else {
        None
    };

    Ok(Summary {
        header_count: extraction.headers.len(),
        tag_list: extraction
            .tags
            .iter()
            .take(config.max_tags_shown)
            .cloned()
            .collect(),
        keyword_list: extraction
            .keywords
            .iter()
            .take(config.max_keywords_shown)
            .cloned()
            .collect(),
        todo_count: extraction.todos.len(),
        mention_count: extraction.mentions.len(),
        url_count: extraction.url_count(),
        top_words,
    })
}
