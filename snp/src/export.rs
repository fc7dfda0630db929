// src/export.rs
//! JSON and CSV output for documents and batches.

use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::config::ExportConfig;
use crate::models::{BatchResult, Document};

/// Separator used inside list-valued CSV cells. Items escape `\` and `;`
/// with a backslash, so splitting on an unescaped `; ` recovers them.
pub const LIST_SEPARATOR: &str = "; ";

pub const CSV_COLUMNS: [&str; 18] = [
    "path",
    "format",
    "header_count",
    "headers",
    "tags",
    "mentions",
    "keywords",
    "urls",
    "emails",
    "todo_count",
    "todos",
    "readability_score",
    "avg_words_per_sentence",
    "positive",
    "negative",
    "urgent",
    "top_words",
    "content",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

impl ExportFormat {
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(format!("expected `json` or `csv`, got `{other}`")),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write JSON")]
    Json(#[from] serde_json::Error),

    #[error("failed to write CSV")]
    Csv(#[from] csv::Error),

    #[error("CSV delimiter {0:?} is not a single-byte character")]
    Delimiter(char),
}

/// Writes one document.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_document<W: Write>(
    out: W,
    doc: &Document,
    format: ExportFormat,
    config: &ExportConfig,
) -> Result<(), ExportError> {
    match format {
        ExportFormat::Json => write_json(out, doc),
        ExportFormat::Csv => write_csv(out, std::slice::from_ref(doc), config),
    }
}

/// Writes a batch: the whole [`BatchResult`] as JSON, or one CSV row per
/// document.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_batch<W: Write>(
    out: W,
    batch: &BatchResult,
    format: ExportFormat,
    config: &ExportConfig,
) -> Result<(), ExportError> {
    match format {
        ExportFormat::Json => write_json(out, batch),
        ExportFormat::Csv => write_csv(out, &batch.documents, config),
    }
}

fn write_json<W: Write, T: Serialize>(mut out: W, value: &T) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut out, value)?;
    out.write_all(b"\n")
        .and_then(|()| out.flush())
        .map_err(serde_json::Error::io)?;
    Ok(())
}

fn write_csv<W: Write>(out: W, docs: &[Document], config: &ExportConfig) -> Result<(), ExportError> {
    let delimiter = u8::try_from(config.csv_delimiter)
        .map_err(|_| ExportError::Delimiter(config.csv_delimiter))?;
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .from_writer(out);
    wtr.write_record(CSV_COLUMNS)?;

    for doc in docs {
        wtr.write_record(csv_row(doc, config.max_content_preview))?;
    }

    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

fn csv_row(doc: &Document, max_content_preview: usize) -> [String; 18] {
    let extraction = &doc.extraction;
    let analysis = doc.analysis.as_ref();
    let optional_set = |set: Option<&std::collections::BTreeSet<String>>| {
        set.map(|items| join(items.iter())).unwrap_or_default()
    };

    [
        doc.source.path.display().to_string(),
        doc.source.format.to_string(),
        extraction.headers.len().to_string(),
        join(
            extraction
                .headers
                .iter()
                .map(|header| format!("{}:{}", header.level, header.text)),
        ),
        join(extraction.tags.iter()),
        join(extraction.mentions.iter()),
        join(extraction.keywords.iter()),
        optional_set(extraction.urls.as_ref()),
        optional_set(extraction.emails.as_ref()),
        extraction.todos.len().to_string(),
        join(
            extraction
                .todos
                .iter()
                .map(|todo| format!("{}:{} {}", todo.line_number, todo.pattern_matched, todo.text)),
        ),
        analysis.map(|a| format!("{:.2}", a.readability_score)).unwrap_or_default(),
        analysis.map(|a| format!("{:.2}", a.avg_words_per_sentence)).unwrap_or_default(),
        analysis.map(|a| a.sentiment_counts.positive.to_string()).unwrap_or_default(),
        analysis.map(|a| a.sentiment_counts.negative.to_string()).unwrap_or_default(),
        analysis.map(|a| a.sentiment_counts.urgent.to_string()).unwrap_or_default(),
        analysis
            .map(|a| {
                join(
                    a.word_frequency
                        .iter()
                        .map(|entry| format!("{}={}", entry.word, entry.count)),
                )
            })
            .unwrap_or_default(),
        doc.source
            .content
            .as_deref()
            .map(|content| preview(content, max_content_preview))
            .unwrap_or_default(),
    ]
}

fn join<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut joined = String::new();
    for item in items {
        if !joined.is_empty() {
            joined.push_str(LIST_SEPARATOR);
        }
        escape_item(&mut joined, item.as_ref());
    }
    joined
}

fn escape_item(out: &mut String, item: &str) {
    for c in item.chars() {
        if matches!(c, '\\' | ';') {
            out.push('\\');
        }
        out.push(c);
    }
}

/// First `limit` characters of `content`; 0 keeps everything.
fn preview(content: &str, limit: usize) -> String {
    if limit == 0 {
        return content.to_owned();
    }
    content.chars().take(limit).collect()
}
