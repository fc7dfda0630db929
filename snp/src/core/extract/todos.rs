// src/core/extract/todos.rs
use regex::{Regex, RegexBuilder};
use tracing::warn;

use crate::core::text::numbered_lines;
use crate::models::{DocumentFormat, TodoItem};

/// Markers that are always recognised, on top of the configured ones.
pub const BUILTIN_MARKERS: [&str; 2] = ["TODO", "FIXME"];

/// Unchecked markdown task-list item.
pub const TASK_LIST_MARKER: &str = "- [ ]";

/// Finds TODO markers line by line.
///
/// Matching is case-insensitive. Alternatives are tried longest first, so a
/// marker that is a prefix of another (`TODO` vs `TODO:`) never produces a
/// second record for the same spot.
#[derive(Debug, Clone)]
pub struct TodoMatcher {
    markers: Vec<String>,
    pattern: Option<Regex>,
}

impl TodoMatcher {
    #[must_use]
    pub fn new(custom_markers: &[String], format: DocumentFormat) -> Self {
        let mut markers: Vec<String> = Vec::new();
        let candidates = custom_markers
            .iter()
            .map(String::as_str)
            .chain(BUILTIN_MARKERS)
            .chain((format == DocumentFormat::Markdown).then_some(TASK_LIST_MARKER));
        for candidate in candidates {
            let candidate = candidate.trim();
            if candidate.is_empty()
                || markers
                    .iter()
                    .any(|known| known.to_lowercase() == candidate.to_lowercase())
            {
                continue;
            }
            markers.push(candidate.to_owned());
        }

        let mut alternatives: Vec<&str> = markers.iter().map(String::as_str).collect();
        alternatives.sort_by(|a, b| b.len().cmp(&a.len()));
        let source = alternatives
            .iter()
            .map(|marker| regex::escape(marker))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = match RegexBuilder::new(&source).case_insensitive(true).build() {
            Ok(pattern) => Some(pattern),
            Err(err) => {
                warn!(%err, "could not compile TODO markers; TODO extraction disabled");
                None
            }
        };

        Self { markers, pattern }
    }

    /// Configured markers in priority order, duplicates removed.
    #[must_use]
    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    /// One record per distinct marker per line. The record text is the part
    /// of the line between the marker and the next marker (or line end).
    #[must_use]
    pub fn find_all(&self, text: &str) -> Vec<TodoItem> {
        let Some(pattern) = &self.pattern else {
            return Vec::new();
        };

        let mut todos = Vec::new();
        for (line_number, line) in numbered_lines(text) {
            if line.trim().is_empty() {
                continue;
            }

            let found: Vec<regex::Match<'_>> = pattern.find_iter(line).collect();
            let mut seen: Vec<&str> = Vec::new();
            for (index, hit) in found.iter().enumerate() {
                let Some(marker) = self.canonical(hit.as_str()) else {
                    continue;
                };
                if seen.contains(&marker) {
                    continue;
                }
                seen.push(marker);

                let end = found
                    .get(index.saturating_add(1))
                    .map_or(line.len(), regex::Match::start);
                let segment = line.get(hit.end()..end).unwrap_or_default();
                todos.push(TodoItem {
                    pattern_matched: marker.to_owned(),
                    text: clean_segment(segment),
                    line_number,
                });
            }
        }
        todos
    }

    fn canonical(&self, matched: &str) -> Option<&str> {
        let matched = matched.to_lowercase();
        self.markers
            .iter()
            .find(|marker| marker.to_lowercase() == matched)
            .map(String::as_str)
    }
}

fn clean_segment(segment: &str) -> String {
    segment
        .trim()
        .trim_start_matches([':', '-'])
        .trim()
        .to_owned()
}
