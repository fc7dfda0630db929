// src/core/extract/headers.rs
use once_cell::sync::Lazy;
use regex::Regex;

use super::heuristics::is_plain_text_header;
use crate::models::{DocumentFormat, Header};

static ATX_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").expect("header regex is valid"));

const FENCE_CHARS: [char; 2] = ['`', '~'];
const MIN_FENCE_LEN: usize = 3;

/// An open code fence: its character and run length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fence {
    ch: char,
    len: usize,
}

impl Fence {
    /// A line that opens a fenced block. A backtick fence's info string may
    /// not contain backticks, so ```` ```ls``` ```` is inline code.
    fn open(line: &str) -> Option<Self> {
        let trimmed = line.trim_start();
        let ch = trimmed.chars().next().filter(|c| FENCE_CHARS.contains(c))?;
        let len = trimmed.chars().take_while(|&c| c == ch).count();
        if len < MIN_FENCE_LEN {
            return None;
        }
        let info = trimmed.get(len.saturating_mul(ch.len_utf8())..).unwrap_or_default();
        if ch == '`' && info.contains('`') {
            return None;
        }
        Some(Self { ch, len })
    }

    /// Closing fences hold only fence characters, at least as many as the
    /// opener.
    fn closes(self, line: &str) -> bool {
        let trimmed = line.trim();
        !trimmed.is_empty()
            && trimmed.chars().all(|c| c == self.ch)
            && trimmed.chars().count() >= self.len
    }
}

/// Headers in document order.
///
/// Markdown uses `#`-style headers and skips fenced code blocks. If a fence
/// is never closed the markdown is considered malformed and the plain-text
/// rule is used instead.
#[must_use]
pub fn extract_headers(text: &str, format: DocumentFormat) -> Vec<Header> {
    match format {
        DocumentFormat::Markdown => {
            markdown_headers(text).unwrap_or_else(|| plain_text_headers(text))
        }
        DocumentFormat::Text => plain_text_headers(text),
    }
}

fn markdown_headers(text: &str) -> Option<Vec<Header>> {
    let mut headers = Vec::new();
    let mut open_fence: Option<Fence> = None;

    for line in text.lines() {
        if let Some(fence) = open_fence {
            if fence.closes(line) {
                open_fence = None;
            }
            continue;
        }
        if let Some(fence) = Fence::open(line) {
            open_fence = Some(fence);
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }

        let Some(caps) = ATX_HEADER.captures(line.trim_end()) else {
            continue;
        };
        let (Some(hashes), Some(title)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let title = title.as_str().trim();
        if title.is_empty() {
            continue;
        }
        let Ok(level) = u8::try_from(hashes.as_str().len()) else {
            continue;
        };
        headers.push(Header {
            level,
            text: title.to_owned(),
        });
    }

    if open_fence.is_some() {
        return None;
    }
    Some(headers)
}

fn plain_text_headers(text: &str) -> Vec<Header> {
    text.lines()
        .filter(|line| is_plain_text_header(line))
        .map(|line| Header {
            level: 1,
            text: line.trim().to_owned(),
        })
        .collect()
}
