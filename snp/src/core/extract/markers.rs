// src/core/extract/markers.rs
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"#([\w-]+)").expect("tag regex is valid"));

static MENTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@([\w-]+)").expect("mention regex is valid"));

static URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[A-Za-z][A-Za-z0-9+.-]*://[^\s<>"'`()\[\]{}]+"#).expect("url regex is valid")
});

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\w.+-]+@[\w-]+(?:\.[\w-]+)+").expect("email regex is valid")
});

const URL_TRAILING_PUNCTUATION: [char; 7] = ['.', ',', ';', ':', '!', '?', '\''];

/// Lower-cases a tag or mention name; names made only of `-` are dropped.
pub(super) fn normalize_name(name: &str) -> Option<String> {
    let name = name.trim().trim_matches('-');
    (!name.is_empty()).then(|| name.to_lowercase())
}

/// `true` when the sigil at `index` is glued to the preceding text, as in
/// `C#`, `page#anchor`, `&#123;` or `bob@example.com`.
fn is_glued(line: &str, index: usize, extra: &[char]) -> bool {
    line.get(..index)
        .and_then(|before| before.chars().next_back())
        .is_some_and(|c| c.is_alphanumeric() || c == '_' || extra.contains(&c))
}

/// `#word` tokens that are not the first thing on their line.
pub(super) fn tags(text: &str) -> BTreeSet<String> {
    let mut tags = BTreeSet::new();
    for line in text.lines() {
        let indent = line.len().saturating_sub(line.trim_start().len());
        for caps in TAG.captures_iter(line) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if whole.start() == indent || is_glued(line, whole.start(), &['&', '/']) {
                continue;
            }
            if let Some(tag) = normalize_name(name.as_str()) {
                tags.insert(tag);
            }
        }
    }
    tags
}

pub(super) fn mentions(text: &str) -> BTreeSet<String> {
    let mut mentions = BTreeSet::new();
    for line in text.lines() {
        for caps in MENTION.captures_iter(line) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if is_glued(line, whole.start(), &[]) {
                continue;
            }
            if let Some(mention) = normalize_name(name.as_str()) {
                mentions.insert(mention);
            }
        }
    }
    mentions
}

pub(super) fn urls(text: &str) -> BTreeSet<String> {
    URL.find_iter(text)
        .filter_map(|m| normalize_url(m.as_str()))
        .collect()
}

/// Trims trailing sentence punctuation and lower-cases scheme and host.
/// Paths and queries keep their case.
fn normalize_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim_end_matches(URL_TRAILING_PUNCTUATION);
    let (scheme, rest) = trimmed.split_once("://")?;
    let host_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let (host, tail) = rest.split_at(host_end);
    if host.is_empty() {
        return None;
    }
    Some(format!(
        "{}://{}{tail}",
        scheme.to_ascii_lowercase(),
        host.to_ascii_lowercase()
    ))
}

pub(super) fn emails(text: &str) -> BTreeSet<String> {
    EMAIL
        .find_iter(text)
        .map(|m| m.as_str().trim_end_matches('.').to_lowercase())
        .collect()
}
