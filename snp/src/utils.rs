// src/utils.rs
use crate::models::Frontmatter;

/// Returns the YAML between a leading `---` line and the next `---` line.
///
/// A document whose first line is not `---`, or whose block is never closed,
/// has no frontmatter.
#[must_use]
pub fn frontmatter_block(content: &str) -> Option<String> {
    let mut lines = content.lines();
    if lines.next().map(str::trim_end) != Some("---") {
        return None;
    }

    let mut block = String::new();
    for line in lines {
        if line.trim_end() == "---" {
            return Some(block);
        }
        block.push_str(line);
        block.push('\n');
    }

    None
}

/// Parses the YAML frontmatter of a note.
///
/// # Errors
///
/// Returns the YAML error when a frontmatter block exists but is not valid
/// YAML for [`Frontmatter`].
pub fn parse_frontmatter(content: &str) -> Result<Frontmatter, serde_yaml_ng::Error> {
    match frontmatter_block(content) {
        Some(block) if !block.trim().is_empty() => serde_yaml_ng::from_str(&block),
        _ => Ok(Frontmatter::default()),
    }
}

/// Hidden entries start with `.`.
#[must_use]
pub fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}
