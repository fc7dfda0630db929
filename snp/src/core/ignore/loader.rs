// src/core/ignore/loader.rs
use crate::core::ignore::Patterns;
use anyhow::{Context as _, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

pub const IGNORE_FILE_NAME: &str = ".snpignore";

/// Loads ignore patterns from the nearest `.snpignore`, looking in `dir`
/// first and then in each parent directory.
///
/// Rules are relative to the directory that holds the file. With no file
/// found the result is empty and rooted at `dir`.
///
/// # Errors
///
/// This function may return an error if:
/// * The `.snpignore` file exists but cannot be read
/// * The file contains an invalid pattern
#[inline]
pub fn load_ignore_patterns(dir: &Path) -> Result<Patterns> {
    let mut current_dir = dir.to_path_buf();
    let mut visited = HashSet::new();

    while visited.insert(current_dir.clone()) {
        let ignore_file = current_dir.join(IGNORE_FILE_NAME);

        if ignore_file.is_file() {
            let content = fs::read_to_string(&ignore_file).with_context(|| {
                format!("Failed to read {IGNORE_FILE_NAME} file: {}", ignore_file.display())
            })?;

            let mut patterns = Patterns::new(current_dir);
            for (index, line) in content.lines().enumerate() {
                patterns.add_pattern(line).with_context(|| {
                    format!("{}:{}", ignore_file.display(), index.saturating_add(1))
                })?;
            }
            debug!(file = %ignore_file.display(), "loaded ignore patterns");
            return Ok(patterns);
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => break,
        }
    }

    Ok(Patterns::new(dir.to_path_buf()))
}
