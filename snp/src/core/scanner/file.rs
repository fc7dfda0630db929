// src/core/scanner/file.rs
use anyhow::{Context as _, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::core::ignore::load_ignore_patterns;
use crate::core::scanner::utils::should_exclude;
use crate::error::Error;
use crate::models::RawDocument;

/// Extensions (compared case-insensitively) of files treated as notes.
pub const NOTE_EXTENSIONS: [&str; 3] = ["md", "markdown", "txt"];

#[inline]
#[must_use]
pub fn is_note_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            NOTE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Lists the note files under `dir`, sorted by file name within each
/// directory.
///
/// # Arguments
///
/// * `dir` - The directory to scan
/// * `recursive` - Descend into subdirectories
/// * `exclude_dirs` - Directory names to skip wherever they appear
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - Paths starting with `dir` as given
///
/// # Errors
///
/// This function may return an error if:
/// * `dir` does not exist or cannot be read
/// * A `.snpignore` file cannot be read or parsed
#[inline]
pub fn collect_note_files(dir: &Path, recursive: bool, exclude_dirs: &[&str]) -> Result<Vec<PathBuf>> {
    let absolute_dir = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        env::current_dir()?.join(dir)
    };

    let ignore_patterns = load_ignore_patterns(&absolute_dir)?;
    let mut walker = WalkDir::new(&absolute_dir)
        .follow_links(true)
        .sort_by_file_name();
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut files = Vec::new();
    for entry in walker
        .into_iter()
        .filter_entry(|e| !should_exclude(e, exclude_dirs, Some(&ignore_patterns)))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(err)
                    .with_context(|| format!("Failed to scan directory: {}", dir.display()));
            }
            Err(err) => {
                warn!(%err, "skipping unreadable directory entry");
                continue;
            }
        };
        if !entry.file_type().is_file() || !is_note_file(entry.path()) {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(&absolute_dir)
            .unwrap_or_else(|_| entry.path());
        files.push(dir.join(relative));
    }

    debug!(dir = %dir.display(), count = files.len(), "collected note files");
    Ok(files)
}

/// Reads `path` as UTF-8 text.
///
/// # Errors
///
/// Returns [`Error::UnreadableInput`] if the file cannot be read or is not
/// valid UTF-8.
#[inline]
pub fn read_document(path: &Path) -> Result<RawDocument, Error> {
    let text = fs::read_to_string(path).map_err(|source| Error::UnreadableInput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(RawDocument::new(path, text))
}
