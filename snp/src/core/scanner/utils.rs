// src/core/scanner/utils.rs
use crate::core::ignore::Patterns;
use crate::utils::is_hidden;

/// Determines if a directory entry should be skipped during a scan:
/// - hidden files and directories below the scan root
/// - directories named in `exclude_dirs`
/// - entries matched by the ignore patterns
///
/// The scan root itself is never excluded, so scanning `.` works.
#[must_use]
pub fn should_exclude(
    entry: &walkdir::DirEntry,
    exclude_dirs: &[&str],
    ignore_patterns: Option<&Patterns>,
) -> bool {
    if entry.depth() == 0 {
        return false;
    }
    if is_hidden(entry) {
        return true;
    }

    let is_dir = entry.file_type().is_dir();
    if is_dir
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| exclude_dirs.contains(&name))
    {
        return true;
    }

    ignore_patterns.is_some_and(|patterns| patterns.is_ignored(entry.path(), is_dir))
}
