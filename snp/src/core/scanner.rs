// src/core/scanner.rs
//! Finding note files on disk and reading them into [`RawDocument`]s.
//!
//! [`RawDocument`]: crate::models::RawDocument

mod file;
#[cfg(test)]
mod test_utils;
mod utils;

pub use file::{NOTE_EXTENSIONS, collect_note_files, is_note_file, read_document};
pub use utils::should_exclude;
