// src/core/ignore.rs
//! `.snpignore` files: gitignore-like glob rules that keep notes out of a
//! directory scan.

mod loader;
mod patterns;

pub use loader::{IGNORE_FILE_NAME, load_ignore_patterns};
pub use patterns::Patterns;
