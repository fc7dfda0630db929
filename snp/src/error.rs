// src/error.rs
use std::path::PathBuf;

use crate::config::ConfigError;

/// Failures that cross the library boundary.
///
/// Extraction and analysis are total, so these come from the edges: reading
/// input, summarizing without analysis, and loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}", .path.display())]
    UnreadableInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("summary field `{field}` requires analysis, which was not run")]
    MissingAnalysis { field: &'static str },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
