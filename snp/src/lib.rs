// src/lib.rs
//! Structured extraction and text analysis for markdown and plain-text notes.
//!
//! [`pipeline::process_document`] turns a [`RawDocument`] into a
//! [`Document`]; [`pipeline::process_files`] does the same for a batch and
//! aggregates the results. Everything takes an explicit [`Config`].

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod export;
pub mod models;
pub mod pipeline;
pub mod utils;

pub use config::Config;
pub use error::{Error, Result};
pub use models::{BatchResult, Document, RawDocument};
pub use pipeline::{Stages, process_document, process_files};
