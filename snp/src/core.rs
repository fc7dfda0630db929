// src/core.rs
pub mod aggregate;
pub mod analyze;
pub mod document;
pub mod extract;
pub mod ignore;
pub mod scanner;
pub mod summary;
pub mod text;
pub mod watch;
