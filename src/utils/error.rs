//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while measuring bundle sizes
#[derive(Error, Debug)]
pub enum SizeError {
    #[error("Failed to read bundle {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Gzip compression failed: {0}")]
    CompressionFailed(#[source] std::io::Error),
}

/// Errors that can occur while scraping an entry file
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("Failed to read entry file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Syntax error on line {line}: {message}")]
    Syntax { line: usize, message: String },
}

/// Errors that can occur while resolving configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No version field in {0}")]
    MissingVersion(PathBuf),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
