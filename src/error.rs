//! Error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors caused by user input. None of them is fatal: the operation is simply aborted.
#[derive(Debug, Error, PartialEq)]
pub enum TaskError {
    #[error("Invalid priority. Please enter 'H', 'M', or 'L'.")]
    InvalidPriority(String),

    #[error("Invalid date format. Please use 'YYYY-MM-DD'.")]
    InvalidDate(String),

    #[error("Invalid task index {index} (there are {len} tasks)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors that happen while reading or writing the backing file
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Unable to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `line` is 1-based
    #[error("Malformed task at line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    #[error("Invalid JSON task file: {0}")]
    Json(#[from] serde_json::Error),
}
