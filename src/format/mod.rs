//! This module handles conversion between task files and internal representations
//!
//! The main flavour is a plain-text file, one task per line: `name,priority,due_date,completed`. \
//! Files whose extension is `.json` are stored as a JSON array instead.

mod parser;
pub use parser::parse;
mod builder;
pub use builder::build_from;

use std::path::Path;

use crate::error::StoreError;
use crate::Task;

/// Separates the fields of a task line
pub const DELIMITER: char = ',';
/// Starts an escape sequence in a task line
pub const ESCAPE: char = '\\';

/// The flavours a task file can be written in
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Format {
    /// One comma-separated task per line
    Lines,
    /// A JSON array of tasks
    Json,
}

impl Format {
    /// Pick the flavour that matches a file name
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Lines,
        }
    }

    pub fn decode(&self, content: &str) -> Result<Vec<Task>, StoreError> {
        match self {
            Format::Lines => parse(content),
            Format::Json => Ok(serde_json::from_str(content)?),
        }
    }

    pub fn encode(&self, tasks: &[Task]) -> Result<String, StoreError> {
        match self {
            Format::Lines => Ok(build_from(tasks)),
            Format::Json => Ok(serde_json::to_string(tasks)?),
        }
    }
}
