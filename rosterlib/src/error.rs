//! Error types for rosterlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or querying a roster
#[derive(Error, Debug)]
pub enum RosterError {
    /// Failed to read the roster file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A line did not carry the five `|`-separated fields
    #[error("malformed record on line {line}: expected 5 fields, found {fields}")]
    MalformedRecord { line: usize, fields: usize },

    /// No record has the requested full name
    #[error("person not found: {0}")]
    PersonNotFound(String),
}
