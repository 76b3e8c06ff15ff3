//! Error types for configuration file search.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using SearchError.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while searching for a configuration file.
#[derive(Error, Debug)]
pub enum SearchError {
    /// No candidate name matched in the start directory or any searched ancestor.
    #[error("no config file found (looked for {names:?} starting at '{start}')")]
    NotFound { names: Vec<String>, start: PathBuf },
}

impl SearchError {
    /// Create a NotFound error.
    pub fn not_found(names: &[String], start: impl Into<PathBuf>) -> Self {
        Self::NotFound {
            names: names.to_vec(),
            start: start.into(),
        }
    }
}
