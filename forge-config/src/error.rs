//! Error types for config file handling

use crate::format::{ConfigFormat, FormatError};
use forge_config_directory::SearchError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Coarse classification of a [`ConfigError`]
///
/// Hosts that only care about the category of a failure (for example to pick
/// an exit code) can match on this instead of every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No format is registered for the file extension
    UnsupportedFormat,
    /// File content does not parse under the bound format
    Decode,
    /// The document cannot be serialized
    Encode,
    /// A filesystem precondition or operation failed
    Io,
    /// Upward search found nothing
    NotFound,
    /// An unknown property name was requested
    InvalidArgument,
}

/// Config file errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file extension does not map to a known format
    #[error("Unable to determine config format for \".{extension}\" file types")]
    UnsupportedFormat { extension: String },

    /// Parsing or serializing the file content failed
    #[error("Invalid content in {path}: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },

    /// Config file does not exist
    #[error("Config file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Config file exists but cannot be opened for reading
    #[error("Config file is not readable: {path}")]
    NotReadable { path: PathBuf },

    /// Config file exists but cannot be opened for writing
    #[error("Config file is not writable: {path}")]
    NotWritable { path: PathBuf },

    /// Config file has no content to parse
    #[error("Config file is empty: {path}")]
    EmptyFile { path: PathBuf },

    /// Reading the file failed
    #[error("Unable to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the file failed
    #[error("Unable to write to file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Creating the empty file failed
    #[error("Unable to create file {path}: {source}")]
    FileCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Removing the file failed
    #[error("Unable to delete file {path}: {source}")]
    FileDelete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Creating the parent directory chain failed
    #[error("Unable to create directory {path}: {source}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Unknown read-only property requested from a config file handle
    #[error("Property {name} does not exist")]
    InvalidProperty { name: String },

    /// Upward search exhausted without a match
    #[error(transparent)]
    Search(#[from] SearchError),
}

impl ConfigError {
    /// Create a Format error wrapping a decode/encode failure for `path`
    pub fn format(path: impl Into<PathBuf>, source: FormatError) -> Self {
        Self::Format {
            path: path.into(),
            source,
        }
    }

    /// Create an UnsupportedFormat error
    pub fn unsupported_format(extension: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            extension: extension.into(),
        }
    }

    /// The category this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedFormat { .. } => ErrorKind::UnsupportedFormat,
            Self::Format {
                source: FormatError::Decode { .. },
                ..
            } => ErrorKind::Decode,
            Self::Format {
                source: FormatError::Encode { .. },
                ..
            } => ErrorKind::Encode,
            Self::FileNotFound { .. }
            | Self::NotReadable { .. }
            | Self::NotWritable { .. }
            | Self::EmptyFile { .. }
            | Self::FileRead { .. }
            | Self::FileWrite { .. }
            | Self::FileCreate { .. }
            | Self::FileDelete { .. }
            | Self::DirectoryCreation { .. } => ErrorKind::Io,
            Self::InvalidProperty { .. } => ErrorKind::InvalidArgument,
            Self::Search(SearchError::NotFound { .. }) => ErrorKind::NotFound,
        }
    }

    /// The format involved, for decode and encode failures
    pub fn config_format(&self) -> Option<ConfigFormat> {
        match self {
            Self::Format { source, .. } => Some(source.format()),
            _ => None,
        }
    }
}
