//! Config file formats
//!
//! Every supported format turns raw file text into a [`Document`] and back.
//! The set of formats is closed: [`ConfigFormat`] is chosen from a file's
//! extension once, when a config file handle is created, and the file layer
//! only ever talks to it through [`ConfigFormat::parse`] and
//! [`ConfigFormat::serialize`].

mod json;
mod yaml;

use crate::error::{ConfigError, ConfigResult};
use crate::Document;
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Failure converting between file text and a [`Document`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Raw content is not valid under the format's rules
    #[error("Unable to {format} decode data: {message}")]
    Decode {
        format: ConfigFormat,
        message: String,
    },

    /// The document cannot be written in this format
    #[error("Unable to {format} encode data: {message}")]
    Encode {
        format: ConfigFormat,
        message: String,
    },
}

impl FormatError {
    /// Create a Decode error
    pub fn decode(format: ConfigFormat, message: impl Into<String>) -> Self {
        Self::Decode {
            format,
            message: message.into(),
        }
    }

    /// Create an Encode error
    pub fn encode(format: ConfigFormat, message: impl Into<String>) -> Self {
        Self::Encode {
            format,
            message: message.into(),
        }
    }

    /// The format that failed
    pub fn format(&self) -> ConfigFormat {
        match self {
            Self::Decode { format, .. } | Self::Encode { format, .. } => *format,
        }
    }
}

/// Configuration file format detected from file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFormat {
    /// JSON format (.json extension)
    Json,
    /// YAML format (.yaml or .yml extensions)
    Yaml,
}

impl ConfigFormat {
    /// Detect format from a bare extension (no leading dot)
    ///
    /// Matching is case-sensitive: `JSON` is not `json`.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Select the format for a file path
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedFormat`] naming the extension when it
    /// is not one of `json`, `yaml`, `yml` (including when there is none).
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let ext = extension_of(path.as_ref());
        Self::from_extension(&ext).ok_or_else(|| ConfigError::unsupported_format(ext))
    }

    /// Parse raw file contents into a document
    pub fn parse(self, contents: &str) -> Result<Document, FormatError> {
        match self {
            Self::Json => json::parse(contents),
            Self::Yaml => yaml::parse(contents),
        }
    }

    /// Serialize a document into raw file contents
    ///
    /// JSON text has no trailing newline; YAML text is the engine output,
    /// which already ends with one.
    pub fn serialize(self, data: &Document) -> Result<String, FormatError> {
        match self {
            Self::Json => json::serialize(data),
            Self::Yaml => yaml::serialize(data),
        }
    }

    /// Human-readable format name
    pub fn name(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Text after the last `.` of the file name, or empty when there is none
///
/// Dotfiles count: `.json` has the extension `json`.
pub fn extension_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .and_then(|name| name.rsplit_once('.').map(|(_, ext)| ext.to_string()))
        .unwrap_or_default()
}
