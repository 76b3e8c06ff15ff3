//! Locate, read, and write JSON or YAML configuration files
//!
//! This crate binds a configuration file on disk to an in-memory document and
//! keeps the two in sync only when asked to. The file format is picked from
//! the extension, so callers work with one [`Document`] shape regardless of
//! whether the file is JSON or YAML.
//!
//! # Features
//!
//! - **Two formats**: JSON (`.json`) and YAML (`.yaml`, `.yml`), selected by extension
//! - **Upward discovery**: [`ConfigFinder`] walks parent directories, bounded by the home directory
//! - **Nested access**: dotted key paths through [`DataStore`]
//! - **Explicit I/O**: `create`, `read`, `update`, `delete`; no implicit reloads
//! - **Order preserving**: mapping key order survives a read/write cycle
//!
//! # Quick Start
//!
//! ```no_run
//! use forge_config::{ConfigFile, ConfigFinder};
//! use serde_json::json;
//!
//! // Find the nearest config file above the current directory
//! let finder = ConfigFinder::search_for(["wp-forge.yml", "wp-forge.json"]);
//! let mut config = ConfigFile::discover(&finder, std::env::current_dir()?)?;
//!
//! // Edit and persist in the file's own format
//! config.set("site.title", json!("My Site"));
//! config.update()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Creating a new file
//!
//! ```no_run
//! use forge_config::ConfigFile;
//! use serde_json::json;
//!
//! let mut config = ConfigFile::new("/srv/site/.forge/config.json")?;
//! config.set("name", json!("site"));
//! // Creates /srv/site/.forge if needed, then writes the document
//! config.create()?;
//! # Ok::<(), forge_config::ConfigError>(())
//! ```
//!
//! # Error Handling
//!
//! ```no_run
//! use forge_config::{ConfigFile, ErrorKind};
//!
//! match ConfigFile::load("site.yml") {
//!     Ok(config) => println!("Loaded {}", config.file().display()),
//!     Err(err) if err.kind() == ErrorKind::Decode => eprintln!("Fix the syntax: {}", err),
//!     Err(err) => eprintln!("Configuration error: {}", err),
//! }
//! ```

/// Config file handle
pub mod file;
/// Supported file formats
pub mod format;
/// Error types and handling
pub mod error;
/// Dotted-path document store
pub mod store;

#[cfg(test)]
mod tests;

/// The in-memory form of a config file: mappings, sequences and scalars
pub type Document = serde_json::Value;

// Re-export main types for easier access
pub use error::{ConfigError, ConfigResult, ErrorKind};
pub use file::ConfigFile;
pub use format::{ConfigFormat, FormatError};
pub use store::DataStore;

pub use forge_config_directory::{resolve_home_dir, ConfigFinder, SearchError, SearchSpec};
