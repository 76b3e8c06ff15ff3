//! Upward directory search for configuration files.
//!
//! This crate locates a configuration file by walking from a starting
//! directory towards the filesystem root, trying a list of candidate names at
//! each level. The walk is bounded by the parent of the user's home directory
//! so a project search never wanders into other users' trees or system
//! directories.
//!
//! # Overview
//!
//! - [`SearchSpec`] - Candidate names and whether to climb to parents
//! - [`ConfigFinder`] - The search itself, with an injectable home directory
//! - [`resolve_home_dir`] - `HOME` / `HOMEDRIVE`+`HOMEPATH` lookup
//!
//! # Example
//!
//! ```no_run
//! use forge_config_directory::ConfigFinder;
//!
//! let path = ConfigFinder::search_for(["wp-forge.yml", "wp-forge.json"])
//!     .find_or_fail(std::env::current_dir()?)?;
//! println!("Config at {}", path.display());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod access;
mod config;
mod error;
mod finder;
mod home;

// Re-export main types
pub use config::SearchSpec;
pub use error::{Result, SearchError};
pub use finder::ConfigFinder;
pub use home::{home_from_vars, resolve_home_dir};
