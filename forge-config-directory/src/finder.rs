//! Upward search for configuration files.
//!
//! This module provides `ConfigFinder`, which walks from a starting directory
//! towards the filesystem root looking for the first readable file among a
//! list of candidate names. The walk never goes above the parent of the
//! user's home directory.

use crate::access;
use crate::config::SearchSpec;
use crate::error::{Result, SearchError};
use crate::home::resolve_home_dir;
use std::path::{Path, PathBuf};

/// Locates a configuration file by walking up a directory chain.
///
/// At each level the candidate names are tried in order and the first one
/// that exists and is readable wins. Levels closer to the start directory win
/// over their ancestors.
///
/// # Examples
///
/// ```no_run
/// use forge_config_directory::ConfigFinder;
///
/// let finder = ConfigFinder::search_for(["wp-forge.yml", "wp-forge.json"]);
/// if let Some(path) = finder.find(std::env::current_dir()?) {
///     println!("Using {}", path.display());
/// }
/// # Ok::<(), std::io::Error>(())
/// ```
///
/// The home directory that bounds the search can be injected, which keeps
/// tests independent of the process environment:
///
/// ```rust
/// use forge_config_directory::ConfigFinder;
/// use std::path::Path;
///
/// let finder = ConfigFinder::new("app.json", None).with_home_dir("/home/alex");
/// assert_eq!(finder.boundary(), Some(Path::new("/home")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFinder {
    /// Candidate names and traversal flag.
    spec: SearchSpec,

    /// Home directory; its parent is the highest directory inspected.
    home: Option<PathBuf>,
}

impl ConfigFinder {
    /// Create a finder with an explicit home directory.
    ///
    /// Passing `None` leaves the search bounded only by the filesystem root.
    pub fn new(spec: impl Into<SearchSpec>, home: Option<PathBuf>) -> Self {
        Self {
            spec: spec.into(),
            home,
        }
    }

    /// Create a finder for one or more names, bounded by the home directory
    /// resolved from the environment right now.
    pub fn search_for(names: impl Into<SearchSpec>) -> Self {
        Self::new(names, resolve_home_dir())
    }

    /// Set whether the search continues into parent directories.
    pub fn traverse(mut self, traverse: bool) -> Self {
        self.spec.traverse = traverse;
        self
    }

    /// Replace the home directory used to bound the search.
    pub fn with_home_dir(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    /// The candidate names, in the order they are tried.
    pub fn names(&self) -> &[String] {
        &self.spec.names
    }

    /// The names and traversal setting used by this finder.
    pub fn spec(&self) -> &SearchSpec {
        &self.spec
    }

    /// The home directory bounding the search, if any.
    pub fn home_dir(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    /// The last directory the search may inspect: the parent of home.
    pub fn boundary(&self) -> Option<&Path> {
        self.home.as_deref().and_then(Path::parent)
    }

    /// Find a config file, if one exists.
    ///
    /// `start` should be a directory; relative paths are climbed only through
    /// their literal components. Each level is inspected before the boundary
    /// check, so the boundary directory itself (the parent of home) is
    /// searched and nothing above it is. An unreadable directory ends the
    /// search.
    pub fn find(&self, start: impl AsRef<Path>) -> Option<PathBuf> {
        let start = start.as_ref();
        let boundary = self.boundary();
        let mut current = start;

        loop {
            if !access::is_readable(current) {
                tracing::trace!("Stopping search at unreadable {}", current.display());
                return None;
            }

            if let Some(found) = self.match_in(current) {
                tracing::debug!("Found config file: {}", found.display());
                return Some(found);
            }

            if !self.spec.traverse {
                break;
            }

            if boundary == Some(current) {
                tracing::trace!("Reached search boundary {}", current.display());
                break;
            }

            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }

        tracing::debug!(
            "No config file among {:?} from {}",
            self.spec.names,
            start.display()
        );
        None
    }

    /// Find a config file or fail with [`SearchError::NotFound`].
    pub fn find_or_fail(&self, start: impl AsRef<Path>) -> Result<PathBuf> {
        let start = start.as_ref();
        self.find(start)
            .ok_or_else(|| SearchError::not_found(&self.spec.names, start))
    }

    /// Try every candidate name in `dir`, returning the first readable one.
    fn match_in(&self, dir: &Path) -> Option<PathBuf> {
        tracing::trace!("Searching directory: {}", dir.display());
        self.spec
            .names
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| access::exists(candidate) && access::is_readable(candidate))
    }
}
