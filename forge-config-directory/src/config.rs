//! Search specification for config file discovery.
//!
//! A [`SearchSpec`] is the caller-supplied half of a search: which file names
//! to look for, in which order, and whether to climb to parent directories.

use serde::{Deserialize, Serialize};

/// Candidate file names plus the traversal flag.
///
/// Names are checked in order at every directory level. The spec is
/// serde-friendly so host applications can carry it inside their own settings:
///
/// ```rust
/// use forge_config_directory::SearchSpec;
///
/// let spec: SearchSpec = serde_json::from_str(r#"{"names": ["app.yml", "app.json"]}"#).unwrap();
/// assert_eq!(spec.names, vec!["app.yml", "app.json"]);
/// assert!(spec.traverse);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSpec {
    /// Candidate file names, most preferred first.
    pub names: Vec<String>,

    /// Whether to continue into parent directories after the start directory.
    #[serde(default = "default_traverse")]
    pub traverse: bool,
}

fn default_traverse() -> bool {
    true
}

impl SearchSpec {
    /// Create a spec for the given names with traversal enabled.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            traverse: default_traverse(),
        }
    }

    /// Set whether the search climbs to parent directories.
    pub fn with_traverse(mut self, traverse: bool) -> Self {
        self.traverse = traverse;
        self
    }
}

impl From<&str> for SearchSpec {
    fn from(name: &str) -> Self {
        Self::new([name])
    }
}

impl From<String> for SearchSpec {
    fn from(name: String) -> Self {
        Self::new([name])
    }
}

impl From<Vec<String>> for SearchSpec {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}

impl From<Vec<&str>> for SearchSpec {
    fn from(names: Vec<&str>) -> Self {
        Self::new(names)
    }
}

impl<const N: usize> From<[&str; N]> for SearchSpec {
    fn from(names: [&str; N]) -> Self {
        Self::new(names)
    }
}
