//! Test utilities for the forge-config crates
//!
//! Tests that depend on the user's home directory must never see the real
//! one. [`IsolatedTestEnvironment`] points `HOME` at a temporary directory,
//! clears the Windows-style `HOMEDRIVE`/`HOMEPATH` pair, and restores every
//! variable it touched when dropped.
//!
//! Environment variables are process-global, so tests using this guard should
//! also be marked `#[serial]`.
//!
//! ```no_run
//! use forge_config_test_utils::IsolatedTestEnvironment;
//!
//! let env = IsolatedTestEnvironment::new().unwrap();
//! let project = env.project_dir("site");
//! // HOME is now env.home_path(); restored when `env` is dropped
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Variables that feed home directory resolution.
const HOME_VARS: [&str; 3] = ["HOME", "HOMEDRIVE", "HOMEPATH"];

/// RAII guard for an isolated home directory.
///
/// Layout: `<temp>/home/user` is the home directory, so its parent
/// `<temp>/home` is the search boundary and `<temp>` itself lies outside it.
pub struct IsolatedTestEnvironment {
    temp_dir: TempDir,
    home: PathBuf,
    original_env_vars: HashMap<String, Option<String>>,
}

impl IsolatedTestEnvironment {
    /// Create a new isolated environment and point `HOME` at it.
    pub fn new() -> std::io::Result<Self> {
        let temp_dir = create_temp_dir_with_retry()?;
        let home = temp_dir.path().join("home").join("user");
        std::fs::create_dir_all(&home)?;

        let mut env = Self {
            temp_dir,
            home,
            original_env_vars: HashMap::new(),
        };

        for key in HOME_VARS {
            env.remove_env_var(key);
        }
        let home = env.home.clone();
        env.set_env_var("HOME", home.to_string_lossy());

        Ok(env)
    }

    /// The isolated home directory.
    pub fn home_path(&self) -> &Path {
        &self.home
    }

    /// The parent of the home directory.
    pub fn boundary_path(&self) -> PathBuf {
        self.temp_dir.path().join("home")
    }

    /// Root of the temporary tree, above the search boundary.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create (if needed) and return a project directory inside home.
    pub fn project_dir(&self, name: &str) -> PathBuf {
        let dir = self.home.join(name);
        std::fs::create_dir_all(&dir).expect("Failed to create project directory");
        dir
    }

    /// Set an environment variable, remembering the original for restoration.
    pub fn set_env_var<K: AsRef<str>, V: AsRef<str>>(&mut self, key: K, value: V) {
        let key = key.as_ref();
        self.remember(key);
        std::env::set_var(key, value.as_ref());
    }

    /// Unset an environment variable, remembering the original for restoration.
    pub fn remove_env_var<K: AsRef<str>>(&mut self, key: K) {
        let key = key.as_ref();
        self.remember(key);
        std::env::remove_var(key);
    }

    fn remember(&mut self, key: &str) {
        if !self.original_env_vars.contains_key(key) {
            self.original_env_vars
                .insert(key.to_string(), std::env::var(key).ok());
        }
    }
}

impl Drop for IsolatedTestEnvironment {
    fn drop(&mut self) {
        for (key, original_value) in &self.original_env_vars {
            match original_value {
                Some(value) => std::env::set_var(key, value),
                None => std::env::remove_var(key),
            }
        }
    }
}

/// Create a temporary directory, retrying briefly on contention.
pub fn create_temp_dir_with_retry() -> std::io::Result<TempDir> {
    let mut attempt = 1;
    loop {
        match TempDir::new() {
            Ok(dir) => return Ok(dir),
            Err(_) if attempt < 3 => {
                std::thread::sleep(std::time::Duration::from_millis(10 * attempt));
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
