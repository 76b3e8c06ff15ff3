//! Config file handle
//!
//! A [`ConfigFile`] binds one path to one [`ConfigFormat`] and keeps the
//! parsed document in a [`DataStore`]. Disk and memory only meet through the
//! explicit `create`/`read`/`update`/`delete` calls; nothing is reloaded or
//! flushed behind the caller's back.

use crate::error::{ConfigError, ConfigResult};
use crate::format::ConfigFormat;
use crate::store::DataStore;
use crate::Document;
use forge_config_directory::{access, ConfigFinder};
use serde_json::Value;
use std::fs::{self, DirBuilder, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Permissions for directories created by [`ConfigFile::create`]
#[cfg_attr(not(unix), allow(dead_code))]
const DIR_MODE: u32 = 0o755;

/// A configuration file on disk together with its in-memory document
#[derive(Debug, Clone)]
pub struct ConfigFile {
    /// Full path to the config file
    file: PathBuf,
    /// Directory containing the config file
    path: PathBuf,
    /// Format chosen from the extension at construction
    format: ConfigFormat,
    /// The in-memory document
    store: DataStore,
}

impl ConfigFile {
    /// Bind a handle to `file`, choosing the format from its extension
    ///
    /// Nothing is read from disk; the document starts as an empty mapping.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedFormat`] when the extension is not
    /// `json`, `yaml` or `yml`.
    pub fn new(file: impl Into<PathBuf>) -> ConfigResult<Self> {
        let file = file.into();
        let format = ConfigFormat::from_path(&file)?;
        let path = parent_dir(&file);

        trace!("Bound {} config file {}", format, file.display());

        Ok(Self {
            file,
            path,
            format,
            store: DataStore::new(),
        })
    }

    /// Alias of [`ConfigFile::new`]
    pub fn make(file: impl Into<PathBuf>) -> ConfigResult<Self> {
        Self::new(file)
    }

    /// Bind a handle to `file` and read it
    pub fn load(file: impl Into<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::new(file)?;
        config.read()?;
        Ok(config)
    }

    /// Search upward from `start` with `finder`, then bind and read the match
    ///
    /// # Errors
    ///
    /// [`ConfigError::Search`] when nothing is found, otherwise any error of
    /// [`ConfigFile::new`] or [`ConfigFile::read`].
    pub fn discover(finder: &ConfigFinder, start: impl AsRef<Path>) -> ConfigResult<Self> {
        let file = finder.find_or_fail(start)?;
        Self::load(file)
    }

    /// Full path to the config file
    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Directory path of the config file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The format bound at construction
    pub fn format(&self) -> ConfigFormat {
        self.format
    }

    /// Look up a read-only path property by name (`"file"` or `"path"`)
    pub fn property(&self, name: &str) -> ConfigResult<&Path> {
        match name {
            "file" => Ok(self.file()),
            "path" => Ok(self.path()),
            _ => Err(ConfigError::InvalidProperty {
                name: name.to_string(),
            }),
        }
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        access::exists(&self.file)
    }

    /// Check if the file is readable
    pub fn is_readable(&self) -> bool {
        access::is_readable(&self.file)
    }

    /// Check if the file is writable
    pub fn is_writable(&self) -> bool {
        access::is_writable(&self.file)
    }

    /// Create the file, and any missing directories, then write the document
    ///
    /// Running it again with an unchanged document leaves identical content.
    pub fn create(&self) -> ConfigResult<()> {
        if !self.path.is_dir() {
            create_dir_all(&self.path).map_err(|source| ConfigError::DirectoryCreation {
                path: self.path.clone(),
                source,
            })?;
            debug!("Created directory {}", self.path.display());
        }

        if !self.exists() {
            OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(false)
                .open(&self.file)
                .map_err(|source| ConfigError::FileCreate {
                    path: self.file.clone(),
                    source,
                })?;
            debug!("Created file {}", self.file.display());
        }

        self.update()
    }

    /// Read the file, replacing the in-memory document
    pub fn read(&mut self) -> ConfigResult<()> {
        if !self.exists() {
            return Err(ConfigError::FileNotFound {
                path: self.file.clone(),
            });
        }
        if !self.is_readable() {
            return Err(ConfigError::NotReadable {
                path: self.file.clone(),
            });
        }

        let contents = fs::read_to_string(&self.file).map_err(|source| ConfigError::FileRead {
            path: self.file.clone(),
            source,
        })?;
        if contents.is_empty() {
            return Err(ConfigError::EmptyFile {
                path: self.file.clone(),
            });
        }

        let data = self
            .format
            .parse(&contents)
            .map_err(|e| ConfigError::format(&self.file, e))?;
        self.store.replace(data);

        debug!("Read {} config from {}", self.format, self.file.display());
        Ok(())
    }

    /// Write the in-memory document to the file, replacing its content
    pub fn update(&self) -> ConfigResult<()> {
        if !self.exists() {
            return Err(ConfigError::FileNotFound {
                path: self.file.clone(),
            });
        }
        if !self.is_writable() {
            return Err(ConfigError::NotWritable {
                path: self.file.clone(),
            });
        }

        let mut contents = self
            .format
            .serialize(self.store.data())
            .map_err(|e| ConfigError::format(&self.file, e))?;
        if !contents.ends_with('\n') {
            contents.push('\n');
        }

        fs::write(&self.file, contents).map_err(|source| ConfigError::FileWrite {
            path: self.file.clone(),
            source,
        })?;

        debug!("Wrote {} config to {}", self.format, self.file.display());
        Ok(())
    }

    /// Delete the file; the handle and its document stay usable
    pub fn delete(&self) -> ConfigResult<()> {
        if self.exists() {
            fs::remove_file(&self.file).map_err(|source| ConfigError::FileDelete {
                path: self.file.clone(),
                source,
            })?;
            debug!("Deleted {}", self.file.display());
        }
        Ok(())
    }

    /// The in-memory document
    pub fn data(&self) -> &Document {
        self.store.data()
    }

    /// Replace the in-memory document (the file is untouched until `update`)
    pub fn set_data(&mut self, data: Document) {
        self.store.replace(data);
    }

    /// The underlying store
    pub fn store(&self) -> &DataStore {
        &self.store
    }

    /// Mutable access to the underlying store
    pub fn store_mut(&mut self) -> &mut DataStore {
        &mut self.store
    }

    /// Get the value at a dotted path
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.store.get(key)
    }

    /// Set the value at a dotted path
    pub fn set(&mut self, key: &str, value: Value) {
        self.store.set(key, value);
    }

    /// Remove the value at a dotted path
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.store.remove(key)
    }

    /// Whether a value exists at a dotted path
    pub fn has(&self, key: &str) -> bool {
        self.store.has(key)
    }
}

/// The file path minus its last segment, or `.` for a bare file name
fn parent_dir(file: &Path) -> PathBuf {
    match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn create_dir_all(path: &Path) -> io::Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    builder.create(path)
}
