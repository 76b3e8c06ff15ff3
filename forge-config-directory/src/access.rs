//! Filesystem access predicates.
//!
//! These answer "can this process actually do it" by attempting the open
//! rather than interpreting permission bits, so ACLs and effective uids are
//! taken into account. None of them ever fail; an error is a `false`.

use std::fs::{self, File, OpenOptions};
use std::path::Path;

/// Whether `path` exists (file, directory, or anything else `stat` can see).
pub fn exists(path: &Path) -> bool {
    fs::metadata(path).is_ok()
}

/// Whether `path` exists and can be read.
///
/// Directories are readable when they can be listed; everything else when it
/// can be opened for reading.
pub fn is_readable(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => fs::read_dir(path).is_ok(),
        Ok(_) => File::open(path).is_ok(),
        Err(_) => false,
    }
}

/// Whether `path` is an existing file that can be opened for writing.
///
/// The open does not truncate or create, so probing is side-effect free.
pub fn is_writable(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => !meta.permissions().readonly(),
        Ok(_) => OpenOptions::new().write(true).open(path).is_ok(),
        Err(_) => false,
    }
}
