//! Filesystem predicates.
//!
//! These stat the path and so block on the filesystem.

use std::fs;
use std::path::Path;

/// An existing path that is not a directory.
///
/// # Example
///
/// ```rust
/// use conform::format::file;
///
/// assert!(file(concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml")));
/// assert!(!file(env!("CARGO_MANIFEST_DIR")));
/// ```
pub fn file(path: impl AsRef<Path>) -> bool {
    fs::metadata(path).is_ok_and(|m| !m.is_dir())
}

/// An existing directory.
pub fn dir(path: impl AsRef<Path>) -> bool {
    fs::metadata(path).is_ok_and(|m| m.is_dir())
}
