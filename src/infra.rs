//! Infrastructure traits for abstracting I/O operations.
//!
//! Snapshot loading goes through the [`FileSystem`] trait so that storage
//! logic can be exercised against alternative implementations in tests.

use std::io;
use std::path::Path;

/// Trait for abstracting filesystem operations.
///
/// Only the operations this crate actually performs are part of the trait:
/// reading a snapshot document and copying one snapshot file over another.
pub trait FileSystem {
    /// Read the entire contents of a file into a string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Copy a file from one location to another.
    fn copy(&self, from: &Path, to: &Path) -> io::Result<u64>;
}

/// Real filesystem implementation that delegates to std::fs.
#[derive(Debug, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn copy(&self, from: &Path, to: &Path) -> io::Result<u64> {
        std::fs::copy(from, to)
    }
}
