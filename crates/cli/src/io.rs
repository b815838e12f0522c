//! File I/O with path context on errors.

use std::{
    fs::{read, write},
    path::PathBuf,
};

use anyhow::{Context, Result};

/// A file path with read/write helpers that report the path on failure.
#[derive(Debug, Clone)]
pub struct FontFile {
    path: PathBuf,
}

impl FontFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the whole file.
    pub fn read(&self) -> Result<Vec<u8>> {
        read(&self.path).with_context(|| format!("Failed to read font: {}", self.path.display()))
    }

    /// Create or truncate the file and write `data` to it.
    ///
    /// The parent directory must already exist.
    pub fn write(&self, data: impl AsRef<[u8]>) -> Result<()> {
        write(&self.path, data)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }
}
