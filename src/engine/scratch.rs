//! Scoped scratch space for engine adapters.
//!
//! Adapters that drive file-based engines need somewhere to put model text
//! and data files. [`ScratchSpace`] owns a temporary directory whose entire
//! contents are removed when the value is dropped, on success or failure,
//! so no cleanup list has to be maintained by hand.

use crate::error::{PosteriorError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tied to the lifetime of the value.
#[derive(Debug)]
pub struct ScratchSpace {
    dir: TempDir,
}

impl ScratchSpace {
    /// Create a fresh scratch directory.
    pub fn new() -> Result<Self> {
        let dir = TempDir::new().map_err(|e| PosteriorError::Scratch(e.to_string()))?;
        Ok(Self { dir })
    }

    /// Path of the scratch directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a named file into the scratch directory, returning its path.
    pub fn write_file(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).map_err(|e| PosteriorError::Scratch(e.to_string()))?;
        Ok(path)
    }

    /// Read a file previously written into the scratch directory.
    pub fn read_file(&self, name: &str) -> Result<String> {
        fs::read_to_string(self.dir.path().join(name))
            .map_err(|e| PosteriorError::Scratch(e.to_string()))
    }
}
