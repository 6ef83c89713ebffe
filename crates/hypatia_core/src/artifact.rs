//! The render artifact record.

use derive_getters::Getters;
use std::path::PathBuf;

/// A rendered video in permanent served storage.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct RenderArtifact {
    /// Absolute path of the served file
    file_path: PathBuf,
    /// Size on disk in bytes
    size_bytes: u64,
}

impl RenderArtifact {
    /// Build an artifact record.
    pub fn new(file_path: PathBuf, size_bytes: u64) -> Self {
        Self {
            file_path,
            size_bytes,
        }
    }

    /// Size in megabytes, for notification copy.
    pub fn size_mb(&self) -> f64 {
        self.size_bytes as f64 / (1024.0 * 1024.0)
    }
}
