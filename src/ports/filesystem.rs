//! Filesystem port for traversal and file time queries.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

/// Provides read access to the archive on disk.
///
/// Abstracting the filesystem allows deterministic replay and testing
/// without touching a real photo archive.
pub trait FileSystem: Send + Sync {
    /// Lists every regular file under `root`, depth-first.
    ///
    /// Directories themselves are never returned.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` does not exist or cannot be read.
    fn list_files(
        &self,
        root: &Path,
    ) -> Result<Vec<PathBuf>, Box<dyn std::error::Error + Send + Sync>>;

    /// Returns the last-modified time of a file as a local, naive timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be stat-ed.
    fn modified(
        &self,
        path: &Path,
    ) -> Result<NaiveDateTime, Box<dyn std::error::Error + Send + Sync>>;
}
