//! Recording adapter for the `FileSystem` port.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::NaiveDateTime;
use serde::Serialize;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::FileSystem;

/// Records filesystem interactions while delegating to an inner implementation.
pub struct RecordingFileSystem {
    inner: Box<dyn FileSystem>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingFileSystem {
    /// Creates a new recording filesystem wrapping the given implementation.
    pub fn new(inner: Box<dyn FileSystem>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct RootInput<'a> {
    root: &'a Path,
}

#[derive(Serialize)]
struct PathInput<'a> {
    path: &'a Path,
}

impl FileSystem for RecordingFileSystem {
    fn list_files(
        &self,
        root: &Path,
    ) -> Result<Vec<PathBuf>, Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.list_files(root);
        record_result(
            &self.recorder,
            "fs",
            "list_files",
            &RootInput { root },
            &result,
        );
        result
    }

    fn modified(
        &self,
        path: &Path,
    ) -> Result<NaiveDateTime, Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.modified(path);
        record_result(
            &self.recorder,
            "fs",
            "modified",
            &PathInput { path },
            &result,
        );
        result
    }
}
