//! Replaying adapter for the `FileSystem` port.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::NaiveDateTime;

use crate::cassette::replayer::{replay_result, CassetteReplayer};
use crate::ports::filesystem::FileSystem;

/// Replays recorded filesystem operations from a cassette.
pub struct ReplayingFileSystem {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingFileSystem {
    /// Creates a new replaying filesystem from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self {
            replayer: Mutex::new(replayer),
        }
    }

    fn next_output(&self, method: &str) -> serde_json::Value {
        let mut replayer = self.replayer.lock().expect("replayer lock poisoned");
        replayer.next_interaction("fs", method).output.clone()
    }
}

impl FileSystem for ReplayingFileSystem {
    fn list_files(
        &self,
        _root: &Path,
    ) -> Result<Vec<PathBuf>, Box<dyn std::error::Error + Send + Sync>> {
        replay_result(&self.next_output("list_files"), "fs::list_files")
    }

    fn modified(
        &self,
        _path: &Path,
    ) -> Result<NaiveDateTime, Box<dyn std::error::Error + Send + Sync>> {
        replay_result(&self.next_output("modified"), "fs::modified")
    }
}
