//! Recording session managing per-port cassette recorders.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::recorder::CassetteRecorder;

/// Manages per-port `CassetteRecorder` instances for a recording session.
///
/// Each port gets its own recorder writing to a separate cassette file
/// (`fs.cassette.yaml`, `shell.cassette.yaml`). All cassettes are stored in
/// a timestamped directory below the requested base directory.
pub struct RecordingSession {
    /// Recorder for filesystem interactions.
    pub fs: Arc<Mutex<CassetteRecorder>>,
    /// Recorder for shell interactions.
    pub shell: Arc<Mutex<CassetteRecorder>>,
    /// Output directory containing all cassette files.
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Create a new recording session in `<base>/<timestamp>/`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The cassette directory already exists
    /// - The directory cannot be created
    pub fn new(base: &Path) -> Result<Self, String> {
        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let output_dir = base.join(&timestamp);

        if output_dir.exists() {
            return Err(format!(
                "Cassette directory already exists: {}",
                output_dir.display()
            ));
        }

        std::fs::create_dir_all(&output_dir)
            .map_err(|e| format!("Failed to create cassette directory: {e}"))?;

        let make_recorder = |port: &str| -> Arc<Mutex<CassetteRecorder>> {
            let path = output_dir.join(format!("{port}.cassette.yaml"));
            let name = format!("{timestamp}-{port}");
            Arc::new(Mutex::new(CassetteRecorder::new(path, name)))
        };

        Ok(Self {
            fs: make_recorder("fs"),
            shell: make_recorder("shell"),
            output_dir,
        })
    }

    /// Directory the cassette files are written to.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Finish all recorders and write cassette files to disk.
    ///
    /// Consumes the session and writes each port's cassette file. Every
    /// recording adapter holding a recorder must have been dropped first.
    ///
    /// # Errors
    ///
    /// Returns an error if any cassette file cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        fn finish_one(arc: Arc<Mutex<CassetteRecorder>>, port: &str) -> Result<(), String> {
            let recorder = Arc::try_unwrap(arc)
                .map_err(|_| format!("Recording adapter for {port} still has references"))?
                .into_inner()
                .map_err(|e| format!("Recorder lock for {port} poisoned: {e}"))?;
            recorder
                .finish()
                .map_err(|e| format!("Failed to write {port} cassette: {e}"))?;
            Ok(())
        }

        finish_one(self.fs, "fs")?;
        finish_one(self.shell, "shell")?;

        Ok(self.output_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_creates_output_directory_and_finishes() {
        let base = std::env::temp_dir().join("redate_session_test");
        let _ = std::fs::remove_dir_all(&base);

        let session = RecordingSession::new(&base).expect("session should start");
        let dir = session.output_dir().to_path_buf();
        assert!(dir.exists(), "Output directory should exist after new()");

        let finished = session.finish().expect("finish() should succeed");
        assert_eq!(finished, dir);
        assert!(dir.join("fs.cassette.yaml").exists());
        assert!(dir.join("shell.cassette.yaml").exists());

        let _ = std::fs::remove_dir_all(&base);
    }

    #[test]
    fn finish_fails_while_adapter_holds_recorder() {
        let base = std::env::temp_dir().join("redate_session_held_test");
        let _ = std::fs::remove_dir_all(&base);

        let session = RecordingSession::new(&base).unwrap();
        let held = Arc::clone(&session.shell);
        let result = session.finish();
        assert!(result.is_err_and(|e| e.contains("shell still has references")));
        drop(held);

        let _ = std::fs::remove_dir_all(&base);
    }
}
