//! Service context bundling all port trait objects.

use std::path::Path;
use std::sync::Arc;

use crate::adapters::live::filesystem::LiveFileSystem;
use crate::adapters::live::shell::LiveShellExecutor;
use crate::adapters::recording::{RecordingFileSystem, RecordingShellExecutor};
use crate::adapters::replaying::{ReplayingFileSystem, ReplayingShellExecutor};
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::ports::filesystem::FileSystem;
use crate::ports::shell::ShellExecutor;

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Constructors
/// wire up different adapter implementations (live, recording, replaying).
pub struct ServiceContext {
    /// Filesystem for traversal and file time queries.
    pub fs: Box<dyn FileSystem>,
    /// Executor for the external date tools.
    pub shell: Box<dyn ShellExecutor>,
}

impl ServiceContext {
    /// Creates a context from explicit adapters.
    #[must_use]
    pub fn new(fs: Box<dyn FileSystem>, shell: Box<dyn ShellExecutor>) -> Self {
        Self { fs, shell }
    }

    /// Creates a live context that touches the real disk and runs real tools.
    #[must_use]
    pub fn live() -> Self {
        Self::new(Box::new(LiveFileSystem), Box::new(LiveShellExecutor))
    }

    /// Creates a live context whose interactions are captured to cassettes
    /// in a fresh timestamped directory below `base`.
    ///
    /// The context must be dropped before [`RecordingSession::finish`] is
    /// called, so the recorders are no longer shared.
    ///
    /// # Errors
    ///
    /// Returns an error if the session directory cannot be created.
    pub fn recording_at(base: &Path) -> Result<(Self, RecordingSession), String> {
        let session = RecordingSession::new(base)?;
        let ctx = Self::new(
            Box::new(RecordingFileSystem::new(
                Box::new(LiveFileSystem),
                Arc::clone(&session.fs),
            )),
            Box::new(RecordingShellExecutor::new(
                Box::new(LiveShellExecutor),
                Arc::clone(&session.shell),
            )),
        );
        Ok((ctx, session))
    }

    /// Creates a replaying context from a single cassette file.
    ///
    /// Both ports are served by the same cassette; each gets its own
    /// replayer so per-port cursors are independent.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        Ok(Self::new(
            Box::new(ReplayingFileSystem::new(CassetteReplayer::load(path)?)),
            Box::new(ReplayingShellExecutor::new(CassetteReplayer::load(path)?)),
        ))
    }

    /// Creates a replaying context from a recorded session directory holding
    /// `fs.cassette.yaml` and `shell.cassette.yaml`.
    ///
    /// # Errors
    ///
    /// Returns an error if either cassette file cannot be read or parsed.
    pub fn replaying_dir(dir: &Path) -> Result<Self, String> {
        let fs = CassetteReplayer::load(&dir.join("fs.cassette.yaml"))?;
        let shell = CassetteReplayer::load(&dir.join("shell.cassette.yaml"))?;
        Ok(Self::new(
            Box::new(ReplayingFileSystem::new(fs)),
            Box::new(ReplayingShellExecutor::new(shell)),
        ))
    }
}
