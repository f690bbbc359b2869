//! Command dispatch and handlers.

pub mod fix;
pub mod inspect;

use std::env;
use std::path::PathBuf;

use crate::cassette::session::RecordingSession;
use crate::cli::Command;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler.
///
/// When `REDATE_RECORD` is set to a directory path, all port interactions are
/// recorded to per-port cassette files below it. When `REDATE_REPLAY` points
/// at such a recording, it is replayed instead of touching the disk.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    if let Ok(dir) = env::var("REDATE_REPLAY") {
        let ctx = ServiceContext::replaying_dir(&PathBuf::from(dir))?;
        return dispatch_with_context(command, &ctx);
    }

    let (ctx, session) = if let Ok(path) = env::var("REDATE_RECORD") {
        let (ctx, session) = ServiceContext::recording_at(&PathBuf::from(path))?;
        (ctx, Some(session))
    } else {
        (ServiceContext::live(), None)
    };

    let result = dispatch_with_context(command, &ctx);

    // Finish recording after command completes (even on error)
    if let Some(session) = session {
        // Drop context first to release Arc references
        drop(ctx);
        finish_recording(session)?;
    }

    result
}

/// Dispatch a command with the given service context.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<(), String> {
    match command {
        Command::Fix { root, ignore, no_default_ignores, dry_run } => {
            let config = fix::config_from_args(root, ignore, *no_default_ignores, *dry_run);
            fix::run_with_context(ctx, &config)
        }
        Command::Inspect { paths } => inspect::run_with_context(ctx, paths),
    }
}

/// Finish a recording session and print the output directory.
fn finish_recording(session: RecordingSession) -> Result<(), String> {
    let output_dir = session.finish()?;
    eprintln!("Recording saved to: {}", output_dir.display());
    Ok(())
}
