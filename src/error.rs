//! Error types for external tool invocations.

use thiserror::Error;

/// Failure to run one of the external programs that rewrite file dates.
#[derive(Error, Debug)]
pub enum ToolError {
    /// The process could not be started at all.
    #[error("failed to run {program}: {message}")]
    Spawn {
        /// Program that was invoked.
        program: String,
        /// Error reported by the executor.
        message: String,
    },

    /// The process ran but exited unsuccessfully.
    #[error("{program} exited with status {code}: {stderr}")]
    Failed {
        /// Program that was invoked.
        program: String,
        /// Exit code of the process.
        code: i32,
        /// Trimmed standard error output.
        stderr: String,
    },
}
