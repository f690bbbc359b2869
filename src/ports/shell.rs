//! Shell executor port for running external commands.

use serde::{Deserialize, Serialize};

/// The output of an external command execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellOutput {
    /// The exit code of the process.
    pub exit_code: i32,
    /// The captured standard output.
    pub stdout: String,
    /// The captured standard error.
    pub stderr: String,
}

impl ShellOutput {
    /// Returns `true` when the process exited with status zero.
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Executes external programs.
///
/// Every write this tool performs (embedded metadata, file times) goes
/// through this port, so tests can substitute a double that records the
/// invocations instead of running them.
pub trait ShellExecutor: Send + Sync {
    /// Runs `program` with `args` and waits for it to finish.
    ///
    /// Arguments are passed straight to the process, no shell quoting is
    /// involved.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned.
    fn run(
        &self,
        program: &str,
        args: &[String],
    ) -> Result<ShellOutput, Box<dyn std::error::Error + Send + Sync>>;
}
