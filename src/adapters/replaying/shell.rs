//! Replaying adapter for the `ShellExecutor` port.

use std::sync::Mutex;

use crate::cassette::replayer::{replay_result, CassetteReplayer};
use crate::ports::shell::{ShellExecutor, ShellOutput};

/// Replays recorded command results from a cassette.
pub struct ReplayingShellExecutor {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingShellExecutor {
    /// Creates a new replaying shell executor from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self {
            replayer: Mutex::new(replayer),
        }
    }
}

impl ShellExecutor for ReplayingShellExecutor {
    fn run(
        &self,
        _program: &str,
        _args: &[String],
    ) -> Result<ShellOutput, Box<dyn std::error::Error + Send + Sync>> {
        let output = {
            let mut replayer = self.replayer.lock().expect("replayer lock poisoned");
            let interaction = replayer.next_interaction("shell", "run");
            interaction.output.clone()
        };
        replay_result(&output, "shell::run")
    }
}
