//! External programs that read and rewrite file dates.
//!
//! Argument building and output parsing live here; the processes themselves
//! are run through the [`ShellExecutor`] port.

pub mod exiftool;
pub mod touch;

use std::path::Path;

use crate::error::ToolError;
use crate::ports::{ShellExecutor, ShellOutput};

/// Runs `program` and turns spawn failures and non-zero exits into [`ToolError`].
///
/// # Errors
///
/// Returns [`ToolError::Spawn`] if the process cannot be started and
/// [`ToolError::Failed`] if it exits unsuccessfully.
pub fn run_tool(
    shell: &dyn ShellExecutor,
    program: &str,
    args: &[String],
) -> Result<ShellOutput, ToolError> {
    let output = shell.run(program, args).map_err(|e| ToolError::Spawn {
        program: program.to_string(),
        message: e.to_string(),
    })?;
    if !output.success() {
        return Err(ToolError::Failed {
            program: program.to_string(),
            code: output.exit_code,
            stderr: output.stderr.trim().to_string(),
        });
    }
    Ok(output)
}

/// Renders `path` as a positional argument. Relative paths starting with `-`
/// get a `./` prefix so no tool mistakes them for an option.
fn path_arg(path: &Path) -> String {
    let text = path.to_string_lossy();
    if path.is_relative() && text.starts_with('-') {
        format!("./{text}")
    } else {
        text.into_owned()
    }
}
