//! `redate fix` command.

use std::path::Path;

use crate::config::ScanConfig;
use crate::context::ServiceContext;
use crate::scan;

/// Builds the scan configuration from command-line arguments.
#[must_use]
pub fn config_from_args(
    root: &Path,
    ignore: &[String],
    no_default_ignores: bool,
    dry_run: bool,
) -> ScanConfig {
    let mut config = ScanConfig::new(root);
    if no_default_ignores {
        config = config.with_ignores(Vec::new());
    }
    config.ignoring(ignore.iter().cloned()).dry_run(dry_run)
}

/// Execute the `fix` command with the given service context.
///
/// # Errors
///
/// Returns an error string if the archive root cannot be listed.
pub fn run_with_context(ctx: &ServiceContext, config: &ScanConfig) -> Result<(), String> {
    let summary = scan::run(ctx, config)?;
    println!();
    println!("{summary}");
    Ok(())
}
