//! `redate inspect` command.

use std::path::PathBuf;

use chrono::NaiveDateTime;

use crate::context::ServiceContext;
use crate::reconcile::{CandidateDates, Reconciler};

/// Execute the `inspect` command with the given service context.
///
/// Reads the candidate dates of each path and prints the corrections `fix`
/// would make, without writing anything.
///
/// # Errors
///
/// Never fails today; the signature matches the other commands.
pub fn run_with_context(ctx: &ServiceContext, paths: &[PathBuf]) -> Result<(), String> {
    let reconciler = Reconciler::new(ctx);
    for path in paths {
        println!("{}", render(&reconciler.candidates(path)));
    }
    Ok(())
}

fn show(date: Option<NaiveDateTime>) -> String {
    date.map_or_else(|| "-".to_string(), |date| date.to_string())
}

/// Formats the candidate dates and plan of one file.
#[must_use]
pub fn render(candidates: &CandidateDates) -> String {
    let mut lines = vec![
        candidates.file.display().to_string(),
        format!("  path date:     {}", show(candidates.path)),
        format!("  exif date:     {}", show(candidates.metadata)),
        format!("  file date:     {}", show(candidates.modified)),
    ];
    match candidates.plan() {
        None => lines.push("  no path date, file would be skipped".to_string()),
        Some(plan) => {
            lines.push(format!("  authoritative: {}", plan.authoritative));
            if plan.corrections.is_empty() {
                lines.push("  up to date".to_string());
            }
            for correction in plan.corrections {
                lines.push(format!("  would set {correction}"));
            }
        }
    }
    lines.join("\n")
}
