//! Walks an archive and reconciles every file in it.

use std::fmt;
use std::path::Path;

use tracing::info;

use crate::config::ScanConfig;
use crate::context::ServiceContext;
use crate::reconcile::{Correction, FileOutcome, Reconciler, WriteStatus};

/// Counters collected over one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Files handed to the reconciler.
    pub visited: usize,
    /// Files skipped by the ignore list.
    pub ignored: usize,
    /// Files without a date in their path.
    pub no_anchor: usize,
    /// Files that needed no correction.
    pub consistent: usize,
    /// Successful metadata writes.
    pub metadata_written: usize,
    /// Successful modification-time writes.
    pub modified_written: usize,
    /// Corrections skipped in a dry run.
    pub skipped: usize,
    /// Failed writes.
    pub failed: usize,
}

impl ScanSummary {
    /// Folds one file's outcome into the counters.
    pub fn record(&mut self, outcome: &FileOutcome) {
        self.visited += 1;
        let corrections = match outcome {
            FileOutcome::NoAnchor => {
                self.no_anchor += 1;
                return;
            }
            FileOutcome::Reconciled { corrections, .. } => corrections,
        };
        if corrections.is_empty() {
            self.consistent += 1;
        }
        for applied in corrections {
            match (&applied.status, applied.correction) {
                (WriteStatus::Done, Correction::MetadataDate(_)) => self.metadata_written += 1,
                (WriteStatus::Done, Correction::ModifiedDate(_)) => self.modified_written += 1,
                (WriteStatus::Skipped, _) => self.skipped += 1,
                (WriteStatus::Failed(_), _) => self.failed += 1,
            }
        }
    }
}

impl fmt::Display for ScanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} files: {} consistent, {} without path date, {} exif dates set, {} file dates set",
            self.visited,
            self.consistent,
            self.no_anchor,
            self.metadata_written,
            self.modified_written,
        )?;
        if self.skipped > 0 {
            write!(f, ", {} skipped (dry run)", self.skipped)?;
        }
        if self.failed > 0 {
            write!(f, ", {} failed", self.failed)?;
        }
        if self.ignored > 0 {
            write!(f, " ({} ignored)", self.ignored)?;
        }
        Ok(())
    }
}

/// Returns `true` when the file name of `path` ends with any of `patterns`.
#[must_use]
pub fn is_ignored(path: &Path, patterns: &[String]) -> bool {
    let Some(name) = path.file_name().map(|name| name.to_string_lossy()) else {
        return false;
    };
    patterns
        .iter()
        .any(|pattern| !pattern.is_empty() && name.ends_with(pattern.as_str()))
}

/// Reconciles every non-ignored file under the configured root, in order.
///
/// Per-file problems never stop the scan.
///
/// # Errors
///
/// Returns an error only if the root cannot be listed.
pub fn run(ctx: &ServiceContext, config: &ScanConfig) -> Result<ScanSummary, String> {
    let files = ctx
        .fs
        .list_files(&config.root)
        .map_err(|e| format!("Failed to scan {}: {e}", config.root.display()))?;
    info!(
        root = %config.root.display(),
        files = files.len(),
        dry_run = config.dry_run,
        "scanning"
    );

    let reconciler = Reconciler::new(ctx).dry_run(config.dry_run);
    let mut summary = ScanSummary::default();
    for file in &files {
        if is_ignored(file, &config.ignore) {
            summary.ignored += 1;
            continue;
        }
        println!("{}", file.display());
        let outcome = reconciler.reconcile(file);
        summary.record(&outcome);
    }

    info!(%summary, "scan finished");
    Ok(summary)
}
