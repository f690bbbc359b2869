//! Date reconciliation policy.
//!
//! The path date is the trust anchor. Metadata and file times are preferred
//! over it when they agree with it, because they carry a time of day, and
//! whichever of the two mutable dates disagrees with the chosen date is
//! rewritten.

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::{debug, info, warn};

use crate::context::ServiceContext;
use crate::dates::{are_close, path_date};
use crate::error::ToolError;
use crate::tools::{exiftool, touch};

/// The three candidate dates of one file, read fresh from the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateDates {
    /// File the dates belong to.
    pub file: PathBuf,
    /// Date inferred from the path text.
    pub path: Option<NaiveDateTime>,
    /// Capture date embedded in the file's metadata.
    pub metadata: Option<NaiveDateTime>,
    /// File-system modification time.
    pub modified: Option<NaiveDateTime>,
}

impl CandidateDates {
    /// Corrections this file would get if its modification time stayed put
    /// while the metadata is rewritten. `None` when there is no path date.
    #[must_use]
    pub fn plan(&self) -> Option<Plan> {
        let anchor = self.path?;
        let authoritative = authoritative_date(anchor, self.metadata, self.modified);
        let mut corrections = Vec::new();
        if needs_correction(self.metadata, authoritative) {
            corrections.push(Correction::MetadataDate(authoritative));
        }
        if needs_correction(self.modified, authoritative) {
            corrections.push(Correction::ModifiedDate(authoritative));
        }
        Some(Plan {
            authoritative,
            corrections,
        })
    }
}

/// Authoritative date of a file together with the writes it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    /// The date every mutable date should agree with.
    pub authoritative: NaiveDateTime,
    /// Writes required to get there.
    pub corrections: Vec<Correction>,
}

/// A single write that brings a mutable date in line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correction {
    /// Rewrite the embedded capture date.
    MetadataDate(NaiveDateTime),
    /// Rewrite the file-system modification time.
    ModifiedDate(NaiveDateTime),
}

impl Correction {
    /// Date this correction writes.
    #[must_use]
    pub fn date(self) -> NaiveDateTime {
        match self {
            Self::MetadataDate(date) | Self::ModifiedDate(date) => date,
        }
    }

    fn apply(self, ctx: &ServiceContext, file: &Path) -> Result<(), ToolError> {
        match self {
            Self::MetadataDate(date) => {
                exiftool::write_capture_date(ctx.shell.as_ref(), file, date)
            }
            Self::ModifiedDate(date) => touch::set_modified(ctx.shell.as_ref(), file, date),
        }
    }
}

impl fmt::Display for Correction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MetadataDate(date) => write!(f, "exif date to {date}"),
            Self::ModifiedDate(date) => write!(f, "file date to {date}"),
        }
    }
}

/// How an attempted correction ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteStatus {
    /// The tool ran successfully.
    Done,
    /// The tool failed; the message is reported and the run moves on.
    Failed(String),
    /// Dry run, nothing was written.
    Skipped,
}

/// A correction together with its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedCorrection {
    /// The write that was attempted.
    pub correction: Correction,
    /// What happened.
    pub status: WriteStatus,
}

/// Result of reconciling one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// No date could be derived from the path; the file was left alone.
    NoAnchor,
    /// The file was reconciled against `authoritative`.
    Reconciled {
        /// Date chosen as correct for the file.
        authoritative: NaiveDateTime,
        /// Writes attempted, in order.
        corrections: Vec<AppliedCorrection>,
    },
}

impl FileOutcome {
    /// The corrections attempted, without their status.
    #[must_use]
    pub fn corrections(&self) -> Vec<Correction> {
        match self {
            Self::NoAnchor => Vec::new(),
            Self::Reconciled { corrections, .. } => corrections
                .iter()
                .map(|applied| applied.correction)
                .collect(),
        }
    }
}

/// Picks the authoritative date of a file.
///
/// Metadata wins when it is close to the path date, then the modification
/// time, and otherwise the path date itself. The result is always one of
/// the inputs.
#[must_use]
pub fn authoritative_date(
    path: NaiveDateTime,
    metadata: Option<NaiveDateTime>,
    modified: Option<NaiveDateTime>,
) -> NaiveDateTime {
    [metadata, modified]
        .into_iter()
        .flatten()
        .find(|date| are_close(path, *date))
        .unwrap_or(path)
}

/// Returns `true` when `current` is missing or not close to `authoritative`.
#[must_use]
pub fn needs_correction(current: Option<NaiveDateTime>, authoritative: NaiveDateTime) -> bool {
    current.map_or(true, |date| !are_close(authoritative, date))
}

/// Applies the reconciliation policy to files, one at a time.
pub struct Reconciler<'a> {
    ctx: &'a ServiceContext,
    dry_run: bool,
}

impl<'a> Reconciler<'a> {
    /// Creates a reconciler that writes through `ctx`.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self {
            ctx,
            dry_run: false,
        }
    }

    /// When set, corrections are reported but never written.
    #[must_use]
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Reads the embedded capture date; any failure is `None`.
    #[must_use]
    pub fn metadata_date(&self, file: &Path) -> Option<NaiveDateTime> {
        exiftool::read_capture_date(self.ctx.shell.as_ref(), file)
    }

    /// Reads the modification time; any failure is `None`.
    #[must_use]
    pub fn modified_date(&self, file: &Path) -> Option<NaiveDateTime> {
        match self.ctx.fs.modified(file) {
            Ok(date) => Some(date),
            Err(err) => {
                debug!(path = %file.display(), error = %err, "could not stat file");
                None
            }
        }
    }

    /// Reads all three candidate dates of `file`.
    #[must_use]
    pub fn candidates(&self, file: &Path) -> CandidateDates {
        CandidateDates {
            file: file.to_path_buf(),
            path: path_date(file),
            metadata: self.metadata_date(file),
            modified: self.modified_date(file),
        }
    }

    /// Reconciles one file, applying at most one metadata write and one
    /// modification-time write.
    ///
    /// The modification time is read again after the metadata write since
    /// rewriting the file usually moves it.
    pub fn reconcile(&self, file: &Path) -> FileOutcome {
        let Some(anchor) = path_date(file) else {
            println!("Can't find path date");
            info!(path = %file.display(), "no date in path, skipping");
            return FileOutcome::NoAnchor;
        };

        let metadata = self.metadata_date(file);
        let modified = self.modified_date(file);
        let authoritative = authoritative_date(anchor, metadata, modified);
        debug!(
            path = %file.display(),
            %anchor,
            ?metadata,
            ?modified,
            %authoritative,
            "chose authoritative date"
        );

        let mut corrections = Vec::new();
        if needs_correction(metadata, authoritative) {
            corrections.push(self.apply(file, Correction::MetadataDate(authoritative)));
        }

        let modified = self.modified_date(file);
        if needs_correction(modified, authoritative) {
            corrections.push(self.apply(file, Correction::ModifiedDate(authoritative)));
        }

        FileOutcome::Reconciled {
            authoritative,
            corrections,
        }
    }

    fn apply(&self, file: &Path, correction: Correction) -> AppliedCorrection {
        print!("Setting {correction}... ");
        let _ = std::io::stdout().flush();

        let status = if self.dry_run {
            println!("Skipped (dry run).");
            WriteStatus::Skipped
        } else {
            match correction.apply(self.ctx, file) {
                Ok(()) => {
                    println!("Done.");
                    WriteStatus::Done
                }
                Err(err) => {
                    println!("Failed: {err}");
                    warn!(path = %file.display(), error = %err, "correction failed");
                    WriteStatus::Failed(err.to_string())
                }
            }
        };

        AppliedCorrection {
            correction,
            status,
        }
    }
}
