//! Reads and rewrites embedded capture dates with `exiftool`.

use std::path::Path;

use chrono::NaiveDateTime;
use tracing::debug;

use super::{path_arg, run_tool};
use crate::error::ToolError;
use crate::ports::ShellExecutor;

/// Program used for embedded metadata.
pub const EXIFTOOL: &str = "exiftool";

/// Timestamp layout of EXIF date fields.
pub const EXIF_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// Length of a timestamp in [`EXIF_FORMAT`].
const EXIF_TIMESTAMP_LEN: usize = 19;

/// Builds the `exiftool` arguments that print the capture date of `path`.
///
/// `DateTimeOriginal` is asked for first; `ModifyDate` is the fallback for
/// files that only carry the main image date.
#[must_use]
pub fn read_args(path: &Path) -> Vec<String> {
    vec![
        "-s3".to_string(),
        "-DateTimeOriginal".to_string(),
        "-ModifyDate".to_string(),
        path_arg(path),
    ]
}

/// Builds the `exiftool` arguments that rewrite every date field of `path`.
#[must_use]
pub fn write_args(path: &Path, date: NaiveDateTime) -> Vec<String> {
    vec![
        format!("-AllDates={}", date.format(EXIF_FORMAT)),
        "-overwrite_original".to_string(),
        path_arg(path),
    ]
}

/// Parses the first line of `exiftool -s3` output that starts with a valid
/// timestamp. Trailing sub-seconds or zone offsets are ignored.
///
/// Blank fields (`0000:00:00 00:00:00`) do not parse and yield `None`.
#[must_use]
pub fn parse_capture_date(stdout: &str) -> Option<NaiveDateTime> {
    stdout.lines().find_map(|line| {
        let stamp = line.trim().get(..EXIF_TIMESTAMP_LEN)?;
        NaiveDateTime::parse_from_str(stamp, EXIF_FORMAT).ok()
    })
}

/// Reads the embedded capture date of `path`.
///
/// Every failure (tool missing, unreadable file, no date field, garbage
/// value) collapses to `None`.
#[must_use]
pub fn read_capture_date(shell: &dyn ShellExecutor, path: &Path) -> Option<NaiveDateTime> {
    match run_tool(shell, EXIFTOOL, &read_args(path)) {
        Ok(output) => {
            let date = parse_capture_date(&output.stdout);
            if date.is_none() {
                debug!(path = %path.display(), "no capture date in metadata");
            }
            date
        }
        Err(err) => {
            debug!(path = %path.display(), error = %err, "could not read metadata");
            None
        }
    }
}

/// Rewrites all embedded date fields of `path` to `date`, in place.
///
/// No backup copy of the original file is kept.
///
/// # Errors
///
/// Returns a [`ToolError`] if `exiftool` cannot be run or fails.
pub fn write_capture_date(
    shell: &dyn ShellExecutor,
    path: &Path,
    date: NaiveDateTime,
) -> Result<(), ToolError> {
    run_tool(shell, EXIFTOOL, &write_args(path, date)).map(|_| ())
}
