//! Sets file modification times with `touch`.

use std::path::Path;

use chrono::NaiveDateTime;

use super::{path_arg, run_tool};
use crate::error::ToolError;
use crate::ports::ShellExecutor;

/// Program used to set file times.
pub const TOUCH: &str = "touch";

/// Timestamp layout accepted by `touch -t`.
pub const TOUCH_FORMAT: &str = "%Y%m%d%H%M.%S";

/// Builds the `touch` arguments that stamp `path` with `date`.
#[must_use]
pub fn set_modified_args(path: &Path, date: NaiveDateTime) -> Vec<String> {
    vec![
        "-t".to_string(),
        date.format(TOUCH_FORMAT).to_string(),
        "--".to_string(),
        path_arg(path),
    ]
}

/// Sets the modification (and access) time of `path` to `date`, in local time.
///
/// # Errors
///
/// Returns a [`ToolError`] if `touch` cannot be run or fails.
pub fn set_modified(
    shell: &dyn ShellExecutor,
    path: &Path,
    date: NaiveDateTime,
) -> Result<(), ToolError> {
    run_tool(shell, TOUCH, &set_modified_args(path, date)).map(|_| ())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn date() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2005, 6, 7)
            .unwrap()
            .and_hms_opt(8, 9, 50)
            .unwrap()
    }

    #[test]
    fn formats_touch_timestamp() {
        let args = set_modified_args(Path::new("/photos/a b.jpg"), date());
        assert_eq!(args, vec!["-t", "200506070809.50", "--", "/photos/a b.jpg"]);
    }

    #[test]
    fn dash_leading_file_stays_positional() {
        let args = set_modified_args(Path::new("-2005-06-07.jpg"), date());
        assert_eq!(args, vec!["-t", "200506070809.50", "--", "./-2005-06-07.jpg"]);
    }
}
