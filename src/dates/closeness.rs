//! Tolerance relation deciding whether two dates denote the same event.

use chrono::{Duration, NaiveDateTime};

/// Width of the closeness window, one week.
///
/// Path dates are often date-only (midnight) while metadata and file times
/// carry a time of day, and folders are frequently named a few days after
/// the shoot.
pub const CLOSENESS_WINDOW_HOURS: i64 = 7 * 24;

/// Returns `true` when `a` and `b` are strictly less than a week apart.
///
/// Both values are naive; no timezone conversion happens.
#[must_use]
pub fn are_close(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    let between = if a > b { a - b } else { b - a };
    between < Duration::hours(CLOSENESS_WINDOW_HOURS)
}
