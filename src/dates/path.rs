//! Date extraction from the textual path of a file.
//!
//! Two patterns are recognized in any path segment:
//!
//! - a coarse `YYYY-MM-DD` date, typically typed by hand into folder names;
//! - a fine `YYYYMMDD_HHMMSS` timestamp, typically produced by cameras in
//!   file names.
//!
//! For each pattern the match in the deepest segment wins, and any fine
//! timestamp overrides a coarse date.

use std::path::Path;

use chrono::{Days, Duration, Months, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static COARSE_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([12][90][0-9]{2})-([01][0-9])-([0123][0-9])")
        .expect("coarse date pattern is valid")
});

static FINE_TIMESTAMP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([12][90][0-9]{2})([01][0-9])([0123][0-9])_([0-9]{2})([0-9]{2})([0-9]{2})")
        .expect("fine timestamp pattern is valid")
});

/// Derives a date from `path`, or `None` when no segment carries one.
///
/// Digit classes are the only validation. Out-of-range fields that still
/// match (month 13, day 00, hour 99) are accepted and roll over into the
/// neighbouring unit, so `2001-13-01` reads as 2002-01-01.
#[must_use]
pub fn path_date(path: &Path) -> Option<NaiveDateTime> {
    let segments: Vec<_> = path
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect();

    let coarse = segments
        .iter()
        .filter_map(|segment| coarse_date(segment))
        .last();
    let fine = segments
        .iter()
        .filter_map(|segment| fine_timestamp(segment))
        .last();

    fine.or(coarse)
}

fn coarse_date(segment: &str) -> Option<NaiveDateTime> {
    let caps = COARSE_DATE.captures(segment)?;
    date_from(&caps)
}

fn fine_timestamp(segment: &str) -> Option<NaiveDateTime> {
    let caps = FINE_TIMESTAMP.captures(segment)?;
    let time = Duration::hours(i64::from(field(&caps, 4)?))
        + Duration::minutes(i64::from(field(&caps, 5)?))
        + Duration::seconds(i64::from(field(&caps, 6)?));
    date_from(&caps)?.checked_add_signed(time)
}

/// Midnight of the captured year, month and day, with overflowing months and
/// days carried forward and a zero month or day stepping back one unit.
fn date_from(caps: &Captures<'_>) -> Option<NaiveDateTime> {
    let year = caps.get(1)?.as_str().parse().ok()?;
    let january = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let month = match field(caps, 2)? {
        0 => january.checked_sub_months(Months::new(1))?,
        month => january.checked_add_months(Months::new(month - 1))?,
    };
    let day = match field(caps, 3)? {
        0 => month.checked_sub_days(Days::new(1))?,
        day => month.checked_add_days(Days::new(u64::from(day - 1)))?,
    };
    day.and_hms_opt(0, 0, 0)
}

fn field(caps: &Captures<'_>, index: usize) -> Option<u32> {
    caps.get(index)?.as_str().parse().ok()
}
