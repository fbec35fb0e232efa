//! Shared calendar-date handling.
//!
//! Session dates are plain ISO `YYYY-MM-DD` strings, so string comparison is
//! the chronological comparison and every sort/range check in the crate can
//! work on the strings directly. Parsing only happens here, for the few
//! places that need real date arithmetic. Timestamp-bearing strings
//! (`start_time`/`end_time`) never mix into date comparisons.

use chrono::{DateTime, Local, NaiveDate};

/// Parse an ISO `YYYY-MM-DD` date. Invalid input yields `None`.
pub fn parse_iso(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Today's local date as an ISO `YYYY-MM-DD` string.
pub fn today_string() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Whole minutes between two RFC 3339 instants, rounded down.
///
/// Returns `None` when either timestamp fails to parse or the span is
/// negative.
pub fn duration_minutes(start: &str, end: &str) -> Option<i64> {
    let start = DateTime::parse_from_rfc3339(start).ok()?;
    let end = DateTime::parse_from_rfc3339(end).ok()?;
    let seconds = (end - start).num_seconds();
    if seconds < 0 {
        return None;
    }
    Some(seconds / 60)
}
