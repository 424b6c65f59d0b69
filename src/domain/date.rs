//! Display formatting for submission timestamps

use chrono::{DateTime, Local, TimeZone};

/// `MMM D, YYYY`, e.g. `Apr 4, 2007`.
const DATE_FORMAT: &str = "%b %-d, %Y";

/// Format a Unix timestamp in the local time zone.
pub fn format_date(epoch_seconds: i64) -> String {
    format_date_in(epoch_seconds, &Local)
}

/// Format a Unix timestamp in the given time zone.
///
/// Timestamps chrono cannot represent are shown as an empty string.
pub fn format_date_in<Tz: TimeZone>(epoch_seconds: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match DateTime::from_timestamp(epoch_seconds, 0) {
        Some(utc) => utc.with_timezone(tz).format(DATE_FORMAT).to_string(),
        None => String::new(),
    }
}
