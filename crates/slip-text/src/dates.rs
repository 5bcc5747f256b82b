//! Date formatting, parsing and age computation

use crate::{Result, TextError};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Format a date as a long English date with abbreviated weekday
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use slip_text::format_long_date;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
/// assert_eq!(format_long_date(date), "Tue, March 5, 2024");
/// ```
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%a, %B %-d, %Y").to_string()
}

/// Format a date as `M/D/YYYY`
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use slip_text::format_short_date;
///
/// let date = NaiveDate::from_ymd_opt(2026, 10, 9).unwrap();
/// assert_eq!(format_short_date(date), "10/9/2026");
/// ```
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Parse a calendar date from `YYYY-MM-DD`, an RFC 3339 timestamp, or a
/// zone-less `YYYY-MM-DDTHH:MM:SS` timestamp
///
/// Timestamps keep the calendar date as written, without zone conversion.
pub fn parse_calendar_date(value: &str) -> Result<NaiveDate> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.date_naive());
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(timestamp.date());
    }

    Err(TextError::InvalidDate(value.to_string()))
}

/// Age in whole years on `today` for someone born on `birth`
///
/// The year difference is reduced by one while this year's birthday is
/// still ahead. Returns `None` when `birth` is after `today`.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> Option<u32> {
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    u32::try_from(years).ok()
}
