//! Slip Text - text utilities for printed slips
//!
//! This crate provides:
//! - Width-based word wrapping with a pluggable text measure
//! - Long and short English date formatting
//! - Lenient calendar-date parsing (`YYYY-MM-DD` or RFC 3339)
//! - Calendar-aware age computation
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use slip_text::{age_on, format_long_date, wrap_to_width};
//!
//! // Every character is 1 unit wide
//! let lines = wrap_to_width("take with food", 9.0, &|s: &str| s.chars().count() as f64);
//! assert_eq!(lines, vec!["take with", "food"]);
//!
//! let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//! assert_eq!(format_long_date(date), "Mon, January 15, 2024");
//!
//! let birth = NaiveDate::from_ymd_opt(2000, 6, 15).unwrap();
//! assert_eq!(age_on(birth, date), Some(23));
//! ```

mod dates;
mod wrap;

pub use dates::{age_on, format_long_date, format_short_date, parse_calendar_date};
pub use wrap::{wrap_to_width, TextMeasure};

use thiserror::Error;

/// Errors that can occur during text processing
#[derive(Debug, Error)]
pub enum TextError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

/// Result type for text operations
pub type Result<T> = std::result::Result<T, TextError>;
