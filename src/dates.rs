//! Calendar helpers
//!
//! Dates are plain `NaiveDate`s: no time of day and no time zone. "Today" is
//! always passed in by the caller so every computation stays deterministic.

use chrono::{Datelike, NaiveDate};

use crate::error::PaycheckError;

/// Format used by every date field at the input boundary
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Day-of-month component of a date (1..=31)
pub fn calendar_day_of(date: NaiveDate) -> u32 {
    date.day()
}

/// Whole days from `today` until `date`; negative once the date has passed
///
/// With day-granular dates the ceiling of the fractional day difference is
/// exactly the calendar-day difference.
pub fn days_until(date: NaiveDate, today: NaiveDate) -> i64 {
    date.signed_duration_since(today).num_days()
}

/// Strict chronological ordering: `date` falls before `boundary`
pub fn is_before(date: NaiveDate, boundary: NaiveDate) -> bool {
    date < boundary
}

/// Parse a `YYYY-MM-DD` form value
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, PaycheckError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(PaycheckError::invalid_field(field, "date is required"));
    }
    NaiveDate::parse_from_str(value, INPUT_DATE_FORMAT).map_err(|_| {
        PaycheckError::invalid_field(field, format!("'{}' is not a YYYY-MM-DD date", value))
    })
}
