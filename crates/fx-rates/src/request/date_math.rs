//! Calendar arithmetic on `YYYY-MM-DD` labels.

use chrono::{Duration, NaiveDate, Utc};

use crate::errors::{FxRatesError, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(date: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|e| FxRatesError::validation(format!("Invalid calendar date {:?}: {}", date, e)))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// The date `days` calendar days before `date`.
///
/// Month, year and leap-day boundaries are handled by the calendar, not
/// by the label.
pub fn subtract_days(date: &str, days: u32) -> Result<String> {
    let parsed = parse_date(date)?;
    parsed
        .checked_sub_signed(Duration::days(i64::from(days)))
        .map(format_date)
        .ok_or_else(|| FxRatesError::validation(format!("Date out of range: {} - {} days", date, days)))
}

/// Today's date in UTC.
pub fn today_utc() -> String {
    format_date(Utc::now().date_naive())
}
