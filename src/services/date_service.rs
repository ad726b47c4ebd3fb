use crate::error::AppError;
use chrono::{DateTime, Local, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

/// Format used for every date stored on an exercise entry,
/// e.g. "Mon Jan 01 2024". No time-of-day component.
pub const DISPLAY_FORMAT: &str = "%a %b %d %Y";

static ISO_DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));

/// Validates arbitrary text as a calendar date and returns the parsed day.
///
/// Tries general parsing first (ISO, the stored display format, US slashed
/// dates, RFC 3339). Only when all of those fail does the strict
/// `YYYY-MM-DD` shape decide the error: a string that does not even look
/// like an ISO date is `InvalidDateFormat`, while a well-shaped string
/// naming an impossible day (month 13, Feb 30) is `InvalidDate`.
pub fn parse_date(input: &str) -> Result<NaiveDate, AppError> {
    for format in ["%Y-%m-%d", DISPLAY_FORMAT, "%m/%d/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(input, format) {
            return Ok(date);
        }
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(input) {
        return Ok(datetime.date_naive());
    }

    if ISO_DATE_SHAPE.is_match(input) {
        Err(AppError::InvalidDate)
    } else {
        Err(AppError::InvalidDateFormat)
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Re-parses a stored display string for filtering comparisons. Stored
/// dates are written by `format_date`, so failure here means the document
/// was edited out of band; the caller decides what to do with `None`.
pub fn parse_stored_date(stored: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(stored, DISPLAY_FORMAT).ok()
}
