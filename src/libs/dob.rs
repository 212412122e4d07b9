//! Date of birth parsing and display formatting.
//!
//! Dates of birth cross two representations: the display form `DD/MM/YYYY`
//! used at the presentation boundary, and the stored form `YYYY-MM-DD` kept
//! in the database so dates sort naturally. For every valid date the two
//! conversions are exact inverses of each other.
//!
//! ## Validation Rules
//!
//! Parsing display input rejects:
//! - strings that are not a real calendar date in `DD/MM/YYYY` form
//! - dates after today
//! - years before 1900
//!
//! Formatting stored values never fails: a value that does not parse as
//! `YYYY-MM-DD` is returned as raw text so one corrupt row cannot break a
//! whole register view.

use crate::libs::validation::ValidationError;
use chrono::{Datelike, Local, NaiveDate};

/// Display form used at the presentation boundary.
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Stored form kept in the database, sortable as text.
pub const STORED_FORMAT: &str = "%Y-%m-%d";

/// Earliest accepted year of birth.
const MIN_YEAR: i32 = 1900;

/// Parses a `DD/MM/YYYY` string into a date suitable for storage.
///
/// Returns a single combined `ValidationError` carrying the reason when the
/// text is unparseable, in the future, or before 1900.
pub fn parse(text: &str) -> Result<NaiveDate, ValidationError> {
    let date = NaiveDate::parse_from_str(text, DISPLAY_FORMAT).map_err(|_| ValidationError::InvalidDob("not a valid calendar date".to_string()))?;
    if date > Local::now().date_naive() {
        return Err(ValidationError::InvalidDob("date cannot be in the future".to_string()));
    }
    if date.year() < MIN_YEAR {
        return Err(ValidationError::InvalidDob(format!("year must be {} or later", MIN_YEAR)));
    }
    Ok(date)
}

/// Formats a stored `YYYY-MM-DD` value for display as `DD/MM/YYYY`.
///
/// Unparseable stored values are passed through as raw text rather than
/// failing, so corrupt data stays visible.
pub fn format(stored: &str) -> String {
    match NaiveDate::parse_from_str(stored, STORED_FORMAT) {
        Ok(date) => date.format(DISPLAY_FORMAT).to_string(),
        Err(_) => stored.to_string(),
    }
}
