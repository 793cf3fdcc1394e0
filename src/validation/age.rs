//! Age computation and birthdate parsing

use super::error::ValidationError;
use chrono::{Datelike, NaiveDate};

/// Minimum age to sign up.
pub const MIN_SIGNUP_AGE: i32 = 13;

/// Integer age in full years as of `today`.
///
/// `today` is an explicit input so the computation is reproducible; the
/// ambient clock is read once at the submit boundary, never in here.
pub fn compute_age(birthdate: NaiveDate, today: NaiveDate) -> i32 {
    let mut years = today.year() - birthdate.year();
    // Birthday not yet reached this year
    if (today.month(), today.day()) < (birthdate.month(), birthdate.day()) {
        years -= 1;
    }
    years
}

/// Parse a birthdate as entered in the form.
///
/// Accepts mm/dd/yyyy (the format the error message asks for) or ISO
/// yyyy-mm-dd. Impossible calendar dates fail like any other garbage.
pub fn parse_birthdate(raw: &str) -> Result<NaiveDate, ValidationError> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%m/%d/%Y")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .map_err(|_| ValidationError::MalformedDate)
}
