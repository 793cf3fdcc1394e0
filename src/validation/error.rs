//! Fatal validation errors

use super::form::ValidationOutcome;
use thiserror::Error;

/// Errors that stop a validation pass outright.
///
/// Empty required fields and an under-age birthdate are recorded per field
/// and accumulated; these two abort the pass where they occur and are
/// pattern-matched at the UI boundary, which shows a blocking dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Postal code is not exactly five decimal digits.
    #[error("Please enter a valid 5 digit zip code")]
    MalformedZip,
    /// Birthdate does not parse to a real calendar date.
    #[error("Please enter a valid birthdate. Use the mm/dd/yyyy format.")]
    MalformedDate,
}

/// A validation pass that stopped early.
///
/// Carries the outcome built up to the abort point so field markers recorded
/// before the stop still reach the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationAbort {
    pub error: ValidationError,
    pub outcome: ValidationOutcome,
}
