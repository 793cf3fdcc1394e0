//! Whole-form validation pass

use super::age::{compute_age, parse_birthdate, MIN_SIGNUP_AGE};
use super::error::{ValidationAbort, ValidationError};
use super::field::{validate_required, FieldStatus};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;

/// Selector value that makes the free-text occupation field required.
pub const OTHER_OCCUPATION: &str = "other";

/// Message shown in the message area when the age rule fails.
pub const UNDER_AGE_MESSAGE: &str = "You must be 13 or older to sign up.";

static ZIP_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{5}$").expect("zip pattern"));

/// Identifies one form field in outcomes and messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FieldId {
    FirstName,
    LastName,
    Address1,
    City,
    State,
    Zip,
    Birthdate,
    Occupation,
    OccupationOther,
}

impl FieldId {
    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Address1 => "Address",
            Self::City => "City",
            Self::State => "State",
            Self::Zip => "Zip",
            Self::Birthdate => "Birthdate",
            Self::Occupation => "Occupation",
            Self::OccupationOther => "Other Occupation",
        }
    }
}

/// Live field values captured at submit time.
///
/// `occupation_other` is `None` while the field is hidden; the controller
/// clears the value on the hide transition, so a hidden field never leaks a
/// stale value into a pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    pub first_name: String,
    pub last_name: String,
    pub address1: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub birthdate: String,
    pub occupation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupation_other: Option<String>,
}

impl FormSnapshot {
    /// The unconditionally required fields, in checking order.
    fn required(&self) -> [(FieldId, &str); 7] {
        [
            (FieldId::FirstName, &self.first_name),
            (FieldId::LastName, &self.last_name),
            (FieldId::Address1, &self.address1),
            (FieldId::City, &self.city),
            (FieldId::State, &self.state),
            (FieldId::Zip, &self.zip),
            (FieldId::Birthdate, &self.birthdate),
        ]
    }
}

/// Result of one validation pass; created fresh per submit attempt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationOutcome {
    pub overall_valid: bool,
    pub field_states: BTreeMap<FieldId, FieldStatus>,
    pub messages: BTreeMap<FieldId, String>,
}

impl ValidationOutcome {
    #[allow(dead_code)]
    pub fn status(&self, id: FieldId) -> FieldStatus {
        self.field_states.get(&id).copied().unwrap_or_default()
    }
}

/// Validate a whole form.
///
/// Required-field checks and the age rule accumulate so every failure is
/// reported in one pass. The zip format and an unparseable birthdate instead
/// abort the pass where they occur; the abort carries the partial outcome so
/// markers recorded before the stop are still applied. The asymmetry between
/// the zip rule and the accumulated checks is deliberate and matches the
/// observable behavior this form has always had: a malformed zip stops the
/// pass before the age check is ever attempted.
pub fn validate(
    snapshot: &FormSnapshot,
    today: NaiveDate,
) -> Result<ValidationOutcome, ValidationAbort> {
    let mut outcome = ValidationOutcome {
        overall_valid: true,
        ..Default::default()
    };

    for (id, value) in snapshot.required() {
        let check = validate_required(value);
        outcome.field_states.insert(id, check.status);
        outcome.overall_valid &= check.valid;
    }

    // The free-text occupation field is required only behind the sentinel.
    if snapshot.occupation == OTHER_OCCUPATION {
        let value = snapshot.occupation_other.as_deref().unwrap_or("");
        let check = validate_required(value);
        outcome
            .field_states
            .insert(FieldId::OccupationOther, check.status);
        outcome.overall_valid &= check.valid;
    }

    // Hard stop: a malformed zip fails the pass immediately. Matched against
    // the untrimmed value, exactly as entered.
    if !ZIP_PATTERN.is_match(&snapshot.zip) {
        outcome.field_states.insert(FieldId::Zip, FieldStatus::Invalid);
        outcome.overall_valid = false;
        return Err(ValidationAbort {
            error: ValidationError::MalformedZip,
            outcome,
        });
    }

    let birthdate = match parse_birthdate(&snapshot.birthdate) {
        Ok(date) => date,
        Err(error) => {
            outcome.overall_valid = false;
            return Err(ValidationAbort { error, outcome });
        }
    };

    if compute_age(birthdate, today) < MIN_SIGNUP_AGE {
        outcome
            .messages
            .insert(FieldId::Birthdate, UNDER_AGE_MESSAGE.to_string());
        outcome.overall_valid = false;
    }

    Ok(outcome)
}
