//! Form state management and the signup form

use super::field::{FormField, SelectOption};
use crate::regions;
use crate::validation::{FieldId, FieldStatus, FormSnapshot, ValidationOutcome, OTHER_OCCUPATION};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Visibility of the conditionally-required occupation field.
///
/// Hidden -> Visible when the occupation selector lands on the sentinel;
/// Visible -> Hidden on any other value, clearing the field's content on
/// that transition. Initial state: Hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OtherVisibility {
    #[default]
    Hidden,
    Visible,
}

/// The signup form: nine fields plus a buttons row
#[derive(Debug, Clone)]
pub struct SignupForm {
    pub first_name: FormField,
    pub last_name: FormField,
    pub address1: FormField,
    pub city: FormField,
    pub state: FormField,
    pub zip: FormField,
    pub birthdate: FormField,
    pub occupation: FormField,
    pub occupation_other: FormField,
    pub other_visibility: OtherVisibility,
    pub active_field_index: usize,
    /// Which button is selected when on the buttons row (0=Cancel, 1=Sign Up)
    pub selected_button: usize,
}

impl SignupForm {
    pub const FIRST_NAME: usize = 0;
    pub const LAST_NAME: usize = 1;
    pub const ADDRESS1: usize = 2;
    pub const CITY: usize = 3;
    pub const STATE: usize = 4;
    pub const ZIP: usize = 5;
    pub const BIRTHDATE: usize = 6;
    pub const OCCUPATION: usize = 7;
    pub const OCCUPATION_OTHER: usize = 8;
    pub const BUTTONS_ROW: usize = 9;

    pub const CANCEL_BUTTON: usize = 0;
    pub const SUBMIT_BUTTON: usize = 1;

    pub fn new() -> Self {
        let mut state_options = vec![SelectOption::new("", "Select a state")];
        state_options.extend(
            regions::US_STATES
                .iter()
                .map(|r| SelectOption::new(r.code, r.name)),
        );

        let occupation_options = vec![
            SelectOption::new("", "Select an occupation"),
            SelectOption::new("engineering", "Engineering"),
            SelectOption::new("education", "Education"),
            SelectOption::new("healthcare", "Healthcare"),
            SelectOption::new(OTHER_OCCUPATION, "Other"),
        ];

        Self {
            first_name: FormField::text(FieldId::FirstName),
            last_name: FormField::text(FieldId::LastName),
            address1: FormField::text(FieldId::Address1),
            city: FormField::text(FieldId::City),
            state: FormField::select(FieldId::State, state_options),
            zip: FormField::text(FieldId::Zip),
            birthdate: FormField::text(FieldId::Birthdate),
            occupation: FormField::select(FieldId::Occupation, occupation_options),
            occupation_other: FormField::text(FieldId::OccupationOther),
            other_visibility: OtherVisibility::default(),
            active_field_index: 0,
            selected_button: Self::SUBMIT_BUTTON,
        }
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == Self::BUTTONS_ROW
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % 2;
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        self.next_button();
    }

    /// Run the visibility transition after the occupation selector changed.
    pub fn sync_other_visibility(&mut self) {
        if self.occupation.current_value() == OTHER_OCCUPATION {
            self.other_visibility = OtherVisibility::Visible;
        } else if self.other_visibility == OtherVisibility::Visible {
            // Leaving "other" clears the field on the way out
            self.occupation_other.clear();
            self.occupation_other.status = FieldStatus::Normal;
            self.other_visibility = OtherVisibility::Hidden;
        }
    }

    /// Capture live field values for a validation pass.
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            first_name: self.first_name.current_value().to_string(),
            last_name: self.last_name.current_value().to_string(),
            address1: self.address1.current_value().to_string(),
            city: self.city.current_value().to_string(),
            state: self.state.current_value().to_string(),
            zip: self.zip.current_value().to_string(),
            birthdate: self.birthdate.current_value().to_string(),
            occupation: self.occupation.current_value().to_string(),
            occupation_other: match self.other_visibility {
                OtherVisibility::Visible => {
                    Some(self.occupation_other.current_value().to_string())
                }
                OtherVisibility::Hidden => None,
            },
        }
    }

    /// Write reported field markers back onto the widgets.
    pub fn apply_outcome(&mut self, outcome: &ValidationOutcome) {
        for (&id, &status) in &outcome.field_states {
            if let Some(field) = self.field_mut(id) {
                field.status = status;
            }
        }
    }

    fn field_mut(&mut self, id: FieldId) -> Option<&mut FormField> {
        match id {
            FieldId::FirstName => Some(&mut self.first_name),
            FieldId::LastName => Some(&mut self.last_name),
            FieldId::Address1 => Some(&mut self.address1),
            FieldId::City => Some(&mut self.city),
            FieldId::State => Some(&mut self.state),
            FieldId::Zip => Some(&mut self.zip),
            FieldId::Birthdate => Some(&mut self.birthdate),
            FieldId::Occupation => Some(&mut self.occupation),
            FieldId::OccupationOther => Some(&mut self.occupation_other),
        }
    }
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SignupForm {
    fn field_count(&self) -> usize {
        10 // nine fields plus the buttons row
    }

    fn active_field(&self) -> usize {
        self.active_field_index
    }

    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::BUTTONS_ROW);
    }

    // Navigation skips the occupationOther slot while it is hidden.
    fn next_field(&mut self) {
        let mut next = (self.active_field_index + 1) % self.field_count();
        if next == Self::OCCUPATION_OTHER && self.other_visibility == OtherVisibility::Hidden {
            next = (next + 1) % self.field_count();
        }
        self.set_active_field(next);
    }

    fn prev_field(&mut self) {
        let count = self.field_count();
        let mut prev = self.active_field_index.checked_sub(1).unwrap_or(count - 1);
        if prev == Self::OCCUPATION_OTHER && self.other_visibility == OtherVisibility::Hidden {
            prev = prev.checked_sub(1).unwrap_or(count - 1);
        }
        self.set_active_field(prev);
    }

    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            Self::FIRST_NAME => Some(&mut self.first_name),
            Self::LAST_NAME => Some(&mut self.last_name),
            Self::ADDRESS1 => Some(&mut self.address1),
            Self::CITY => Some(&mut self.city),
            Self::STATE => Some(&mut self.state),
            Self::ZIP => Some(&mut self.zip),
            Self::BIRTHDATE => Some(&mut self.birthdate),
            Self::OCCUPATION => Some(&mut self.occupation),
            Self::OCCUPATION_OTHER => Some(&mut self.occupation_other),
            _ => None, // buttons row
        }
    }

    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            Self::FIRST_NAME => Some(&self.first_name),
            Self::LAST_NAME => Some(&self.last_name),
            Self::ADDRESS1 => Some(&self.address1),
            Self::CITY => Some(&self.city),
            Self::STATE => Some(&self.state),
            Self::ZIP => Some(&self.zip),
            Self::BIRTHDATE => Some(&self.birthdate),
            Self::OCCUPATION => Some(&self.occupation),
            Self::OCCUPATION_OTHER => Some(&self.occupation_other),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_starts_on_first_field() {
            let form = SignupForm::new();
            assert_eq!(form.active_field_index, SignupForm::FIRST_NAME);
            assert_eq!(form.selected_button, SignupForm::SUBMIT_BUTTON);
        }

        #[test]
        fn test_next_field_skips_hidden_other() {
            let mut form = SignupForm::new();
            form.set_active_field(SignupForm::OCCUPATION);
            form.next_field();
            assert_eq!(form.active_field_index, SignupForm::BUTTONS_ROW);
        }

        #[test]
        fn test_next_field_visits_other_when_visible() {
            let mut form = SignupForm::new();
            form.occupation.select_value(OTHER_OCCUPATION);
            form.sync_other_visibility();
            form.set_active_field(SignupForm::OCCUPATION);
            form.next_field();
            assert_eq!(form.active_field_index, SignupForm::OCCUPATION_OTHER);
        }

        #[test]
        fn test_prev_field_skips_hidden_other() {
            let mut form = SignupForm::new();
            form.set_active_field(SignupForm::BUTTONS_ROW);
            form.prev_field();
            assert_eq!(form.active_field_index, SignupForm::OCCUPATION);
        }

        #[test]
        fn test_wraps_from_buttons_row() {
            let mut form = SignupForm::new();
            form.set_active_field(SignupForm::BUTTONS_ROW);
            form.next_field();
            assert_eq!(form.active_field_index, SignupForm::FIRST_NAME);
            form.prev_field();
            assert_eq!(form.active_field_index, SignupForm::BUTTONS_ROW);
        }

        #[test]
        fn test_buttons_row_has_no_field() {
            let mut form = SignupForm::new();
            form.set_active_field(SignupForm::BUTTONS_ROW);
            assert!(form.is_buttons_row_active());
            assert!(form.get_active_field_mut().is_none());
            assert!(form.get_field(SignupForm::BUTTONS_ROW).is_none());
        }

        #[test]
        fn test_button_selection_toggles() {
            let mut form = SignupForm::new();
            form.next_button();
            assert_eq!(form.selected_button, SignupForm::CANCEL_BUTTON);
            form.prev_button();
            assert_eq!(form.selected_button, SignupForm::SUBMIT_BUTTON);
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = SignupForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, SignupForm::BUTTONS_ROW);
        }
    }

    mod selector_setup {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_state_selector_has_placeholder_plus_regions() {
            let form = SignupForm::new();
            assert_eq!(form.state.current_value(), "");
            let crate::state::FieldValue::Select { options, .. } = &form.state.value else {
                panic!("state is a selector");
            };
            assert_eq!(options.len(), regions::US_STATES.len() + 1);
            assert_eq!(options[1].value, "AL");
            assert_eq!(options[1].label, "Alabama");
        }

        #[test]
        fn test_occupation_includes_sentinel() {
            let mut form = SignupForm::new();
            form.occupation.select_value(OTHER_OCCUPATION);
            assert_eq!(form.occupation.current_value(), OTHER_OCCUPATION);
        }
    }

    mod visibility {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_starts_hidden() {
            let form = SignupForm::new();
            assert_eq!(form.other_visibility, OtherVisibility::Hidden);
        }

        #[test]
        fn test_sentinel_reveals() {
            let mut form = SignupForm::new();
            form.occupation.select_value(OTHER_OCCUPATION);
            form.sync_other_visibility();
            assert_eq!(form.other_visibility, OtherVisibility::Visible);
        }

        #[test]
        fn test_leaving_sentinel_hides_and_clears() {
            let mut form = SignupForm::new();
            form.occupation.select_value(OTHER_OCCUPATION);
            form.sync_other_visibility();
            form.occupation_other.set_text("Lighthouse keeper");

            form.occupation.select_value("education");
            form.sync_other_visibility();
            assert_eq!(form.other_visibility, OtherVisibility::Hidden);
            assert_eq!(form.occupation_other.current_value(), "");
        }

        #[test]
        fn test_non_sentinel_change_while_hidden_is_noop() {
            let mut form = SignupForm::new();
            form.occupation.select_value("engineering");
            form.sync_other_visibility();
            assert_eq!(form.other_visibility, OtherVisibility::Hidden);
        }
    }

    mod snapshot {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_hidden_other_is_absent() {
            let mut form = SignupForm::new();
            form.first_name.set_text("Grace");
            let snapshot = form.snapshot();
            assert_eq!(snapshot.first_name, "Grace");
            assert_eq!(snapshot.occupation_other, None);
        }

        #[test]
        fn test_visible_other_is_captured() {
            let mut form = SignupForm::new();
            form.occupation.select_value(OTHER_OCCUPATION);
            form.sync_other_visibility();
            form.occupation_other.set_text("Beekeeper");
            let snapshot = form.snapshot();
            assert_eq!(snapshot.occupation, OTHER_OCCUPATION);
            assert_eq!(snapshot.occupation_other.as_deref(), Some("Beekeeper"));
        }

        #[test]
        fn test_selector_contributes_value_not_label() {
            let mut form = SignupForm::new();
            form.state.select_value("VA");
            assert_eq!(form.snapshot().state, "VA");
        }
    }

    mod outcomes {
        use super::*;
        use chrono::NaiveDate;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_apply_outcome_marks_fields() {
            let mut form = SignupForm::new();
            form.zip.set_text("90210");
            form.birthdate.set_text("1998-12-09");
            let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
            let outcome = crate::validation::validate(&form.snapshot(), today).unwrap();
            assert!(!outcome.overall_valid);

            form.apply_outcome(&outcome);
            assert_eq!(form.first_name.status, FieldStatus::Invalid);
            assert_eq!(form.zip.status, FieldStatus::Normal);
        }

        #[test]
        fn test_reapplying_clears_old_markers() {
            let mut form = SignupForm::new();
            form.first_name.status = FieldStatus::Invalid;
            form.first_name.set_text("Grace");
            form.zip.set_text("bad zip");
            let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
            let abort = crate::validation::validate(&form.snapshot(), today).unwrap_err();

            form.apply_outcome(&abort.outcome);
            assert_eq!(form.first_name.status, FieldStatus::Normal);
            assert_eq!(form.zip.status, FieldStatus::Invalid);
        }
    }
}
