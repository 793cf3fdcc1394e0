//! Application state definitions

use super::forms::SignupForm;
use crate::validation::FormSnapshot;

/// Pending confirmation for leaving without signing up.
#[derive(Debug, Clone, Default)]
pub struct PendingCancelAction {
    /// true = Leave selected, false = Stay
    pub selected_option: bool,
}

/// Modal overlay currently shown, if any
#[derive(Debug, Clone, Default)]
pub enum Dialog {
    #[default]
    None,
    /// "Are you sure you really want to leave?" with Stay/Leave options
    ConfirmCancel(PendingCancelAction),
    /// Blocking message for a validation abort, dismissed with Enter/Esc
    Alert(String),
}

/// Top-level application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub form: SignupForm,
    pub dialog: Dialog,
    /// Message area rendered beneath the birthdate row
    pub birthdate_message: Option<String>,
    /// Recorded on a valid submit, just before quitting
    pub submission: Option<FormSnapshot>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            form: SignupForm::new(),
            dialog: Dialog::None,
            birthdate_message: None,
            submission: None,
        }
    }
}

impl AppState {
    #[allow(dead_code)]
    pub fn dialog_open(&self) -> bool {
        !matches!(self.dialog, Dialog::None)
    }
}
