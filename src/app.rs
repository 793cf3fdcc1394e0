//! Application state and core logic

use crate::config::SignupConfig;
use crate::state::{AppState, Dialog, Form, PendingCancelAction, SignupForm};
use crate::validation::{self, FieldId, ValidationAbort, ValidationOutcome};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: SignupConfig,
    /// Whether the app should quit
    quit: bool,
    /// Printed once the terminal is restored
    pub exit_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new() -> Self {
        let config = SignupConfig::load().unwrap_or_else(|err| {
            tracing::warn!("failed to load config: {err:#}");
            SignupConfig::default()
        });
        Self::with_config(config)
    }

    pub fn with_config(config: SignupConfig) -> Self {
        Self {
            state: AppState::default(),
            config,
            quit: false,
            exit_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.dialog {
            Dialog::ConfirmCancel(_) => {
                self.handle_confirm_cancel_key(key);
                Ok(())
            }
            Dialog::Alert(_) => {
                self.handle_alert_key(key);
                Ok(())
            }
            Dialog::None => self.handle_form_key(key),
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc => self.open_cancel_dialog(),
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Left => {
                if self.state.form.is_buttons_row_active() {
                    self.state.form.prev_button();
                } else {
                    self.cycle_select(false);
                }
            }
            KeyCode::Right => {
                if self.state.form.is_buttons_row_active() {
                    self.state.form.next_button();
                } else {
                    self.cycle_select(true);
                }
            }
            KeyCode::Enter => {
                if self.state.form.is_buttons_row_active() {
                    if self.state.form.selected_button == SignupForm::CANCEL_BUTTON {
                        self.open_cancel_dialog();
                    } else {
                        self.submit()?;
                    }
                } else {
                    self.state.form.next_field();
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Cycle the active selector; a change on the occupation selector runs
    /// the occupationOther visibility transition.
    fn cycle_select(&mut self, forward: bool) {
        let Some(field) = self.state.form.get_active_field_mut() else {
            return;
        };
        if !field.is_select() {
            return;
        }
        if forward {
            field.select_next();
        } else {
            field.select_prev();
        }
        if field.id == FieldId::Occupation {
            self.state.form.sync_other_visibility();
        }
    }

    fn open_cancel_dialog(&mut self) {
        self.state.dialog = Dialog::ConfirmCancel(PendingCancelAction::default());
    }

    fn handle_confirm_cancel_key(&mut self, key: KeyEvent) {
        let Dialog::ConfirmCancel(ref mut action) = self.state.dialog else {
            return;
        };
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                action.selected_option = !action.selected_option;
            }
            KeyCode::Enter => {
                if action.selected_option {
                    let target = self.config.cancel_target().to_string();
                    tracing::info!("signup cancelled, redirecting to {target}");
                    self.exit_message = Some(format!("No worries. Taking you to {target}"));
                    self.quit = true;
                } else {
                    self.state.dialog = Dialog::None;
                }
            }
            KeyCode::Esc => self.state.dialog = Dialog::None,
            _ => {}
        }
    }

    fn handle_alert_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            self.state.dialog = Dialog::None;
        }
    }

    /// The submit handler: one validation pass against today's date.
    pub fn submit(&mut self) -> Result<()> {
        self.submit_with_date(Local::now().date_naive())
    }

    /// Validation boundary. Every failure is handled here: an accumulated
    /// invalid outcome stays on the form, an abort becomes a blocking alert.
    /// Nothing propagates further.
    pub(crate) fn submit_with_date(&mut self, today: NaiveDate) -> Result<()> {
        let snapshot = self.state.form.snapshot();
        match validation::validate(&snapshot, today) {
            Ok(outcome) if outcome.overall_valid => {
                self.apply_outcome(&outcome);
                tracing::info!("signup accepted");
                let payload = serde_json::to_string_pretty(&snapshot)?;
                self.exit_message = Some(format!("Signed up!\n{payload}"));
                self.state.submission = Some(snapshot);
                self.quit = true;
            }
            Ok(outcome) => {
                let flagged = outcome
                    .field_states
                    .values()
                    .filter(|s| **s == validation::FieldStatus::Invalid)
                    .count();
                tracing::info!("signup rejected, {flagged} field(s) flagged");
                self.apply_outcome(&outcome);
            }
            Err(ValidationAbort { error, outcome }) => {
                tracing::warn!("validation aborted: {error}");
                self.apply_outcome(&outcome);
                self.state.dialog = Dialog::Alert(error.to_string());
            }
        }
        Ok(())
    }

    fn apply_outcome(&mut self, outcome: &ValidationOutcome) {
        self.state.form.apply_outcome(outcome);
        self.state.birthdate_message = outcome.messages.get(&FieldId::Birthdate).cloned();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
