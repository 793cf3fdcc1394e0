//! UI module for rendering the TUI

mod components;
mod forms;

use crate::app::App;
use crate::state::Dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    forms::draw_signup(frame, frame.area(), app);

    // Dialogs overlay the form
    match &app.state.dialog {
        Dialog::None => {}
        Dialog::ConfirmCancel(action) => components::render_confirm_dialog(frame, action),
        Dialog::Alert(message) => components::render_error_dialog(frame, message),
    }
}
