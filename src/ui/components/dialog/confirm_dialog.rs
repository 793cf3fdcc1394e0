//! Confirmation dialog for leaving without subscribing

use super::base::{render_dialog, DialogConfig};
use crate::state::PendingCancelAction;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

const CONFIRM_MESSAGE: &str =
    "Are you sure you really want to leave the page and not subscribe?";

/// Render the leave-confirmation dialog overlay
pub fn render_confirm_dialog(frame: &mut Frame, action: &PendingCancelAction) {
    // false = Stay, true = Leave
    let labels = [(false, "Stay", Color::White), (true, "Leave", Color::Red)];

    let mut body = vec![Line::from("")];
    for (option, label, color) in labels {
        let is_selected = action.selected_option == option;
        let prefix = if is_selected { "▸ " } else { "  " };
        let style = if is_selected {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        body.push(Line::from(Span::styled(format!("{prefix}{label}"), style)));
    }

    let hint = vec![
        Span::styled("↑↓", Style::default().fg(Color::Cyan)),
        Span::styled(" select  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" confirm  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(" stay", Style::default().fg(Color::DarkGray)),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Leave signup?",
            title_color: Color::Yellow,
            border_color: Color::Yellow,
            message: CONFIRM_MESSAGE,
            body,
            hint: Some(hint),
            max_width: 50,
        },
    );
}
