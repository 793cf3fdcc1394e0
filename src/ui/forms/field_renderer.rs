//! Field rendering utilities for the form

use crate::state::FormField;
use crate::validation::FieldStatus;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a form field using FormField from the domain layer.
///
/// The border is the visual validity contract: red when the field was
/// reported invalid, cyan when active, dark gray otherwise.
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let border_style = if field.status == FieldStatus::Invalid {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display_value = field.display_value();

    let content = if field.is_select() {
        let arrows = if is_active { ("◂ ", " ▸") } else { ("  ", "  ") };
        Line::from(vec![
            Span::styled(arrows.0, Style::default().fg(Color::Cyan)),
            Span::styled(display_value, text_style),
            Span::styled(arrows.1, Style::default().fg(Color::Cyan)),
        ])
    } else {
        let display_str = if display_value.is_empty() && !is_active {
            "(empty)".to_string()
        } else {
            display_value
        };
        let cursor = if is_active { "▌" } else { "" };
        Line::from(vec![
            Span::styled(display_str, text_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(content).block(block), area);
}
