//! Signup form screen

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{Form, OtherVisibility, SignupForm};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const FIELD_HEIGHT: u16 = 3;

/// Draw the signup form: field rows, the message area, the buttons row, and
/// a key-hint bar.
pub fn draw_signup(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let rows = Layout::vertical([
        Constraint::Length(1),            // title
        Constraint::Length(FIELD_HEIGHT), // first / last name
        Constraint::Length(FIELD_HEIGHT), // address
        Constraint::Length(FIELD_HEIGHT), // city / state
        Constraint::Length(FIELD_HEIGHT), // zip / birthdate
        Constraint::Length(1),            // birthdate message area
        Constraint::Length(FIELD_HEIGHT), // occupation / other
        Constraint::Length(BUTTON_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(1), // key hints
    ])
    .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            " Sign up for our newsletter ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))),
        rows[0],
    );

    let active = form.active_field();

    draw_pair(
        frame,
        rows[1],
        form,
        (SignupForm::FIRST_NAME, SignupForm::LAST_NAME),
        active,
    );
    if let Some(field) = form.get_field(SignupForm::ADDRESS1) {
        draw_field(frame, rows[2], field, active == SignupForm::ADDRESS1);
    }
    draw_pair(
        frame,
        rows[3],
        form,
        (SignupForm::CITY, SignupForm::STATE),
        active,
    );
    draw_pair(
        frame,
        rows[4],
        form,
        (SignupForm::ZIP, SignupForm::BIRTHDATE),
        active,
    );

    // Message area: under-age notice lives here until a pass clears it
    if let Some(message) = &app.state.birthdate_message {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {message}"),
                Style::default().fg(Color::Red),
            )),
            rows[5],
        );
    }

    let occ_cols = split_pair(rows[6]);
    if let Some(field) = form.get_field(SignupForm::OCCUPATION) {
        draw_field(frame, occ_cols[0], field, active == SignupForm::OCCUPATION);
    }
    // Hidden occupationOther leaves its slot blank
    if form.other_visibility == OtherVisibility::Visible {
        if let Some(field) = form.get_field(SignupForm::OCCUPATION_OTHER) {
            draw_field(
                frame,
                occ_cols[1],
                field,
                active == SignupForm::OCCUPATION_OTHER,
            );
        }
    }

    draw_buttons(frame, rows[7], form);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            " Tab next · Shift+Tab prev · ◂ ▸ choose · Enter select · Esc leave",
            Style::default().fg(Color::DarkGray),
        ))),
        rows[9],
    );
}

fn split_pair(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area)
}

fn draw_pair(frame: &mut Frame, area: Rect, form: &SignupForm, pair: (usize, usize), active: usize) {
    let cols = split_pair(area);
    if let Some(field) = form.get_field(pair.0) {
        draw_field(frame, cols[0], field, active == pair.0);
    }
    if let Some(field) = form.get_field(pair.1) {
        draw_field(frame, cols[1], field, active == pair.1);
    }
}

fn draw_buttons(frame: &mut Frame, area: Rect, form: &SignupForm) {
    let cols = Layout::horizontal([
        Constraint::Length(14),
        Constraint::Length(14),
        Constraint::Min(0),
    ])
    .split(area);

    let on_buttons = form.is_buttons_row_active();
    render_button(
        frame,
        cols[0],
        "No Thanks",
        on_buttons && form.selected_button == SignupForm::CANCEL_BUTTON,
        Color::Red,
    );
    render_button(
        frame,
        cols[1],
        "Sign Up",
        on_buttons && form.selected_button == SignupForm::SUBMIT_BUTTON,
        Color::Green,
    );
}
