//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui `Frame`, and never
//! mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::common::render_utils::{CardConfig, InputHint, render_card, row};
use crate::features::form::{self, Field, Focus};
use crate::features::{home, status};
use crate::state::{AppState, Screen};

const CARD_WIDTH: u16 = 52;
const CARD_HEIGHT: u16 = 13;

/// Renders the whole screen.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    match app.screen {
        Screen::Login => render_login(app, frame, area),
        Screen::Home => home::render_home(frame, area, app.signed_in_email()),
    }
}

fn render_login(app: &AppState, frame: &mut Frame, area: Rect) {
    let hints = [
        InputHint::new("Tab", "next"),
        InputHint::new("Enter", "login"),
        InputHint::new("Esc", "quit"),
    ];
    let layout = render_card(
        frame,
        area,
        &CardConfig {
            title: "Sign in",
            border_color: Color::Cyan,
            width: CARD_WIDTH,
            height: CARD_HEIGHT,
            hints: &hints,
        },
    );
    let body = layout.body;

    if let Some(area) = row(body, 0) {
        frame.render_widget(
            Paragraph::new(Line::styled(
                "Sign in with your email and password",
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Center),
            area,
        );
    }

    if let Some(area) = row(body, 2) {
        let valid = app.validation.email_valid();
        let view = form::field_view(&app.form, Field::Email, valid);
        form::render_field(frame, area, &app.form.email, &view);
    }
    if let Some(area) = row(body, 4) {
        let valid = app.validation.password_valid();
        let view = form::field_view(&app.form, Field::Password, valid);
        form::render_field(frame, area, &app.form.password, &view);
    }
    if let Some(area) = row(body, 6) {
        status::render_submit(
            frame,
            area,
            &app.submit,
            app.form.focus == Focus::Submit,
            app.spinner_frame,
        );
    }
    if let Some(area) = row(body, 8) {
        status::render_error_banner(frame, area, &app.error);
    }
}
