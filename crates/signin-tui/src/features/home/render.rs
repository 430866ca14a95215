//! Home screen shown after a successful login.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::render_utils::{CardConfig, InputHint, render_card, row};
use crate::common::truncate_with_ellipsis;

const CARD_WIDTH: u16 = 48;
const CARD_HEIGHT: u16 = 8;

pub fn render_home(frame: &mut Frame, area: Rect, email: &str) {
    let hints = [InputHint::new("Esc", "back"), InputHint::new("Ctrl+C", "quit")];
    let layout = render_card(
        frame,
        area,
        &CardConfig {
            title: "Home",
            border_color: Color::Green,
            width: CARD_WIDTH,
            height: CARD_HEIGHT,
            hints: &hints,
        },
    );

    if let Some(area) = row(layout.body, 1) {
        let line = Line::from(Span::styled(
            "Signed in",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
    }

    if let Some(area) = row(layout.body, 3) {
        let max = usize::from(area.width).saturating_sub("Welcome, ".len());
        let line = Line::from(vec![
            Span::raw("Welcome, "),
            Span::styled(
                truncate_with_ellipsis(email, max),
                Style::default().fg(Color::Cyan),
            ),
        ]);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
    }
}
