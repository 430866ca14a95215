//! Submit control and error banner views.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::state::{ERROR_MESSAGE, ErrorBanner, SubmitButton};

/// Spinner frames shown next to the label while loading.
const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub fn render_submit(
    frame: &mut Frame,
    area: Rect,
    button: &SubmitButton,
    focused: bool,
    spinner_frame: usize,
) {
    let style = if button.can_submit() {
        let base = Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        if focused {
            base.bg(Color::Yellow)
        } else {
            base
        }
    } else {
        Style::default().fg(Color::DarkGray).bg(Color::Black)
    };

    let label = if button.loading {
        let spinner = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
        format!(" {spinner} {} ", button.label())
    } else {
        format!("  {}  ", button.label())
    };

    let mut spans = vec![Span::styled(label, style)];
    if focused && !button.can_submit() && !button.loading {
        spans.push(Span::styled(
            "  fill in both fields",
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

pub fn render_error_banner(frame: &mut Frame, area: Rect, banner: &ErrorBanner) {
    if !banner.should_render() {
        return;
    }
    let style = Style::default().fg(fade_color(banner.opacity()));
    let style = if banner.is_visible() {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(ERROR_MESSAGE, style))).alignment(Alignment::Center),
        area,
    );
}

/// Blends the banner red toward the dark background.
fn fade_color(opacity: f32) -> Color {
    let opacity = opacity.clamp(0.0, 1.0);
    let channel = |full: u8, bg: u8| -> u8 {
        (f32::from(bg) + (f32::from(full) - f32::from(bg)) * opacity).round() as u8
    };
    Color::Rgb(channel(235, 30), channel(80, 30), channel(80, 30))
}
