//! Shared rendering helpers for the login and home cards.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// Centers a `width` x `height` card inside `area`, shrinking it to fit.
pub fn centered_card(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Card configuration.
pub struct CardConfig<'a> {
    pub title: &'a str,
    pub border_color: Color,
    pub width: u16,
    pub height: u16,
    pub hints: &'a [InputHint<'a>],
}

/// Layout rectangles for a card.
pub struct CardLayout {
    pub body: Rect,
    pub footer: Rect,
}

/// Renders a bordered card (clears background, draws border, title and
/// hints) and returns the rectangles to draw into.
pub fn render_card(frame: &mut Frame, area: Rect, config: &CardConfig<'_>) -> CardLayout {
    let card = centered_card(area, config.width, config.height);
    frame.render_widget(Clear, card);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(config.border_color))
        .title(format!(" {} ", config.title))
        .title_style(
            Style::default()
                .fg(config.border_color)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(block, card);

    let inner = Rect::new(
        card.x + 2,
        card.y + 1,
        card.width.saturating_sub(4),
        card.height.saturating_sub(2),
    );

    let footer_height = u16::from(!config.hints.is_empty());
    let body_height = inner.height.saturating_sub(footer_height);
    let footer = Rect::new(inner.x, inner.y + body_height, inner.width, footer_height);
    let body = Rect::new(inner.x, inner.y, inner.width, body_height);

    if !config.hints.is_empty() {
        render_hints(frame, footer, config.hints, config.border_color);
    }

    CardLayout { body, footer }
}

/// Helper struct for keyboard hints.
pub struct InputHint<'a> {
    pub key: &'a str,
    pub action: &'a str,
}

impl<'a> InputHint<'a> {
    pub fn new(key: &'a str, action: &'a str) -> Self {
        Self { key, action }
    }
}

/// Renders a centered line of keyboard hints.
pub fn render_hints(frame: &mut Frame, area: Rect, hints: &[InputHint], highlight_color: Color) {
    if area.height == 0 {
        return;
    }
    let mut spans = Vec::new();
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(highlight_color)));
        spans.push(Span::styled(
            format!(" {}", hint.action),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let para = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(para, Rect::new(area.x, area.y, area.width, 1));
}

/// Returns the one-row rectangle at `y_offset` inside `area`, if it fits.
pub fn row(area: Rect, y_offset: u16) -> Option<Rect> {
    (y_offset < area.height).then(|| Rect::new(area.x, area.y + y_offset, area.width, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_card_fits_inside() {
        let area = Rect::new(0, 0, 80, 24);
        let card = centered_card(area, 40, 10);
        assert_eq!(card, Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_card_shrinks_on_small_terminal() {
        let area = Rect::new(0, 0, 20, 5);
        let card = centered_card(area, 40, 10);
        assert_eq!(card.width, 18);
        assert_eq!(card.height, 5);
        assert_eq!(card.x, 1);
    }

    #[test]
    fn test_row_outside_area_is_none() {
        let area = Rect::new(2, 3, 10, 2);
        assert_eq!(row(area, 1), Some(Rect::new(2, 4, 10, 1)));
        assert_eq!(row(area, 2), None);
    }
}
