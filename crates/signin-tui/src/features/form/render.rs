//! Form view: labelled email and password inputs.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::state::{Field, FormState, TextField};
use crate::common::{mask, visible_window};

const LABEL_WIDTH: u16 = 10;

/// Per-field render options.
pub struct FieldView<'a> {
    pub label: &'a str,
    pub placeholder: &'a str,
    pub focused: bool,
    pub secret: bool,
    /// Non-empty and failing validation.
    pub invalid: bool,
}

/// Renders one labelled input row: `Email     kumar@comb█`.
pub fn render_field(frame: &mut Frame, area: Rect, field: &TextField, view: &FieldView<'_>) {
    let label_style = if view.focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let text_color = if view.invalid {
        Color::LightRed
    } else {
        Color::White
    };

    let mut spans = vec![Span::styled(
        format!("{:<width$}", view.label, width = LABEL_WIDTH as usize),
        label_style,
    )];

    let input_width = area.width.saturating_sub(LABEL_WIDTH) as usize;
    if field.is_empty() {
        if view.focused {
            spans.push(Span::styled("█", Style::default().fg(Color::Yellow)));
        }
        spans.push(Span::styled(
            view.placeholder,
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        let shown = if view.secret {
            mask(field.value())
        } else {
            field.value().to_string()
        };
        let chars: Vec<char> = shown.chars().collect();
        let cursor = field.cursor();
        let (start, end) = visible_window(&chars, cursor, input_width);
        let text_style = Style::default().fg(text_color);

        let before: String = chars[start..cursor.min(end)].iter().collect();
        spans.push(Span::styled(before, text_style));

        if view.focused {
            if cursor < end {
                spans.push(Span::styled(
                    chars[cursor].to_string(),
                    text_style.add_modifier(Modifier::REVERSED),
                ));
                let after: String = chars[cursor + 1..end].iter().collect();
                spans.push(Span::styled(after, text_style));
            } else {
                spans.push(Span::styled("█", Style::default().fg(Color::Yellow)));
            }
        } else if cursor < end {
            let after: String = chars[cursor..end].iter().collect();
            spans.push(Span::styled(after, text_style));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Returns the render options for `field` given form focus and validity.
pub fn field_view(form: &FormState, field: Field, valid: bool) -> FieldView<'static> {
    let focused = form.focus.field() == Some(field);
    let invalid = !form.field(field).is_empty() && !valid;
    match field {
        Field::Email => FieldView {
            label: "Email",
            placeholder: "you@example.com",
            focused,
            secret: false,
            invalid,
        },
        Field::Password => FieldView {
            label: "Password",
            placeholder: "at least 5 characters",
            focused,
            secret: true,
            invalid,
        },
    }
}
