//! Form reducer.
//!
//! Turns key presses into field edits and focus moves. Every edit that
//! changes a value emits `UiEffect::UpdateField`; the view model answers with
//! a validation notification that the status slice folds back into state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{Field, Focus, FormState};
use crate::effects::UiEffect;

/// Handles a key on the login card.
///
/// `submit_enabled` is the current state of the submit control; Enter only
/// submits while it is enabled.
pub fn handle_key(form: &mut FormState, key: KeyEvent, submit_enabled: bool) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            form.focus = form.focus.next();
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus = form.focus.prev();
            vec![]
        }
        KeyCode::Enter => match form.focus {
            Focus::Email => {
                form.focus = Focus::Password;
                vec![]
            }
            Focus::Password | Focus::Submit => submit_if_enabled(submit_enabled),
        },
        KeyCode::Char(' ') if form.focus == Focus::Submit => submit_if_enabled(submit_enabled),
        _ => {
            let Some(field) = form.focus.field() else {
                return vec![];
            };
            let text = form.field_mut(field);
            let changed = match key.code {
                KeyCode::Char('u') if ctrl => text.delete_to_start(),
                KeyCode::Char(c) if !ctrl => text.insert_char(c),
                KeyCode::Backspace => text.delete_prev_char(),
                KeyCode::Delete => text.delete_next_char(),
                KeyCode::Left => {
                    text.move_left();
                    false
                }
                KeyCode::Right => {
                    text.move_right();
                    false
                }
                KeyCode::Home => {
                    text.move_home();
                    false
                }
                KeyCode::End => {
                    text.move_end();
                    false
                }
                _ => false,
            };
            field_effects(form, field, changed)
        }
    }
}

/// Handles bracketed paste into the focused field.
pub fn handle_paste(form: &mut FormState, text: &str) -> Vec<UiEffect> {
    let Some(field) = form.focus.field() else {
        return vec![];
    };
    let changed = form.field_mut(field).insert_str(text);
    field_effects(form, field, changed)
}

fn field_effects(form: &FormState, field: Field, changed: bool) -> Vec<UiEffect> {
    if changed {
        vec![UiEffect::UpdateField {
            field,
            value: form.field(field).value().to_string(),
        }]
    } else {
        vec![]
    }
}

fn submit_if_enabled(submit_enabled: bool) -> Vec<UiEffect> {
    if submit_enabled {
        vec![UiEffect::SubmitLogin]
    } else {
        vec![]
    }
}
