//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use signin_core::LoginStatus;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::{form, status};
use crate::state::{AppState, Screen};

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
            app.error.on_tick();
            vec![]
        }
        UiEvent::Terminal(event) => handle_terminal_event(app, event),
        UiEvent::ValidationChanged(result) => {
            app.validation = result;
            status::apply_validation(&mut app.submit, &result);
            vec![]
        }
        UiEvent::StatusChanged(new_status) => {
            app.status = new_status;
            if new_status == LoginStatus::Succeeded {
                app.screen = Screen::Home;
            }
            status::apply_status(&mut app.submit, &mut app.error, &app.validation, new_status)
        }
        UiEvent::ErrorAutoHide { banner } => {
            status::handle_auto_hide(&mut app.error, banner);
            vec![]
        }
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Paste(text) if app.screen == Screen::Login => form::handle_paste(&mut app.form, &text),
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![UiEffect::Quit];
    }

    match app.screen {
        Screen::Home => {
            if key.code == KeyCode::Esc {
                app.screen = Screen::Login;
            }
            vec![]
        }
        Screen::Login => {
            if key.code == KeyCode::Esc {
                return vec![UiEffect::Quit];
            }
            form::handle_key(&mut app.form, key, app.submit.can_submit())
        }
    }
}
