//! Inbox channel types.
//!
//! View-model subscriptions and queue callbacks run inside the runtime's own
//! call stack, so they never touch `AppState` directly: they post a
//! `UiEvent` here and the session drains it after the current step.

use tokio::sync::mpsc;

use crate::events::UiEvent;

pub type UiEventSender = mpsc::UnboundedSender<UiEvent>;
pub type UiEventReceiver = mpsc::UnboundedReceiver<UiEvent>;

pub fn channel() -> (UiEventSender, UiEventReceiver) {
    mpsc::unbounded_channel()
}
