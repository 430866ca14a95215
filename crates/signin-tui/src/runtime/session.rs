//! Terminal-free half of the runtime.
//!
//! A `Session` wires the reducer to a `LoginViewModel` and its `MainQueue`:
//! - effects from `update` become view-model calls and queue entries
//! - view-model notifications come back through the inbox as `UiEvent`s
//!
//! `TuiRuntime` feeds it terminal events and wall-clock time; tests feed it
//! synthetic key presses and a virtual clock.

use std::time::Duration;

use signin_core::{LoginConfig, LoginViewModel, MainQueue, Subscription};

use super::inbox::{self, UiEventReceiver, UiEventSender};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::form::Field;
use crate::state::AppState;
use crate::update;

pub struct Session {
    pub state: AppState,
    view_model: LoginViewModel,
    queue: MainQueue,
    config: LoginConfig,
    inbox_tx: UiEventSender,
    inbox_rx: UiEventReceiver,
    should_quit: bool,
    _subscriptions: Vec<Subscription>,
}

impl Session {
    pub fn new(config: LoginConfig) -> Self {
        let queue = MainQueue::new();
        let view_model = LoginViewModel::with_config(queue.clone(), config);
        let (inbox_tx, inbox_rx) = inbox::channel();

        let validation_tx = inbox_tx.clone();
        let status_tx = inbox_tx.clone();
        let subscriptions = vec![
            view_model.on_validation_changed(move |result| {
                let _ = validation_tx.send(UiEvent::ValidationChanged(*result));
            }),
            view_model.on_status_changed(move |status| {
                let _ = status_tx.send(UiEvent::StatusChanged(status));
            }),
        ];

        Self {
            state: AppState::new(view_model.validation()),
            view_model,
            queue,
            config,
            inbox_tx,
            inbox_rx,
            should_quit: false,
            _subscriptions: subscriptions,
        }
    }

    /// Runs `event` through the reducer, executes its effects, then drains
    /// whatever the view model published in response.
    pub fn dispatch(&mut self, event: UiEvent) {
        self.process(event);
        self.drain_inbox();
    }

    /// Processes every queued inbox event, including ones posted while
    /// draining. Returns true if anything was processed.
    pub fn drain_inbox(&mut self) -> bool {
        let mut any = false;
        while let Ok(event) = self.inbox_rx.try_recv() {
            any = true;
            self.process(event);
        }
        any
    }

    /// Advances the queue clock to `target`.
    ///
    /// Stops at every due deadline on the way and drains the inbox there, so
    /// work scheduled in reaction (the error auto-hide) is timed from the
    /// moment the triggering task ran, not from `target`.
    ///
    /// Returns the number of queue tasks run.
    pub fn advance_to(&mut self, target: Duration) -> usize {
        let mut ran = 0;
        while let Some(deadline) = self.queue.next_deadline().filter(|d| *d <= target) {
            ran += self.queue.advance_to(deadline);
            self.drain_inbox();
        }
        ran += self.queue.advance_to(target);
        self.drain_inbox();
        ran
    }

    pub fn advance_by(&mut self, delta: Duration) -> usize {
        let target = self.queue.now().saturating_add(delta);
        self.advance_to(target)
    }

    pub fn view_model(&self) -> &LoginViewModel {
        &self.view_model
    }

    pub fn queue(&self) -> &MainQueue {
        &self.queue
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn process(&mut self, event: UiEvent) {
        let effects = update::update(&mut self.state, event);
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.should_quit = true;
            }
            UiEffect::UpdateField {
                field: Field::Email,
                value,
            } => self.view_model.set_email(value),
            UiEffect::UpdateField {
                field: Field::Password,
                value,
            } => self.view_model.set_password(value),
            UiEffect::SubmitLogin => self.view_model.submit_login(),
            UiEffect::ScheduleErrorAutoHide { banner } => {
                let tx = self.inbox_tx.clone();
                self.queue
                    .schedule_after(self.config.error_auto_hide, move || {
                        let _ = tx.send(UiEvent::ErrorAutoHide { banner });
                    });
            }
        }
    }
}
