//! TUI runtime: owns the terminal, runs the event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here or in
//! [`Session`]. The reducer stays pure and produces effects.
//!
//! ## Time
//!
//! The view model's `MainQueue` runs on a virtual clock. Each loop iteration
//! advances it to the wall-clock time elapsed since the runtime started, so
//! the deferred login and the error auto-hide fire on the UI thread between
//! input events. Terminal polling never sleeps past the next queue deadline.
//!
//! Structure:
//! - `mod.rs`: `TuiRuntime` (terminal, event loop, event collection)
//! - `session.rs`: reducer + view model + queue, without a terminal
//! - `inbox.rs`: inbox channel types

mod inbox;
mod session;

use std::io::Stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
pub use session::Session;
use signin_core::{LoginConfig, LoginStatus};

use crate::events::UiEvent;
use crate::{render, terminal};

/// Frame cadence while something animates or the user is typing (~60fps).
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Poll duration when idle. Longer timeout reduces CPU usage.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen TUI runtime.
///
/// Terminal state is restored on drop and on panic.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub session: Session,
    /// Origin of the queue clock.
    started: Instant,
    last_tick: Instant,
    last_terminal_event: Instant,
}

impl TuiRuntime {
    pub fn new(config: LoginConfig) -> Result<Self> {
        // Panic hook goes in before the alternate screen.
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let now = Instant::now();
        Ok(Self {
            terminal,
            session: Session::new(config),
            started: now,
            last_tick: now,
            last_terminal_event: now,
        })
    }

    /// Runs the event loop until the user quits. Returns the last login status.
    pub fn run(&mut self) -> Result<LoginStatus> {
        terminal::enable_input_features()?;
        let result = self.event_loop();
        let _ = terminal::disable_input_features();
        result.map(|()| self.session.state.status)
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.session.should_quit() {
            if self.session.advance_to(self.started.elapsed()) > 0 {
                dirty = true;
            }

            for event in self.collect_events()? {
                match &event {
                    UiEvent::Terminal(_) => {
                        self.last_terminal_event = Instant::now();
                    }
                    UiEvent::Tick => dirty = true,
                    _ => {}
                }
                self.session.dispatch(event);
                if self.session.should_quit() {
                    break;
                }
            }

            if dirty && !self.session.should_quit() {
                let state = &self.session.state;
                self.terminal
                    .draw(|frame| render::render(state, frame))
                    .context("Failed to draw frame")?;
                dirty = false;
            }
        }

        Ok(())
    }

    /// Collects terminal input and the frame tick.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let recent_terminal_activity = self.last_terminal_event.elapsed() < IDLE_POLL_DURATION;
        let tick_interval = if self.session.state.is_animating() || recent_terminal_activity {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        // Wake up for whichever comes first: the next tick or the next queue task.
        let time_until_tick = tick_interval.saturating_sub(self.last_tick.elapsed());
        let poll_duration = match self.session.queue().next_deadline() {
            Some(deadline) => {
                time_until_tick.min(deadline.saturating_sub(self.started.elapsed()))
            }
            None => time_until_tick,
        };

        if event::poll(poll_duration).context("Failed to poll terminal")? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain anything else already buffered.
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
