//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They are the only way the reducer reaches the view model or the main
//! queue, which keeps `update` a plain state transition that tests can
//! drive without a terminal.

use crate::features::form::Field;
use crate::features::status::BannerId;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Push a field's new value into the view model.
    UpdateField { field: Field, value: String },

    /// Start a login attempt.
    SubmitLogin,

    /// Hide the error banner `banner` after the auto-hide delay.
    ScheduleErrorAutoHide { banner: BannerId },
}
