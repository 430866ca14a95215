//! Events consumed by the reducer.

use crossterm::event::Event;
use signin_core::{LoginStatus, ValidationResult};

use crate::features::status::BannerId;

#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Frame cadence tick (drives spinner and fade animation).
    Tick,

    /// Raw terminal input.
    Terminal(Event),

    /// The view model re-validated the credentials.
    ValidationChanged(ValidationResult),

    /// The view model's login status changed.
    StatusChanged(LoginStatus),

    /// The auto-hide delay for an error banner elapsed.
    ErrorAutoHide { banner: BannerId },
}
