//! Application state composition.
//!
//! ```text
//! AppState
//! ├── screen: Screen              (login card or home)
//! ├── form: FormState             (fields, cursor, focus)
//! ├── submit: SubmitButton        (enabled / loading)
//! ├── error: ErrorBanner          (visibility, fade, generation)
//! ├── validation: ValidationResult (last notification from the view model)
//! └── status: LoginStatus          (last notification from the view model)
//! ```
//!
//! `validation` and `status` are mirrors of what the view model published;
//! the reducer never computes them itself.

use signin_core::{LoginStatus, ValidationResult};

use crate::features::form::FormState;
use crate::features::status::{ErrorBanner, SubmitButton};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Login,
    Home,
}

#[derive(Debug, Default)]
pub struct AppState {
    pub screen: Screen,
    pub form: FormState,
    pub submit: SubmitButton,
    pub error: ErrorBanner,
    pub validation: ValidationResult,
    pub status: LoginStatus,
    /// Spinner animation frame counter.
    pub spinner_frame: usize,
}

impl AppState {
    /// Creates state mirroring the view model's initial validation.
    pub fn new(validation: ValidationResult) -> Self {
        Self {
            submit: SubmitButton {
                enabled: validation.login_enabled(),
                loading: false,
            },
            validation,
            ..Self::default()
        }
    }

    /// Email shown on the home screen.
    pub fn signed_in_email(&self) -> &str {
        self.form.email.value()
    }

    /// True while the frame loop should redraw without waiting for input.
    pub fn is_animating(&self) -> bool {
        self.submit.loading || self.error.is_fading()
    }
}
