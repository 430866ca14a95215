//! Login view model.
//!
//! Owns the credentials and the login status. Field edits re-validate and
//! publish synchronously; `submit_login` flips the status to `Loading` and
//! queues the simulated round-trip on the [`MainQueue`].
//!
//! ## Status lifecycle
//!
//! ```text
//! Idle ──submit──▶ Loading ──(delay)──▶ Succeeded | Failed
//!                    ▲                        │
//!                    └────────submit──────────┘
//! ```
//!
//! The status field is private: the only writers are `submit_login` and the
//! deferred evaluation it schedules.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::config::{self, LoginConfig};
use crate::queue::MainQueue;
use crate::signal::{Publisher, Subscription};
use crate::validation::{Credentials, ValidationResult};

/// State of the current (or last) login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl LoginStatus {
    pub fn is_loading(self) -> bool {
        matches!(self, LoginStatus::Loading)
    }

    /// True once an attempt has resolved either way.
    pub fn is_finished(self) -> bool {
        matches!(self, LoginStatus::Succeeded | LoginStatus::Failed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LoginStatus::Idle => "idle",
            LoginStatus::Loading => "loading",
            LoginStatus::Succeeded => "succeeded",
            LoginStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for LoginStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct Inner {
    credentials: RefCell<Credentials>,
    validation: Cell<ValidationResult>,
    status: Cell<LoginStatus>,
    validation_changed: Publisher<ValidationResult>,
    status_changed: Publisher<LoginStatus>,
    queue: MainQueue,
    config: LoginConfig,
}

impl Inner {
    fn revalidate(&self) {
        let result = ValidationResult::evaluate(&self.credentials.borrow());
        self.validation.set(result);
        tracing::debug!(
            email_valid = result.email_valid(),
            password_valid = result.password_valid(),
            login_enabled = result.login_enabled(),
            "validation changed"
        );
        self.validation_changed.emit(&result);
    }

    fn set_status(&self, status: LoginStatus) {
        self.status.set(status);
        tracing::debug!(%status, "login status changed");
        self.status_changed.emit(&status);
    }

    fn finish_login(&self) {
        let accepted = {
            let credentials = self.credentials.borrow();
            config::is_accepted(&credentials.email, &credentials.password)
        };
        let status = if accepted {
            LoginStatus::Succeeded
        } else {
            LoginStatus::Failed
        };
        tracing::info!(%status, "login attempt resolved");
        self.set_status(status);
    }
}

/// View model behind the login screen.
pub struct LoginViewModel {
    inner: Rc<Inner>,
}

impl LoginViewModel {
    /// Creates a view model with the default timings.
    pub fn new(queue: MainQueue) -> Self {
        Self::with_config(queue, LoginConfig::default())
    }

    pub fn with_config(queue: MainQueue, config: LoginConfig) -> Self {
        let credentials = Credentials::default();
        let validation = ValidationResult::evaluate(&credentials);
        Self {
            inner: Rc::new(Inner {
                credentials: RefCell::new(credentials),
                validation: Cell::new(validation),
                status: Cell::new(LoginStatus::Idle),
                validation_changed: Publisher::new(),
                status_changed: Publisher::new(),
                queue,
                config,
            }),
        }
    }

    /// Stores the email verbatim and publishes the new validation result.
    pub fn set_email(&self, email: impl Into<String>) {
        self.inner.credentials.borrow_mut().email = email.into();
        self.inner.revalidate();
    }

    /// Stores the password verbatim and publishes the new validation result.
    pub fn set_password(&self, password: impl Into<String>) {
        self.inner.credentials.borrow_mut().password = password.into();
        self.inner.revalidate();
    }

    /// Starts a simulated login.
    ///
    /// Does not re-validate: callers only offer submit while
    /// [`is_login_enabled`](Self::is_login_enabled) is true. The credential
    /// check runs after `login_delay` against whatever the fields hold at
    /// that point. If this view model is gone by then, nothing happens.
    pub fn submit_login(&self) {
        tracing::info!(delay = ?self.inner.config.login_delay, "login submitted");
        tracing::debug!(email = %self.inner.credentials.borrow().email, "submitting credentials");
        self.inner.set_status(LoginStatus::Loading);

        let weak = Rc::downgrade(&self.inner);
        self.inner
            .queue
            .schedule_after(self.inner.config.login_delay, move || {
                let Some(inner) = weak.upgrade() else {
                    tracing::debug!("view model dropped before login resolved; ignoring");
                    return;
                };
                inner.finish_login();
            });
    }

    /// Subscribes to every validation recompute (one per field edit).
    pub fn on_validation_changed(
        &self,
        callback: impl FnMut(&ValidationResult) + 'static,
    ) -> Subscription {
        self.inner.validation_changed.subscribe(callback)
    }

    /// Subscribes to the login-enabled signal (one notification per field edit).
    pub fn on_login_enabled_changed(&self, mut callback: impl FnMut(bool) + 'static) -> Subscription {
        self.inner
            .validation_changed
            .subscribe(move |result: &ValidationResult| callback(result.login_enabled()))
    }

    /// Subscribes to status transitions.
    pub fn on_status_changed(&self, mut callback: impl FnMut(LoginStatus) + 'static) -> Subscription {
        self.inner
            .status_changed
            .subscribe(move |status: &LoginStatus| callback(*status))
    }

    pub fn credentials(&self) -> Credentials {
        self.inner.credentials.borrow().clone()
    }

    pub fn validation(&self) -> ValidationResult {
        self.inner.validation.get()
    }

    pub fn is_login_enabled(&self) -> bool {
        self.inner.validation.get().login_enabled()
    }

    pub fn status(&self) -> LoginStatus {
        self.inner.status.get()
    }

    pub fn config(&self) -> LoginConfig {
        self.inner.config
    }

    pub fn queue(&self) -> &MainQueue {
        &self.inner.queue
    }
}

impl fmt::Debug for LoginViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginViewModel")
            .field("email", &self.inner.credentials.borrow().email)
            .field("validation", &self.inner.validation.get())
            .field("status", &self.inner.status.get())
            .finish_non_exhaustive()
    }
}
