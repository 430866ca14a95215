//! Core of the signin screen: validation, push signals, the main queue and
//! the login view model.
//!
//! Everything here runs on a single execution context. Types are built on
//! `Rc`/`RefCell`, so they are deliberately `!Send`: the compiler keeps field
//! edits, submits and deferred evaluations on the thread that owns the UI.

pub mod config;
pub mod queue;
pub mod signal;
pub mod validation;
pub mod view_model;

pub use config::LoginConfig;
pub use queue::MainQueue;
pub use signal::{Publisher, Subscription};
pub use validation::{Credentials, ValidationResult};
pub use view_model::{LoginStatus, LoginViewModel};
