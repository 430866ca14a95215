//! Full-screen login screen for signin.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
pub use runtime::{Session, TuiRuntime};
use signin_core::{LoginConfig, LoginStatus};

/// Runs the interactive login screen until the user quits.
///
/// Returns the status of the last login attempt.
pub fn run_interactive(config: LoginConfig) -> Result<LoginStatus> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "Interactive mode requires a terminal.\n\
             Use `signin exec --email <EMAIL> --password <PASSWORD>` for non-interactive execution."
        );
    }

    tracing::info!(
        login_delay = ?config.login_delay,
        error_auto_hide = ?config.error_auto_hide,
        "starting interactive session"
    );
    let mut runtime = TuiRuntime::new(config)?;
    let status = runtime.run()?;
    tracing::info!(%status, "interactive session ended");
    Ok(status)
}
