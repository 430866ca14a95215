//! Interactive (full-screen) mode.

use anyhow::{Context, Result};
use signin_core::{LoginConfig, LoginStatus};

pub fn run() -> Result<LoginStatus> {
    signin_tui::run_interactive(LoginConfig::default()).context("run login screen")
}
