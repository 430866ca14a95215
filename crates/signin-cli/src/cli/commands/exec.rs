//! Exec command handler.
//!
//! Drives the same view model as the login screen, without a terminal:
//! fills both fields, submits only if the login control would be enabled,
//! then runs the main queue until the attempt resolves.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use anyhow::{Context, Result};
use serde::Serialize;
use signin_core::{LoginStatus, LoginViewModel, MainQueue, ValidationResult};

pub struct ExecOptions<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub json: bool,
    /// Skip real waiting; the queue clock jumps straight to each deadline.
    pub virtual_clock: bool,
}

#[derive(Debug, Serialize)]
struct ExecReport<'a> {
    email: &'a str,
    validation: ValidationResult,
    submitted: bool,
    transitions: Vec<LoginStatus>,
    status: LoginStatus,
}

/// Runs one login attempt and prints the report. Returns the final status.
pub async fn run(options: ExecOptions<'_>) -> Result<LoginStatus> {
    let queue = MainQueue::new();
    let view_model = LoginViewModel::new(queue.clone());

    let transitions = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&transitions);
    let _subscription = view_model.on_status_changed(move |status| sink.borrow_mut().push(status));

    view_model.set_email(options.email);
    view_model.set_password(options.password);
    let validation = view_model.validation();

    let submitted = validation.login_enabled();
    if submitted {
        view_model.submit_login();
        wait_for_outcome(&view_model, &queue, options.virtual_clock).await?;
    } else {
        tracing::info!("login disabled; not submitting");
    }

    let status = view_model.status();
    let report = ExecReport {
        email: options.email,
        validation,
        submitted,
        transitions: transitions.borrow().clone(),
        status,
    };
    print_report(&report, options.json)?;
    Ok(status)
}

async fn wait_for_outcome(
    view_model: &LoginViewModel,
    queue: &MainQueue,
    virtual_clock: bool,
) -> Result<()> {
    while !view_model.status().is_finished() {
        let wait = queue
            .time_until_next()
            .context("login is loading but nothing is scheduled")?;
        if !virtual_clock {
            tokio::time::sleep(wait).await;
        }
        queue.advance_by(wait);
    }
    Ok(())
}

fn print_report(report: &ExecReport<'_>, json: bool) -> Result<()> {
    let mut out = io::stdout().lock();
    if json {
        let text = serde_json::to_string_pretty(report).context("serialize report")?;
        writeln!(out, "{text}")?;
        return Ok(());
    }

    let v = &report.validation;
    writeln!(out, "email_valid: {}", v.email_valid())?;
    writeln!(out, "password_valid: {}", v.password_valid())?;
    writeln!(out, "login_enabled: {}", v.login_enabled())?;
    if !report.submitted {
        writeln!(out, "login disabled, not submitted")?;
    }
    for status in &report.transitions {
        writeln!(out, "-> {status}")?;
    }
    writeln!(out, "status: {}", report.status)?;
    Ok(())
}
