//! Tracing subscriber setup.
//!
//! The filter comes from `SIGNIN_LOG` (same syntax as `RUST_LOG`), default
//! `info`. Interactive mode writes to a file because ratatui owns the
//! terminal; `exec` writes to stderr so stdout carries only the result.

use std::fs::OpenOptions;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

pub const LOG_ENV: &str = "SIGNIN_LOG";
const DEFAULT_FILTER: &str = "info";
const DEFAULT_LOG_FILE: &str = "signin.log";

/// Where log records go.
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

impl LogTarget {
    /// File target at `path`, or `signin.log` in the system temp directory.
    pub fn file_or_default(path: Option<PathBuf>) -> Self {
        LogTarget::File(path.unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_FILE)))
    }
}

/// Keeps the non-blocking file writer flushing. Hold it until exit.
#[must_use]
pub struct LogGuard {
    _worker: Option<WorkerGuard>,
}

/// Installs the global subscriber.
///
/// # Errors
/// Returns an error if the log file cannot be opened, `SIGNIN_LOG` holds an
/// invalid directive, or a subscriber is already installed.
pub fn init(target: LogTarget) -> Result<LogGuard> {
    let filter = env_filter()?;
    match target {
        LogTarget::Stderr => {
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal())
                .with_target(false);
            tracing_subscriber::registry()
                .with(layer.with_filter(filter))
                .try_init()
                .context("install tracing subscriber")?;
            Ok(LogGuard { _worker: None })
        }
        LogTarget::File(path) => {
            let file = open_log_file(&path)?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            tracing_subscriber::registry()
                .with(layer.with_filter(filter))
                .try_init()
                .context("install tracing subscriber")?;
            tracing::debug!(path = %path.display(), "logging to file");
            Ok(LogGuard {
                _worker: Some(guard),
            })
        }
    }
}

fn env_filter() -> Result<EnvFilter> {
    match std::env::var(LOG_ENV) {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::try_new(&directives)
            .with_context(|| format!("invalid {LOG_ENV} filter: {directives}")),
        _ => Ok(EnvFilter::new(DEFAULT_FILTER)),
    }
}

fn open_log_file(path: &Path) -> Result<std::fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))
}
