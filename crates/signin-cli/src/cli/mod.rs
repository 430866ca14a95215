//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use signin_core::LoginStatus;

use crate::logging::{self, LogTarget};

mod commands;

#[derive(Parser)]
#[command(name = "signin")]
#[command(version)]
#[command(about = "Sign-in screen with a simulated login round-trip")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Write logs to this file. Interactive mode defaults to signin.log in the
    /// temp directory; exec defaults to stderr.
    #[arg(long, value_name = "PATH", global = true)]
    log_file: Option<PathBuf>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Runs one login attempt without the interactive screen
    Exec {
        /// Email to sign in with
        #[arg(short, long)]
        email: String,

        /// Password to sign in with
        #[arg(short, long)]
        password: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Resolve the login immediately instead of waiting in real time
        #[arg(long)]
        virtual_clock: bool,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let target = match (&cli.command, cli.log_file.clone()) {
        (Some(Commands::Exec { .. }), None) => LogTarget::Stderr,
        (Some(Commands::Exec { .. }), Some(path)) => LogTarget::File(path),
        (None, path) => LogTarget::file_or_default(path),
    };
    let _log_guard = logging::init(target).context("set up logging")?;

    // One current-thread runtime: the view model is !Send and never leaves it.
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("create tokio runtime")?;

    rt.block_on(dispatch(cli))
}

async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        None => {
            let status = commands::interactive::run()?;
            tracing::debug!(%status, "interactive mode finished");
            Ok(())
        }
        Some(Commands::Exec {
            email,
            password,
            json,
            virtual_clock,
        }) => {
            let status = commands::exec::run(commands::exec::ExecOptions {
                email: &email,
                password: &password,
                json,
                virtual_clock,
            })
            .await?;
            if status == LoginStatus::Failed {
                anyhow::bail!("login failed: invalid email or password");
            }
            Ok(())
        }
    }
}
