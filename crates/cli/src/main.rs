// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! handoff - driver package hand-off CLI

mod commands;
mod completions;
mod error;
mod executor;
mod output;
mod step;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{run, show};
use completions::CompletionsArgs;
use error::CliError;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "handoff",
    version,
    about = "Driver package hand-off: pickup, delivery, and returns"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the starting state of a route
    Show(show::ShowArgs),
    /// Apply hand-off steps to a route in order
    Run(run::RunArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

fn main() -> ExitCode {
    setup_logging();

    let cli = Cli::parse();
    match dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<CliError>() {
                Some(cli_err) => eprint!("{}", cli_err),
                None => eprintln!("error: {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}

fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Show(args) => show::show(args),
        Commands::Run(args) => run::run(args),
        Commands::Completions(args) => {
            completions::generate_completions::<Cli>(args.shell);
            Ok(())
        }
    }
}

/// Log to stderr so stdout stays parseable; `HANDOFF_LOG` takes `EnvFilter` syntax
fn setup_logging() {
    use std::io::IsTerminal;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_env("HANDOFF_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .init();
}
