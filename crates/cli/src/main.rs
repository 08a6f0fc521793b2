//! envschema - validate environment configuration against a JSON Schema.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Load the environment with `.env` override files and validate it.
//! - Print the validated configuration, its injection tokens, or a dotenv export.
//!
//! Does NOT handle:
//! - Loading, coercion, or validation logic (see `crates/config`).
//!
//! Invariants:
//! - Results go to stdout; logs and errors go to stderr.
//! - The process environment is never mutated by a command.

mod args;
mod commands;
mod dispatch;
mod error;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use std::io::Write;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = run_command(&cli, &mut out);
    let _ = out.flush();

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        let code = if cli.schema.is_none() {
            ExitCode::UsageError
        } else {
            e.exit_code()
        };
        std::process::exit(code.as_i32());
    }

    std::process::exit(ExitCode::Success.as_i32());
}
