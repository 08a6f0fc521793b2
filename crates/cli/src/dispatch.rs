//! Command dispatch logic.
//!
//! Responsibilities:
//! - Read the schema named by the global `--schema` flag.
//! - Route parsed CLI arguments to the appropriate command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Exit code mapping (see `error` module).

use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::io::Write;
use std::path::Path;

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers, writing results to `out`.
pub(crate) fn run_command(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let Some(schema_path) = cli.schema.as_deref() else {
        bail!("a schema is required: pass --schema <FILE> or set ENVSCHEMA_SCHEMA");
    };
    let schema = read_schema(schema_path)?;

    match &cli.command {
        Commands::Check { output } => commands::check::run(cli.loader(), &schema, *output, out),
        Commands::Tokens { output } => commands::tokens::run(schema, *output, out),
        Commands::Export => commands::export::run(cli.loader(), &schema, out),
    }
}

fn read_schema(path: &Path) -> Result<Value> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read schema file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse schema file {} as JSON", path.display()))
}
