//! `tokens`: list the injection tokens a schema produces.

use anyhow::Result;
use envschema_config::{ConfigurationModule, InjectionToken};
use serde_json::{Value, json};
use std::io::Write;

use crate::args::OutputFormat;

pub fn run(schema: Value, output: OutputFormat, out: &mut impl Write) -> Result<()> {
    // Building the module never loads the environment.
    let module = ConfigurationModule::for_environment(schema);
    let whole = InjectionToken::configuration();

    match output {
        OutputFormat::Text => {
            writeln!(out, "{whole}")?;
            for token in module.tokens().values() {
                writeln!(out, "{token}")?;
            }
        }
        OutputFormat::Json => {
            let listing = json!({
                "configuration": whole,
                "properties": module.tokens(),
            });
            serde_json::to_writer_pretty(&mut *out, &listing)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
