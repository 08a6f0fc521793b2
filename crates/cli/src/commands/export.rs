//! `export`: print the validated configuration in dotenv syntax.

use anyhow::Result;
use envschema_config::{ConfigurationLoader, Environment};
use serde_json::Value;
use std::io::Write;

pub fn run<E: Environment>(
    mut loader: ConfigurationLoader<E>,
    schema: &Value,
    out: &mut impl Write,
) -> Result<()> {
    let configuration = loader.load(schema)?;
    for (key, value) in configuration.to_env() {
        writeln!(out, "{key}={}", quote(&value))?;
    }
    Ok(())
}

/// Double-quote values that dotenv would otherwise misread.
fn quote(value: &str) -> String {
    let plain = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:@,+".contains(c));
    if plain {
        value.to_string()
    } else {
        let escaped = value
            .replace('\\', "\\\\")
            .replace('"', "\\\"")
            .replace('\n', "\\n")
            .replace('$', "\\$");
        format!("\"{escaped}\"")
    }
}
