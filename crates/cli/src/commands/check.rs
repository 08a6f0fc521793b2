//! `check`: load, validate and print the configuration.

use anyhow::Result;
use envschema_config::{Configuration, ConfigurationLoader, Environment};
use serde_json::Value;
use std::io::Write;
use tracing::info;

use crate::args::OutputFormat;

pub fn run<E: Environment>(
    mut loader: ConfigurationLoader<E>,
    schema: &Value,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let configuration = loader.load(schema)?;
    info!(keys = configuration.len(), "configuration is valid");

    match output {
        OutputFormat::Text => write_text(&configuration, out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &configuration)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn write_text(configuration: &Configuration, out: &mut impl Write) -> Result<()> {
    let width = configuration.keys().map(String::len).max().unwrap_or(0);
    for (key, value) in configuration.iter() {
        writeln!(out, "{key:<width$}  {value}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use envschema_config::{LoadError, MemoryEnvironment};
    use serde_json::json;
    use tempfile::TempDir;

    fn loader(dir: &TempDir, vars: &[(&str, &str)]) -> ConfigurationLoader<MemoryEnvironment> {
        ConfigurationLoader::with_environment(vars.iter().copied().collect()).with_dir(dir.path())
    }

    fn schema() -> Value {
        json!({
            "type": "object",
            "properties": { "PORT": { "type": "integer" }, "HOST": { "type": "string" } },
            "required": ["PORT"]
        })
    }

    #[test]
    fn test_text_output_aligns_keys() {
        let dir = TempDir::new().unwrap();
        let mut out = Vec::new();

        run(
            loader(&dir, &[("PORT", "80"), ("HOST", "example.com")]),
            &schema(),
            OutputFormat::Text,
            &mut out,
        )
        .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "HOST  \"example.com\"\nPORT  80\n"
        );
    }

    #[test]
    fn test_json_output() {
        let dir = TempDir::new().unwrap();
        let mut out = Vec::new();

        run(loader(&dir, &[("PORT", "80")]), &schema(), OutputFormat::Json, &mut out).unwrap();

        let value: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value, json!({ "PORT": 80 }));
    }

    #[test]
    fn test_violations_propagate_as_load_error() {
        let dir = TempDir::new().unwrap();
        let mut out = Vec::new();

        let err = run(loader(&dir, &[]), &schema(), OutputFormat::Text, &mut out).unwrap_err();

        assert!(err.downcast_ref::<LoadError>().is_some());
        assert!(out.is_empty());
    }
}
