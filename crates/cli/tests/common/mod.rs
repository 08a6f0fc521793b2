//! Shared test utilities for envschema integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Write schema files into temporary directories.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - `APP_ENV`, `ENVSCHEMA_SCHEMA` and `TEST_CONFIG` are cleared unless a test sets them.

use assert_cmd::Command;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Returns a hermetic `envschema` command running in `dir`.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Variables the tests rely on are cleared to avoid leakage from the host.
pub fn envschema_cmd(dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("envschema");
    cmd.current_dir(dir);

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    // Clear potential host leakage
    cmd.env_remove("APP_ENV")
        .env_remove("ENVSCHEMA_SCHEMA")
        .env_remove("TEST_CONFIG")
        .env_remove("RUST_LOG");

    cmd
}

/// Write `schema` to `schema.json` in `dir` and return its path.
pub fn write_schema(dir: &Path, schema: &Value) -> PathBuf {
    let path = dir.join("schema.json");
    std::fs::write(&path, serde_json::to_string_pretty(schema).unwrap()).unwrap();
    path
}

/// Schema with a single `TEST_CONFIG` property of the given type.
#[allow(dead_code)]
pub fn test_config_schema(ty: &str, required: bool) -> Value {
    let mut schema = serde_json::json!({
        "type": "object",
        "properties": { "TEST_CONFIG": { "type": ty } }
    });
    if required {
        schema["required"] = serde_json::json!(["TEST_CONFIG"]);
    }
    schema
}
