//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test schema validation outcomes through the loader.
//! - Test override file precedence and profile selection.
//! - Test snapshot/restore and write-back behavior.
//! - Test the live process environment backend end to end.
//!
//! Does NOT handle:
//! - Coercion rules in isolation (tested in schema/coerce.rs).
//! - Violation formatting (tested in error.rs).
//!
//! Invariants:
//! - Tests touching the process environment or cwd use `serial_test` and `env_lock()`.
//! - Other tests use `MemoryEnvironment` and a `TempDir` so they run in parallel.

use serde_json::{Value, json};
use std::sync::Mutex;
use tempfile::TempDir;

use crate::environment::MemoryEnvironment;
use crate::loader::builder::ConfigurationLoader;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Schema with a single `TEST_CONFIG` property of the given type.
pub fn single_property_schema(ty: &str, required: bool) -> Value {
    let mut schema = json!({
        "type": "object",
        "properties": { "TEST_CONFIG": { "type": ty } }
    });
    if required {
        schema["required"] = json!(["TEST_CONFIG"]);
    }
    schema
}

/// Hermetic loader over an in-memory environment rooted at `dir`.
pub fn memory_loader(dir: &TempDir, vars: &[(&str, &str)]) -> ConfigurationLoader<MemoryEnvironment> {
    let env: MemoryEnvironment = vars.iter().copied().collect();
    ConfigurationLoader::with_environment(env).with_dir(dir.path())
}
