//! Property-based tests for environment precedence and coercion.
//!
//! These tests verify the loader's layering and coercion with randomly
//! generated inputs, catching edge cases that example-based tests miss.
//!
//! Test coverage:
//! - Environment values always win over both override files.
//! - The profile file always wins over the base file.
//! - Integer strings coerce to the same integer.

use envschema_config::{ConfigurationLoader, MemoryEnvironment};
use proptest::prelude::*;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

/// Values that survive a dotenv round trip unquoted.
fn plain_value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_\\-]{1,24}"
}

fn string_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": { "KEY": { "type": "string" } },
        "required": ["KEY"]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_environment_beats_files(live in plain_value_strategy(), profile in plain_value_strategy(), base in plain_value_strategy()) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".env"), format!("KEY={base}\n")).unwrap();
        fs::write(dir.path().join(".env.p"), format!("KEY={profile}\n")).unwrap();
        let env: MemoryEnvironment = [("KEY", live.as_str()), ("APP_ENV", "p")].into_iter().collect();

        let config = ConfigurationLoader::with_environment(env)
            .with_dir(dir.path())
            .load(&string_schema())
            .unwrap();

        prop_assert_eq!(config.get("KEY").and_then(|v| v.as_str()), Some(live.as_str()));
    }

    #[test]
    fn prop_profile_beats_base(profile in plain_value_strategy(), base in plain_value_strategy()) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".env"), format!("KEY={base}\n")).unwrap();
        fs::write(dir.path().join(".env.p"), format!("KEY={profile}\n")).unwrap();
        let env: MemoryEnvironment = [("APP_ENV", "p")].into_iter().collect();

        let config = ConfigurationLoader::with_environment(env)
            .with_dir(dir.path())
            .load(&string_schema())
            .unwrap();

        prop_assert_eq!(config.get("KEY").and_then(|v| v.as_str()), Some(profile.as_str()));
    }

    #[test]
    fn prop_integer_strings_coerce(n in any::<i64>()) {
        let dir = TempDir::new().unwrap();
        let env: MemoryEnvironment = [("KEY", n.to_string())].into_iter().collect();
        let schema = json!({ "type": "object", "properties": { "KEY": { "type": "integer" } } });

        let config = ConfigurationLoader::with_environment(env)
            .with_dir(dir.path())
            .load(&schema)
            .unwrap();

        prop_assert_eq!(config.get("KEY"), Some(&json!(n)));
    }
}
