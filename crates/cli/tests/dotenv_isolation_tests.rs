//! Regression tests for hermetic test isolation around dotenv loading.
//!
//! Responsibilities:
//! - Prove that setting `DOTENV_DISABLED=1` prevents the CLI from loading `.env`.
//! - Prove that when not disabled, the CLI loads `.env` and `.env.<profile>`
//!   from the working directory (or `--dir`).
//!
//! Invariants / assumptions:
//! - The loader is gated by `DOTENV_DISABLED` ("true" or "1" disables).
//! - A required key with no source fails with exit code 5.

mod common;

use common::{envschema_cmd, test_config_schema, write_schema};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_dotenv_disabled_ignores_env_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".env"), "TEST_CONFIG=from-file\n").unwrap();
    let schema = write_schema(temp_dir.path(), &test_config_schema("string", true));

    envschema_cmd(temp_dir.path())
        .arg("--schema")
        .arg(&schema)
        .arg("check")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("TEST_CONFIG"));
}

#[test]
fn test_dotenv_enabled_loads_env_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".env"), "TEST_CONFIG=from-file\n").unwrap();
    let schema = write_schema(temp_dir.path(), &test_config_schema("string", true));

    let mut cmd = envschema_cmd(temp_dir.path());
    cmd.env_remove("DOTENV_DISABLED");

    cmd.arg("--schema")
        .arg(&schema)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"from-file\""));
}

#[test]
fn test_profile_file_from_selector_variable() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".env"), "TEST_CONFIG=base-value\n").unwrap();
    fs::write(temp_dir.path().join(".env.test2"), "TEST_CONFIG=profile-value\n").unwrap();
    let schema = write_schema(temp_dir.path(), &test_config_schema("string", true));

    let mut cmd = envschema_cmd(temp_dir.path());
    cmd.env_remove("DOTENV_DISABLED").env("APP_ENV", "test2");

    cmd.arg("--schema")
        .arg(&schema)
        .args(["check", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("profile-value"));
}

#[test]
fn test_dir_and_profile_flags() {
    let temp_dir = TempDir::new().unwrap();
    let env_dir = temp_dir.path().join("env");
    fs::create_dir(&env_dir).unwrap();
    fs::write(env_dir.join(".env.ci"), "TEST_CONFIG=7\n").unwrap();
    let schema = write_schema(temp_dir.path(), &test_config_schema("integer", true));

    let mut cmd = envschema_cmd(temp_dir.path());
    cmd.env_remove("DOTENV_DISABLED");

    cmd.arg("--schema")
        .arg(&schema)
        .arg("--dir")
        .arg(&env_dir)
        .args(["--profile", "ci", "export"])
        .assert()
        .success()
        .stdout("TEST_CONFIG=7\n");
}
