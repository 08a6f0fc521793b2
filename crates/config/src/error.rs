//! The schema-violation error and its human-readable rendering.
//!
//! Responsibilities:
//! - Carry the complete, ordered list of violations from one load.
//! - Render them as a single multi-line message.
//!
//! Does NOT handle:
//! - File or schema-compilation failures (see `loader::LoadError`).
//!
//! Invariants:
//! - Never empty: a load only raises this error when at least one violation exists.
//! - The rendered message contains paths, messages and keyword parameters, never raw values
//!   beyond what the validator itself quotes.

use serde_json::Value;
use thiserror::Error;

use crate::schema::Violation;

/// The merged environment failed schema validation.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{}", format_violations(.violations))]
pub struct ConfigurationError {
    violations: Vec<Violation>,
}

impl ConfigurationError {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    /// Whether any violation concerns the top-level `key`.
    pub fn references(&self, key: &str) -> bool {
        self.violations.iter().any(|v| v.references(key))
    }
}

/// Render violations as one bullet per line:
///
/// ```text
/// Invalid configuration found:
///
///   - PORT "abc" is not of type "integer" [type=integer]
/// ```
pub fn format_violations(violations: &[Violation]) -> String {
    let lines: Vec<String> = violations.iter().map(format_violation).collect();
    format!("Invalid configuration found:\n\n{}\n", lines.join("\n"))
}

fn format_violation(violation: &Violation) -> String {
    let mut line = String::from("  - ");

    let path = violation.dotted_path();
    if !path.is_empty() {
        line.push_str(&path);
        line.push(' ');
    }
    line.push_str(&violation.message);

    if !violation.params.is_empty() {
        let params: Vec<String> = violation
            .params
            .iter()
            .map(|(key, value)| format!("{key}={}", flatten_param(value)))
            .collect();
        line.push_str(&format!(" [{}]", params.join(", ")));
    }
    line
}

fn flatten_param(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(flatten_param)
            .collect::<Vec<_>>()
            .join("|"),
        other => other.to_string(),
    }
}
