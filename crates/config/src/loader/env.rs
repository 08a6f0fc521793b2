//! Selector-variable helpers.
//!
//! Responsibilities:
//! - Read control variables (profile selector, `DOTENV_DISABLED`) from an
//!   environment mapping with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Reading override files (see dotenv.rs).
//! - Validating configuration values (delegated to the schema validator).
//!
//! Invariants:
//! - Empty or whitespace-only values are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).

use crate::constants::DOTENV_DISABLED_VAR;
use crate::environment::EnvMap;

/// Read a variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(vars: &EnvMap, key: &str) -> Option<String> {
    vars.get(key).and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Whether `DOTENV_DISABLED` is set to `1` or `true`.
pub(crate) fn dotenv_disabled(vars: &EnvMap) -> bool {
    matches!(
        env_var_or_none(vars, DOTENV_DISABLED_VAR).as_deref(),
        Some("true") | Some("1")
    )
}
