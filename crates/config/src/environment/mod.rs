//! Environment-variable backends and the snapshot/restore context.
//!
//! Responsibilities:
//! - Abstract the variable table behind the `Environment` trait.
//! - Provide the live process table (`ProcessEnvironment`) and an isolated
//!   in-memory table (`MemoryEnvironment`).
//! - Track the pre-load snapshot so loads can be undone (`EnvironmentContext`).
//!
//! Does NOT handle:
//! - Reading `.env` files (see `loader::dotenv`).
//! - Deciding which values are written back (see `loader::builder`).
//!
//! Invariants:
//! - Variables whose name or value is not valid UTF-8 are invisible to every backend.

mod context;
mod memory;
mod process;

use std::collections::BTreeMap;

pub use context::EnvironmentContext;
pub use memory::MemoryEnvironment;
pub use process::ProcessEnvironment;

/// Flat, ordered mapping from variable name to raw string value.
pub type EnvMap = BTreeMap<String, String>;

/// A mutable table of environment variables.
pub trait Environment {
    /// Look up a single variable.
    fn get(&self, key: &str) -> Option<String>;

    /// Copy every variable out of the table.
    fn vars(&self) -> EnvMap;

    /// Set a variable, overwriting any previous value.
    fn set(&mut self, key: &str, value: &str);

    /// Remove a variable if present.
    fn remove(&mut self, key: &str);

    /// Make the table equal to `vars`: extra keys are removed, differing
    /// values are overwritten.
    fn replace_all(&mut self, vars: &EnvMap) {
        let current = self.vars();
        for key in current.keys() {
            if !vars.contains_key(key) {
                self.remove(key);
            }
        }
        for (key, value) in vars {
            if current.get(key) != Some(value) {
                self.set(key, value);
            }
        }
    }
}
