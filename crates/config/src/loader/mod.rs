//! Configuration loader for environment variables and override files.
//!
//! Responsibilities:
//! - Merge the environment with `.env.<profile>` and `.env` files.
//! - Validate the merged document through the schema seam.
//! - Snapshot and restore the environment around loads.
//!
//! Does NOT handle:
//! - Schema coercion rules (see `crate::schema`).
//! - Distributing values to consumers (see `crate::injection`).
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over both override files.
//! - The profile file takes precedence over the base file.
//! - The `DOTENV_DISABLED` variable disables both override files.

mod builder;
mod dotenv;
mod env;
mod error;
mod merge;

#[cfg(test)]
mod tests;

pub use builder::ConfigurationLoader;
pub use env::env_var_or_none;
pub use error::LoadError;
pub use merge::merge_sources;
