//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigurationLoader` over an `Environment` backend.
//! - Merge the environment with the profile and base override files.
//! - Hand the merged document to the schema validator and write coerced values back.
//!
//! Does NOT handle:
//! - Dotenv parsing (delegated to dotenv.rs).
//! - Coercion and validation rules (delegated to `crate::schema`).
//! - Token-based distribution of values (see `crate::injection`).
//!
//! Invariants / Assumptions:
//! - Precedence is environment > `.env.<profile>` > `.env`; earlier sources are never overwritten.
//! - The environment snapshot is taken on the first load and reused until `restore()`.
//! - A failed load leaves the environment untouched.
//! - The `DOTENV_DISABLED` variable is checked before any override file is read.

use serde_json::{Map, Value};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use super::dotenv::read_env_file;
use super::env::{dotenv_disabled, env_var_or_none};
use super::error::LoadError;
use super::merge::assign_if_not_set;
use crate::configuration::{Configuration, stringify_document};
use crate::constants::{BASE_ENV_FILE, DEFAULT_PROFILE_VAR};
use crate::environment::{EnvMap, Environment, EnvironmentContext, ProcessEnvironment};
use crate::error::ConfigurationError;
use crate::schema::{JsonSchemaCompiler, SchemaCompiler};

/// Loads, merges and validates environment configuration.
pub struct ConfigurationLoader<E = ProcessEnvironment> {
    context: EnvironmentContext<E>,
    dir: Option<PathBuf>,
    profile_var: String,
    profile: Option<String>,
    base_file: String,
    write_back: bool,
    compiler: Box<dyn SchemaCompiler>,
}

impl Default for ConfigurationLoader<ProcessEnvironment> {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigurationLoader<ProcessEnvironment> {
    /// Create a loader over the live process environment.
    pub fn new() -> Self {
        Self::with_environment(ProcessEnvironment)
    }
}

impl<E: Environment> ConfigurationLoader<E> {
    /// Create a loader over an explicit environment backend.
    pub fn with_environment(env: E) -> Self {
        Self {
            context: EnvironmentContext::new(env),
            dir: None,
            profile_var: DEFAULT_PROFILE_VAR.to_string(),
            profile: None,
            base_file: BASE_ENV_FILE.to_string(),
            write_back: true,
            compiler: Box::new(JsonSchemaCompiler::new()),
        }
    }

    /// Directory holding the override files (default: working directory).
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    /// Variable whose value selects the profile file.
    pub fn with_profile_var(mut self, var: impl Into<String>) -> Self {
        self.profile_var = var.into();
        self
    }

    /// Force a profile, ignoring the selector variable.
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Name of the base override file; the profile file is `<name>.<profile>`.
    pub fn with_base_file(mut self, name: impl Into<String>) -> Self {
        self.base_file = name.into();
        self
    }

    /// Whether coerced values are written back into the environment.
    pub fn with_write_back(mut self, enabled: bool) -> Self {
        self.write_back = enabled;
        self
    }

    /// Replace the schema compiler.
    pub fn with_compiler<C: SchemaCompiler + 'static>(mut self, compiler: C) -> Self {
        self.compiler = Box::new(compiler);
        self
    }

    /// Load the environment and validate it against `schema`.
    ///
    /// # Errors
    ///
    /// - `LoadError::Configuration` with every violation when validation fails.
    /// - `LoadError::InvalidSchema` when the schema does not compile.
    /// - `LoadError::DotenvParse` / `DotenvIo` when an existing override file is unreadable.
    ///
    /// Missing override files are silently ignored.
    pub fn load(&mut self, schema: &Value) -> Result<Configuration, LoadError> {
        let mut merged = self.context.snapshot().clone();
        let profile = self.active_profile(&merged);

        if dotenv_disabled(&merged) {
            debug!("override files disabled via DOTENV_DISABLED");
        } else {
            if let Some(profile) = &profile {
                let name = format!("{}.{profile}", self.base_file);
                self.merge_file(&mut merged, &name)?;
            }
            let name = self.base_file.clone();
            self.merge_file(&mut merged, &name)?;
        }

        let validator = self.compiler.compile(schema)?;
        let mut document: Map<String, Value> = merged
            .into_iter()
            .map(|(key, value)| (key, Value::String(value)))
            .collect();

        if let Err(violations) = validator.validate(&mut document) {
            warn!(
                violations = violations.len(),
                "environment failed schema validation"
            );
            return Err(ConfigurationError::new(violations).into());
        }

        if self.write_back {
            let written = self.context.apply(&stringify_document(&document));
            debug!(written, "wrote coerced values back to the environment");
        }

        let configuration = Configuration::from_validated(schema, document);
        info!(
            keys = configuration.len(),
            profile = profile.as_deref().unwrap_or("-"),
            "configuration loaded"
        );
        Ok(configuration)
    }

    /// Reset the environment to its pre-load snapshot and forget the snapshot.
    ///
    /// Returns `false` when nothing had been loaded yet.
    pub fn restore(&mut self) -> bool {
        self.context.restore()
    }

    pub fn context(&self) -> &EnvironmentContext<E> {
        &self.context
    }

    pub fn environment(&self) -> &E {
        self.context.environment()
    }

    /// Mutable access to the backend, e.g. to set variables between loads.
    pub fn environment_mut(&mut self) -> &mut E {
        self.context.environment_mut()
    }

    /// Path of an override file, relative to the configured directory.
    pub fn override_path(&self, name: &str) -> PathBuf {
        match &self.dir {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }

    fn active_profile(&self, vars: &EnvMap) -> Option<String> {
        self.profile
            .clone()
            .or_else(|| env_var_or_none(vars, &self.profile_var))
    }

    fn merge_file(&self, merged: &mut EnvMap, name: &str) -> Result<(), LoadError> {
        let path = self.override_path(name);
        if let Some(vars) = read_env_file(&path)? {
            let added = assign_if_not_set(merged, vars);
            debug!(path = %path.display(), added, "merged override file");
        }
        Ok(())
    }
}
