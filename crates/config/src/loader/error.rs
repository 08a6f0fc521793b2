//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for every way a load can fail.
//! - Wrap schema violations (`ConfigurationError`) and schema compilation failures.
//!
//! Does NOT handle:
//! - Rendering violation lists (see `crate::error::format_violations`).
//!
//! Invariants:
//! - A missing override file is never an error; it does not reach this type.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ConfigurationError;
use crate::schema::SchemaError;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The merged environment violates the schema.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    InvalidSchema(#[from] SchemaError),

    /// An override file exists but has invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse {} at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading",
        .path.display()
    )]
    DotenvParse { path: PathBuf, error_index: usize },

    /// An override file exists but cannot be read.
    #[error("Failed to read {}: {source}", .path.display())]
    DotenvIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Unknown dotenv error (future variants from dotenvy crate).
    ///
    /// SAFETY: This error does not include any raw dotenv content.
    #[error(
        "Failed to load {}. Hint: set DOTENV_DISABLED=1 to skip .env loading",
        .path.display()
    )]
    DotenvUnknown { path: PathBuf },
}

impl LoadError {
    /// The violation list, when this is a schema failure.
    pub fn as_configuration_error(&self) -> Option<&ConfigurationError> {
        match self {
            LoadError::Configuration(err) => Some(err),
            _ => None,
        }
    }
}
