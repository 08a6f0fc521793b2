//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map LoadError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.

use envschema_config::LoadError;
use std::io::ErrorKind;

/// Structured exit codes for envschema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - configuration is valid.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Usage error - required flag missing or invalid.
    UsageError = 2,

    /// Schema or override file not found.
    NotFound = 4,

    /// Validation error - the environment violates the schema, or the schema is invalid.
    ///
    /// Scripts should fix the input and not retry.
    ValidationError = 5,

    /// Permission denied while reading the schema or an override file.
    PermissionDenied = 6,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&LoadError> for ExitCode {
    fn from(err: &LoadError) -> Self {
        match err {
            LoadError::Configuration(_) | LoadError::InvalidSchema(_) => ExitCode::ValidationError,
            LoadError::DotenvParse { .. } | LoadError::DotenvUnknown { .. } => {
                ExitCode::ValidationError
            }
            LoadError::DotenvIo { source, .. } => ExitCode::from(source.kind()),
        }
    }
}

impl From<ErrorKind> for ExitCode {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::NotFound => ExitCode::NotFound,
            ErrorKind::PermissionDenied => ExitCode::PermissionDenied,
            _ => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if nothing in the chain is recognised.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(load_err) = cause.downcast_ref::<LoadError>() {
                return ExitCode::from(load_err);
            }
            if let Some(io_err) = cause.downcast_ref::<std::io::Error>() {
                return ExitCode::from(io_err.kind());
            }
            if cause.downcast_ref::<serde_json::Error>().is_some() {
                return ExitCode::ValidationError;
            }
        }
        ExitCode::GeneralError
    }
}
