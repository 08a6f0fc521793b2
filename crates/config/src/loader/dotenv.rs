//! Override file reading.
//!
//! Responsibilities:
//! - Parse a dotenv file into a key/value mapping without touching the
//!   process environment.
//! - Translate dotenvy errors into `LoadError` without leaking file contents.
//!
//! Invariants:
//! - A missing file yields `Ok(None)`; every other failure propagates.
//! - Within one file, a repeated key keeps its last assignment.
//! - `$VAR` and `${VAR}` in unquoted or double-quoted values are expanded by
//!   dotenvy from the process table (then earlier keys of the same file);
//!   unset names expand to nothing. Single quotes and `\$` keep `$` literal.

use std::path::Path;
use tracing::debug;

use super::error::LoadError;
use crate::environment::EnvMap;

/// Read the dotenv file at `path`.
///
/// Returns `Ok(None)` when the file does not exist. Substitution always
/// reads `std::env`, whatever `Environment` backend the loader uses.
pub(crate) fn read_env_file(path: &Path) -> Result<Option<EnvMap>, LoadError> {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if is_not_found(&e) => {
            debug!(path = %path.display(), "override file not found, skipping");
            return Ok(None);
        }
        Err(e) => return Err(map_dotenv_error(path, e)),
    };

    let mut vars = EnvMap::new();
    for item in iter {
        let (key, value) = item.map_err(|e| map_dotenv_error(path, e))?;
        vars.insert(key, value);
    }

    debug!(path = %path.display(), count = vars.len(), "read override file");
    Ok(Some(vars))
}

/// Check if a dotenv error indicates the file was not found.
fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
    )
}

fn map_dotenv_error(path: &Path, err: dotenvy::Error) -> LoadError {
    match err {
        dotenvy::Error::LineParse(_, idx) => LoadError::DotenvParse {
            path: path.to_path_buf(),
            error_index: idx,
        },
        dotenvy::Error::Io(source) => LoadError::DotenvIo {
            path: path.to_path_buf(),
            source,
        },
        _ => LoadError::DotenvUnknown {
            path: path.to_path_buf(),
        },
    }
}
