//! Stable symbolic tokens for configuration lookup.

use serde::Serialize;
use std::fmt;

use crate::constants::{CONFIGURATION_KEY, TOKEN_NAMESPACE};

/// A namespaced name (`configuration.<KEY>`) identifying one injectable value.
///
/// Tokens built from the same key are equal, wherever they are built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct InjectionToken(String);

impl InjectionToken {
    /// Token for the configuration value named `key`.
    pub fn for_key(key: &str) -> Self {
        Self(format!("{TOKEN_NAMESPACE}.{key}"))
    }

    /// Token for the whole configuration mapping.
    pub fn configuration() -> Self {
        Self::for_key(CONFIGURATION_KEY)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The key part, without the namespace.
    pub fn key(&self) -> &str {
        self.0
            .strip_prefix(TOKEN_NAMESPACE)
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or(&self.0)
    }
}

impl fmt::Display for InjectionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
