//! The live process environment.

use super::{EnvMap, Environment};

/// Backend over `std::env`.
///
/// The process table is global: two contexts wrapping `ProcessEnvironment`
/// observe each other's writes, and callers must not load concurrently.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn vars(&self) -> EnvMap {
        std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }

    fn set(&mut self, key: &str, value: &str) {
        // SAFETY: configuration is loaded from a single thread during startup;
        // concurrent loads are documented as unsupported.
        unsafe {
            std::env::set_var(key, value);
        }
    }

    fn remove(&mut self, key: &str) {
        // SAFETY: see `set`.
        unsafe {
            std::env::remove_var(key);
        }
    }
}
