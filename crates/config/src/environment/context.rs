//! Snapshot, restore, and apply over an `Environment` backend.

use tracing::debug;

use super::{EnvMap, Environment, ProcessEnvironment};

/// Owns an environment backend plus the snapshot taken before the first load.
///
/// `snapshot` is idempotent until `restore` clears it, so repeated loads keep
/// starting from the same pre-load state instead of accumulating write-backs.
#[derive(Debug, Default)]
pub struct EnvironmentContext<E = ProcessEnvironment> {
    env: E,
    snapshot: Option<EnvMap>,
}

impl<E: Environment> EnvironmentContext<E> {
    pub fn new(env: E) -> Self {
        Self {
            env,
            snapshot: None,
        }
    }

    /// Capture the current table on first call; later calls return the
    /// stored copy.
    pub fn snapshot(&mut self) -> &EnvMap {
        let env = &self.env;
        self.snapshot.get_or_insert_with(|| {
            let vars = env.vars();
            debug!(count = vars.len(), "captured environment snapshot");
            vars
        })
    }

    pub fn has_snapshot(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Reset the table to the snapshot and forget it.
    ///
    /// Returns `false` when no snapshot was held (nothing to restore).
    pub fn restore(&mut self) -> bool {
        match self.snapshot.take() {
            Some(vars) => {
                self.env.replace_all(&vars);
                debug!(count = vars.len(), "restored environment snapshot");
                true
            }
            None => false,
        }
    }

    /// Write `values` into the table, touching only keys whose value changes.
    ///
    /// Returns the number of variables written.
    pub fn apply(&mut self, values: &EnvMap) -> usize {
        let mut written = 0;
        for (key, value) in values {
            if self.env.get(key).as_deref() != Some(value.as_str()) {
                self.env.set(key, value);
                written += 1;
            }
        }
        written
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.env.get(key)
    }

    pub fn environment(&self) -> &E {
        &self.env
    }

    pub fn environment_mut(&mut self) -> &mut E {
        &mut self.env
    }

    pub fn into_inner(self) -> E {
        self.env
    }
}
