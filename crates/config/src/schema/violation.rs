//! A single schema-validation failure.

use serde::Serialize;
use serde_json::{Map, Value};

/// One violation: where it happened, what went wrong, and the
/// violation-specific parameters (expected type, allowed values, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    /// JSON Pointer into the validated document (`""` for the root).
    pub instance_path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub params: Map<String, Value>,
}

impl Violation {
    pub fn new(instance_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            instance_path: instance_path.into(),
            message: message.into(),
            params: Map::new(),
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// The instance path as dotted segments, leading separator stripped.
    ///
    /// `/DATABASE/port` becomes `DATABASE.port`; the root is `""`.
    pub fn dotted_path(&self) -> String {
        self.instance_path
            .strip_prefix('/')
            .unwrap_or(&self.instance_path)
            .split('/')
            .map(unescape_pointer_segment)
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Whether this violation concerns the top-level `key`, either through
    /// its path or through a parameter naming it (e.g. a missing required
    /// property reported at the root).
    pub fn references(&self, key: &str) -> bool {
        let dotted = self.dotted_path();
        if dotted == key || dotted.starts_with(&format!("{key}.")) {
            return true;
        }
        self.params.values().any(|value| value.as_str() == Some(key))
    }
}

fn unescape_pointer_segment(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}
