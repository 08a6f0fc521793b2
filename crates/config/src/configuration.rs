//! The validated configuration mapping.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::environment::EnvMap;

/// Errors from typed access to a `Configuration`.
#[derive(Error, Debug)]
pub enum AccessError {
    #[error("configuration key not found: {0}")]
    MissingKey(String),

    #[error("failed to deserialize configuration {target}")]
    Deserialize {
        target: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A coerced, schema-validated mapping from variable name to JSON value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Configuration {
    values: Map<String, Value>,
}

impl Configuration {
    pub fn new(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// Keep only the schema's declared top-level properties.
    ///
    /// A schema without `properties` keeps the whole document.
    pub(crate) fn from_validated(schema: &Value, mut document: Map<String, Value>) -> Self {
        let Some(properties) = schema.get("properties").and_then(Value::as_object) else {
            return Self::new(document);
        };

        let values = properties
            .keys()
            .filter_map(|key| document.remove_entry(key))
            .collect();
        Self::new(values)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Deserialize a single value.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<T, AccessError> {
        let value = self
            .values
            .get(key)
            .ok_or_else(|| AccessError::MissingKey(key.to_string()))?;
        T::deserialize(value).map_err(|source| AccessError::Deserialize {
            target: key.to_string(),
            source,
        })
    }

    /// Deserialize the whole mapping into a typed struct.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, AccessError> {
        T::deserialize(&self.to_value()).map_err(|source| AccessError::Deserialize {
            target: std::any::type_name::<T>().to_string(),
            source,
        })
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.values.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.values
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.values
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.values.clone())
    }

    /// Render every value as an environment string.
    pub fn to_env(&self) -> EnvMap {
        stringify_document(&self.values)
    }
}

/// Environment-string form of each value: strings verbatim, `null` as the
/// empty string, everything else as compact JSON.
pub(crate) fn stringify_document(document: &Map<String, Value>) -> EnvMap {
    document
        .iter()
        .map(|(key, value)| (key.clone(), stringify_value(value)))
        .collect()
}

pub(crate) fn stringify_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    fn sample() -> Configuration {
        let Value::Object(values) = json!({ "PORT": 8080, "HOST": "localhost", "DEBUG": true }) else {
            unreachable!()
        };
        Configuration::new(values)
    }

    #[test]
    fn test_from_validated_keeps_declared_properties() {
        let schema = json!({ "properties": { "PORT": {}, "MISSING": {} } });
        let Value::Object(document) = json!({ "PORT": 1, "PATH": "/usr/bin" }) else {
            unreachable!()
        };

        let config = Configuration::from_validated(&schema, document);

        assert_eq!(config.to_value(), json!({ "PORT": 1 }));
    }

    #[test]
    fn test_get_as_typed_values() {
        let config = sample();
        assert_eq!(config.get_as::<u16>("PORT").unwrap(), 8080);
        assert!(config.get_as::<bool>("DEBUG").unwrap());
        assert!(matches!(
            config.get_as::<String>("NOPE"),
            Err(AccessError::MissingKey(key)) if key == "NOPE"
        ));
        assert!(matches!(
            config.get_as::<u16>("HOST"),
            Err(AccessError::Deserialize { .. })
        ));
    }

    #[test]
    fn test_deserialize_whole_mapping() {
        #[derive(Deserialize)]
        #[serde(rename_all = "UPPERCASE")]
        struct Settings {
            port: u16,
            host: String,
        }

        let settings: Settings = sample().deserialize().unwrap();
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.host, "localhost");
    }

    #[test]
    fn test_to_env_stringifies_values() {
        let env = sample().to_env();
        assert_eq!(env["PORT"], "8080");
        assert_eq!(env["DEBUG"], "true");
        assert_eq!(env["HOST"], "localhost");
        assert_eq!(stringify_value(&Value::Null), "");
    }
}
