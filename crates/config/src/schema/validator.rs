//! The validator seam and its `jsonschema` implementation.

use jsonschema::error::{TypeKind, ValidationErrorKind};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use super::coerce::{apply_defaults, coerce_properties};
use super::violation::Violation;

/// The schema itself could not be compiled.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("invalid schema: {message}")]
pub struct SchemaError {
    pub message: String,
}

impl SchemaError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A compiled schema, ready to coerce and check documents.
pub trait SchemaValidator: Send + Sync {
    /// Coerce `document` in place and validate it.
    ///
    /// On failure every violation is returned, in the validator's order.
    fn validate(&self, document: &mut Map<String, Value>) -> Result<(), Vec<Violation>>;
}

/// Turns a raw schema into a `SchemaValidator`.
pub trait SchemaCompiler: Send + Sync {
    fn compile(&self, schema: &Value) -> Result<Box<dyn SchemaValidator>, SchemaError>;
}

/// What the validator may change before checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoercionOptions {
    /// Convert strings into declared scalar types.
    pub coerce_types: bool,
    /// Insert `default` values for missing properties.
    pub use_defaults: bool,
}

impl Default for CoercionOptions {
    fn default() -> Self {
        Self {
            coerce_types: true,
            use_defaults: true,
        }
    }
}

/// Default compiler backed by the `jsonschema` crate, with format
/// assertions enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSchemaCompiler {
    options: CoercionOptions,
}

impl JsonSchemaCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(mut self, options: CoercionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> CoercionOptions {
        self.options
    }
}

impl SchemaCompiler for JsonSchemaCompiler {
    fn compile(&self, schema: &Value) -> Result<Box<dyn SchemaValidator>, SchemaError> {
        let validator = jsonschema::options()
            .should_validate_formats(true)
            .build(schema)
            .map_err(|e| SchemaError::new(e.to_string()))?;

        Ok(Box::new(JsonSchemaValidator {
            schema: schema.clone(),
            validator,
            options: self.options,
        }))
    }
}

struct JsonSchemaValidator {
    schema: Value,
    validator: jsonschema::Validator,
    options: CoercionOptions,
}

impl SchemaValidator for JsonSchemaValidator {
    fn validate(&self, document: &mut Map<String, Value>) -> Result<(), Vec<Violation>> {
        if self.options.use_defaults {
            let applied = apply_defaults(&self.schema, document);
            if !applied.is_empty() {
                debug!(keys = ?applied, "applied schema defaults");
            }
        }
        if self.options.coerce_types {
            let coerced = coerce_properties(&self.schema, document);
            if !coerced.is_empty() {
                debug!(keys = ?coerced, "coerced environment values");
            }
        }

        let instance = Value::Object(std::mem::take(document));
        let violations: Vec<Violation> = self
            .validator
            .iter_errors(&instance)
            .map(|error| {
                let mut violation =
                    Violation::new(error.instance_path.to_string(), error.to_string());
                violation.params = violation_params(&error.kind);
                violation
            })
            .collect();

        if let Value::Object(map) = instance {
            *document = map;
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Extra parameters worth surfacing for the common keywords.
fn violation_params(kind: &ValidationErrorKind) -> Map<String, Value> {
    let mut params = Map::new();
    match kind {
        ValidationErrorKind::Required { property } => {
            params.insert("property".into(), property.clone());
        }
        ValidationErrorKind::Type {
            kind: TypeKind::Single(ty),
        } => {
            params.insert("type".into(), Value::String(ty.to_string()));
        }
        ValidationErrorKind::Type {
            kind: TypeKind::Multiple(types),
        } => {
            let types = types.iter().map(|ty| Value::String(ty.to_string())).collect();
            params.insert("type".into(), Value::Array(types));
        }
        ValidationErrorKind::Enum { options } => {
            params.insert("allowed".into(), options.clone());
        }
        ValidationErrorKind::Pattern { pattern } => {
            params.insert("pattern".into(), Value::String(pattern.clone()));
        }
        ValidationErrorKind::Format { format } => {
            params.insert("format".into(), Value::String(format.clone()));
        }
        ValidationErrorKind::Minimum { limit } | ValidationErrorKind::Maximum { limit } => {
            params.insert("limit".into(), limit.clone());
        }
        ValidationErrorKind::MinLength { limit } | ValidationErrorKind::MaxLength { limit } => {
            params.insert("limit".into(), Value::from(*limit));
        }
        ValidationErrorKind::AdditionalProperties { unexpected } => {
            params.insert("unexpected".into(), Value::from(unexpected.clone()));
        }
        _ => {}
    }
    params
}
