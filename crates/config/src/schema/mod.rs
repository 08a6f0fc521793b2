//! Schema compilation, type coercion, and violation reporting.
//!
//! Responsibilities:
//! - Define the `SchemaCompiler` / `SchemaValidator` seam so any JSON Schema
//!   implementation can be plugged into the loader.
//! - Provide the default `JsonSchemaCompiler` backed by the `jsonschema` crate.
//! - Coerce raw environment strings into schema-declared types and apply defaults.
//!
//! Does NOT handle:
//! - Merging environment sources (see `loader`).
//! - Rendering violations for humans (see `error::format_violations`).
//!
//! Invariants:
//! - Validation collects every violation; it never stops at the first one.
//! - Coercion only touches top-level properties; environment documents are flat.

mod coerce;
mod validator;
mod violation;

pub use coerce::{apply_defaults, coerce_properties, coerce_value, declared_types};
pub use validator::{
    CoercionOptions, JsonSchemaCompiler, SchemaCompiler, SchemaError, SchemaValidator,
};
pub use violation::Violation;
