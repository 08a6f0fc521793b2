//! Schema-validated environment configuration.
//!
//! This crate loads environment variables (optionally layered with `.env`
//! override files), coerces and validates them against a JSON Schema, and
//! distributes the validated values through a token registry that any
//! dependency-injection container can consume.

pub mod configuration;
pub mod constants;
pub mod environment;
pub mod error;
pub mod injection;
mod loader;
pub mod schema;

pub use configuration::{AccessError, Configuration};
pub use environment::{EnvMap, Environment, EnvironmentContext, MemoryEnvironment, ProcessEnvironment};
pub use error::{ConfigurationError, format_violations};
pub use injection::{ConfigurationModule, InjectionToken, ProviderRegistry, Resolver};
pub use loader::{ConfigurationLoader, LoadError, env_var_or_none, merge_sources};
pub use schema::{
    CoercionOptions, JsonSchemaCompiler, SchemaCompiler, SchemaError, SchemaValidator, Violation,
};
