//! Token-addressed distribution of validated configuration.
//!
//! Responsibilities:
//! - Derive a stable `InjectionToken` for every top-level schema property,
//!   plus one token for the whole mapping.
//! - Map each token to a resolver in a `ProviderRegistry` that any
//!   dependency-injection container can consume.
//! - Load lazily: building a `ConfigurationModule` never touches the environment.
//!
//! Does NOT handle:
//! - Loading and validation (delegated to `ConfigurationLoader`).
//! - Wiring into a specific container; consumers read the registry.

mod module;
mod registry;
mod token;

pub use module::ConfigurationModule;
pub use registry::{ProviderRegistry, Resolver};
pub use token::InjectionToken;
