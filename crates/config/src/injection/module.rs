//! The configuration module: schema, tokens, registry, and a lazily loaded cache.

use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::{Mutex, OnceLock, PoisonError};
use tracing::debug;

use super::registry::ProviderRegistry;
use super::token::InjectionToken;
use crate::configuration::Configuration;
use crate::environment::{Environment, ProcessEnvironment};
use crate::loader::{ConfigurationLoader, LoadError};

/// Everything a container needs to provide configuration values.
///
/// Construction is free of side effects; the environment is loaded and
/// validated on the first call that needs values, then cached.
pub struct ConfigurationModule<E = ProcessEnvironment> {
    schema: Value,
    tokens: BTreeMap<String, InjectionToken>,
    registry: ProviderRegistry,
    loader: Mutex<ConfigurationLoader<E>>,
    cache: OnceLock<Configuration>,
}

impl ConfigurationModule<ProcessEnvironment> {
    /// Module validating the process environment against `schema`.
    pub fn for_environment(schema: Value) -> Self {
        Self::with_loader(schema, ConfigurationLoader::new())
    }
}

impl<E: Environment> ConfigurationModule<E> {
    /// Module over a preconfigured loader.
    pub fn with_loader(schema: Value, loader: ConfigurationLoader<E>) -> Self {
        let mut registry = ProviderRegistry::new();
        let mut tokens = BTreeMap::new();

        for key in property_keys(&schema) {
            let token = InjectionToken::for_key(&key);
            let lookup = key.clone();
            registry.register(token.clone(), move |config| config.get(&lookup).cloned());
            tokens.insert(key, token);
        }
        // Registered last: a property literally named `configuration` must not
        // shadow the whole-mapping token.
        registry.register(InjectionToken::configuration(), |config| {
            Some(config.to_value())
        });

        debug!(providers = registry.len(), "built configuration module");

        Self {
            schema,
            tokens,
            registry,
            loader: Mutex::new(loader),
            cache: OnceLock::new(),
        }
    }

    pub fn schema(&self) -> &Value {
        &self.schema
    }

    /// One token per top-level schema property, keyed by property name.
    pub fn tokens(&self) -> &BTreeMap<String, InjectionToken> {
        &self.tokens
    }

    pub fn token_for(&self, key: &str) -> Option<&InjectionToken> {
        self.tokens.get(key)
    }

    /// Token to request: the property's token for `Some(key)`, the
    /// whole-mapping token for `None`.
    pub fn inject(&self, key: Option<&str>) -> InjectionToken {
        match key {
            Some(key) => InjectionToken::for_key(key),
            None => InjectionToken::configuration(),
        }
    }

    /// Every token this module can resolve.
    pub fn exports(&self) -> Vec<InjectionToken> {
        self.registry.tokens().cloned().collect()
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    pub fn is_loaded(&self) -> bool {
        self.cache.get().is_some()
    }

    /// The validated configuration, loading it on first use.
    pub fn configuration(&self) -> Result<&Configuration, LoadError> {
        if let Some(configuration) = self.cache.get() {
            return Ok(configuration);
        }

        let mut loader = self.loader.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(configuration) = self.cache.get() {
            return Ok(configuration);
        }
        let loaded = loader.load(&self.schema)?;
        Ok(self.cache.get_or_init(|| loaded))
    }

    /// Resolve `token`, loading the configuration if needed.
    ///
    /// `Ok(None)` when the token is unknown or the value is absent.
    pub fn resolve(&self, token: &InjectionToken) -> Result<Option<Value>, LoadError> {
        let configuration = self.configuration()?;
        Ok(self.registry.resolve(token, configuration))
    }

    /// Resolve a single property by name.
    pub fn get(&self, key: &str) -> Result<Option<Value>, LoadError> {
        self.resolve(&InjectionToken::for_key(key))
    }

    /// Drop the cached configuration and restore the environment snapshot.
    pub fn restore(&mut self) -> bool {
        self.cache.take();
        self.loader
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .restore()
    }
}

fn property_keys(schema: &Value) -> Vec<String> {
    schema
        .get("properties")
        .and_then(Value::as_object)
        .map(|properties| properties.keys().cloned().collect())
        .unwrap_or_default()
}
