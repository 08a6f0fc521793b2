//! Token → resolver registry.

use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

use super::token::InjectionToken;
use crate::configuration::Configuration;

/// Extracts one injectable value from a validated configuration.
pub type Resolver = Box<dyn Fn(&Configuration) -> Option<Value> + Send + Sync>;

/// Resolvers keyed by token, in token order.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: BTreeMap<InjectionToken, Resolver>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `resolver` for `token`, replacing any previous one.
    pub fn register<F>(&mut self, token: InjectionToken, resolver: F)
    where
        F: Fn(&Configuration) -> Option<Value> + Send + Sync + 'static,
    {
        self.providers.insert(token, Box::new(resolver));
    }

    pub fn contains(&self, token: &InjectionToken) -> bool {
        self.providers.contains_key(token)
    }

    pub fn tokens(&self) -> impl Iterator<Item = &InjectionToken> {
        self.providers.keys()
    }

    /// Run the resolver for `token`. `None` when the token is unknown or the
    /// resolver yields nothing.
    pub fn resolve(&self, token: &InjectionToken, configuration: &Configuration) -> Option<Value> {
        self.providers
            .get(token)
            .and_then(|resolver| resolver(configuration))
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("tokens", &self.providers.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_and_resolve() {
        let mut registry = ProviderRegistry::new();
        let token = InjectionToken::for_key("PORT");
        registry.register(token.clone(), |config| config.get("PORT").cloned());

        let Value::Object(values) = json!({ "PORT": 8080 }) else {
            unreachable!()
        };
        let config = Configuration::new(values);

        assert!(registry.contains(&token));
        assert_eq!(registry.resolve(&token, &config), Some(json!(8080)));
        assert_eq!(registry.resolve(&InjectionToken::for_key("NOPE"), &config), None);
    }
}
