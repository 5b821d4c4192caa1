use std::collections::HashMap;

use async_trait::async_trait;
use auth::HashingAlgorithm;

use crate::config::Config;
use crate::domain::credential::errors::ConfigurationError;
use crate::domain::credential::models::ProviderDescriptor;
use crate::domain::credential::models::ProviderId;
use crate::domain::credential::ports::ProviderRegistry;
use crate::domain::credential::provider::PROVIDER_ID;

/// Provider registry built once from configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredProviderRegistry {
    providers: HashMap<ProviderId, ProviderDescriptor>,
}

impl ConfiguredProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider with its hashing policy, replacing any previous entry.
    pub fn with_provider(mut self, id: impl Into<String>, hashing: HashingAlgorithm) -> Self {
        let id = ProviderId::new(id);
        self.providers
            .insert(id.clone(), ProviderDescriptor::new(id, hashing.strategy()));
        self
    }

    /// Registry holding every configured provider. The local provider is
    /// always present.
    pub fn from_config(config: &Config) -> Self {
        let registry = config
            .providers
            .iter()
            .fold(Self::new(), |registry, (id, settings)| {
                registry.with_provider(id.clone(), settings.hashing)
            });

        if registry.providers.contains_key(&ProviderId::new(PROVIDER_ID)) {
            registry
        } else {
            registry.with_provider(PROVIDER_ID, config.local_hashing())
        }
    }
}

#[async_trait]
impl ProviderRegistry for ConfiguredProviderRegistry {
    async fn resolve(
        &self,
        provider_id: &ProviderId,
    ) -> Result<ProviderDescriptor, ConfigurationError> {
        self.providers
            .get(provider_id)
            .cloned()
            .ok_or_else(|| ConfigurationError::UnknownProvider(provider_id.to_string()))
    }
}
