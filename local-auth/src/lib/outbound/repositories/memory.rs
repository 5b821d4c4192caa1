use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::domain::credential::errors::StoreError;
use crate::domain::credential::models::CredentialRecord;
use crate::domain::credential::models::ProviderId;
use crate::domain::credential::ports::CredentialStore;
use crate::domain::credential::provider::PROVIDER_ID;

type RecordKey = (ProviderId, String);

/// Credential store kept in process memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentialStore {
    /// Map of (provider_id, username) -> record
    records: Arc<RwLock<HashMap<RecordKey, CredentialRecord>>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the configured local users.
    pub fn from_config(config: &Config) -> Self {
        let provider_id = ProviderId::new(PROVIDER_ID);
        let records = config
            .users
            .iter()
            .map(|seed| {
                (
                    (provider_id.clone(), seed.username.clone()),
                    CredentialRecord::with_password_hash(seed.password_hash.clone()),
                )
            })
            .collect();

        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    /// Insert or replace the record of a user under a provider.
    pub async fn insert(
        &self,
        username: impl Into<String>,
        provider_id: &ProviderId,
        record: CredentialRecord,
    ) {
        self.records
            .write()
            .await
            .insert((provider_id.clone(), username.into()), record);
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn lookup(
        &self,
        username: &str,
        provider_id: &ProviderId,
    ) -> Result<Option<CredentialRecord>, StoreError> {
        let key = (provider_id.clone(), username.to_string());
        Ok(self.records.read().await.get(&key).cloned())
    }
}
