use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;

use crate::domain::credential::errors::StoreError;
use crate::domain::credential::models::CredentialRecord;
use crate::domain::credential::models::ProviderId;
use crate::domain::credential::ports::CredentialStore;

/// Credential store backed by the `user_credentials` table.
///
/// Each row holds one attribute of one user under one provider; a user has a
/// record when at least one row exists.
pub struct PostgresCredentialStore {
    pool: PgPool,
}

impl PostgresCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PostgresCredentialStore {
    async fn lookup(
        &self,
        username: &str,
        provider_id: &ProviderId,
    ) -> Result<Option<CredentialRecord>, StoreError> {
        let rows: Vec<(String, Option<String>)> = sqlx::query_as(
            r#"
            SELECT attribute_name, attribute_value
            FROM user_credentials
            WHERE username = $1 AND provider_id = $2
            "#,
        )
        .bind(username)
        .bind(provider_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        Ok(record_from_rows(rows))
    }
}

/// Fold `(attribute_name, attribute_value)` rows into one record.
///
/// No rows means the user has no record; a NULL value becomes `Value::Null`.
fn record_from_rows(rows: Vec<(String, Option<String>)>) -> Option<CredentialRecord> {
    if rows.is_empty() {
        return None;
    }

    let attributes = rows
        .into_iter()
        .map(|(name, value)| (name, value.map(Value::String).unwrap_or(Value::Null)))
        .collect();

    Some(CredentialRecord::new(attributes))
}
