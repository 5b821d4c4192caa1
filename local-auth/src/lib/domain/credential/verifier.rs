use std::sync::Arc;

use crate::domain::credential::errors::AuthError;
use crate::domain::credential::models::ClientCredentials;
use crate::domain::credential::models::ProviderConfig;
use crate::domain::credential::models::ProviderId;
use crate::domain::credential::models::VerifiedIdentity;
use crate::domain::credential::ports::CredentialStore;
use crate::domain::credential::ports::ProviderRegistry;

/// Decides whether submitted user name and password match a stored digest.
///
/// Unknown users and wrong passwords fail with the same `InvalidCredentials`
/// error; the precise reason is only recorded in debug logs.
pub struct CredentialVerifier<CS, PR>
where
    CS: CredentialStore,
    PR: ProviderRegistry,
{
    store: Arc<CS>,
    registry: Arc<PR>,
}

impl<CS, PR> CredentialVerifier<CS, PR>
where
    CS: CredentialStore,
    PR: ProviderRegistry,
{
    /// Create a new verifier with injected collaborators.
    ///
    /// # Arguments
    /// * `store` - Credential record lookup
    /// * `registry` - Provider policy resolution
    ///
    /// # Returns
    /// Configured verifier instance
    pub fn new(store: Arc<CS>, registry: Arc<PR>) -> Self {
        Self { store, registry }
    }

    /// Verify submitted credentials against the record stored for the provider.
    ///
    /// # Arguments
    /// * `provider_id` - Provider the credentials are checked against
    /// * `_provider_config` - Dispatcher-supplied configuration (unused by password checks)
    /// * `credentials` - Submitted `user` and `password`
    ///
    /// # Returns
    /// Identity that passed verification
    ///
    /// # Errors
    /// * `InvalidCredentials` - Missing user name, unknown user, or digest mismatch
    /// * `NoStoredPassword` - Record has no usable digest
    /// * `NoClientPassword` - Submitted password is missing or empty
    /// * `Configuration` - Provider id is not registered
    /// * `Store` / `Hashing` - Collaborator failure
    pub async fn verify(
        &self,
        provider_id: &ProviderId,
        _provider_config: &ProviderConfig,
        credentials: &ClientCredentials,
    ) -> Result<VerifiedIdentity, AuthError> {
        let Some(username) = credentials.user().filter(|user| !user.is_empty()) else {
            tracing::debug!(
                provider_id = %provider_id,
                reason = "missing_username",
                "Credential verification failed"
            );
            return Err(AuthError::InvalidCredentials);
        };

        let descriptor = self.registry.resolve(provider_id).await?;

        let Some(record) = self.store.lookup(&username, provider_id).await? else {
            tracing::debug!(
                provider_id = %provider_id,
                username = %username,
                reason = "unknown_user",
                "Credential verification failed"
            );
            return Err(AuthError::InvalidCredentials);
        };

        let Some(stored_hash) = record.password_hash() else {
            tracing::debug!(
                provider_id = %provider_id,
                username = %username,
                reason = "no_stored_password",
                "Credential verification failed"
            );
            return Err(AuthError::NoStoredPassword);
        };

        let Some(password) = credentials.password().filter(|password| !password.is_empty())
        else {
            tracing::debug!(
                provider_id = %provider_id,
                username = %username,
                reason = "no_client_password",
                "Credential verification failed"
            );
            return Err(AuthError::NoClientPassword);
        };

        if !descriptor
            .hashing
            .verify(&username, &password, &stored_hash)?
        {
            tracing::debug!(
                provider_id = %provider_id,
                username = %username,
                algorithm = %descriptor.hashing.algorithm(),
                reason = "digest_mismatch",
                "Credential verification failed"
            );
            return Err(AuthError::InvalidCredentials);
        }

        tracing::info!(
            provider_id = %provider_id,
            username = %username,
            "Credentials verified"
        );

        Ok(VerifiedIdentity::new(username, descriptor.id))
    }
}
