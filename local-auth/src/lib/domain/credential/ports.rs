use async_trait::async_trait;

use crate::domain::credential::errors::AuthError;
use crate::domain::credential::errors::ConfigurationError;
use crate::domain::credential::errors::StoreError;
use crate::domain::credential::models::ClientCredentials;
use crate::domain::credential::models::CredentialRecord;
use crate::domain::credential::models::ProviderConfig;
use crate::domain::credential::models::ProviderDescriptor;
use crate::domain::credential::models::ProviderId;
use crate::domain::credential::models::SessionId;
use crate::domain::credential::session::AuthSession;

/// Capability shared by every authentication provider.
#[async_trait]
pub trait AuthProvider: Send + Sync + 'static {
    /// Verify credentials and open a session attached to a parent session.
    ///
    /// # Arguments
    /// * `parent` - Parent session the identity is attached to
    /// * `provider_config` - Provider configuration supplied by the dispatcher
    /// * `credentials` - Credentials submitted by the client
    ///
    /// # Returns
    /// Open session bound to the verified identity
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown user or wrong password
    /// * `NoStoredPassword` - User has no password set (login restricted)
    /// * `NoClientPassword` - No password submitted
    /// * `Configuration` - Provider is not registered
    /// * `Store` / `Hashing` - Infrastructure failure
    async fn open_session(
        &self,
        parent: SessionId,
        provider_config: &ProviderConfig,
        credentials: &ClientCredentials,
    ) -> Result<AuthSession, AuthError>;

    /// Release provider resources held by a session and mark it closed.
    async fn close_session(&self, session: &mut AuthSession) -> Result<(), AuthError>;

    /// Renew provider state of an open session.
    async fn refresh_session(&self, session: &AuthSession) -> Result<(), AuthError>;
}

/// Read access to stored credential records.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Retrieve the credential record of a user under a provider.
    ///
    /// # Arguments
    /// * `username` - User name to search for
    /// * `provider_id` - Provider the record belongs to
    ///
    /// # Returns
    /// Optional record (None if the user has no record)
    ///
    /// # Errors
    /// * `Unavailable` - Storage could not be reached
    async fn lookup(
        &self,
        username: &str,
        provider_id: &ProviderId,
    ) -> Result<Option<CredentialRecord>, StoreError>;
}

/// Resolution of provider ids to their configured policy.
#[async_trait]
pub trait ProviderRegistry: Send + Sync + 'static {
    /// Resolve a provider descriptor.
    ///
    /// # Errors
    /// * `UnknownProvider` - Provider id is not configured
    async fn resolve(&self, provider_id: &ProviderId)
        -> Result<ProviderDescriptor, ConfigurationError>;
}
