use std::sync::Arc;

use async_trait::async_trait;
use auth::HashingAlgorithm;
use auth::HashingError;

use crate::domain::credential::errors::AuthError;
use crate::domain::credential::models::ClientCredentials;
use crate::domain::credential::models::ProviderConfig;
use crate::domain::credential::models::ProviderId;
use crate::domain::credential::models::SessionId;
use crate::domain::credential::ports::AuthProvider;
use crate::domain::credential::ports::CredentialStore;
use crate::domain::credential::ports::ProviderRegistry;
use crate::domain::credential::session::AuthSession;
use crate::domain::credential::verifier::CredentialVerifier;

/// Identifier of the local user name / password provider.
pub const PROVIDER_ID: &str = "local";

/// Hashing policy the local provider uses when none is configured.
pub const DEFAULT_HASHING: HashingAlgorithm = HashingAlgorithm::Hash;

/// Compute the digest to store for a user of the local provider.
///
/// # Arguments
/// * `username` - User the password belongs to
/// * `password` - Plaintext password
///
/// # Returns
/// Digest produced by the default local hashing policy
///
/// # Errors
/// * `HashingFailed` - Hashing operation failed
pub fn make_password_hash(username: &str, password: &str) -> Result<String, HashingError> {
    DEFAULT_HASHING.strategy().hash(username, password)
}

/// Provider authenticating users against locally stored password digests.
pub struct LocalAuthProvider<CS, PR>
where
    CS: CredentialStore,
    PR: ProviderRegistry,
{
    verifier: CredentialVerifier<CS, PR>,
    provider_id: ProviderId,
}

impl<CS, PR> LocalAuthProvider<CS, PR>
where
    CS: CredentialStore,
    PR: ProviderRegistry,
{
    /// Create a new local provider with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - Credential record lookup
    /// * `registry` - Provider policy resolution
    ///
    /// # Returns
    /// Configured provider instance
    pub fn new(store: Arc<CS>, registry: Arc<PR>) -> Self {
        Self {
            verifier: CredentialVerifier::new(store, registry),
            provider_id: ProviderId::new(PROVIDER_ID),
        }
    }

    pub fn provider_id(&self) -> &ProviderId {
        &self.provider_id
    }
}

#[async_trait]
impl<CS, PR> AuthProvider for LocalAuthProvider<CS, PR>
where
    CS: CredentialStore,
    PR: ProviderRegistry,
{
    async fn open_session(
        &self,
        parent: SessionId,
        provider_config: &ProviderConfig,
        credentials: &ClientCredentials,
    ) -> Result<AuthSession, AuthError> {
        let identity = self
            .verifier
            .verify(&self.provider_id, provider_config, credentials)
            .await?;

        let session = AuthSession::open(parent, identity);
        tracing::info!(
            parent_session = %parent,
            provider_id = %self.provider_id,
            username = %session.user(),
            "Auth session opened"
        );

        Ok(session)
    }

    async fn close_session(&self, session: &mut AuthSession) -> Result<(), AuthError> {
        // No provider-side resources to release.
        session.close();
        tracing::debug!(
            parent_session = %session.parent(),
            username = %session.user(),
            "Auth session closed"
        );
        Ok(())
    }

    async fn refresh_session(&self, session: &AuthSession) -> Result<(), AuthError> {
        session.refresh();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use mockall::mock;

    use super::*;
    use crate::domain::credential::errors::ConfigurationError;
    use crate::domain::credential::errors::StoreError;
    use crate::domain::credential::models::CredentialRecord;
    use crate::domain::credential::models::ProviderDescriptor;
    use crate::domain::credential::session::SessionState;

    mock! {
        pub TestCredentialStore {}

        #[async_trait]
        impl CredentialStore for TestCredentialStore {
            async fn lookup(&self, username: &str, provider_id: &ProviderId) -> Result<Option<CredentialRecord>, StoreError>;
        }
    }

    mock! {
        pub TestProviderRegistry {}

        #[async_trait]
        impl ProviderRegistry for TestProviderRegistry {
            async fn resolve(&self, provider_id: &ProviderId) -> Result<ProviderDescriptor, ConfigurationError>;
        }
    }

    fn provider_for(
        username: &'static str,
        password: &'static str,
    ) -> LocalAuthProvider<MockTestCredentialStore, MockTestProviderRegistry> {
        let stored = make_password_hash(username, password).expect("Failed to hash password");

        let mut store = MockTestCredentialStore::new();
        store.expect_lookup().returning(move |user, _| {
            if *user == *username {
                Ok(Some(CredentialRecord::with_password_hash(stored.clone())))
            } else {
                Ok(None)
            }
        });

        let mut registry = MockTestProviderRegistry::new();
        registry
            .expect_resolve()
            .withf(|id| id.as_str() == PROVIDER_ID)
            .returning(|id| Ok(ProviderDescriptor::new(id.clone(), DEFAULT_HASHING.strategy())));

        LocalAuthProvider::new(Arc::new(store), Arc::new(registry))
    }

    #[test]
    fn test_make_password_hash_is_deterministic() {
        let first = make_password_hash("alice", "secret").unwrap();
        let second = make_password_hash("alice", "secret").unwrap();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[tokio::test]
    async fn test_open_session_binds_identity_and_parent() {
        let provider = provider_for("alice", "secret");
        let parent = SessionId::new();

        let session = provider
            .open_session(
                parent,
                &ProviderConfig::new(),
                &ClientCredentials::with_user_password("alice", "secret"),
            )
            .await
            .expect("Failed to open session");

        assert_eq!(session.user(), "alice");
        assert_eq!(session.parent(), parent);
        assert_eq!(session.provider_id().as_str(), PROVIDER_ID);
        assert_eq!(session.state(), SessionState::Open);
    }

    #[tokio::test]
    async fn test_open_session_failure() {
        let provider = provider_for("alice", "secret");

        let result = provider
            .open_session(
                SessionId::new(),
                &ProviderConfig::new(),
                &ClientCredentials::with_user_password("alice", "wrong"),
            )
            .await;
        assert_eq!(result.unwrap_err(), AuthError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_open_session_succeeds_for_matching_pairs() {
        let pairs = [
            ("alice", "secret"),
            ("bob", "pass_word!"),
            ("carol", "ünïcødé"),
            ("dave", " spaces are kept "),
        ];

        for (username, password) in pairs {
            let provider = provider_for(username, password);
            let session = provider
                .open_session(
                    SessionId::new(),
                    &ProviderConfig::new(),
                    &ClientCredentials::with_user_password(username, password),
                )
                .await
                .expect("Failed to open session");
            assert_eq!(session.user(), username);
        }
    }

    #[tokio::test]
    async fn test_close_and_refresh_never_fail() {
        let provider = provider_for("alice", "secret");
        let mut session = provider
            .open_session(
                SessionId::new(),
                &ProviderConfig::new(),
                &ClientCredentials::with_user_password("alice", "secret"),
            )
            .await
            .expect("Failed to open session");

        assert!(provider.refresh_session(&session).await.is_ok());
        assert!(session.is_open());
        assert_eq!(session.user(), "alice");

        assert!(provider.close_session(&mut session).await.is_ok());
        assert_eq!(session.state(), SessionState::Closed);
        assert_eq!(session.user(), "alice");

        assert!(provider.close_session(&mut session).await.is_ok());
        assert!(provider.refresh_session(&session).await.is_ok());
        assert_eq!(session.user(), "alice");
    }
}
