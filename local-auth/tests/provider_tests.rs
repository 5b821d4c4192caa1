mod common;

use std::sync::Arc;

use auth::HashingAlgorithm;
use local_auth::credential::errors::AuthError;
use local_auth::credential::errors::AuthErrorKind;
use local_auth::credential::errors::ConfigurationError;
use local_auth::credential::models::ClientCredentials;
use local_auth::credential::models::CredentialRecord;
use local_auth::credential::models::ProviderConfig;
use local_auth::credential::models::ProviderId;
use local_auth::credential::models::SessionId;
use local_auth::credential::ports::AuthProvider;
use local_auth::credential::provider::make_password_hash;
use local_auth::credential::provider::LocalAuthProvider;
use local_auth::credential::provider::PROVIDER_ID;
use local_auth::credential::session::SessionState;
use local_auth::outbound::registry::ConfiguredProviderRegistry;
use local_auth::repositories::InMemoryCredentialStore;

async fn open(
    provider: &common::TestProvider,
    user: &str,
    password: &str,
) -> Result<local_auth::credential::session::AuthSession, AuthError> {
    provider
        .open_session(
            SessionId::new(),
            &ProviderConfig::new(),
            &ClientCredentials::with_user_password(user, password),
        )
        .await
}

#[tokio::test]
async fn test_matching_password_opens_session() {
    let provider = common::provider().await;

    let session = open(&provider, "alice", "secret")
        .await
        .expect("Failed to open session");

    assert_eq!(session.user(), "alice");
    assert_eq!(session.state(), SessionState::Open);
}

#[tokio::test]
async fn test_wrong_password_and_unknown_user_share_error_kind() {
    let provider = common::provider().await;

    let wrong = open(&provider, "alice", "wrong").await.unwrap_err();
    let unknown = open(&provider, "bob", "secret").await.unwrap_err();

    assert_eq!(wrong.kind(), AuthErrorKind::InvalidCredentials);
    assert_eq!(wrong, unknown);
}

#[tokio::test]
async fn test_restricted_user_regardless_of_password() {
    let provider = common::provider().await;

    for password in ["secret", "anything", ""] {
        let error = open(&provider, "carol", password).await.unwrap_err();
        assert_eq!(error, AuthError::NoStoredPassword);
    }
}

#[tokio::test]
async fn test_empty_password_with_valid_digest() {
    let provider = common::provider().await;

    let error = open(&provider, "alice", "").await.unwrap_err();
    assert_eq!(error, AuthError::NoClientPassword);
}

#[tokio::test]
async fn test_close_and_refresh_keep_identity() {
    let provider = common::provider().await;
    let mut session = open(&provider, "alice", "secret")
        .await
        .expect("Failed to open session");

    provider
        .refresh_session(&session)
        .await
        .expect("Refresh failed");
    assert_eq!(session.user(), "alice");
    assert!(session.is_open());

    provider
        .close_session(&mut session)
        .await
        .expect("Close failed");
    assert_eq!(session.user(), "alice");
    assert_eq!(session.state(), SessionState::Closed);
}

#[tokio::test]
async fn test_local_provider_not_registered() {
    let store = Arc::new(common::seeded_store().await);
    let registry = Arc::new(ConfiguredProviderRegistry::new());
    let provider = LocalAuthProvider::new(store, registry);

    let error = open(&provider, "alice", "secret").await.unwrap_err();
    assert_eq!(
        error,
        AuthError::Configuration(ConfigurationError::UnknownProvider(
            PROVIDER_ID.to_string()
        ))
    );
    assert!(!error.is_credential_failure());
}

#[tokio::test]
async fn test_swapping_hashing_strategy() {
    let store = InMemoryCredentialStore::new();
    let stored = HashingAlgorithm::Argon2
        .strategy()
        .hash("dave", "correct horse")
        .expect("Failed to hash password");
    store
        .insert(
            "dave",
            &ProviderId::new(PROVIDER_ID),
            CredentialRecord::with_password_hash(stored),
        )
        .await;
    let registry =
        ConfiguredProviderRegistry::new().with_provider(PROVIDER_ID, HashingAlgorithm::Argon2);
    let provider = LocalAuthProvider::new(Arc::new(store), Arc::new(registry));

    let session = open(&provider, "dave", "correct horse")
        .await
        .expect("Failed to open session");
    assert_eq!(session.user(), "dave");

    let error = open(&provider, "dave", "battery staple").await.unwrap_err();
    assert_eq!(error, AuthError::InvalidCredentials);
}

#[test]
fn test_password_hash_is_reproducible() {
    let stored = make_password_hash("alice", "secret").unwrap();
    let recomputed = HashingAlgorithm::Hash
        .strategy()
        .hash("alice", "secret")
        .unwrap();

    assert_eq!(stored, recomputed);
}
