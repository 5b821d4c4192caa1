#![allow(dead_code)]

use std::sync::Arc;

use auth::HashingAlgorithm;
use local_auth::credential::models::CredentialRecord;
use local_auth::credential::models::ProviderId;
use local_auth::credential::provider::make_password_hash;
use local_auth::credential::provider::LocalAuthProvider;
use local_auth::credential::provider::PROVIDER_ID;
use local_auth::inbound::http::router::create_router;
use local_auth::outbound::registry::ConfiguredProviderRegistry;
use local_auth::repositories::InMemoryCredentialStore;

pub type TestProvider = LocalAuthProvider<InMemoryCredentialStore, ConfiguredProviderRegistry>;

/// Credential store seeded with the fixture users:
/// - alice / secret
/// - carol with an empty stored digest (login restricted)
pub async fn seeded_store() -> InMemoryCredentialStore {
    let store = InMemoryCredentialStore::new();
    let local = ProviderId::new(PROVIDER_ID);

    let alice_hash = make_password_hash("alice", "secret").expect("Failed to hash password");
    store
        .insert("alice", &local, CredentialRecord::with_password_hash(alice_hash))
        .await;
    store
        .insert("carol", &local, CredentialRecord::with_password_hash(""))
        .await;

    store
}

pub fn registry() -> ConfiguredProviderRegistry {
    ConfiguredProviderRegistry::new().with_provider(PROVIDER_ID, HashingAlgorithm::Hash)
}

pub async fn provider() -> TestProvider {
    LocalAuthProvider::new(Arc::new(seeded_store().await), Arc::new(registry()))
}

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let application = create_router(Arc::new(provider().await));

        tokio::spawn(async move {
            axum::serve(listener, application)
                .await
                .expect("Server failed");
        });

        Self {
            address,
            port,
            api_client: reqwest::Client::new(),
        }
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Submit credentials to the local login endpoint
    pub async fn login(&self, credentials: serde_json::Value) -> reqwest::Response {
        self.post("/api/auth/local/login")
            .json(&serde_json::json!({ "credentials": credentials }))
            .send()
            .await
            .expect("Failed to execute request")
    }
}
