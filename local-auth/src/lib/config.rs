use std::collections::HashMap;
use std::env;

use auth::HashingAlgorithm;
use config::builder::ConfigBuilder as SourceBuilder;
use config::builder::DefaultState;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

use crate::domain::credential::provider::DEFAULT_HASHING;
use crate::domain::credential::provider::PROVIDER_ID;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub providers: HashMap<String, ProviderSettings>,
    #[serde(default)]
    pub users: Vec<UserSeed>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

/// Postgres credential store; the seeded in-memory store is used when `url` is unset.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct DatabaseConfig {
    pub url: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ProviderSettings {
    #[serde(default)]
    pub hashing: HashingAlgorithm,
}

/// Local user loaded into the in-memory credential store.
#[derive(Deserialize, Clone)]
pub struct UserSeed {
    pub username: String,
    /// Stored digest; empty means login is restricted for this user.
    #[serde(default)]
    pub password_hash: String,
}

impl std::fmt::Debug for UserSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserSeed")
            .field("username", &self.username)
            .field("has_password", &!self.password_hash.is_empty())
            .finish()
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, SERVER__HTTP_PORT, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let files = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false));

        Self::with_environment_overrides(files)
    }

    /// Layer environment variables over the given sources and deserialize.
    ///
    /// Nested keys are separated by `__`:
    /// DATABASE__URL=postgres://... overrides database.url
    fn with_environment_overrides(
        sources: SourceBuilder<DefaultState>,
    ) -> Result<Self, ConfigError> {
        sources
            .add_source(Environment::default().separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Hashing policy of the local provider, falling back to the default digest.
    pub fn local_hashing(&self) -> HashingAlgorithm {
        self.providers
            .get(PROVIDER_ID)
            .map(|settings| settings.hashing)
            .unwrap_or(DEFAULT_HASHING)
    }
}
