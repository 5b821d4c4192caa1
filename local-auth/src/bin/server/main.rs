use std::sync::Arc;

use local_auth::config::Config;
use local_auth::credential::ports::AuthProvider;
use local_auth::credential::provider::LocalAuthProvider;
use local_auth::inbound::http::router::create_router;
use local_auth::outbound::registry::ConfiguredProviderRegistry;
use local_auth::repositories::InMemoryCredentialStore;
use local_auth::repositories::PostgresCredentialStore;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "local_auth=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "local-auth",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        database = config.database.url.is_some(),
        providers = config.providers.len(),
        local_hashing = %config.local_hashing(),
        "Configuration loaded"
    );

    let registry = Arc::new(ConfiguredProviderRegistry::from_config(&config));

    let auth_provider: Arc<dyn AuthProvider> = match &config.database.url {
        Some(url) => {
            let pg_pool = PgPoolOptions::new().max_connections(5).connect(url).await?;
            tracing::info!(
                max_connections = 5,
                database = "postgresql",
                "Database connection pool created"
            );

            sqlx::migrate!("./migrations").run(&pg_pool).await?;
            tracing::info!(database = "postgresql", "Database migrations completed");

            let store = Arc::new(PostgresCredentialStore::new(pg_pool));
            Arc::new(LocalAuthProvider::new(store, registry))
        }
        None => {
            let store = Arc::new(InMemoryCredentialStore::from_config(&config));
            tracing::info!(
                users = store.len().await,
                store = "memory",
                "Credential store seeded"
            );
            Arc::new(LocalAuthProvider::new(store, registry))
        }
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(auth_provider)).await?;

    Ok(())
}
