use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use quick_login_admin::providers::{self, ProviderRegistry};
use quick_login_admin::store::PgOptionsStore;
use quick_login_admin::{admin, AppState, Config, SharedState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quick_login_admin=info".into()),
        )
        .init();

    // Load config
    let config = Config::from_env()?;
    info!("quick-login-admin v{}", env!("CARGO_PKG_VERSION"));
    info!("Listening on {}:{}", config.host, config.port);

    // Initialize the options store and seed defaults
    let store = PgOptionsStore::new(&config.database_url).await?;
    store.migrate().await?;
    store.ensure_defaults().await?;
    info!("Options store connected and migrated");

    // Register login providers
    let mut registry = ProviderRegistry::new();
    providers::register_defaults(&mut registry);
    info!("Registered {} login providers", registry.count());

    // Build shared state
    let state: SharedState = Arc::new(AppState {
        config: config.clone(),
        store: Arc::new(store),
        registry,
    });

    // Build router
    let app = admin::router(state);

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Settings page at {}", config.settings_url());
    axum::serve(listener, app).await?;

    Ok(())
}
