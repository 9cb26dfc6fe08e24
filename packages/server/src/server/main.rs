// Main entry point for API server

use std::sync::Arc;

use anyhow::{Context, Result};
use server_core::{
    domains::auth::JwtService,
    kernel::{seed_demo_catalog, MemoryStore, ServerDeps},
    server::build_app,
    Config,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Doctors Portal API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Set up the document store
    let store: Arc<dyn server_core::kernel::DocumentStore> = Arc::new(MemoryStore::new());
    if config.seed_demo_catalog {
        let inserted = seed_demo_catalog(store.as_ref())
            .await
            .context("Failed to seed treatment catalog")?;
        tracing::info!(inserted, "Treatment catalog ready");
    }

    // Build application
    let jwt_service = Arc::new(JwtService::new(&config.jwt_secret, config.jwt_issuer.clone()));
    let deps = ServerDeps::new(store, jwt_service);
    let app = build_app(deps);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
