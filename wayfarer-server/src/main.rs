use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wayfarer_server::api::{self, AppState};
use wayfarer_server::config::Config;
use wayfarer_server::registry::{InMemoryRegistry, Registry};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wayfarer_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Wayfarer Server...");

    let config = Config::from_env();
    config.validate().expect("Invalid configuration");

    let registry: Registry = Arc::new(InMemoryRegistry::new());

    // Build router with all API endpoints
    let app = api::create_router(AppState {
        registry,
        config: Arc::new(config.clone()),
    });

    tracing::info!("Listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
