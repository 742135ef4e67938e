// API Server Binary Entry Point
//
// Purpose: Serve the dinosaur comparison form and infographic
// Usage: cargo run --features api --bin api_server

use dino_infographic::{create_router, AppState, InfographicConfig};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "dino_infographic=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    // Configuration from environment variables
    let config = InfographicConfig::from_env();

    tracing::info!("Configuration:");
    tracing::info!(
        "  DATA_PATH: {}",
        config
            .data_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<embedded>".to_string())
    );
    tracing::info!("  IMAGE_DIR: {}", config.image_dir);
    tracing::info!("  INFOGRAPHIC_SEED: {:?}", config.seed);
    tracing::info!("  PORT: {}", config.port);

    let port = config.port;
    let state = AppState::new(config)?;
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
