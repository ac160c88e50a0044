//! ID Lookup - API Server Binary
//!
//! This binary starts the HTTP API server for the ID lookup system.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin id-lookup-api
//!
//! # Run with environment variables
//! API_HOST=0.0.0.0 API_PORT=8080 API_LOOKUP_BASE_URL=https://... cargo run --bin id-lookup-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_LOOKUP_BASE_URL` - Base URL of the external ID lookup service
//! * `API_LOOKUP_API_KEY` - Optional API key for the lookup service
//! * `API_LOOKUP_TIMEOUT_SECS` - Outbound request timeout (default: 30)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use domain_identity::{RestLookupAdapter, RestLookupConfig, SearchOrchestrator};
use interface_api::{config::ApiConfig, create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = load_config();
    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        lookup = %config.lookup_base_url,
        "Starting ID Lookup API Server"
    );

    let adapter = RestLookupAdapter::new(RestLookupConfig {
        base_url: config.lookup_base_url.clone(),
        api_key: config.lookup_api_key.clone(),
        timeout_secs: config.lookup_timeout_secs,
    })
    .context("Failed to construct lookup adapter")?;

    let state = AppState::new(SearchOrchestrator::new(Arc::new(adapter)));
    let app = create_router(state);

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .context("Invalid server address")?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Loads API configuration from environment variables.
///
/// Falls back to individual variables or defaults when the prefixed source
/// cannot be deserialized as a whole.
fn load_config() -> ApiConfig {
    ApiConfig::from_env().unwrap_or_else(|_| ApiConfig {
        host: std::env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
        port: std::env::var("API_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080),
        lookup_base_url: std::env::var("API_LOOKUP_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:9090/api/v1".to_string()),
        lookup_api_key: std::env::var("API_LOOKUP_API_KEY").ok(),
        lookup_timeout_secs: std::env::var("API_LOOKUP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30),
        log_level: std::env::var("API_LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string()),
    })
}

/// Initializes the tracing subscriber for structured logging.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// This enables graceful shutdown of the server, allowing in-flight
/// requests to complete before the process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
