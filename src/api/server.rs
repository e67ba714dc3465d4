//! OilFeed API Server implementation
//!
//! HTTP server using Axum. Clients upload a catalog workbook as the raw
//! request body and get back the eBay workbook or the HTML preview.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::handlers;
use crate::config::CatalogConstants;

/// Largest accepted catalog upload
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// API Server configuration
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    /// Optional YAML file overriding the catalog constants
    pub constants_path: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            constants_path: None,
        }
    }
}

/// Shared application state
#[derive(Clone, Debug)]
pub struct AppState {
    pub version: String,
    pub constants: CatalogConstants,
}

impl AppState {
    pub fn new(constants: CatalogConstants) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            constants,
        }
    }
}

/// Build the API router (without binding a socket)
pub fn router(state: Arc<AppState>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health and info endpoints
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/version", get(handlers::version))
        // Conversion endpoints
        .route("/api/v1/convert", post(handlers::convert))
        .route("/api/v1/preview", post(handlers::preview))
        .route("/api/v1/columns", post(handlers::columns))
        // State and middleware
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Run the API server
pub async fn run_api_server(config: ApiConfig) -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "oilfeed_server=info,oilfeed=info,tower_http=info".into()),
        )
        .init();

    let constants = CatalogConstants::load_or_default(config.constants_path.as_deref())?;
    if let Some(path) = &config.constants_path {
        info!("Catalog constants loaded from {}", path.display());
    }

    let app = router(Arc::new(AppState::new(constants)));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("🛢️  OilFeed API Server starting on http://{}", addr);
    info!("   Endpoints: /api/v1/convert, /api/v1/preview, /api/v1/columns");
    info!("   Health: /health, Version: /version");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("OilFeed API Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, stopping server...");
}
