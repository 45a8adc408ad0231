//! HTTP API for Seed-Crawl
//!
//! Exposes the crawler as `POST /api/crawl` taking `{"url": ..., "depth": ...}`
//! and answering with the JSON array of page records. Every request runs an
//! independent crawl; only configuration and the HTTP connection pool are
//! shared between requests.

mod error;
mod handlers;

pub use error::ApiError;
pub use handlers::{crawl_handler, health, CrawlRequest, CrawlRequestBody, DepthValue};

use crate::config::{validate, Config};
use crate::crawler::Coordinator;
use crate::CrawlError;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared state handed to every request
#[derive(Debug, Clone)]
pub struct AppState {
    pub coordinator: Coordinator,
}

impl AppState {
    /// Builds the state (and its HTTP client) from configuration
    pub fn new(config: Config) -> Result<Self, CrawlError> {
        Ok(Self {
            coordinator: Coordinator::new(config)?,
        })
    }
}

/// Builds the API router with CORS and request tracing
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/crawl", post(crawl_handler))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves the API on the configured bind address until Ctrl+C / SIGTERM
///
/// The configuration is validated before anything is bound.
pub async fn serve(config: Config) -> Result<(), CrawlError> {
    validate(&config)?;

    let addr = config.server.bind_address.clone();
    let app = router(AppState::new(config)?);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
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
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Received shutdown signal");
}
