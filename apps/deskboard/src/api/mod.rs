//! # Deskboard HTTP API Module
//!
//! This module implements the HTTP server using axum. It exposes the five
//! datasets through the data-access layer and, in production mode, serves the
//! bundled dashboard itself.
//!
//! ## Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/source` - Whether the host bridge is present right now
//! - `GET /api/cards` - Summary cards
//! - `GET /api/feeds` - Activity feed
//! - `GET /api/projects` - Project rows
//! - `GET /api/sales` - Sales summary
//! - `GET /api/chart?range=7d|30d|3m` - Chart series
//! - anything else - Bundled dashboard assets (production mode)
//!
//! ## Configuration (Environment Variables)
//!
//! - `DESKBOARD_CORS_ORIGINS`: Comma-separated list of allowed origins, or "*" for all
//!   (default: localhost only)

mod handlers;
mod types;

// Re-export handlers and types for integration tests (via `deskboard::api::*`)
pub use handlers::{
    asset_handler, cards_handler, chart_handler, feeds_handler, health_handler, projects_handler,
    sales_handler, source_handler,
};
pub use types::{ChartQuery, ErrorResponse, HealthResponse, SourceResponse};

use crate::assets::AssetResolver;
use crate::error::AppError;
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use deskboard_core::DataAccess;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

// =============================================================================
// SERVER STATE
// =============================================================================

/// Shared server state.
#[derive(Clone)]
pub struct AppState {
    /// Dataset reader; its bridge slot may be filled after startup.
    pub data: DataAccess,
    /// Bundled asset resolver, `None` in development mode.
    pub assets: Option<Arc<AssetResolver>>,
}

impl AppState {
    /// Create app state.
    #[must_use]
    pub fn new(data: DataAccess, assets: Option<AssetResolver>) -> Self {
        Self {
            data,
            assets: assets.map(Arc::new),
        }
    }
}

// =============================================================================
// CORS CONFIGURATION
// =============================================================================

/// Build CORS layer from environment configuration.
///
/// Reads `DESKBOARD_CORS_ORIGINS`:
/// - If "*": allows all origins
/// - If not set: localhost only, including the usual dev-server port
/// - Otherwise: parses comma-separated list of allowed origins
fn build_cors_layer() -> CorsLayer {
    let origins_env = std::env::var("DESKBOARD_CORS_ORIGINS").ok();

    match origins_env.as_deref() {
        Some("*") => {
            tracing::warn!("CORS: Allowing ALL origins (DESKBOARD_CORS_ORIGINS=*)");
            CorsLayer::permissive()
        }
        Some(origins) => {
            let allowed_origins: Vec<HeaderValue> = origins
                .split(',')
                .filter_map(|s| {
                    let trimmed = s.trim();
                    match trimmed.parse::<HeaderValue>() {
                        Ok(hv) => {
                            tracing::info!("CORS: Allowing origin: {}", trimmed);
                            Some(hv)
                        }
                        Err(e) => {
                            tracing::warn!("CORS: Invalid origin '{}': {}", trimmed, e);
                            None
                        }
                    }
                })
                .collect();

            if allowed_origins.is_empty() {
                tracing::warn!(
                    "CORS: No valid origins in DESKBOARD_CORS_ORIGINS, defaulting to localhost only"
                );
                build_localhost_cors()
            } else {
                CorsLayer::new()
                    .allow_origin(allowed_origins)
                    .allow_methods([Method::GET, Method::OPTIONS])
                    .allow_headers([header::CONTENT_TYPE])
            }
        }
        None => build_localhost_cors(),
    }
}

/// Build a restrictive CORS layer that only allows localhost origins.
fn build_localhost_cors() -> CorsLayer {
    let origins: Vec<HeaderValue> = [
        "http://localhost:4200",
        "http://localhost:8080",
        "http://127.0.0.1:4200",
        "http://127.0.0.1:8080",
    ]
    .into_iter()
    .filter_map(|o| o.parse::<HeaderValue>().ok())
    .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

// =============================================================================
// ROUTER CREATION
// =============================================================================

/// Create the axum router with all endpoints and middleware.
///
/// Middleware stack (outer to inner):
/// 1. Tracing - logs all requests
/// 2. CORS - handles preflight requests
pub fn create_router(state: AppState) -> Router {
    if state.assets.is_none() {
        tracing::info!("Development mode: bundled assets are not served");
    }

    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/api/source", get(handlers::source_handler))
        .route("/api/cards", get(handlers::cards_handler))
        .route("/api/feeds", get(handlers::feeds_handler))
        .route("/api/projects", get(handlers::projects_handler))
        .route("/api/sales", get(handlers::sales_handler))
        .route("/api/chart", get(handlers::chart_handler))
        .fallback(handlers::asset_handler)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors_layer()),
        )
        .with_state(state)
}

// =============================================================================
// SERVER STARTUP
// =============================================================================

/// Start the HTTP server and run until Ctrl+C.
pub async fn run_server(addr: &str, state: AppState) -> Result<(), AppError> {
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Io(format!("Bind failed: {}", e)))?;

    tracing::info!("Deskboard HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Io(format!("Server error: {}", e)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
