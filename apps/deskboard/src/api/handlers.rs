//! # API Endpoint Handlers
//!
//! Dataset handlers are thin: each calls one data-access operation and
//! serializes the result. A failed read becomes `502 Bad Gateway`, since the
//! fault lies with the host bridge behind this server, never with the request.

use super::{
    AppState,
    types::{ChartQuery, ErrorResponse, HealthResponse, SourceResponse},
};
use crate::assets::AssetResponse;
use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use deskboard_core::{ChartRange, Result as DataResult};
use serde::Serialize;

/// Serialize a dataset read, or report why it failed.
fn dataset_response<T: Serialize>(result: DataResult<T>) -> Response {
    match result {
        Ok(data) => (StatusCode::OK, Json(data)).into_response(),
        Err(e) => {
            tracing::warn!("Dataset read failed: {}", e);
            (StatusCode::BAD_GATEWAY, Json(ErrorResponse::from(&e))).into_response()
        }
    }
}

// =============================================================================
// HEALTH / SOURCE
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

/// Report whether the host bridge is currently present.
pub async fn source_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(SourceResponse::from(state.data.source()))
}

// =============================================================================
// DATASET HANDLERS
// =============================================================================

/// `GET /api/cards`
pub async fn cards_handler(State(state): State<AppState>) -> Response {
    dataset_response(state.data.summary_cards())
}

/// `GET /api/feeds`
pub async fn feeds_handler(State(state): State<AppState>) -> Response {
    dataset_response(state.data.activity_feed())
}

/// `GET /api/projects`
pub async fn projects_handler(State(state): State<AppState>) -> Response {
    dataset_response(state.data.records())
}

/// `GET /api/sales`
pub async fn sales_handler(State(state): State<AppState>) -> Response {
    dataset_response(state.data.sales_summary())
}

/// `GET /api/chart?range=7d|30d|3m`
pub async fn chart_handler(
    State(state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> Response {
    let range = query
        .range
        .as_deref()
        .unwrap_or(ChartRange::DEFAULT_SELECTOR);
    dataset_response(state.data.chart_series(range))
}

// =============================================================================
// ASSET HANDLER
// =============================================================================

impl IntoResponse for AssetResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, self.mime_type)],
            self.body,
        )
            .into_response()
    }
}

/// Serve a bundled dashboard file (production mode only).
pub async fn asset_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let Some(resolver) = state.assets else {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::message(
                "Development mode: the dashboard is served by the dev server",
            )),
        )
            .into_response();
    };

    let path = uri.path().to_string();
    match tokio::task::spawn_blocking(move || resolver.resolve(&path)).await {
        Ok(asset) => asset.into_response(),
        Err(e) => {
            tracing::error!("Asset task failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
