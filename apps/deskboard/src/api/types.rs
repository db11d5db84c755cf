//! # API Request/Response Types
//!
//! JSON envelopes for the HTTP API. Dataset bodies themselves are the core
//! shapes, serialized with their host wire keys.

use deskboard_core::{DashboardError, DataSource};
use serde::{Deserialize, Serialize};

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// SOURCE RESPONSE
// =============================================================================

/// Which origin the next dataset read will use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceResponse {
    /// `"bridge"` or `"fallback"`.
    pub source: String,
    pub bridge_available: bool,
}

impl From<DataSource> for SourceResponse {
    fn from(source: DataSource) -> Self {
        Self {
            source: source.as_str().to_string(),
            bridge_available: source == DataSource::Bridge,
        }
    }
}

// =============================================================================
// CHART QUERY
// =============================================================================

/// Query string of `GET /api/chart`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartQuery {
    /// Range selector; `"3m"` when omitted.
    pub range: Option<String>,
}

// =============================================================================
// ERROR RESPONSE
// =============================================================================

/// Body returned when a dataset read fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    /// Dataset short name, when the failure belongs to one.
    pub dataset: Option<String>,
}

impl ErrorResponse {
    /// Plain error without dataset attribution.
    #[must_use]
    pub fn message(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            dataset: None,
        }
    }
}

impl From<&DashboardError> for ErrorResponse {
    fn from(err: &DashboardError) -> Self {
        Self {
            error: err.to_string(),
            dataset: Some(err.dataset().name().to_string()),
        }
    }
}
