//! Unit tests for API types, configuration files and host data files.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use deskboard::api::{ChartQuery, ErrorResponse, HealthResponse, SourceResponse};
use deskboard::host::HostBackend;
use deskboard::{AppConfig, AppError};
use deskboard_core::{
    BridgeCallError, DashboardBridge, DashboardError, DataSource, Dataset, decode, fallback,
};
use std::path::PathBuf;

// =============================================================================
// HEALTH / SOURCE RESPONSE TESTS
// =============================================================================

#[test]
fn test_health_response_default() {
    let health = HealthResponse::default();
    assert_eq!(health.status, "ok");
    assert!(!health.version.is_empty());
}

#[test]
fn test_source_response_from_data_source() {
    let bridge = SourceResponse::from(DataSource::Bridge);
    assert_eq!(bridge.source, "bridge");
    assert!(bridge.bridge_available);

    let json = serde_json::to_string(&SourceResponse::from(DataSource::Fallback)).unwrap();
    assert_eq!(json, r#"{"source":"fallback","bridge_available":false}"#);
}

// =============================================================================
// CHART QUERY / ERROR RESPONSE TESTS
// =============================================================================

#[test]
fn test_chart_query_range_is_optional() {
    let query: ChartQuery = serde_json::from_str("{}").unwrap();
    assert!(query.range.is_none());

    let query: ChartQuery = serde_json::from_str(r#"{"range":"30d"}"#).unwrap();
    assert_eq!(query.range.as_deref(), Some("30d"));
}

#[test]
fn test_error_response_names_dataset() {
    let err = DashboardError::BridgeInvocation {
        dataset: Dataset::ChartSeries,
        source: BridgeCallError::new("timeout"),
    };

    let response = ErrorResponse::from(&err);
    assert_eq!(response.dataset.as_deref(), Some("chart"));
    assert_eq!(response.error, "Bridge call getChartData failed: timeout");
}

#[test]
fn test_error_response_message_has_no_dataset() {
    let json = serde_json::to_string(&ErrorResponse::message("nope")).unwrap();
    assert_eq!(json, r#"{"error":"nope","dataset":null}"#);
}

// =============================================================================
// CONFIG FILE TESTS
// =============================================================================

#[test]
fn test_config_file_paths_are_relative_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deskboard.toml");
    std::fs::write(
        &path,
        "[app]\ndev_mode = true\n\n[web]\ncontent_root = \"dist\"\n\n[bridge]\ndata = \"host.json\"\n",
    )
    .unwrap();

    let config = AppConfig::from_file(&path).unwrap();

    assert!(config.app.dev_mode);
    assert_eq!(config.web.content_root, dir.path().join("dist"));
    assert_eq!(config.bridge.data, Some(dir.path().join("host.json")));
    assert_eq!(config.app_url(), "http://localhost:4200");
}

#[test]
fn test_explicit_missing_config_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");

    let err = AppConfig::load(Some(missing.as_path())).unwrap_err();
    assert!(matches!(err, AppError::ConfigRead { .. }));
}

#[test]
fn test_mime_overrides_parse() {
    let config = AppConfig::from_toml_str(
        "[mime]\nwebmanifest = \"application/manifest+json\"\n",
        &PathBuf::from("inline.toml"),
    )
    .unwrap();
    assert_eq!(
        config.mime.get("webmanifest").map(String::as_str),
        Some("application/manifest+json")
    );
}

// =============================================================================
// HOST DATA FILE TESTS
// =============================================================================

fn host_document() -> serde_json::Value {
    serde_json::json!({
        "topCards": [
            { "bgcolor": "warning", "icon": "bi bi-basket3", "title": "7", "subtitle": "Orders" }
        ],
        "feeds": [
            { "bgClass": "bg-info", "icon": "bi bi-bell", "task": "Deploy finished", "time": "1 min" }
        ],
        "projects": serde_json::to_value(fallback::records()).unwrap(),
        "salesSummary": { "total": "$9", "thisMonth": "$8", "thisWeek": "$7" },
        "chartData": {
            "7d": [
                { "name": "Desktop", "data": [1, 2] },
                { "name": "Mobile", "data": [3, 4] }
            ]
        }
    })
}

#[test]
fn test_host_backend_loads_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("host.json");
    std::fs::write(&path, host_document().to_string()).unwrap();

    let backend = HostBackend::load(&path).unwrap();

    let cards = decode::summary_cards(&backend.top_cards().unwrap()).unwrap();
    assert_eq!(cards[0].label, "Orders");
    assert_eq!(backend.dataset().projects, fallback::records());

    // The legacy "total" key is accepted and re-emitted as "totalSales".
    let sales_json = backend.sales_summary().unwrap();
    assert!(sales_json.contains("\"totalSales\":\"$9\""));
    assert_eq!(decode::sales_summary(&sales_json).unwrap().total, "$9");
}

#[test]
fn test_host_backend_chart_without_default_range_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("host.json");
    std::fs::write(&path, host_document().to_string()).unwrap();

    let backend = HostBackend::load(&path).unwrap();

    assert!(backend.chart_data("7d").is_ok());
    assert!(backend.chart_data("30d").is_err());
}

#[test]
fn test_host_backend_rejects_invalid_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("host.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = HostBackend::load(&path).unwrap_err();
    assert!(matches!(err, AppError::HostData { .. }));
    assert!(err.to_string().contains("host.json"));
}
