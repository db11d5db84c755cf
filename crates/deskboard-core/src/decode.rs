//! # Payload Decoding
//!
//! The bridge hands back opaque strings. Each dataset has its own decoder so
//! that a `PayloadDecode` failure always names the shape that did not match.
//!
//! Decoders never transform, re-order, or patch values. A payload is either
//! accepted as-is or rejected.

use crate::types::{
    ActivityItem, ChartSeries, DashboardError, Dataset, Record, Result, SalesSummary, SummaryCard,
};
use serde::de::DeserializeOwned;

/// Decode `raw` as `T`, attributing failure to `dataset`.
fn parse<T: DeserializeOwned>(dataset: Dataset, raw: &str) -> Result<T> {
    serde_json::from_str(raw).map_err(|e| DashboardError::PayloadDecode {
        dataset,
        reason: e.to_string(),
    })
}

/// Decode a `getTopCards` payload.
pub fn summary_cards(raw: &str) -> Result<Vec<SummaryCard>> {
    parse(Dataset::SummaryCards, raw)
}

/// Decode a `getFeeds` payload.
pub fn activity_feed(raw: &str) -> Result<Vec<ActivityItem>> {
    parse(Dataset::ActivityFeed, raw)
}

/// Decode a `getProjects` payload.
///
/// Statuses outside the closed set and negative week counts are rejected by
/// the field types themselves.
pub fn records(raw: &str) -> Result<Vec<Record>> {
    parse(Dataset::Records, raw)
}

/// Decode a `getSalesSummary` payload.
pub fn sales_summary(raw: &str) -> Result<SalesSummary> {
    parse(Dataset::SalesSummary, raw)
}

/// Decode a `getChartData` payload.
///
/// Every series must carry the same number of values, since they share one
/// bucket index.
pub fn chart_series(raw: &str) -> Result<Vec<ChartSeries>> {
    let series: Vec<ChartSeries> = parse(Dataset::ChartSeries, raw)?;

    if let Some(first) = series.first() {
        let expected = first.values.len();
        if let Some(ragged) = series.iter().find(|s| s.values.len() != expected) {
            return Err(DashboardError::PayloadDecode {
                dataset: Dataset::ChartSeries,
                reason: format!(
                    "series '{}' has {} values, expected {} to match '{}'",
                    ragged.series_name,
                    ragged.values.len(),
                    expected,
                    first.series_name
                ),
            });
        }
    }

    Ok(series)
}

// =============================================================================
// TESTS
// =============================================================================
