//! # Core Type Definitions
//!
//! This module contains the data contract shared by both data origins:
//! - Result shapes (`SummaryCard`, `ActivityItem`, `Record`, `SalesSummary`, `ChartSeries`)
//! - The chart range selector (`ChartRange`)
//! - Dataset names used for routing and error attribution (`Dataset`)
//! - Error types (`DashboardError`, `BridgeCallError`)
//!
//! ## Wire Encoding
//!
//! Field names are snake_case in Rust. The serde renames below carry the keys
//! the host encodes on its side of the bridge, so a payload produced by the
//! host decodes into exactly these structs and a struct serialized here is
//! readable by the same web layer.
//!
//! Monetary and percentage fields are pre-formatted display strings. The core
//! never parses or computes over them; only chart values are numeric.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// =============================================================================
// SUMMARY CARD
// =============================================================================

/// One top-line metric tile. A sequence of cards is in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryCard {
    /// Presentation color token (e.g. `success`).
    #[serde(rename = "bgcolor")]
    pub background_color_token: String,
    /// Icon token (e.g. `bi bi-wallet`).
    #[serde(rename = "icon")]
    pub icon_token: String,
    /// The headline value, already formatted.
    #[serde(rename = "title")]
    pub primary_value: String,
    /// Caption under the headline value.
    #[serde(rename = "subtitle")]
    pub label: String,
}

impl SummaryCard {
    /// Create a new card.
    #[must_use]
    pub fn new(
        background_color_token: impl Into<String>,
        icon_token: impl Into<String>,
        primary_value: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            background_color_token: background_color_token.into(),
            icon_token: icon_token.into(),
            primary_value: primary_value.into(),
            label: label.into(),
        }
    }
}

// =============================================================================
// ACTIVITY ITEM
// =============================================================================

/// One entry of the activity feed. Newest-first by convention only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityItem {
    #[serde(rename = "bgClass")]
    pub background_color_token: String,
    #[serde(rename = "icon")]
    pub icon_token: String,
    #[serde(rename = "task")]
    pub description: String,
    /// Human-readable age, e.g. `2 Hours ago`.
    #[serde(rename = "time")]
    pub relative_time: String,
}

impl ActivityItem {
    /// Create a new feed item.
    #[must_use]
    pub fn new(
        background_color_token: impl Into<String>,
        icon_token: impl Into<String>,
        description: impl Into<String>,
        relative_time: impl Into<String>,
    ) -> Self {
        Self {
            background_color_token: background_color_token.into(),
            icon_token: icon_token.into(),
            description: description.into(),
            relative_time: relative_time.into(),
        }
    }
}

// =============================================================================
// RECORD
// =============================================================================

/// Presentation status of a [`Record`].
///
/// Closed set: a data origin sending any other value violates the contract
/// and the payload is rejected at decode time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Success,
    Warning,
    Danger,
    Info,
}

impl RecordStatus {
    /// All statuses, in declaration order.
    pub const ALL: [RecordStatus; 4] = [Self::Success, Self::Warning, Self::Danger, Self::Info];

    /// Wire name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tabular project/account row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "image")]
    pub image_path: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "project")]
    pub label: String,
    pub status: RecordStatus,
    #[serde(rename = "weeks")]
    pub duration_weeks: u32,
    /// Pre-formatted budget, e.g. `$15K`.
    pub budget: String,
}

// =============================================================================
// SALES SUMMARY
// =============================================================================

/// Singleton sales totals, all pre-formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesSummary {
    #[serde(rename = "totalSales", alias = "total")]
    pub total: String,
    #[serde(rename = "thisMonth")]
    pub current_month: String,
    #[serde(rename = "thisWeek")]
    pub current_week: String,
}

// =============================================================================
// CHART SERIES
// =============================================================================

/// One named series of chart values.
///
/// Series returned together share an implicit bucket index, so their value
/// sequences always have the same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    #[serde(rename = "name")]
    pub series_name: String,
    #[serde(rename = "data")]
    pub values: Vec<f64>,
}

impl ChartSeries {
    /// Create a series from a name and its values.
    #[must_use]
    pub fn new(series_name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            series_name: series_name.into(),
            values,
        }
    }
}

// =============================================================================
// CHART RANGE
// =============================================================================

/// Time-range selector for chart data.
///
/// Parsing is lenient: any selector outside the three known values is
/// treated as the default [`ChartRange::ThreeMonths`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ChartRange {
    /// `"7d"` - daily buckets.
    SevenDays,
    /// `"30d"` - weekly buckets.
    ThirtyDays,
    /// `"3m"` - monthly buckets.
    #[default]
    ThreeMonths,
}

impl ChartRange {
    /// Selector used when the caller supplies none.
    pub const DEFAULT_SELECTOR: &'static str = "3m";

    /// Normalize a selector string. Never fails.
    #[must_use]
    pub fn from_selector(selector: &str) -> Self {
        match selector {
            "7d" => Self::SevenDays,
            "30d" => Self::ThirtyDays,
            _ => Self::ThreeMonths,
        }
    }

    /// Canonical selector string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SevenDays => "7d",
            Self::ThirtyDays => "30d",
            Self::ThreeMonths => "3m",
        }
    }

    /// Number of time buckets every series carries for this range.
    #[must_use]
    pub const fn bucket_count(self) -> usize {
        match self {
            Self::SevenDays => 7,
            Self::ThirtyDays => 4,
            Self::ThreeMonths => 7,
        }
    }
}

impl fmt::Display for ChartRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// DATASET
// =============================================================================

/// The five logical datasets the dashboard reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dataset {
    SummaryCards,
    ActivityFeed,
    Records,
    SalesSummary,
    ChartSeries,
}

impl Dataset {
    /// All datasets, in dashboard order.
    pub const ALL: [Dataset; 5] = [
        Self::SummaryCards,
        Self::ActivityFeed,
        Self::Records,
        Self::SalesSummary,
        Self::ChartSeries,
    ];

    /// Short name used by the CLI and HTTP routes.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SummaryCards => "cards",
            Self::ActivityFeed => "feeds",
            Self::Records => "projects",
            Self::SalesSummary => "sales",
            Self::ChartSeries => "chart",
        }
    }

    /// Name of the host bridge method serving this dataset.
    #[must_use]
    pub const fn bridge_method(self) -> &'static str {
        match self {
            Self::SummaryCards => "getTopCards",
            Self::ActivityFeed => "getFeeds",
            Self::Records => "getProjects",
            Self::SalesSummary => "getSalesSummary",
            Self::ChartSeries => "getChartData",
        }
    }

    /// Look up a dataset by its short name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.name() == name)
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Failure reported by the host side of the bridge.
///
/// The cause is opaque to the data-access layer; only the message survives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct BridgeCallError {
    message: String,
}

impl BridgeCallError {
    /// Create a bridge failure with the host's message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The host's message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors that can occur while reading a dataset.
///
/// - A missing bridge is not an error; it selects the fallback path.
/// - An unknown chart range is not an error; it is normalized.
/// - Everything else on the bridge path surfaces here, never as mock data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    /// The bridge method itself failed.
    #[error("Bridge call {} failed: {source}", .dataset.bridge_method())]
    BridgeInvocation {
        dataset: Dataset,
        #[source]
        source: BridgeCallError,
    },

    /// The bridge returned a payload that does not decode into the dataset's shape.
    #[error("Malformed {dataset} payload: {reason}")]
    PayloadDecode { dataset: Dataset, reason: String },
}

impl DashboardError {
    /// Dataset the failed request was for.
    #[must_use]
    pub const fn dataset(&self) -> Dataset {
        match self {
            Self::BridgeInvocation { dataset, .. } | Self::PayloadDecode { dataset, .. } => {
                *dataset
            }
        }
    }
}

/// Result alias for dataset reads.
pub type Result<T> = std::result::Result<T, DashboardError>;

// =============================================================================
// TESTS
// =============================================================================
