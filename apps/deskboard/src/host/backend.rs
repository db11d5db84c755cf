//! # Host Backend
//!
//! The object the shell injects as the dashboard's bridge. It owns the host's
//! copy of every dataset and answers each bridge method with that dataset
//! serialized to a JSON string, exactly as the web layer expects to decode it.

use crate::error::AppError;
use deskboard_core::{
    ActivityItem, BridgeCallError, ChartRange, ChartSeries, DashboardBridge, Record, SalesSummary,
    SummaryCard,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Maximum host data file size (16 MB).
const MAX_DATA_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Every dataset the host serves.
///
/// On disk this is a single JSON document:
///
/// ```json
/// {
///   "topCards": [...],
///   "feeds": [...],
///   "projects": [...],
///   "salesSummary": { "totalSales": "...", "thisMonth": "...", "thisWeek": "..." },
///   "chartData": { "7d": [...], "30d": [...], "3m": [...] }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostDataset {
    pub top_cards: Vec<SummaryCard>,
    pub feeds: Vec<ActivityItem>,
    pub projects: Vec<Record>,
    pub sales_summary: SalesSummary,
    /// Chart series keyed by range selector.
    pub chart_data: BTreeMap<String, Vec<ChartSeries>>,
}

/// Bridge implementation backed by a [`HostDataset`].
#[derive(Debug, Clone)]
pub struct HostBackend {
    dataset: HostDataset,
}

impl HostBackend {
    /// Wrap an in-memory dataset.
    #[must_use]
    pub fn new(dataset: HostDataset) -> Self {
        Self { dataset }
    }

    /// Load the dataset from a JSON file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let host_err = |reason: String| AppError::HostData {
            path: path.to_path_buf(),
            reason,
        };

        let metadata = std::fs::metadata(path).map_err(|e| host_err(e.to_string()))?;
        if metadata.len() > MAX_DATA_FILE_SIZE {
            return Err(host_err(format!(
                "file size {} bytes exceeds maximum allowed {} bytes",
                metadata.len(),
                MAX_DATA_FILE_SIZE
            )));
        }

        let data = std::fs::read(path).map_err(|e| host_err(e.to_string()))?;
        let dataset = serde_json::from_slice(&data).map_err(|e| host_err(e.to_string()))?;
        Ok(Self::new(dataset))
    }

    /// The dataset being served.
    #[must_use]
    pub fn dataset(&self) -> &HostDataset {
        &self.dataset
    }

    fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String, BridgeCallError> {
        serde_json::to_string(value).map_err(|e| BridgeCallError::new(e.to_string()))
    }
}

impl DashboardBridge for HostBackend {
    fn top_cards(&self) -> Result<String, BridgeCallError> {
        Self::encode(&self.dataset.top_cards)
    }

    fn feeds(&self) -> Result<String, BridgeCallError> {
        Self::encode(&self.dataset.feeds)
    }

    fn projects(&self) -> Result<String, BridgeCallError> {
        Self::encode(&self.dataset.projects)
    }

    fn sales_summary(&self) -> Result<String, BridgeCallError> {
        Self::encode(&self.dataset.sales_summary)
    }

    /// Unknown selectors get the host's `"3m"` entry, mirroring the web
    /// layer's own leniency.
    fn chart_data(&self, range: &str) -> Result<String, BridgeCallError> {
        let series = self
            .dataset
            .chart_data
            .get(range)
            .or_else(|| self.dataset.chart_data.get(ChartRange::DEFAULT_SELECTOR))
            .ok_or_else(|| {
                BridgeCallError::new(format!("host has no chart data for range '{range}'"))
            })?;
        Self::encode(series)
    }
}

// =============================================================================
// TESTS
// =============================================================================
