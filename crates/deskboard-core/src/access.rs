//! # Data Access Layer
//!
//! One operation per dataset, each resolved through the same two-branch
//! protocol:
//!
//! ```text
//! operation(params?)
//!   ├─ bridge present → bridge.method(params?) → decode → typed result
//!   └─ bridge absent  → fallback(params?)      → typed result
//! ```
//!
//! The protocol lives in exactly one place, [`DataAccess::resolve`]; the
//! public operations only choose which bridge method, decoder, and fallback
//! to plug in.
//!
//! Bridge availability is checked on every call. Nothing is cached, retried,
//! or logged here; failures go straight back to the caller.

use crate::bridge::{BridgeSlot, DashboardBridge};
use crate::decode;
use crate::fallback;
use crate::types::{
    ActivityItem, BridgeCallError, ChartSeries, DashboardError, Dataset, Record, Result,
    SalesSummary, SummaryCard,
};
use std::fmt;
use std::sync::Arc;

/// Which origin served (or would serve) a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataSource {
    /// The host bridge.
    Bridge,
    /// The built-in deterministic datasets.
    Fallback,
}

impl DataSource {
    /// Lowercase name for reporting.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bridge => "bridge",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dataset reader for the dashboard.
///
/// Cheap to clone; clones share the same [`BridgeSlot`].
#[derive(Debug, Clone, Default)]
pub struct DataAccess {
    slot: Arc<BridgeSlot>,
}

impl DataAccess {
    /// Create a reader around an optional host bridge.
    #[must_use]
    pub fn new(bridge: Option<Arc<dyn DashboardBridge>>) -> Self {
        let slot = match bridge {
            Some(bridge) => BridgeSlot::with_bridge(bridge),
            None => BridgeSlot::empty(),
        };
        Self::with_slot(Arc::new(slot))
    }

    /// Create a reader with no bridge; every call uses fallback data.
    #[must_use]
    pub fn detached() -> Self {
        Self::default()
    }

    /// Create a reader over a slot the host may fill or empty later.
    #[must_use]
    pub fn with_slot(slot: Arc<BridgeSlot>) -> Self {
        Self { slot }
    }

    /// The slot this reader consults.
    #[must_use]
    pub fn slot(&self) -> &Arc<BridgeSlot> {
        &self.slot
    }

    /// Whether the next call would go to the bridge.
    #[must_use]
    pub fn is_bridge_available(&self) -> bool {
        self.slot.is_available()
    }

    /// Origin the next call would use.
    #[must_use]
    pub fn source(&self) -> DataSource {
        if self.is_bridge_available() {
            DataSource::Bridge
        } else {
            DataSource::Fallback
        }
    }

    // =========================================================================
    // OPERATIONS
    // =========================================================================

    /// Top-line metric cards, in display order.
    pub fn summary_cards(&self) -> Result<Vec<SummaryCard>> {
        self.resolve(
            Dataset::SummaryCards,
            |bridge| bridge.top_cards(),
            decode::summary_cards,
            fallback::summary_cards,
        )
    }

    /// Activity feed entries, in display order.
    pub fn activity_feed(&self) -> Result<Vec<ActivityItem>> {
        self.resolve(
            Dataset::ActivityFeed,
            |bridge| bridge.feeds(),
            decode::activity_feed,
            fallback::activity_feed,
        )
    }

    /// Project table rows.
    pub fn records(&self) -> Result<Vec<Record>> {
        self.resolve(
            Dataset::Records,
            |bridge| bridge.projects(),
            decode::records,
            fallback::records,
        )
    }

    /// Sales totals.
    pub fn sales_summary(&self) -> Result<SalesSummary> {
        self.resolve(
            Dataset::SalesSummary,
            |bridge| bridge.sales_summary(),
            decode::sales_summary,
            fallback::sales_summary,
        )
    }

    /// Chart series for a range selector (`"7d"`, `"30d"`, `"3m"`).
    ///
    /// The selector is handed to the bridge unchanged. On the fallback path
    /// unknown selectors are served as `"3m"`.
    pub fn chart_series(&self, range: &str) -> Result<Vec<ChartSeries>> {
        self.resolve(
            Dataset::ChartSeries,
            |bridge| bridge.chart_data(range),
            decode::chart_series,
            || fallback::chart_series(range),
        )
    }

    // =========================================================================
    // PROTOCOL
    // =========================================================================

    /// Resolve one request against whichever origin is present right now.
    ///
    /// A decode failure is returned as-is; fallback data is only ever used
    /// when no bridge is present.
    fn resolve<T>(
        &self,
        dataset: Dataset,
        call: impl FnOnce(&dyn DashboardBridge) -> std::result::Result<String, BridgeCallError>,
        decode: fn(&str) -> Result<T>,
        fallback: impl FnOnce() -> T,
    ) -> Result<T> {
        match self.slot.current() {
            Some(bridge) => {
                let raw = call(bridge.as_ref())
                    .map_err(|source| DashboardError::BridgeInvocation { dataset, source })?;
                decode(&raw)
            }
            None => Ok(fallback()),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
