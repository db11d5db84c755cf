//! # Bridge Detector
//!
//! The host process may expose a backend object to the web layer. Rather than
//! probing shared global state for it, the capability is held in an explicit
//! [`BridgeSlot`] that the host hands to the data-access layer.
//!
//! The slot may start empty and be filled later (the host can inject the
//! backend after the dashboard is already running). [`BridgeSlot::is_available`]
//! only reports the current instant: it never waits and its answer is never
//! cached by callers in this crate.

use crate::types::BridgeCallError;
use std::fmt;
use std::sync::{Arc, RwLock};

// =============================================================================
// BRIDGE CONTRACT
// =============================================================================

/// Backend operations exposed by the host, one per dataset.
///
/// Every method returns the dataset serialized as a string. A returned string
/// is expected to be valid structured text; a failing call returns
/// [`BridgeCallError`]. Calls are synchronous and blocking.
pub trait DashboardBridge: Send + Sync {
    /// Serialized `[SummaryCard]`.
    fn top_cards(&self) -> Result<String, BridgeCallError>;

    /// Serialized `[ActivityItem]`.
    fn feeds(&self) -> Result<String, BridgeCallError>;

    /// Serialized `[Record]`.
    fn projects(&self) -> Result<String, BridgeCallError>;

    /// Serialized `SalesSummary`.
    fn sales_summary(&self) -> Result<String, BridgeCallError>;

    /// Serialized `[ChartSeries]` for the given range selector, passed through verbatim.
    fn chart_data(&self, range: &str) -> Result<String, BridgeCallError>;
}

// =============================================================================
// BRIDGE SLOT
// =============================================================================

/// The single capability slot a host bridge can occupy.
#[derive(Default)]
pub struct BridgeSlot {
    bridge: RwLock<Option<Arc<dyn DashboardBridge>>>,
}

impl BridgeSlot {
    /// Create an empty slot (no host bridge).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a slot already holding a bridge.
    #[must_use]
    pub fn with_bridge(bridge: Arc<dyn DashboardBridge>) -> Self {
        Self {
            bridge: RwLock::new(Some(bridge)),
        }
    }

    /// Place a bridge in the slot, replacing any previous one.
    pub fn inject(&self, bridge: Arc<dyn DashboardBridge>) {
        let mut guard = self.bridge.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(bridge);
    }

    /// Remove the bridge, returning whatever was there.
    pub fn withdraw(&self) -> Option<Arc<dyn DashboardBridge>> {
        let mut guard = self.bridge.write().unwrap_or_else(|e| e.into_inner());
        guard.take()
    }

    /// Whether a bridge is reachable right now.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.bridge
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }

    /// The bridge at this instant, if any.
    ///
    /// The returned handle stays valid even if the slot is withdrawn while
    /// a call through it is in flight.
    #[must_use]
    pub fn current(&self) -> Option<Arc<dyn DashboardBridge>> {
        self.bridge
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl fmt::Debug for BridgeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BridgeSlot")
            .field("available", &self.is_available())
            .finish()
    }
}

/// Whether a host bridge is currently present in `slot`.
#[must_use]
pub fn is_bridge_available(slot: &BridgeSlot) -> bool {
    slot.is_available()
}

// =============================================================================
// TESTS
// =============================================================================
