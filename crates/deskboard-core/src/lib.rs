//! # deskboard-core
//!
//! The environment-adaptive data-access layer for Deskboard - THE CONTRACT.
//!
//! The dashboard reads five datasets. When the native host has injected its
//! backend, each read is forwarded to that bridge and the returned string is
//! decoded into a typed shape. When it has not, the read is answered from a
//! deterministic built-in dataset. Callers see one statically-typed API
//! either way.
//!
//! ## Architectural Constraints
//!
//! - The bridge is an explicit dependency ([`BridgeSlot`]), never ambient state
//! - Availability is decided per call; nothing is cached
//! - Bridge failures and malformed payloads propagate; they never fall back
//! - Has NO async, NO network dependencies, NO logging (pure Rust)

// =============================================================================
// MODULES
// =============================================================================

pub mod access;
pub mod bridge;
pub mod decode;
pub mod fallback;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{
    ActivityItem, BridgeCallError, ChartRange, ChartSeries, DashboardError, Dataset, Record,
    RecordStatus, Result, SalesSummary, SummaryCard,
};

// =============================================================================
// RE-EXPORTS: Bridge & Access
// =============================================================================

pub use access::{DataAccess, DataSource};
pub use bridge::{BridgeSlot, DashboardBridge, is_bridge_available};
