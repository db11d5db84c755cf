//! # Property-Based Tests
//!
//! Determinism, leniency and pass-through invariants, checked with proptest.

use deskboard_core::{
    BridgeCallError, ChartRange, ChartSeries, DashboardBridge, DataAccess, Record, RecordStatus,
    decode,
};
use proptest::collection::vec;
use proptest::prelude::*;
use std::sync::Arc;

/// Bridge returning one fixed projects payload.
struct ProjectsBridge(String);

impl DashboardBridge for ProjectsBridge {
    fn top_cards(&self) -> Result<String, BridgeCallError> {
        Ok("[]".to_string())
    }
    fn feeds(&self) -> Result<String, BridgeCallError> {
        Ok("[]".to_string())
    }
    fn projects(&self) -> Result<String, BridgeCallError> {
        Ok(self.0.clone())
    }
    fn sales_summary(&self) -> Result<String, BridgeCallError> {
        Err(BridgeCallError::new("unused"))
    }
    fn chart_data(&self, _range: &str) -> Result<String, BridgeCallError> {
        Ok("[]".to_string())
    }
}

fn status_strategy() -> impl Strategy<Value = RecordStatus> {
    prop::sample::select(RecordStatus::ALL.to_vec())
}

fn record_strategy() -> impl Strategy<Value = Record> {
    (
        "[a-z/]{1,16}\\.jpg",
        "[A-Za-z ]{1,20}",
        "[a-z]{1,8}@[a-z]{1,8}\\.com",
        "[A-Za-z ]{0,20}",
        status_strategy(),
        0u32..520,
        "\\$[0-9]{1,3}K",
    )
        .prop_map(
            |(image_path, name, email, label, status, duration_weeks, budget)| Record {
                image_path,
                name,
                email,
                label,
                status,
                duration_weeks,
                budget,
            },
        )
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Any selector outside the enumerated set yields the "3m" fallback.
    #[test]
    fn unknown_selector_matches_default(selector in "\\PC{0,12}") {
        prop_assume!(!matches!(selector.as_str(), "7d" | "30d" | "3m"));
        let dal = DataAccess::detached();
        prop_assert_eq!(
            dal.chart_series(&selector).expect("chart"),
            dal.chart_series("3m").expect("chart")
        );
        prop_assert_eq!(ChartRange::from_selector(&selector), ChartRange::ThreeMonths);
    }

    /// Fallback chart reads are deterministic for any selector.
    #[test]
    fn fallback_chart_deterministic(selector in "\\PC{0,12}") {
        let dal = DataAccess::detached();
        let first = dal.chart_series(&selector).expect("chart");
        let second = dal.chart_series(&selector).expect("chart");
        prop_assert_eq!(first, second);
    }

    /// Rows the host serializes come back unchanged and in order.
    #[test]
    fn bridged_records_pass_through(rows in vec(record_strategy(), 0..12)) {
        let payload = serde_json::to_string(&rows).expect("json");
        let dal = DataAccess::new(Some(Arc::new(ProjectsBridge(payload))));
        prop_assert_eq!(dal.records().expect("records"), rows);
    }

    /// Equal-length chart payloads decode; a single ragged series is rejected.
    #[test]
    fn chart_decode_enforces_equal_length(
        len in 1usize..16,
        series_count in 2usize..5,
        ragged_index in 0usize..5,
    ) {
        let series: Vec<ChartSeries> = (0..series_count)
            .map(|i| ChartSeries::new(format!("s{i}"), vec![1.0; len]))
            .collect();
        let payload = serde_json::to_string(&series).expect("json");
        prop_assert_eq!(decode::chart_series(&payload).expect("decode"), series.clone());

        let mut ragged = series;
        let idx = ragged_index % series_count;
        ragged[idx].values.push(2.0);
        let payload = serde_json::to_string(&ragged).expect("json");
        prop_assert!(decode::chart_series(&payload).is_err());
    }

    /// Arbitrary text that is not JSON never decodes as a record list.
    #[test]
    fn non_json_never_decodes(raw in "[^\\[\\]{}\"0-9tfn ]{1,40}") {
        prop_assert!(decode::records(&raw).is_err());
    }
}
