//! # Data Contract Tests
//!
//! If ANY tier fails, the dashboard may show mixed or misleading data.
//!
//! ## Tiers
//! - C0: Fallback determinism and shape
//! - C1: Bridge pass-through
//! - C2: Range normalization
//! - C3: Failure propagation

use deskboard_core::{
    BridgeCallError, ChartRange, DashboardBridge, DashboardError, DataAccess, Dataset,
    RecordStatus, SalesSummary, SummaryCard, fallback,
};
use std::sync::Arc;

// =============================================================================
// TEST BRIDGES
// =============================================================================

/// Bridge that returns canned payloads for every method.
struct ScriptedBridge {
    cards: String,
    feeds: String,
    projects: String,
    sales: String,
    chart: String,
}

impl ScriptedBridge {
    /// Every method returns the same payload.
    fn uniform(payload: &str) -> Self {
        Self {
            cards: payload.to_string(),
            feeds: payload.to_string(),
            projects: payload.to_string(),
            sales: payload.to_string(),
            chart: payload.to_string(),
        }
    }
}

impl DashboardBridge for ScriptedBridge {
    fn top_cards(&self) -> Result<String, BridgeCallError> {
        Ok(self.cards.clone())
    }
    fn feeds(&self) -> Result<String, BridgeCallError> {
        Ok(self.feeds.clone())
    }
    fn projects(&self) -> Result<String, BridgeCallError> {
        Ok(self.projects.clone())
    }
    fn sales_summary(&self) -> Result<String, BridgeCallError> {
        Ok(self.sales.clone())
    }
    fn chart_data(&self, _range: &str) -> Result<String, BridgeCallError> {
        Ok(self.chart.clone())
    }
}

/// Bridge whose every method fails.
struct FailingBridge;

impl DashboardBridge for FailingBridge {
    fn top_cards(&self) -> Result<String, BridgeCallError> {
        Err(BridgeCallError::new("top cards unavailable"))
    }
    fn feeds(&self) -> Result<String, BridgeCallError> {
        Err(BridgeCallError::new("feeds unavailable"))
    }
    fn projects(&self) -> Result<String, BridgeCallError> {
        Err(BridgeCallError::new("projects unavailable"))
    }
    fn sales_summary(&self) -> Result<String, BridgeCallError> {
        Err(BridgeCallError::new("sales unavailable"))
    }
    fn chart_data(&self, range: &str) -> Result<String, BridgeCallError> {
        Err(BridgeCallError::new(format!("chart {range} unavailable")))
    }
}

fn bridged(bridge: impl DashboardBridge + 'static) -> DataAccess {
    DataAccess::new(Some(Arc::new(bridge)))
}

// =============================================================================
// TIER C0: FALLBACK DETERMINISM AND SHAPE
// =============================================================================

mod c0_fallback {
    use super::*;

    /// C0.1: Repeated calls without a bridge are identical.
    #[test]
    fn repeated_calls_are_identical() {
        let dal = DataAccess::detached();

        assert_eq!(dal.summary_cards().expect("a"), dal.summary_cards().expect("b"));
        assert_eq!(dal.activity_feed().expect("a"), dal.activity_feed().expect("b"));
        assert_eq!(dal.records().expect("a"), dal.records().expect("b"));
        assert_eq!(dal.sales_summary().expect("a"), dal.sales_summary().expect("b"));
        for range in ["7d", "30d", "3m", "bogus"] {
            assert_eq!(
                dal.chart_series(range).expect("a"),
                dal.chart_series(range).expect("b")
            );
        }
    }

    /// C0.2: Repeated calls serialize to the same bytes.
    #[test]
    fn repeated_calls_are_byte_identical() {
        let dal = DataAccess::detached();
        let first = serde_json::to_string(&dal.records().expect("a")).expect("json");
        let second = serde_json::to_string(&dal.records().expect("b")).expect("json");
        assert_eq!(first, second);
    }

    /// C0.3: Scenario A - sales summary without a bridge.
    #[test]
    fn sales_summary_scenario() {
        let dal = DataAccess::detached();
        assert_eq!(
            dal.sales_summary().expect("sales"),
            SalesSummary {
                total: "$10,345".to_string(),
                current_month: "$7,545".to_string(),
                current_week: "$1,345".to_string(),
            }
        );
    }

    /// C0.4: Scenario B - seven-day chart without a bridge.
    #[test]
    fn seven_day_chart_scenario() {
        let dal = DataAccess::detached();
        let series = dal.chart_series("7d").expect("chart");

        let names: Vec<&str> = series.iter().map(|s| s.series_name.as_str()).collect();
        assert_eq!(names, ["Desktop", "Mobile"]);
        assert!(series.iter().all(|s| s.values.len() == 7));
        assert_eq!(
            series[0].values,
            vec![186.0, 305.0, 237.0, 173.0, 209.0, 214.0, 186.0]
        );
    }

    /// C0.5: Every fallback record has a status from the closed set.
    #[test]
    fn fallback_statuses_are_closed() {
        let dal = DataAccess::detached();
        for record in dal.records().expect("records") {
            assert!(RecordStatus::ALL.contains(&record.status));
        }
    }
}

// =============================================================================
// TIER C1: BRIDGE PASS-THROUGH
// =============================================================================

mod c1_pass_through {
    use super::*;

    /// C1.1: Scenario C - a one-card payload is returned field for field.
    #[test]
    fn single_card_scenario() {
        let dal = bridged(ScriptedBridge::uniform(
            r#"[{"bgcolor":"success","icon":"x","title":"$1","subtitle":"Rev"}]"#,
        ));

        let cards = dal.summary_cards().expect("cards");
        assert_eq!(cards, vec![SummaryCard::new("success", "x", "$1", "Rev")]);
    }

    /// C1.2: Bridge payloads equal what the host serialized, order included.
    #[test]
    fn decoded_payload_equals_source() {
        let mut feeds = fallback::activity_feed();
        feeds.reverse();
        let projects = fallback::records();
        let sales = SalesSummary {
            total: "$1".to_string(),
            current_month: "$2".to_string(),
            current_week: "$3".to_string(),
        };
        let chart = fallback::chart_series_for(ChartRange::ThirtyDays);

        let dal = bridged(ScriptedBridge {
            cards: "[]".to_string(),
            feeds: serde_json::to_string(&feeds).expect("json"),
            projects: serde_json::to_string(&projects).expect("json"),
            sales: serde_json::to_string(&sales).expect("json"),
            chart: serde_json::to_string(&chart).expect("json"),
        });

        assert!(dal.summary_cards().expect("cards").is_empty());
        assert_eq!(dal.activity_feed().expect("feeds"), feeds);
        assert_eq!(dal.records().expect("records"), projects);
        assert_eq!(dal.sales_summary().expect("sales"), sales);
        assert_eq!(dal.chart_series("30d").expect("chart"), chart);
    }

    /// C1.3: An empty bridge response is not replaced with fallback rows.
    #[test]
    fn empty_bridge_list_stays_empty() {
        let dal = bridged(ScriptedBridge::uniform("[]"));
        assert!(dal.records().expect("records").is_empty());
    }
}

// =============================================================================
// TIER C2: RANGE NORMALIZATION
// =============================================================================

mod c2_ranges {
    use super::*;

    /// C2.1: Documented bucket counts, with equal-length series.
    #[test]
    fn bucket_counts_match_mapping() {
        let dal = DataAccess::detached();
        for (selector, buckets) in [("7d", 7), ("30d", 4), ("3m", 7)] {
            let series = dal.chart_series(selector).expect("chart");
            assert!(!series.is_empty());
            for s in &series {
                assert_eq!(s.values.len(), buckets, "{selector}");
            }
        }
    }

    /// C2.2: Unrecognized selectors behave like "3m".
    #[test]
    fn unknown_selector_is_three_months() {
        let dal = DataAccess::detached();
        let default = dal.chart_series(ChartRange::DEFAULT_SELECTOR).expect("3m");
        for selector in ["", "1y", "7D", "30 d", "3months"] {
            assert_eq!(dal.chart_series(selector).expect("chart"), default);
        }
    }
}

// =============================================================================
// TIER C3: FAILURE PROPAGATION
// =============================================================================

mod c3_failures {
    use super::*;

    /// C3.1: Scenario D - a failing bridge surfaces, no fallback rows.
    #[test]
    fn bridge_failure_propagates() {
        let dal = bridged(FailingBridge);

        let err = dal.records().expect_err("must fail");
        assert!(matches!(
            err,
            DashboardError::BridgeInvocation {
                dataset: Dataset::Records,
                ..
            }
        ));
        assert!(err.to_string().contains("projects unavailable"));
    }

    /// C3.2: Every operation propagates bridge failures.
    #[test]
    fn every_operation_propagates() {
        let dal = bridged(FailingBridge);
        assert!(dal.summary_cards().is_err());
        assert!(dal.activity_feed().is_err());
        assert!(dal.records().is_err());
        assert!(dal.sales_summary().is_err());
        assert!(dal.chart_series("7d").is_err());
    }

    /// C3.3: A malformed payload fails instead of returning fallback data.
    #[test]
    fn malformed_payload_fails() {
        let dal = bridged(ScriptedBridge::uniform("<html>oops</html>"));

        let err = dal.sales_summary().expect_err("must fail");
        assert!(matches!(
            err,
            DashboardError::PayloadDecode {
                dataset: Dataset::SalesSummary,
                ..
            }
        ));
        assert!(dal.chart_series("7d").is_err());
    }

    /// C3.4: A payload of the wrong shape is attributed to the requested dataset.
    #[test]
    fn schema_mismatch_names_dataset() {
        let sales_json = r#"{"totalSales":"$1","thisMonth":"$2","thisWeek":"$3"}"#;
        let dal = bridged(ScriptedBridge::uniform(sales_json));

        assert!(dal.sales_summary().is_ok());
        let err = dal.summary_cards().expect_err("object is not a card list");
        assert_eq!(err.dataset(), Dataset::SummaryCards);
    }
}
