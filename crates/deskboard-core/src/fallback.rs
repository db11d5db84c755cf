//! # Fallback Datasets
//!
//! Fixed datasets served when no host bridge is present (e.g. the web layer
//! running standalone during development).
//!
//! Every generator here is a pure function of its arguments: no clocks, no
//! randomness, no external state. Two calls with the same range produce
//! identical values.

use crate::types::{
    ActivityItem, ChartRange, ChartSeries, Record, RecordStatus, SalesSummary, SummaryCard,
};

// =============================================================================
// CONSTANT TABLES
// =============================================================================

/// (color, icon, value, label)
const TOP_CARDS: [(&str, &str, &str, &str); 4] = [
    ("success", "bi bi-wallet", "$21,456", "Total Revenue"),
    ("danger", "bi bi-coin", "$1,250", "Refund Given"),
    ("warning", "bi bi-basket3", "456", "Total Projects"),
    ("info", "bi bi-bag", "210", "Weekly Sales"),
];

/// (color, icon, description, time)
const FEEDS: [(&str, &str, &str, &str); 8] = [
    ("bg-info", "bi bi-bell", "You have 4 pending tasks.", "Just Now"),
    ("bg-success", "bi bi-hdd", "Server #1 overloaded.", "2 Hours ago"),
    ("bg-warning", "bi bi-bag-check", "New order received.", "31 May"),
    ("bg-danger", "bi bi-person", "New user registered.", "30 May"),
    ("bg-primary", "bi bi-shield-check", "System update completed.", "29 May"),
    ("bg-info", "bi bi-bell", "Payment processed successfully.", "28 May"),
    ("bg-success", "bi bi-hdd", "Database backup completed.", "27 May"),
    ("bg-warning", "bi bi-bag-check", "Low inventory alert.", "26 May"),
];

struct RecordRow {
    image: &'static str,
    name: &'static str,
    email: &'static str,
    project: &'static str,
    status: RecordStatus,
    weeks: u32,
    budget: &'static str,
}

const PROJECTS: [RecordRow; 4] = [
    RecordRow {
        image: "assets/images/user1.jpg",
        name: "John Smith",
        email: "john@example.com",
        project: "JxBrowser Demo",
        status: RecordStatus::Success,
        weeks: 12,
        budget: "$15K",
    },
    RecordRow {
        image: "assets/images/user2.jpg",
        name: "Sarah Wilson",
        email: "sarah@example.com",
        project: "Angular Dashboard",
        status: RecordStatus::Info,
        weeks: 8,
        budget: "$12K",
    },
    RecordRow {
        image: "assets/images/user3.jpg",
        name: "Mike Johnson",
        email: "mike@example.com",
        project: "Java Backend",
        status: RecordStatus::Warning,
        weeks: 15,
        budget: "$20K",
    },
    RecordRow {
        image: "assets/images/user4.jpg",
        name: "Emily Brown",
        email: "emily@example.com",
        project: "Desktop App",
        status: RecordStatus::Danger,
        weeks: 6,
        budget: "$8K",
    },
];

const SALES_TOTAL: &str = "$10,345";
const SALES_THIS_MONTH: &str = "$7,545";
const SALES_THIS_WEEK: &str = "$1,345";

/// Daily buckets for the last 7 days.
const CHART_7D: [(&str, [f64; 7]); 2] = [
    ("Desktop", [186.0, 305.0, 237.0, 173.0, 209.0, 214.0, 186.0]),
    ("Mobile", [80.0, 120.0, 95.0, 85.0, 110.0, 98.0, 76.0]),
];

/// Weekly buckets for the last 30 days.
const CHART_30D: [(&str, [f64; 4]); 2] = [
    ("Desktop", [1250.0, 1380.0, 1520.0, 1420.0]),
    ("Mobile", [620.0, 710.0, 680.0, 750.0]),
];

/// Monthly buckets for the last 3 months (also the default).
const CHART_3M: [(&str, [f64; 7]); 2] = [
    ("Desktop", [31.0, 40.0, 28.0, 51.0, 42.0, 109.0, 100.0]),
    ("Mobile", [11.0, 32.0, 45.0, 32.0, 34.0, 52.0, 41.0]),
];

// =============================================================================
// GENERATORS
// =============================================================================

/// Fallback summary cards.
#[must_use]
pub fn summary_cards() -> Vec<SummaryCard> {
    TOP_CARDS
        .iter()
        .map(|&(color, icon, value, label)| SummaryCard::new(color, icon, value, label))
        .collect()
}

/// Fallback activity feed, newest first.
#[must_use]
pub fn activity_feed() -> Vec<ActivityItem> {
    FEEDS
        .iter()
        .map(|&(color, icon, description, time)| ActivityItem::new(color, icon, description, time))
        .collect()
}

/// Fallback project rows.
#[must_use]
pub fn records() -> Vec<Record> {
    PROJECTS
        .iter()
        .map(|row| Record {
            image_path: row.image.to_string(),
            name: row.name.to_string(),
            email: row.email.to_string(),
            label: row.project.to_string(),
            status: row.status,
            duration_weeks: row.weeks,
            budget: row.budget.to_string(),
        })
        .collect()
}

/// Fallback sales summary.
#[must_use]
pub fn sales_summary() -> SalesSummary {
    SalesSummary {
        total: SALES_TOTAL.to_string(),
        current_month: SALES_THIS_MONTH.to_string(),
        current_week: SALES_THIS_WEEK.to_string(),
    }
}

/// Fallback chart data for a range selector.
///
/// Unknown selectors get the three-month series.
#[must_use]
pub fn chart_series(selector: &str) -> Vec<ChartSeries> {
    chart_series_for(ChartRange::from_selector(selector))
}

/// Fallback chart data for an already-normalized range.
#[must_use]
pub fn chart_series_for(range: ChartRange) -> Vec<ChartSeries> {
    fn build<const N: usize>(table: &[(&str, [f64; N])]) -> Vec<ChartSeries> {
        table
            .iter()
            .map(|(name, values)| ChartSeries::new(*name, values.to_vec()))
            .collect()
    }

    match range {
        ChartRange::SevenDays => build(&CHART_7D),
        ChartRange::ThirtyDays => build(&CHART_30D),
        ChartRange::ThreeMonths => build(&CHART_3M),
    }
}

// =============================================================================
// TESTS
// =============================================================================
