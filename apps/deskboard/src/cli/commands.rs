//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use super::Selection;
use deskboard::{
    AppConfig, AppError,
    api::{self, AppState},
    assets::AssetResolver,
    host,
};
use deskboard_core::{
    ActivityItem, ChartRange, ChartSeries, DataAccess, Dataset, Record, SalesSummary, SummaryCard,
};
use serde::Serialize;
use std::fmt::Write as _;

// =============================================================================
// SERVE COMMAND
// =============================================================================

/// Start the HTTP server.
///
/// The server starts on built-in datasets; the host bridge is injected as
/// soon as its data has loaded.
pub async fn cmd_serve(
    mut config: AppConfig,
    detach: bool,
    bind_host: Option<String>,
    port: Option<u16>,
) -> Result<(), AppError> {
    if let Some(bind_host) = bind_host {
        config.server.host = bind_host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let data = DataAccess::detached();
    if detach {
        tracing::info!("Bridge detached on request; using built-in datasets");
    } else {
        tokio::spawn(host::inject_when_ready(
            config.clone(),
            data.slot().clone(),
        ));
    }

    let assets = (!config.app.dev_mode).then(|| AssetResolver::from_config(&config));

    println!("{} Host Shell Starting...", config.app.name);
    println!();
    println!("Configuration:");
    println!("  Address:  {}", config.bind_address());
    println!("  App URL:  {}", config.app_url());
    println!(
        "  Mode:     {}",
        if config.app.dev_mode { "development" } else { "production" }
    );
    match &assets {
        Some(resolver) => println!("  Content:  {:?}", resolver.content_root()),
        None => println!("  Content:  served by {}", config.web.dev_url),
    }
    println!();
    println!("Endpoints:");
    println!("  GET /api/cards    - Summary cards");
    println!("  GET /api/feeds    - Activity feed");
    println!("  GET /api/projects - Project rows");
    println!("  GET /api/sales    - Sales summary");
    println!("  GET /api/chart    - Chart series (?range=7d|30d|3m)");
    println!("  GET /api/source   - Active data origin");
    println!("  GET /health       - Health check");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    let addr = config.bind_address();
    api::run_server(&addr, AppState::new(data, assets)).await
}

// =============================================================================
// SHOW COMMAND
// =============================================================================

/// One dataset read, kept typed for text rendering.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum DatasetView {
    Cards(Vec<SummaryCard>),
    Feeds(Vec<ActivityItem>),
    Projects(Vec<Record>),
    Sales(SalesSummary),
    Chart(Vec<ChartSeries>),
}

impl DatasetView {
    fn read(data: &DataAccess, dataset: Dataset, range: &str) -> Result<Self, AppError> {
        Ok(match dataset {
            Dataset::SummaryCards => Self::Cards(data.summary_cards()?),
            Dataset::ActivityFeed => Self::Feeds(data.activity_feed()?),
            Dataset::Records => Self::Projects(data.records()?),
            Dataset::SalesSummary => Self::Sales(data.sales_summary()?),
            Dataset::ChartSeries => Self::Chart(data.chart_series(range)?),
        })
    }

    fn render_text(&self) -> String {
        let mut out = String::new();
        match self {
            Self::Cards(cards) => {
                for card in cards {
                    let _ = writeln!(
                        out,
                        "  {:<16} {:>10}  [{}]",
                        card.label, card.primary_value, card.background_color_token
                    );
                }
            }
            Self::Feeds(items) => {
                for item in items {
                    let _ = writeln!(out, "  {:<12} {}", item.relative_time, item.description);
                }
            }
            Self::Projects(rows) => {
                for row in rows {
                    let _ = writeln!(
                        out,
                        "  {:<14} {:<20} {:<8} {:>3}w {:>6}",
                        row.name, row.label, row.status, row.duration_weeks, row.budget
                    );
                }
            }
            Self::Sales(sales) => {
                let _ = writeln!(out, "  Total:      {}", sales.total);
                let _ = writeln!(out, "  This month: {}", sales.current_month);
                let _ = writeln!(out, "  This week:  {}", sales.current_week);
            }
            Self::Chart(series) => {
                for s in series {
                    let values: Vec<String> = s.values.iter().map(|v| v.to_string()).collect();
                    let _ = writeln!(out, "  {:<10} {}", s.series_name, values.join(", "));
                }
            }
        }
        out
    }
}

/// Print one or all datasets.
pub fn cmd_show(
    config: &AppConfig,
    detach: bool,
    json_mode: bool,
    selection: Selection,
    range: &str,
) -> Result<(), AppError> {
    let data = host::connect(config, detach)?;
    let source = data.source();

    let mut views = Vec::new();
    for dataset in selection.datasets() {
        views.push((dataset, DatasetView::read(&data, dataset, range)?));
    }

    if json_mode {
        let output = match (selection, views.as_slice()) {
            (Selection::One(_), [(_, view)]) => serde_json::to_value(view),
            _ => {
                let map: serde_json::Map<String, serde_json::Value> = views
                    .iter()
                    .map(|(dataset, view)| {
                        serde_json::to_value(view).map(|v| (dataset.name().to_string(), v))
                    })
                    .collect::<Result<_, _>>()
                    .map_err(|e| AppError::Io(format!("JSON output: {}", e)))?;
                Ok(serde_json::Value::Object(map))
            }
        }
        .map_err(|e| AppError::Io(format!("JSON output: {}", e)))?;

        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Source: {}", source);
    for (dataset, view) in &views {
        println!();
        match dataset {
            Dataset::ChartSeries => println!(
                "[{}] range {}",
                dataset,
                ChartRange::from_selector(range)
            ),
            _ => println!("[{}]", dataset),
        }
        print!("{}", view.render_text());
    }

    Ok(())
}

// =============================================================================
// STATUS COMMAND
// =============================================================================

/// Show mode, URLs and which data origin is active.
pub fn cmd_status(config: &AppConfig, detach: bool, json_mode: bool) -> Result<(), AppError> {
    let data = host::connect(config, detach)?;
    let mode = if config.app.dev_mode {
        "development"
    } else {
        "production"
    };

    if json_mode {
        let output = serde_json::json!({
            "name": config.app.name,
            "mode": mode,
            "app_url": config.app_url(),
            "bind_address": config.bind_address(),
            "content_root": config.web.content_root.to_string_lossy(),
            "bridge_data": config.bridge.data.as_ref().map(|p| p.to_string_lossy()),
            "source": data.source().as_str(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!("{} Status", config.app.name);
    println!("================");
    println!("Mode:         {}", mode);
    println!("App URL:      {}", config.app_url());
    println!("Bind address: {}", config.bind_address());
    println!("Content root: {:?}", config.web.content_root);
    match &config.bridge.data {
        Some(path) => println!("Bridge data:  {:?}", path),
        None => println!("Bridge data:  (none)"),
    }
    println!("Data source:  {}", data.source());

    Ok(())
}

// =============================================================================
// RESOLVE COMMAND
// =============================================================================

/// Show how an app URL is served from the content root.
pub fn cmd_resolve(config: &AppConfig, json_mode: bool, url: &str) -> Result<(), AppError> {
    let resolver = AssetResolver::from_config(config);
    let response = resolver.intercept(url);

    if json_mode {
        let output = match &response {
            Some(asset) => serde_json::json!({
                "url": url,
                "intercepted": true,
                "status": asset.status.as_u16(),
                "mime_type": asset.mime_type,
                "bytes": asset.body.len(),
            }),
            None => serde_json::json!({ "url": url, "intercepted": false }),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    match response {
        Some(asset) => {
            println!("URL:       {}", url);
            println!("Status:    {}", asset.status);
            println!("MIME type: {}", asset.mime_type);
            println!("Bytes:     {}", asset.body.len());
        }
        None => println!(
            "{} is outside {}; the request proceeds untouched",
            url,
            config.app_origin()
        ),
    }

    Ok(())
}
