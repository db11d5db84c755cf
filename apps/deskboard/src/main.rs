//! # Deskboard - Dashboard Host Shell
//!
//! The main binary for Deskboard.
//!
//! This application provides:
//! - The host backend injected as the dashboard's bridge
//! - HTTP server for the datasets and the bundled dashboard (axum-based)
//! - CLI interface for inspecting datasets and asset resolution
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    apps/deskboard (THE SHELL)                   │
//! │                                                                 │
//! │  ┌─────────────┐    ┌─────────────┐    ┌──────────────────┐   │
//! │  │   CLI       │    │   HTTP API  │    │  Host Backend    │   │
//! │  │  (clap)     │    │   (axum)    │    │  (the bridge)    │   │
//! │  └──────┬──────┘    └──────┬──────┘    └────────┬─────────┘   │
//! │         │                  │                    │ injected     │
//! │         └──────────────────┼────────────────────┘              │
//! │                            ▼                                   │
//! │                   ┌─────────────────┐                          │
//! │                   │ deskboard-core  │                          │
//! │                   │ (THE CONTRACT)  │                          │
//! │                   └─────────────────┘                          │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Serve the dashboard and its datasets
//! deskboard serve --host 127.0.0.1 --port 8080
//!
//! # Inspect datasets
//! deskboard show sales
//! deskboard show chart --range 7d --json-mode
//! deskboard --no-bridge show projects
//! ```

mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // DESKBOARD_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("DESKBOARD_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "deskboard=info,tower_http=debug".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    let cli = cli::Cli::parse();

    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the Deskboard startup banner.
fn print_banner() {
    println!(
        r#"
  ╔╦╗╔═╗╔═╗╦╔═╔╗ ╔═╗╔═╗╦═╗╔╦╗
   ║║║╣ ╚═╗╠╩╗╠╩╗║ ║╠═╣╠╦╝ ║║
  ═╩╝╚═╝╚═╝╩ ╩╚═╝╚═╝╩ ╩╩╚══╩╝

  Dashboard Host Shell v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
