//! # Deskboard CLI Module
//!
//! This module implements the CLI interface for Deskboard.
//!
//! ## Available Commands
//!
//! - `serve` - Start the HTTP server (datasets + bundled dashboard)
//! - `show` - Print one dataset, or all of them
//! - `status` - Show mode, URLs and which data origin is active
//! - `resolve` - Show how an app URL maps to a bundled asset

mod commands;

use clap::{Parser, Subcommand};
use deskboard::{AppConfig, AppError};
use deskboard_core::{ChartRange, Dataset};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Deskboard - Dashboard Host Shell
///
/// Serves a web dashboard together with the host bridge that feeds it.
/// Without a bridge the dashboard falls back to built-in datasets.
#[derive(Parser, Debug)]
#[command(name = "deskboard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the configuration file (default: deskboard.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Do not inject the host bridge; serve built-in datasets only
    #[arg(long, global = true)]
    pub no_bridge: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP server
    Serve {
        /// Host to bind to (overrides config)
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to bind to (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print a dataset
    Show {
        /// Dataset: cards, feeds, projects, sales, chart, or all
        #[arg(value_parser = parse_selection, default_value = "all")]
        dataset: Selection,

        /// Chart range selector (7d, 30d, 3m); unknown values read as 3m
        #[arg(short, long, default_value = ChartRange::DEFAULT_SELECTOR)]
        range: String,
    },

    /// Show mode, URLs and active data origin
    Status,

    /// Resolve an app URL against the bundled content root
    Resolve {
        /// URL to resolve, e.g. deskboard://dashboard/index.html
        url: String,
    },
}

/// Which datasets `show` prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    All,
    One(Dataset),
}

impl Selection {
    /// Datasets covered by this selection, in dashboard order.
    #[must_use]
    pub fn datasets(self) -> Vec<Dataset> {
        match self {
            Self::All => Dataset::ALL.to_vec(),
            Self::One(dataset) => vec![dataset],
        }
    }
}

fn parse_selection(value: &str) -> Result<Selection, String> {
    if value == "all" {
        return Ok(Selection::All);
    }
    Dataset::from_name(value).map(Selection::One).ok_or_else(|| {
        let names: Vec<&str> = Dataset::ALL.iter().map(|d| d.name()).collect();
        format!("unknown dataset '{}' (expected one of: {}, all)", value, names.join(", "))
    })
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), AppError> {
    let config = AppConfig::load(cli.config.as_deref())?;
    let detach = cli.no_bridge;
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Serve { host, port }) => cmd_serve(config, detach, host, port).await,
        Some(Commands::Show { dataset, range }) => {
            cmd_show(&config, detach, json_mode, dataset, &range)
        }
        Some(Commands::Resolve { url }) => cmd_resolve(&config, json_mode, &url),
        Some(Commands::Status) | None => cmd_status(&config, detach, json_mode),
    }
}
