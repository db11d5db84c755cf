//! # Application Errors
//!
//! Failures of the host shell itself: configuration, host data, I/O and the
//! server. Dataset read failures keep their own type from `deskboard-core`
//! and are wrapped here only when they end a CLI command.

use deskboard_core::DashboardError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the Deskboard application layer.
#[derive(Debug, Error)]
pub enum AppError {
    /// The configuration file could not be read.
    #[error("Cannot read config {}: {reason}", .path.display())]
    ConfigRead { path: PathBuf, reason: String },

    /// The configuration file is not valid TOML for our schema.
    #[error("Invalid config {}: {reason}", .path.display())]
    ConfigParse { path: PathBuf, reason: String },

    /// The host dataset file could not be loaded.
    #[error("Cannot load host data {}: {reason}", .path.display())]
    HostData { path: PathBuf, reason: String },

    /// A dataset read failed.
    #[error(transparent)]
    Dataset(#[from] DashboardError),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(String),
}
