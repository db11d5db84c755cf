//! # Host Side
//!
//! What the native shell contributes to the dashboard: the backend object it
//! injects as the bridge, and the bootstrap that wires it into a
//! [`DataAccess`](deskboard_core::DataAccess).

mod backend;

pub use backend::{HostBackend, HostDataset};

use crate::config::AppConfig;
use crate::error::AppError;
use deskboard_core::{BridgeSlot, DataAccess};
use std::sync::Arc;

/// Build the host backend the configuration asks for, if any.
///
/// Returns `Ok(None)` when no bridge data file is configured.
pub fn backend_from_config(config: &AppConfig) -> Result<Option<HostBackend>, AppError> {
    match &config.bridge.data {
        Some(path) => {
            let backend = HostBackend::load(path)?;
            tracing::info!("Host bridge loaded from {}", path.display());
            Ok(Some(backend))
        }
        None => Ok(None),
    }
}

/// Build a data-access layer for `config`, with the bridge injected up front.
///
/// `detach` forces fallback mode regardless of configuration.
pub fn connect(config: &AppConfig, detach: bool) -> Result<DataAccess, AppError> {
    if detach {
        tracing::info!("Bridge detached on request; using built-in datasets");
        return Ok(DataAccess::detached());
    }
    let backend = backend_from_config(config)?;
    Ok(DataAccess::new(
        backend.map(|b| Arc::new(b) as Arc<dyn deskboard_core::DashboardBridge>),
    ))
}

/// Inject the configured backend into `slot` once it has loaded.
///
/// The dashboard keeps serving built-in datasets until the injection lands.
/// A backend that fails to load is logged and the slot stays empty.
pub async fn inject_when_ready(config: AppConfig, slot: Arc<BridgeSlot>) {
    let loaded = tokio::task::spawn_blocking(move || backend_from_config(&config)).await;

    match loaded {
        Ok(Ok(Some(backend))) => {
            slot.inject(Arc::new(backend));
            tracing::info!("Host bridge injected");
        }
        Ok(Ok(None)) => tracing::info!("No host bridge configured; using built-in datasets"),
        Ok(Err(e)) => tracing::error!("Host bridge not injected: {}", e),
        Err(e) => tracing::error!("Host bridge loader failed: {}", e),
    }
}
