//! # Configuration
//!
//! Deskboard reads an optional TOML file, then applies environment overrides.
//!
//! ## Resolution
//!
//! 1. `--config <path>` on the command line (must exist)
//! 2. `DESKBOARD_CONFIG` environment variable (must exist)
//! 3. `deskboard.toml` in the working directory (optional; defaults if absent)
//!
//! ## Environment Overrides
//!
//! - `DESKBOARD_DEV_MODE`: `1`/`true` serves the dashboard from the dev server
//!   URL instead of the bundled content root; `0`/`false` forces production.
//!
//! ## Example
//!
//! ```toml
//! [app]
//! name = "Deskboard"
//! dev_mode = false
//!
//! [web]
//! scheme = "deskboard"
//! host = "dashboard"
//! dev_url = "http://localhost:4200"
//! content_root = "web"
//!
//! [server]
//! host = "127.0.0.1"
//! port = 8080
//!
//! [bridge]
//! data = "dashboard.json"
//!
//! [mime]
//! webmanifest = "application/manifest+json"
//! ```

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Config file looked up when nothing else is specified.
pub const DEFAULT_CONFIG_FILE: &str = "deskboard.toml";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "DESKBOARD_CONFIG";

/// Environment variable overriding `app.dev_mode`.
pub const DEV_MODE_ENV: &str = "DESKBOARD_DEV_MODE";

// =============================================================================
// SECTIONS
// =============================================================================

/// Complete application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app: AppSection,
    pub web: WebSection,
    pub server: ServerSection,
    pub bridge: BridgeSection,
    /// Extension -> MIME type overrides for bundled assets.
    pub mime: BTreeMap<String, String>,
}

/// Application identity and mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSection {
    pub name: String,
    /// Development mode: the dashboard comes from `web.dev_url`.
    pub dev_mode: bool,
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            name: "Deskboard".to_string(),
            dev_mode: false,
        }
    }
}

/// Where the web layer is loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebSection {
    /// Custom scheme the bundled dashboard is addressed by.
    pub scheme: String,
    /// Host part of the bundled dashboard URL.
    pub host: String,
    /// Dashboard URL in development mode.
    pub dev_url: String,
    /// Directory holding the built dashboard in production mode.
    pub content_root: PathBuf,
}

impl Default for WebSection {
    fn default() -> Self {
        Self {
            scheme: "deskboard".to_string(),
            host: "dashboard".to_string(),
            dev_url: "http://localhost:4200".to_string(),
            content_root: PathBuf::from("web"),
        }
    }
}

/// HTTP listener.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Host bridge. Without a data file no bridge is injected and the dashboard
/// runs on its built-in datasets.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeSection {
    /// JSON file with the host's datasets.
    pub data: Option<PathBuf>,
}

// =============================================================================
// LOADING
// =============================================================================

impl AppConfig {
    /// Parse a TOML document. `origin` is only used in error messages.
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self, AppError> {
        toml::from_str(text).map_err(|e| AppError::ConfigParse {
            path: origin.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Read and parse a config file.
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let text = std::fs::read_to_string(path).map_err(|e| AppError::ConfigRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let mut config = Self::from_toml_str(&text, path)?;
        config.rebase(path.parent().unwrap_or(Path::new(".")));
        Ok(config)
    }

    /// Load configuration following the documented resolution order, then
    /// apply environment overrides.
    pub fn load(explicit: Option<&Path>) -> Result<Self, AppError> {
        let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);

        let mut config = match explicit.map(Path::to_path_buf).or(from_env) {
            Some(path) => {
                tracing::debug!("Loading config from {}", path.display());
                Self::from_file(&path)?
            }
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    tracing::debug!("Loading config from {}", default_path.display());
                    Self::from_file(default_path)?
                } else {
                    tracing::debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                    Self::default()
                }
            }
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply overrides from an environment lookup.
    ///
    /// Unrecognized values are ignored with a warning.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup(DEV_MODE_ENV) {
            match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => self.app.dev_mode = true,
                "0" | "false" | "no" => self.app.dev_mode = false,
                other => tracing::warn!("Ignoring {}={:?}", DEV_MODE_ENV, other),
            }
        }
    }

    /// Resolve relative paths against the directory holding the config file.
    fn rebase(&mut self, base: &Path) {
        if self.web.content_root.is_relative() {
            self.web.content_root = base.join(&self.web.content_root);
        }
        if let Some(data) = self.bridge.data.as_mut() {
            if data.is_relative() {
                *data = base.join(&*data);
            }
        }
    }

    // =========================================================================
    // DERIVED VALUES
    // =========================================================================

    /// Origin of the bundled dashboard, e.g. `deskboard://dashboard`.
    #[must_use]
    pub fn app_origin(&self) -> String {
        format!("{}://{}", self.web.scheme, self.web.host)
    }

    /// URL the dashboard is loaded from in the current mode.
    #[must_use]
    pub fn app_url(&self) -> String {
        if self.app.dev_mode {
            self.web.dev_url.clone()
        } else {
            format!("{}/", self.app_origin())
        }
    }

    /// `host:port` the HTTP server binds to.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

// =============================================================================
// TESTS
// =============================================================================
