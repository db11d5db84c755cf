//! # Bundled Asset Serving
//!
//! In production the dashboard is not fetched from a dev server: its built
//! files live under a content root next to the binary and are addressed by
//! the app origin (`<scheme>://<host>`).
//!
//! - URLs outside the app origin are not ours; [`AssetResolver::intercept`]
//!   returns `None` so the caller lets them proceed untouched.
//! - `/` maps to `/index.html`.
//! - Missing files are 404, unreadable files are 500, everything else is 200.
//! - Every response carries the MIME type of the requested file name.

mod mime;

pub use mime::{DEFAULT_MIME_TYPE, MimeTypes};

use crate::config::AppConfig;
use axum::http::StatusCode;
use percent_encoding::percent_decode_str;
use std::path::{Component, Path, PathBuf};

/// File served for the root path.
const INDEX_HTML: &str = "/index.html";

/// Outcome of resolving one asset request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetResponse {
    pub status: StatusCode,
    pub mime_type: String,
    pub body: Vec<u8>,
}

/// Resolves app-origin URLs to files under the content root.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    origin: String,
    content_root: PathBuf,
    mime: MimeTypes,
}

impl AssetResolver {
    /// Create a resolver.
    #[must_use]
    pub fn new(origin: impl Into<String>, content_root: impl Into<PathBuf>, mime: MimeTypes) -> Self {
        Self {
            origin: origin.into(),
            content_root: content_root.into(),
            mime,
        }
    }

    /// Create a resolver from application configuration.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.app_origin(),
            config.web.content_root.clone(),
            MimeTypes::with_overrides(&config.mime),
        )
    }

    /// The content root directory.
    #[must_use]
    pub fn content_root(&self) -> &Path {
        &self.content_root
    }

    /// Handle `url` if it belongs to the app origin.
    #[must_use]
    pub fn intercept(&self, url: &str) -> Option<AssetResponse> {
        let rest = url.strip_prefix(&self.origin)?;
        // `deskboard://dashboardX/...` shares the prefix but is another host.
        if !(rest.is_empty() || rest.starts_with(['/', '?', '#'])) {
            return None;
        }
        let path = rest.split(['?', '#']).next().unwrap_or_default();
        Some(self.resolve(if path.is_empty() { "/" } else { path }))
    }

    /// Resolve a request path against the content root.
    ///
    /// The path is percent-decoded before lookup, so `%20` names a file with
    /// a space and `%2e%2e` is subject to the same traversal check as `..`.
    #[must_use]
    pub fn resolve(&self, path: &str) -> AssetResponse {
        let decoded = percent_decode_str(path).decode_utf8_lossy();
        let file_name = if decoded == "/" { INDEX_HTML } else { decoded.as_ref() };
        let mime_type = self.mime.lookup(file_name).to_string();

        let Some(full_path) = self.locate(file_name) else {
            tracing::debug!("Asset not found: {}", file_name);
            return AssetResponse {
                status: StatusCode::NOT_FOUND,
                mime_type,
                body: Vec::new(),
            };
        };

        match std::fs::read(&full_path) {
            Ok(body) => AssetResponse {
                status: StatusCode::OK,
                mime_type,
                body,
            },
            Err(e) => {
                tracing::warn!("Failed to read asset {}: {}", full_path.display(), e);
                AssetResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    mime_type,
                    body: Vec::new(),
                }
            }
        }
    }

    /// Map a request path to an existing file inside the content root.
    ///
    /// Paths that try to leave the content root are treated as missing.
    fn locate(&self, file_name: &str) -> Option<PathBuf> {
        let relative = Path::new(file_name.trim_start_matches('/'));
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return None;
        }
        let full_path = self.content_root.join(relative);
        full_path.is_file().then_some(full_path)
    }
}

// =============================================================================
// TESTS
// =============================================================================
