//! # MIME Types
//!
//! Maps a file name to the `Content-Type` it is served with. The lookup uses
//! the text after the last dot, case-insensitively. Unknown or missing
//! extensions are served as `application/octet-stream`.

use std::collections::BTreeMap;

/// Type used when the extension is unknown.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Built-in table for what a bundled dashboard typically contains.
const BUILTIN: [(&str, &str); 14] = [
    ("html", "text/html"),
    ("htm", "text/html"),
    ("css", "text/css"),
    ("js", "text/javascript"),
    ("json", "application/json"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("svg", "image/svg+xml"),
    ("ico", "image/vnd.microsoft.icon"),
    ("woff", "font/woff"),
    ("woff2", "font/woff2"),
    ("ttf", "font/ttf"),
];

/// Extension to MIME type table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MimeTypes {
    table: BTreeMap<String, String>,
}

impl Default for MimeTypes {
    fn default() -> Self {
        Self {
            table: BUILTIN
                .iter()
                .map(|&(ext, mime)| (ext.to_string(), mime.to_string()))
                .collect(),
        }
    }
}

impl MimeTypes {
    /// Built-in table plus `overrides` (extension -> type). Overrides win.
    #[must_use]
    pub fn with_overrides(overrides: &BTreeMap<String, String>) -> Self {
        let mut types = Self::default();
        for (ext, mime) in overrides {
            types
                .table
                .insert(ext.trim_start_matches('.').to_ascii_lowercase(), mime.clone());
        }
        types
    }

    /// MIME type for `file_path`.
    #[must_use]
    pub fn lookup(&self, file_path: &str) -> &str {
        file_path
            .rsplit_once('.')
            .and_then(|(_, ext)| self.table.get(&ext.to_ascii_lowercase()))
            .map(String::as_str)
            .unwrap_or(DEFAULT_MIME_TYPE)
    }
}
