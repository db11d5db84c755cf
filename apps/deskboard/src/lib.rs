//! # Deskboard
//!
//! Host shell library: configuration, the host-side bridge, bundled asset
//! serving and the HTTP API. The binary in `main.rs` adds the CLI on top.

pub mod api;
pub mod assets;
pub mod config;
pub mod error;
pub mod host;

pub use config::AppConfig;
pub use error::AppError;
