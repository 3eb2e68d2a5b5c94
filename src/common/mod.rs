//! Shared utilities for configuration, errors, HTTP access, cookies, logging
//! and build metadata. Centralizing these keeps both forms' network behavior
//! consistent. Nothing here stores secrets, but callers must still avoid
//! logging passwords or CSRF tokens.

pub mod api;
pub mod build_info;
pub mod config;
pub mod cookies;
pub mod errors;
pub mod telemetry;

pub use config::AppConfig;
pub use cookies::get_cookie;
pub use errors::{AppError, SetupError};
