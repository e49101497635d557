//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and the error type
//! shared by all API calls.

use super::config::{config, is_production};
use thiserror::Error;

/// Ошибка обращения к backend API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request could not be built or sent (serialization, network)
    #[error("request failed: {0}")]
    Request(String),

    /// Backend answered with a non-success status
    #[error("HTTP {0}")]
    Status(u16),

    /// Response body could not be parsed
    #[error("failed to parse response: {0}")]
    Body(String),
}

/// Get the base URL for API requests
///
/// Resolved once from the embedded configuration and the build mode.
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/api/businesses", api_base());
/// ```
pub fn api_base() -> String {
    config().api_base(is_production()).to_string()
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

/// Join a base URL and a path with exactly one slash between them
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
