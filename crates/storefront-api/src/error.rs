//! Error types for storefront API clients
//!
//! Covers client construction failures and the ways a backend request can
//! fail. Nothing here is retried; errors surface to the caller.

use crate::config::ConfigError;
use thiserror::Error;

/// Storefront API client errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A default header name or value cannot be sent.
    #[error("Invalid header {name}: {message}")]
    InvalidHeader {
        /// Header name.
        name: String,
        /// Error message.
        message: String,
    },

    /// The underlying HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Backend rejected the session or credentials.
    #[error("Authentication failed")]
    Unauthorized,

    /// Requested resource does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// API returned an error response.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the API.
        message: String,
    },

    /// Invalid response from the API.
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

/// Result type for storefront API operations.
pub type ApiResult<T> = Result<T, ApiError>;
