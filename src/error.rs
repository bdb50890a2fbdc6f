//! Error types for the Tautulli exporter.
//!
//! Configuration errors are fatal at startup. Fetch errors are scrape-scoped:
//! the collector records them as `up == 0` and logs them, they never reach the
//! HTTP handlers.

use std::time::Duration;
use thiserror::Error;

/// Result type alias using our custom error types.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Top-level error type that encompasses all application errors.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("configuration error")]
    Config(#[from] ConfigError),

    /// Tautulli communication errors
    #[error("Tautulli error")]
    Fetch(#[from] FetchError),

    /// Metric registration or encoding errors
    #[error("metrics error: {0}")]
    Metrics(#[from] prometheus::Error),

    /// Listener errors
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),

    /// Generic errors that don't fit other categories
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable parsing failed
    #[error("failed to parse environment variables: {0}")]
    EnvParse(String),

    /// Required configuration value is missing
    #[error("missing required configuration: {0}")]
    Missing(String),

    /// Configuration value is invalid
    #[error("invalid configuration value for {field}: {message}")]
    Invalid { field: String, message: String },
}

/// Errors raised while fetching activity from Tautulli.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The HTTP client could not be built
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// Request did not complete within the configured timeout
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// Server answered with a non-2xx status
    #[error("HTTP status {status}")]
    Status { status: u16 },

    /// Reading the response body failed part way
    #[error("failed to read response body: {0}")]
    Body(String),
}

impl ConfigError {
    /// Creates a new environment parse error.
    pub fn env_parse(err: impl std::fmt::Display) -> Self {
        Self::EnvParse(err.to_string())
    }

    /// Creates a new missing configuration error.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::Missing(field.into())
    }

    /// Creates a new invalid configuration error.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl FetchError {
    /// Classifies a reqwest error, keeping timeouts distinct from other failures.
    pub fn from_request(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout)
        } else {
            Self::Request(err)
        }
    }

    /// Creates a status error from a non-2xx response status.
    pub fn status(status: reqwest::StatusCode) -> Self {
        Self::Status {
            status: status.as_u16(),
        }
    }

    /// Creates a body read error.
    pub fn body(err: impl std::fmt::Display) -> Self {
        Self::Body(err.to_string())
    }
}
