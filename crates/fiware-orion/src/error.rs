//! Error types for the Orion client.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrionError {
    #[error("illegal end point ID: {0}")]
    IllegalEndPointId(String),

    #[error("incompatible query: {key} cannot be combined with {conflicts_with}")]
    IncompatibleQuery {
        key: &'static str,
        conflicts_with: &'static str,
    },

    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("invalid latitude or longitude: {0}")]
    InvalidLatLng(String),

    #[error("invalid uptime: {0}")]
    InvalidUptime(String),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error(transparent)]
    Common(#[from] fiware_common::Error),
}

impl OrionError {
    /// HTTP status of a protocol error.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Common(e) => e.status(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for OrionError {
    fn from(e: reqwest::Error) -> Self {
        Self::Common(e.into())
    }
}

impl From<url::ParseError> for OrionError {
    fn from(e: url::ParseError) -> Self {
        Self::Common(e.into())
    }
}

impl From<serde_json::Error> for OrionError {
    fn from(e: serde_json::Error) -> Self {
        Self::Common(e.into())
    }
}

/// Result type for Orion operations
pub type Result<T> = std::result::Result<T, OrionError>;
