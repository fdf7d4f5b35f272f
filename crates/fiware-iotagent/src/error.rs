//! Error types for the IoT Agent client.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IotAgentError {
    #[error("device not found: {0}")]
    DeviceNotFound(String),

    #[error("invalid port in about response: {0}")]
    InvalidPort(String),

    #[error(transparent)]
    Common(#[from] fiware_common::Error),
}

impl IotAgentError {
    /// HTTP status of a protocol error.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Common(e) => e.status(),
            Self::DeviceNotFound(_) => Some(reqwest::StatusCode::NOT_FOUND),
            Self::InvalidPort(_) => None,
        }
    }
}

impl From<reqwest::Error> for IotAgentError {
    fn from(e: reqwest::Error) -> Self {
        Self::Common(e.into())
    }
}

impl From<url::ParseError> for IotAgentError {
    fn from(e: url::ParseError) -> Self {
        Self::Common(e.into())
    }
}

impl From<serde_json::Error> for IotAgentError {
    fn from(e: serde_json::Error) -> Self {
        Self::Common(e.into())
    }
}

/// Result type for IoT Agent operations
pub type Result<T> = std::result::Result<T, IotAgentError>;
