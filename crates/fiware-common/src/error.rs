//! Error types shared by every FIWARE accessor.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error body returned by FIWARE services on failure.
///
/// The IoT Agent answers with `{"name": ..., "message": ...}` while Orion
/// answers with `{"error": ..., "description": ...}`; both shapes decode here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteError {
    #[serde(alias = "error")]
    pub name: String,

    #[serde(alias = "description", default)]
    pub message: String,
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}: {}", self.name, self.message)
        }
    }
}

/// Errors that can occur when talking to a FIWARE service.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid service name")]
    InvalidServiceName,

    #[error("invalid service path")]
    InvalidServicePath,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server returned {status}{}", remote_suffix(.remote))]
    Status {
        status: reqwest::StatusCode,
        remote: Option<RemoteError>,
    },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

fn remote_suffix(remote: &Option<RemoteError>) -> String {
    remote
        .as_ref()
        .map(|r| format!(" ({})", r))
        .unwrap_or_default()
}

impl Error {
    /// HTTP status of a protocol error, if this is one.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Parsed error body of a protocol error, if the server sent one.
    pub fn remote(&self) -> Option<&RemoteError> {
        match self {
            Self::Status { remote, .. } => remote.as_ref(),
            _ => None,
        }
    }
}

/// Result type for common operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_accepts_both_shapes() {
        let iota: RemoteError =
            serde_json::from_str(r#"{"name":"DEVICE_NOT_FOUND","message":"No device found"}"#)
                .unwrap();
        assert_eq!(iota.name, "DEVICE_NOT_FOUND");
        assert_eq!(iota.message, "No device found");

        let orion: RemoteError = serde_json::from_str(
            r#"{"error":"NotFound","description":"The requested entity has not been found"}"#,
        )
        .unwrap();
        assert_eq!(orion.name, "NotFound");
        assert_eq!(orion.message, "The requested entity has not been found");
    }

    #[test]
    fn test_status_error_display() {
        let err = Error::Status {
            status: reqwest::StatusCode::NOT_FOUND,
            remote: Some(RemoteError {
                name: "NotFound".to_string(),
                message: "gone".to_string(),
            }),
        };
        assert_eq!(err.to_string(), "Server returned 404 Not Found (NotFound: gone)");
        assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));

        let bare = Error::Status {
            status: reqwest::StatusCode::BAD_REQUEST,
            remote: None,
        };
        assert_eq!(bare.to_string(), "Server returned 400 Bad Request");
        assert!(bare.remote().is_none());
    }
}
