//! HTTP helpers shared by the accessors.

use crate::error::{Error, RemoteError, Result};
use reqwest::header::{HeaderMap, LOCATION};
use reqwest::Response;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Build the HTTP client used by an accessor.
///
/// Without a timeout the client keeps reqwest's defaults.
pub fn build_http_client(timeout: Option<u64>) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if let Some(secs) = timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(builder.build()?)
}

/// Turn any response with status >= 400 into [`Error::Status`].
///
/// The body is decoded as a [`RemoteError`] when it has that shape.
pub async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return Ok(response);
    }

    let remote = match response.bytes().await {
        Ok(body) => serde_json::from_slice::<RemoteError>(&body).ok(),
        Err(e) => {
            tracing::debug!("Failed to read error body: {}", e);
            None
        }
    };
    Err(Error::Status { status, remote })
}

/// Decode a JSON response body.
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Last path segment of the `Location` header, i.e. the id of a newly
/// created resource.
pub fn location_id(headers: &HeaderMap) -> Result<String> {
    let location = headers
        .get(LOCATION)
        .ok_or_else(|| Error::InvalidResponse("missing Location header".to_string()))?
        .to_str()
        .map_err(|e| Error::InvalidResponse(format!("unreadable Location header: {}", e)))?;

    // Location may carry a query string (e.g. "?type=Room")
    let path = location.split(['?', '#']).next().unwrap_or_default();
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .ok_or_else(|| Error::InvalidResponse(format!("no id in Location: {}", location)))
}
