//! Client for FIWARE QuantumLeap.
//!
//! Only the version endpoint is covered; errors are the shared
//! [`fiware_common::Error`].

use fiware_common::{build_http_client, ensure_success, read_json, ClientConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use fiware_common::{Error, Result};

/// Body of `GET /v2/version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub version: String,
}

/// Client of one QuantumLeap instance.
pub struct QuantumLeapAccessor {
    config: ClientConfig,
    http_client: reqwest::Client,
}

impl QuantumLeapAccessor {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http_client = build_http_client(config.timeout)?;
        Ok(Self {
            config,
            http_client,
        })
    }

    /// Accessor configured from `QL_URL`.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::quantumleap_from_env())
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    pub async fn get_version(&self) -> Result<Version> {
        let url = format!("{}/v2/version", self.base_url());
        debug!("GET {}", url);
        let response = ensure_success(self.http_client.get(&url).send().await?).await?;
        read_json(response).await
    }
}
