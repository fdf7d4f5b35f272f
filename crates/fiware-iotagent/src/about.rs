//! `GET /iot/about`, usable as a health check.

use crate::accessor::IotAgentAccessor;
use crate::error::{IotAgentError, Result};
use fiware_common::Tenant;
use reqwest::Method;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct About {
    pub lib_version: String,
    pub port: u16,
    pub base_root: String,
    pub version: String,
}

/// Body of `GET /iot/about`; the agent reports its port as a string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutResponse {
    pub lib_version: String,
    pub port: RawPort,
    pub base_root: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPort {
    Number(u64),
    Text(String),
}

impl RawPort {
    fn to_port(&self) -> Result<u16> {
        match self {
            Self::Number(n) => u16::try_from(*n).map_err(|_| IotAgentError::InvalidPort(n.to_string())),
            Self::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| IotAgentError::InvalidPort(s.clone())),
        }
    }
}

impl AboutResponse {
    pub fn to_about(&self) -> Result<About> {
        Ok(About {
            lib_version: self.lib_version.clone(),
            port: self.port.to_port()?,
            base_root: self.base_root.clone(),
            version: self.version.clone(),
        })
    }
}

impl IotAgentAccessor {
    pub async fn get_about(&self) -> Result<About> {
        let url = self.config_url(&["iot", "about"])?;
        let body: AboutResponse = self.send_json(Method::GET, url, &Tenant::default()).await?;
        body.to_about()
    }
}
