//! IoT Agent connection settings.

use fiware_common::{defaults, env_or, env_vars};
use serde::{Deserialize, Serialize};

fn default_config_url() -> String {
    defaults::IOTA_CONFIG_URL.to_string()
}

fn default_report_url() -> String {
    defaults::IOTA_REPORT_URL.to_string()
}

/// An IoT Agent listens on two ports: the provisioning (north) API and the
/// measure (south) API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IotAgentConfig {
    /// Provisioning API base URL (e.g., http://iot-agent:4041)
    #[serde(default = "default_config_url")]
    pub config_url: String,

    /// Measure API base URL (e.g., http://iot-agent:7896)
    #[serde(default = "default_report_url")]
    pub report_url: String,

    /// Request timeout in seconds; `None` keeps the HTTP client default
    #[serde(default)]
    pub timeout: Option<u64>,
}

impl Default for IotAgentConfig {
    fn default() -> Self {
        Self::new(default_config_url(), default_report_url())
    }
}

impl IotAgentConfig {
    pub fn new(config_url: impl Into<String>, report_url: impl Into<String>) -> Self {
        Self {
            config_url: config_url.into(),
            report_url: report_url.into(),
            timeout: None,
        }
    }

    /// Settings from `IOTA_CONFIG_URL` and `IOTA_REPORT_URL`.
    pub fn from_env() -> Self {
        Self::new(
            env_or(env_vars::IOTA_CONFIG_URL, defaults::IOTA_CONFIG_URL),
            env_or(env_vars::IOTA_REPORT_URL, defaults::IOTA_REPORT_URL),
        )
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout = Some(secs);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = IotAgentConfig::default();
        assert_eq!(config.config_url, "http://localhost:4041");
        assert_eq!(config.report_url, "http://localhost:7896");
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: IotAgentConfig =
            serde_json::from_str(r#"{"config_url": "http://iota:4041", "timeout": 5}"#).unwrap();
        assert_eq!(config.config_url, "http://iota:4041");
        assert_eq!(config.report_url, "http://localhost:7896");
        assert_eq!(config.timeout, Some(5));
    }
}
