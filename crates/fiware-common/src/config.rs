//! Client configuration shared by the accessors.

use serde::{Deserialize, Serialize};

/// Environment variables read by the `from_env` constructors.
pub mod env_vars {
    pub const ORION_URL: &str = "ORION_URL";
    pub const IOTA_CONFIG_URL: &str = "IOTA_CONFIG_URL";
    pub const IOTA_REPORT_URL: &str = "IOTA_REPORT_URL";
    pub const QL_URL: &str = "QL_URL";
}

/// Default endpoints of a local FIWARE deployment.
pub mod defaults {
    pub const ORION_URL: &str = "http://localhost:1026";
    /// IoT Agent north port (provisioning API).
    pub const IOTA_CONFIG_URL: &str = "http://localhost:4041";
    /// IoT Agent south port (measure reports).
    pub const IOTA_REPORT_URL: &str = "http://localhost:7896";
    pub const QL_URL: &str = "http://localhost:8668";
}

/// Value of `var`, or `default` when unset or empty.
pub fn env_or(var: &str, default: &str) -> String {
    std::env::var(var)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Connection settings for a single-endpoint service (Orion, QuantumLeap).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the service (e.g., http://orion:1026)
    pub url: String,

    /// Request timeout in seconds; `None` keeps the HTTP client default
    #[serde(default)]
    pub timeout: Option<u64>,
}

impl ClientConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout = Some(secs);
        self
    }

    /// Orion settings from `ORION_URL`.
    pub fn orion_from_env() -> Self {
        Self::new(env_or(env_vars::ORION_URL, defaults::ORION_URL))
    }

    /// QuantumLeap settings from `QL_URL`.
    pub fn quantumleap_from_env() -> Self {
        Self::new(env_or(env_vars::QL_URL, defaults::QL_URL))
    }

    /// Base URL without trailing slashes.
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trims_slash() {
        let config = ClientConfig::new("http://localhost:1026/");
        assert_eq!(config.base_url(), "http://localhost:1026");
        assert_eq!(config.timeout, None);
        assert_eq!(config.with_timeout(3).timeout, Some(3));
    }

    #[test]
    fn test_deserialize_without_timeout() {
        let config: ClientConfig = serde_json::from_str(r#"{"url":"http://ql:8668"}"#).unwrap();
        assert_eq!(config.url, "http://ql:8668");
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_env_or_default() {
        assert_eq!(
            env_or("FIWARE_COMMON_TEST_UNSET_VARIABLE", "http://fallback"),
            "http://fallback"
        );
    }
}
