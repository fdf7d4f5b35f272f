//! Agent log level (`/admin/log`).

use crate::accessor::IotAgentAccessor;
use crate::error::Result;
use fiware_common::Tenant;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Info,
    Error,
    Fatal,
    Debug,
    Warning,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
            Self::Debug => "DEBUG",
            Self::Warning => "WARNING",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LogLevelBody {
    level: LogLevel,
}

impl IotAgentAccessor {
    pub async fn get_log_level(&self) -> Result<LogLevel> {
        let url = self.config_url(&["admin", "log"])?;
        let body: LogLevelBody = self.send_json(Method::GET, url, &Tenant::default()).await?;
        Ok(body.level)
    }

    pub async fn update_log_level(&self, level: LogLevel) -> Result<()> {
        let mut url = self.config_url(&["admin", "log"])?;
        url.query_pairs_mut().append_pair("level", level.as_str());
        self.send_checked(Method::PUT, url, &Tenant::default(), None)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_json() {
        let body: LogLevelBody = serde_json::from_str(r#"{"level":"WARNING"}"#).unwrap();
        assert_eq!(body.level, LogLevel::Warning);
        assert_eq!(serde_json::to_string(&LogLevel::Fatal).unwrap(), "\"FATAL\"");
        assert!(serde_json::from_str::<LogLevel>("\"TRACE\"").is_err());
        assert_eq!(LogLevel::Debug.to_string(), "DEBUG");
    }
}
