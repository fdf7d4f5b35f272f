//! Broker version (`GET /version`).

use crate::accessor::OrionAccessor;
use crate::error::{OrionError, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use fiware_common::{ensure_success, read_json};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use std::time::Duration;
use tracing::debug;

/// Version information of a running Orion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub version: String,
    pub uptime: Duration,
    pub git_hash: String,
    pub compile_time: DateTime<Utc>,
    pub compiled_by: String,
    pub compiled_in: String,
    pub release_date: DateTime<Utc>,
    pub doc: String,
}

/// Body of `GET /version`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionResponse {
    pub orion: VersionStrings,
}

/// Version fields exactly as Orion reports them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VersionStrings {
    pub version: String,
    pub uptime: String,
    pub git_hash: String,
    pub compile_time: String,
    pub compiled_by: String,
    pub compiled_in: String,
    pub release_date: String,
    #[serde(default)]
    pub doc: String,
}

impl VersionResponse {
    pub fn to_version(&self) -> Result<Version> {
        let o = &self.orion;
        Ok(Version {
            version: o.version.clone(),
            uptime: parse_uptime(&o.uptime)?,
            git_hash: o.git_hash.clone(),
            compile_time: parse_unix_date(&o.compile_time)?,
            compiled_by: o.compiled_by.clone(),
            compiled_in: o.compiled_in.clone(),
            release_date: parse_unix_date(&o.release_date)?,
            doc: o.doc.clone(),
        })
    }
}

fn uptime_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\d+) d, (\d+) h, (\d+) m, (\d+) s$").expect("uptime pattern is valid")
    })
}

/// Parse `"<d> d, <h> h, <m> m, <s> s"`.
pub fn parse_uptime(s: &str) -> Result<Duration> {
    let caps = uptime_regex()
        .captures(s.trim())
        .ok_or_else(|| OrionError::InvalidUptime(s.to_string()))?;

    let mut secs: u64 = 0;
    for (i, unit) in [(1, 86_400u64), (2, 3_600), (3, 60), (4, 1)] {
        let n: u64 = caps[i]
            .parse()
            .map_err(|_| OrionError::InvalidUptime(s.to_string()))?;
        secs = n
            .checked_mul(unit)
            .and_then(|v| secs.checked_add(v))
            .ok_or_else(|| OrionError::InvalidUptime(s.to_string()))?;
    }
    Ok(Duration::from_secs(secs))
}

/// Parse the Unix `date` format, e.g. `Thu Feb 21 10:28:42 UTC 2019`.
///
/// The zone abbreviation is not interpreted; the time is read as UTC.
pub fn parse_unix_date(s: &str) -> Result<DateTime<Utc>> {
    let fields: Vec<&str> = s.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(OrionError::InvalidTimestamp(s.to_string()));
    }
    let without_zone = format!(
        "{} {} {} {} {}",
        fields[0], fields[1], fields[2], fields[3], fields[5]
    );
    NaiveDateTime::parse_from_str(&without_zone, "%a %b %d %H:%M:%S %Y")
        .map(|naive| naive.and_utc())
        .map_err(|_| OrionError::InvalidTimestamp(s.to_string()))
}

impl OrionAccessor {
    /// Version of the broker. Does not need the entry points.
    pub async fn get_version(&self) -> Result<Version> {
        let url = format!("{}/version", self.base_url());
        debug!("GET {}", url);
        let response = ensure_success(self.http_client().get(&url).send().await?).await?;
        let body: VersionResponse = read_json(response).await?;
        body.to_version()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_uptime() {
        assert_eq!(
            parse_uptime("0 d, 2 h, 3 m, 4 s").unwrap(),
            Duration::from_secs(2 * 3600 + 3 * 60 + 4)
        );
        assert_eq!(
            parse_uptime("10 d, 0 h, 0 m, 1 s").unwrap(),
            Duration::from_secs(10 * 86_400 + 1)
        );
        assert!(matches!(
            parse_uptime("2 h, 3 m"),
            Err(OrionError::InvalidUptime(_))
        ));
        assert!(parse_uptime("").is_err());
    }

    #[test]
    fn test_parse_unix_date() {
        let t = parse_unix_date("Thu Feb 21 10:28:42 UTC 2019").unwrap();
        assert_eq!((t.year(), t.month(), t.day()), (2019, 2, 21));
        assert_eq!((t.hour(), t.minute(), t.second()), (10, 28, 42));

        // single-digit days are space padded
        let t = parse_unix_date("Mon Jan  2 15:04:05 MST 2006").unwrap();
        assert_eq!(t.day(), 2);

        assert!(matches!(
            parse_unix_date("2019-02-21T10:28:42Z"),
            Err(OrionError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn test_to_version() {
        let body: VersionResponse = serde_json::from_str(
            r#"{"orion":{"version":"2.2.0","uptime":"0 d, 0 h, 1 m, 0 s",
                "git_hash":"5a46a70","compile_time":"Thu Feb 21 10:28:42 UTC 2019",
                "compiled_by":"root","compiled_in":"442fc4d225cc",
                "release_date":"Thu Feb 21 10:28:42 UTC 2019",
                "doc":"https://fiware-orion.rtfd.io/en/2.2.0/"}}"#,
        )
        .unwrap();
        let version = body.to_version().unwrap();
        assert_eq!(version.version, "2.2.0");
        assert_eq!(version.uptime, Duration::from_secs(60));
        assert_eq!(version.compile_time, version.release_date);
    }
}
