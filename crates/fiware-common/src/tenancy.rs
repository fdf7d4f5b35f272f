//! Multi-tenancy headers (`fiware-service` / `fiware-servicepath`).

use crate::error::{Error, Result};
use regex::Regex;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const SERVICE_HEADER: &str = "fiware-service";
pub const SERVICE_PATH_HEADER: &str = "fiware-servicepath";

fn service_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[_a-z0-9]{1,50}$").expect("service pattern is valid"))
}

// max 10 path depth
fn service_path_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^/$|^/[_a-z0-9]{1,50}(/[_a-z0-9]{1,50}){0,9}$")
            .expect("service path pattern is valid")
    })
}

/// Whether `s` is usable as a `fiware-service` header value.
pub fn is_valid_service(s: &str) -> bool {
    service_regex().is_match(s)
}

/// Whether `s` is usable as a `fiware-servicepath` header value.
pub fn is_valid_service_path(s: &str) -> bool {
    service_path_regex().is_match(s)
}

/// Attach the tenancy headers to `headers`.
///
/// Empty values are skipped. The service header is attached before the path
/// is checked, so an invalid path leaves the service header in place.
pub fn add_service_header(headers: &mut HeaderMap, service: &str, service_path: &str) -> Result<()> {
    if !service.is_empty() {
        if !is_valid_service(service) {
            return Err(Error::InvalidServiceName);
        }
        let value = HeaderValue::from_str(service).map_err(|_| Error::InvalidServiceName)?;
        headers.append(SERVICE_HEADER, value);
    }
    if !service_path.is_empty() {
        if !is_valid_service_path(service_path) {
            return Err(Error::InvalidServicePath);
        }
        let value =
            HeaderValue::from_str(service_path).map_err(|_| Error::InvalidServicePath)?;
        headers.append(SERVICE_PATH_HEADER, value);
    }
    Ok(())
}

/// Tenant a request is scoped to.
///
/// The default tenant has neither a service nor a path and sends no
/// tenancy headers at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    #[serde(default)]
    pub service: String,

    #[serde(default)]
    pub service_path: String,
}

impl Tenant {
    pub fn new(service: impl Into<String>, service_path: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            service_path: service_path.into(),
        }
    }

    /// Check both values without building a request.
    pub fn validate(&self) -> Result<()> {
        if !self.service.is_empty() && !is_valid_service(&self.service) {
            return Err(Error::InvalidServiceName);
        }
        if !self.service_path.is_empty() && !is_valid_service_path(&self.service_path) {
            return Err(Error::InvalidServicePath);
        }
        Ok(())
    }

    /// Append this tenant's headers to `headers`.
    pub fn apply(&self, headers: &mut HeaderMap) -> Result<()> {
        add_service_header(headers, &self.service, &self.service_path)
    }
}
