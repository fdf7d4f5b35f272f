//! IoT Agent accessor and the headers every call carries.

use crate::config::IotAgentConfig;
use crate::error::Result;
use fiware_common::{build_http_client, ensure_success, read_json, Tenant};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CACHE_CONTROL, CONTENT_TYPE};
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

const APPLICATION_JSON: &str = "application/json";

/// Request body.
#[derive(Debug, Clone)]
pub(crate) enum Body {
    Json(serde_json::Value),
    /// Raw JSON text, sent as is.
    Text(String),
}

/// Headers sent on every IoT Agent request.
///
/// Tenancy headers are validated and only present when non-empty.
/// `Content-Type` is set for POST and PUT, `Accept` for GET.
pub fn iot_headers(method: &Method, tenant: &Tenant) -> fiware_common::Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    tenant.apply(&mut headers)?;
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    if *method == Method::POST || *method == Method::PUT {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
    }
    if *method == Method::GET {
        headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
    }
    Ok(headers)
}

/// Client of one IoT Agent.
pub struct IotAgentAccessor {
    config: IotAgentConfig,
    http_client: reqwest::Client,
}

impl IotAgentAccessor {
    pub fn new(config: IotAgentConfig) -> Result<Self> {
        let http_client = build_http_client(config.timeout)?;
        Ok(Self {
            config,
            http_client,
        })
    }

    /// Accessor configured from `IOTA_CONFIG_URL` / `IOTA_REPORT_URL`.
    pub fn from_env() -> Result<Self> {
        Self::new(IotAgentConfig::from_env())
    }

    pub fn config(&self) -> &IotAgentConfig {
        &self.config
    }

    /// Provisioning API URL for `segments`, e.g. `["iot", "devices", id]`.
    pub(crate) fn config_url(&self, segments: &[&str]) -> Result<Url> {
        join_url(&self.config.config_url, segments)
    }

    /// Measure API URL for `segments`.
    pub(crate) fn report_url(&self, segments: &[&str]) -> Result<Url> {
        join_url(&self.config.report_url, segments)
    }

    pub(crate) async fn send(
        &self,
        method: Method,
        url: Url,
        tenant: &Tenant,
        body: Option<Body>,
    ) -> Result<Response> {
        let headers = iot_headers(&method, tenant)?;

        debug!("{} {}", method, url);
        let mut request = self.http_client.request(method, url).headers(headers);
        request = match body {
            Some(Body::Json(value)) => request.body(serde_json::to_vec(&value)?),
            Some(Body::Text(text)) => request.body(text),
            None => request,
        };

        Ok(request.send().await?)
    }

    /// Send and fail on any status >= 400.
    pub(crate) async fn send_checked(
        &self,
        method: Method,
        url: Url,
        tenant: &Tenant,
        body: Option<Body>,
    ) -> Result<Response> {
        let response = self.send(method, url, tenant, body).await?;
        Ok(ensure_success(response).await?)
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        tenant: &Tenant,
    ) -> Result<T> {
        let response = self.send_checked(method, url, tenant, None).await?;
        Ok(read_json(response).await?)
    }
}

fn join_url(base: &str, segments: &[&str]) -> Result<Url> {
    let mut url = Url::parse(base)?;
    url.path_segments_mut()
        .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
