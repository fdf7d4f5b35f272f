//! Orion accessor: entry point resolution and the shared request routine.

use crate::entry_point::{EntryPointId, EntryPoints};
use crate::error::Result;
use crate::query::Query;
use fiware_common::{build_http_client, ensure_success, read_json, ClientConfig, Tenant};
use reqwest::header::HeaderMap;
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};
use url::Url;

/// Description of one request against an entry point.
#[derive(Debug, Clone)]
pub struct AccessParameter<'a> {
    pub endpoint: EntryPointId,
    pub method: Method,
    pub tenant: &'a Tenant,
    /// Segments appended to the entry point path, e.g. `[id, "attrs"]`.
    pub path: Vec<&'a str>,
    pub query: Option<&'a Query>,
    pub body: Option<Value>,
}

impl<'a> AccessParameter<'a> {
    pub fn new(endpoint: EntryPointId, method: Method, tenant: &'a Tenant) -> Self {
        Self {
            endpoint,
            method,
            tenant,
            path: Vec::new(),
            query: None,
            body: None,
        }
    }

    pub fn path(mut self, segments: &[&'a str]) -> Self {
        self.path.extend_from_slice(segments);
        self
    }

    pub fn query(mut self, query: Option<&'a Query>) -> Self {
        self.query = query;
        self
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Client of one Orion Context Broker.
///
/// Entry points are fetched lazily and cached as an immutable snapshot; a
/// reload swaps the whole snapshot. The accessor can be shared between tasks.
pub struct OrionAccessor {
    config: ClientConfig,
    http_client: reqwest::Client,
    entry_points: RwLock<Option<Arc<EntryPoints>>>,
}

impl OrionAccessor {
    /// Accessor with no entry points yet; the first request fetches them.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http_client = build_http_client(config.timeout)?;
        Ok(Self {
            config,
            http_client,
            entry_points: RwLock::new(None),
        })
    }

    /// Accessor that tries to fetch the entry points once up front.
    ///
    /// A failed fetch is logged and left for the first request to retry.
    pub async fn connect(config: ClientConfig) -> Result<Self> {
        let accessor = Self::new(config)?;
        if let Err(e) = accessor.reload_entry_points().await {
            warn!(
                "Failed to load entry points from {}: {}",
                accessor.base_url(),
                e
            );
        }
        Ok(accessor)
    }

    /// Accessor configured from `ORION_URL`.
    pub async fn from_env() -> Result<Self> {
        Self::connect(ClientConfig::orion_from_env()).await
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    pub(crate) fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    /// Fetch the entry points and replace the cached snapshot.
    ///
    /// On failure the cache is left as it was.
    pub async fn reload_entry_points(&self) -> Result<Arc<EntryPoints>> {
        let url = format!("{}/v2", self.base_url());
        debug!("GET {}", url);
        let response = ensure_success(self.http_client.get(&url).send().await?).await?;
        let entry_points: EntryPoints = read_json(response).await?;

        let entry_points = Arc::new(entry_points);
        *self.entry_points.write().await = Some(entry_points.clone());
        Ok(entry_points)
    }

    /// Always fetch fresh entry points from the server.
    pub async fn get_entry_points(&self) -> Result<Arc<EntryPoints>> {
        self.reload_entry_points().await
    }

    /// Cached snapshot, if the entry points have been resolved.
    pub async fn entry_points(&self) -> Option<Arc<EntryPoints>> {
        self.entry_points.read().await.clone()
    }

    async fn resolved_entry_points(&self) -> Result<Arc<EntryPoints>> {
        if let Some(entry_points) = self.entry_points().await {
            return Ok(entry_points);
        }
        self.reload_entry_points().await
    }

    /// URL of `path` below the entry point `endpoint`, with `query` merged in.
    pub async fn gen_url(
        &self,
        endpoint: EntryPointId,
        path: &[&str],
        query: Option<&Query>,
    ) -> Result<Url> {
        let entry_points = self.resolved_entry_points().await?;
        let mut url = Url::parse(self.base_url())?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?;
            segments.pop_if_empty();
            segments.extend(
                entry_points
                    .path(endpoint)
                    .split('/')
                    .filter(|s| !s.is_empty()),
            );
            segments.extend(path.iter().filter(|s| !s.is_empty()));
        }
        if let Some(query) = query {
            query.set_to_url(&mut url);
        }
        Ok(url)
    }

    /// Send one request and check its status.
    ///
    /// Any status >= 400 becomes an error carrying the remote error body.
    pub async fn access(&self, param: AccessParameter<'_>) -> Result<Response> {
        let mut headers = HeaderMap::new();
        param.tenant.apply(&mut headers)?;

        let url = self.gen_url(param.endpoint, &param.path, param.query).await?;

        debug!("{} {}", param.method, url);
        let mut request = self
            .http_client
            .request(param.method, url)
            .headers(headers);
        if let Some(body) = &param.body {
            request = request.json(body);
        }

        Ok(ensure_success(request.send().await?).await?)
    }

    /// [`access`](Self::access) and decode the JSON response.
    pub async fn access_json<T: DeserializeOwned>(&self, param: AccessParameter<'_>) -> Result<T> {
        let response = self.access(param).await?;
        Ok(read_json(response).await?)
    }

    /// [`access`](Self::access) discarding the response body.
    pub async fn access_empty(&self, param: AccessParameter<'_>) -> Result<HeaderMap> {
        let response = self.access(param).await?;
        Ok(response.headers().clone())
    }
}
