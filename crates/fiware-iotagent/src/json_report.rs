//! Southbound JSON measures (`POST {report}/iot/json?k=&i=`).

use crate::accessor::{Body, IotAgentAccessor};
use crate::error::Result;
use fiware_common::Tenant;
use reqwest::Method;
use serde::Serialize;
use tracing::info;
use url::Url;

impl IotAgentAccessor {
    fn json_report_url(&self, apikey: &str, device_id: &str) -> Result<Url> {
        let mut url = self.report_url(&["iot", "json"])?;
        url.query_pairs_mut()
            .append_pair("k", apikey)
            .append_pair("i", device_id);
        Ok(url)
    }

    /// Report `measures` as device `device_id`, authenticated by `apikey`.
    pub async fn send_json_report<T: Serialize>(
        &self,
        tenant: &Tenant,
        apikey: &str,
        device_id: &str,
        measures: &T,
    ) -> Result<()> {
        let body = serde_json::to_value(measures)?;
        let url = self.json_report_url(apikey, device_id)?;
        info!(device_id, %body, "sending JSON measures");
        self.send_checked(Method::POST, url, tenant, Some(Body::Json(body)))
            .await?;
        Ok(())
    }

    /// Like [`send_json_report`](Self::send_json_report) with an already
    /// encoded body.
    pub async fn send_json_text_report(
        &self,
        tenant: &Tenant,
        apikey: &str,
        device_id: &str,
        measures: &str,
    ) -> Result<()> {
        let url = self.json_report_url(apikey, device_id)?;
        info!(device_id, body = measures, "sending JSON measures");
        self.send_checked(
            Method::POST,
            url,
            tenant,
            Some(Body::Text(measures.to_string())),
        )
        .await?;
        Ok(())
    }
}
