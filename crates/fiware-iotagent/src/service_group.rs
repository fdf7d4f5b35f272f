//! Service group provisioning (`/iot/services`).

use crate::accessor::{Body, IotAgentAccessor};
use crate::error::Result;
use crate::types::DeviceAttribute;
use fiware_common::Tenant;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use url::Url;

/// Configuration shared by every device sending measures with one API key
/// to one resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceGroup {
    /// Filled in from the tenant on creation.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub service: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subservice: String,

    /// Southbound resource (e.g. `/iot/json`).
    pub resource: String,

    pub apikey: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<bool>,

    #[serde(default)]
    pub entity_type: String,

    /// Trust token for a secured Context Broker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trust: Option<String>,

    /// Context Broker overriding the agent default, e.g. `http://orion:1026`.
    #[serde(rename = "cbHost", default, skip_serializing_if = "Option::is_none")]
    pub cb_host: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lazy: Vec<DeviceAttribute>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<DeviceAttribute>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<DeviceAttribute>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub static_attributes: Vec<DeviceAttribute>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub internal_attributes: Vec<serde_json::Value>,
}

impl ServiceGroup {
    pub fn new(
        resource: impl Into<String>,
        apikey: impl Into<String>,
        entity_type: impl Into<String>,
    ) -> Self {
        Self {
            resource: resource.into(),
            apikey: apikey.into(),
            entity_type: entity_type.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceGroupList {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    pub services: Vec<ServiceGroup>,
}

fn with_group_key(mut url: Url, resource: &str, apikey: &str) -> Url {
    url.query_pairs_mut()
        .append_pair("resource", resource)
        .append_pair("apikey", apikey);
    url
}

impl IotAgentAccessor {
    /// Create service groups under `tenant`, stamping its service and
    /// subservice into every group.
    pub async fn create_service_groups(&self, tenant: &Tenant, groups: &[ServiceGroup]) -> Result<()> {
        let services: Vec<ServiceGroup> = groups
            .iter()
            .cloned()
            .map(|mut g| {
                g.service = tenant.service.clone();
                g.subservice = tenant.service_path.clone();
                g
            })
            .collect();
        let body = serde_json::to_value(ServiceGroupList {
            count: None,
            services,
        })?;

        let url = self.config_url(&["iot", "services"])?;
        self.send_checked(Method::POST, url, tenant, Some(Body::Json(body)))
            .await?;
        Ok(())
    }

    pub async fn list_service_groups(&self, tenant: &Tenant) -> Result<ServiceGroupList> {
        let url = self.config_url(&["iot", "services"])?;
        self.send_json(Method::GET, url, tenant).await
    }

    /// Update the group identified by `resource` and `apikey`.
    pub async fn update_service_group<T: Serialize>(
        &self,
        tenant: &Tenant,
        resource: &str,
        apikey: &str,
        fields: &T,
    ) -> Result<()> {
        let url = with_group_key(self.config_url(&["iot", "services"])?, resource, apikey);
        let body = Body::Json(serde_json::to_value(fields)?);
        self.send_checked(Method::PUT, url, tenant, Some(body)).await?;
        Ok(())
    }

    pub async fn delete_service_group(
        &self,
        tenant: &Tenant,
        resource: &str,
        apikey: &str,
    ) -> Result<()> {
        let url = with_group_key(self.config_url(&["iot", "services"])?, resource, apikey);
        self.send_checked(Method::DELETE, url, tenant, None).await?;
        Ok(())
    }
}
