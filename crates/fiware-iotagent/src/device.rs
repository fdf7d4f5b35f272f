//! Device provisioning (`/iot/devices`).

use crate::accessor::{Body, IotAgentAccessor};
use crate::error::{IotAgentError, Result};
use crate::types::DeviceAttribute;
use fiware_common::Tenant;
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};

/// Provisioned device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// Id used by the device in its measures (e.g. `UO834IO`).
    pub device_id: String,

    /// Filled in from the tenant on creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_path: Option<String>,

    /// Entity representing the device in the Context Broker.
    #[serde(default)]
    pub entity_name: String,

    #[serde(default)]
    pub entity_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    /// Whether to add `TimeInstant` to the entity and its attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<bool>,

    /// Overrides the service group API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apikey: Option<String>,

    /// Where the device receives commands.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub protocol: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub transport: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<DeviceAttribute>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lazy: Vec<DeviceAttribute>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<DeviceAttribute>,

    /// Free format, agent specific.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub internal_attributes: Vec<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub static_attributes: Vec<DeviceAttribute>,
}

impl Device {
    pub fn new(
        device_id: impl Into<String>,
        entity_name: impl Into<String>,
        entity_type: impl Into<String>,
    ) -> Self {
        Self {
            device_id: device_id.into(),
            entity_name: entity_name.into(),
            entity_type: entity_type.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceList {
    #[serde(default)]
    pub count: u64,
    pub devices: Vec<Device>,
}

#[derive(Debug, Clone, Serialize)]
struct NewDevices<'a> {
    devices: &'a [Device],
}

impl IotAgentAccessor {
    /// Provision `devices` under `tenant`.
    ///
    /// Each device's `service` and `service_path` are overwritten with the
    /// tenant's values.
    pub async fn create_devices(&self, tenant: &Tenant, devices: &[Device]) -> Result<()> {
        let devices: Vec<Device> = devices
            .iter()
            .cloned()
            .map(|mut d| {
                d.service = Some(tenant.service.clone());
                d.service_path = Some(tenant.service_path.clone());
                d
            })
            .collect();
        let body = serde_json::to_value(NewDevices { devices: &devices })?;

        let url = self.config_url(&["iot", "devices"])?;
        self.send_checked(Method::POST, url, tenant, Some(Body::Json(body)))
            .await?;
        Ok(())
    }

    pub async fn list_devices(
        &self,
        tenant: &Tenant,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<DeviceList> {
        let mut url = self.config_url(&["iot", "devices"])?;
        {
            let mut pairs = url.query_pairs_mut();
            if let Some(limit) = limit {
                pairs.append_pair("limit", &limit.to_string());
            }
            if let Some(offset) = offset {
                pairs.append_pair("offset", &offset.to_string());
            }
        }
        if url.query() == Some("") {
            url.set_query(None);
        }
        self.send_json(Method::GET, url, tenant).await
    }

    /// Fails with [`IotAgentError::DeviceNotFound`] on 404.
    pub async fn get_device(&self, tenant: &Tenant, device_id: &str) -> Result<Device> {
        let url = self.config_url(&["iot", "devices", device_id])?;
        let response = self.send(Method::GET, url, tenant, None).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(IotAgentError::DeviceNotFound(device_id.to_string()));
        }
        let response = fiware_common::ensure_success(response).await?;
        Ok(fiware_common::read_json(response).await?)
    }

    /// `PUT /iot/devices/{id}` with the fields to change.
    pub async fn update_device<T: Serialize>(
        &self,
        tenant: &Tenant,
        device_id: &str,
        fields: &T,
    ) -> Result<()> {
        let url = self.config_url(&["iot", "devices", device_id])?;
        let body = Body::Json(serde_json::to_value(fields)?);
        self.send_checked(Method::PUT, url, tenant, Some(body)).await?;
        Ok(())
    }

    pub async fn delete_device(&self, tenant: &Tenant, device_id: &str) -> Result<()> {
        let url = self.config_url(&["iot", "devices", device_id])?;
        self.send_checked(Method::DELETE, url, tenant, None).await?;
        Ok(())
    }
}
