//! Context provider registrations (`/v2/registrations`).

use crate::accessor::{AccessParameter, OrionAccessor};
use crate::common::{EntitySelector, Http};
use crate::entry_point::EntryPointId;
use crate::error::Result;
use crate::query::Query;
use chrono::{DateTime, Utc};
use fiware_common::{location_id, Tenant};
use reqwest::Method;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationProvider {
    pub http: Http,

    /// `none`, `query`, `update` or `all`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported_forwarding_mode: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataProvided {
    pub entities: Vec<EntitySelector>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
}

/// Read-only forwarding statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwardingInformation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub times_sent: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_forwarding: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_failure: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_success: Option<DateTime<Utc>>,
}

/// NGSI v2 registration of a context provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub provider: RegistrationProvider,

    pub data_provided: DataProvided,

    /// `active` or `inactive`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forwarding_information: Option<ForwardingInformation>,
}

impl Registration {
    pub fn new(data_provided: DataProvided, provider_url: impl Into<String>) -> Self {
        Self {
            id: None,
            description: None,
            provider: RegistrationProvider {
                http: Http::new(provider_url),
                supported_forwarding_mode: None,
            },
            data_provided,
            status: None,
            expires: None,
            forwarding_information: None,
        }
    }
}

impl OrionAccessor {
    /// Register a context provider and return the id Orion assigned.
    pub async fn create_registration(
        &self,
        tenant: &Tenant,
        registration: &Registration,
    ) -> Result<String> {
        let param = AccessParameter::new(EntryPointId::Registrations, Method::POST, tenant)
            .body(serde_json::to_value(registration)?);
        let headers = self.access_empty(param).await?;
        Ok(location_id(&headers)?)
    }

    pub async fn list_registrations(
        &self,
        tenant: &Tenant,
        query: Option<&Query>,
    ) -> Result<Vec<Registration>> {
        let param =
            AccessParameter::new(EntryPointId::Registrations, Method::GET, tenant).query(query);
        self.access_json(param).await
    }

    pub async fn get_registration(&self, tenant: &Tenant, id: &str) -> Result<Registration> {
        let param =
            AccessParameter::new(EntryPointId::Registrations, Method::GET, tenant).path(&[id]);
        self.access_json(param).await
    }

    /// `PATCH /v2/registrations/{id}` with the fields to change.
    pub async fn update_registration<T: Serialize>(
        &self,
        tenant: &Tenant,
        id: &str,
        fields: &T,
    ) -> Result<()> {
        let param = AccessParameter::new(EntryPointId::Registrations, Method::PATCH, tenant)
            .path(&[id])
            .body(serde_json::to_value(fields)?);
        self.access_empty(param).await?;
        Ok(())
    }

    pub async fn delete_registration(&self, tenant: &Tenant, id: &str) -> Result<()> {
        let param =
            AccessParameter::new(EntryPointId::Registrations, Method::DELETE, tenant).path(&[id]);
        self.access_empty(param).await?;
        Ok(())
    }
}
