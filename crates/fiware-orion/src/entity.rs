//! Entity and entity type operations.

use crate::accessor::{AccessParameter, OrionAccessor};
use crate::entry_point::EntryPointId;
use crate::error::Result;
use crate::query::{Query, TYPE};
use fiware_common::Tenant;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Summary of one entity type, as returned by `GET /v2/types`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityType {
    #[serde(rename = "type")]
    pub type_name: String,

    /// Attribute name to `{"types": [...]}`.
    #[serde(default)]
    pub attrs: Map<String, Value>,

    #[serde(default)]
    pub count: u64,
}

fn type_query(type_name: Option<&str>) -> Option<Query> {
    type_name.filter(|t| !t.is_empty()).map(|t| {
        let mut query = Query::new();
        query.set_query(TYPE, t);
        query
    })
}

impl OrionAccessor {
    /// `POST /v2/entities`
    pub async fn create_entity<T: Serialize>(
        &self,
        tenant: &Tenant,
        query: Option<&Query>,
        entity: &T,
    ) -> Result<()> {
        let param = AccessParameter::new(EntryPointId::Entities, Method::POST, tenant)
            .query(query)
            .body(serde_json::to_value(entity)?);
        self.access_empty(param).await?;
        Ok(())
    }

    /// `GET /v2/entities`
    pub async fn list_entities<T: DeserializeOwned>(
        &self,
        tenant: &Tenant,
        query: Option<&Query>,
    ) -> Result<Vec<T>> {
        let param = AccessParameter::new(EntryPointId::Entities, Method::GET, tenant).query(query);
        self.access_json(param).await
    }

    /// `GET /v2/entities/{id}`
    pub async fn get_entity<T: DeserializeOwned>(
        &self,
        tenant: &Tenant,
        id: &str,
        query: Option<&Query>,
    ) -> Result<T> {
        let param = AccessParameter::new(EntryPointId::Entities, Method::GET, tenant)
            .path(&[id])
            .query(query);
        self.access_json(param).await
    }

    /// `GET /v2/entities/{id}/attrs/{attr}`
    pub async fn get_entity_attribute<T: DeserializeOwned>(
        &self,
        tenant: &Tenant,
        id: &str,
        attr: &str,
        query: Option<&Query>,
    ) -> Result<T> {
        let param = AccessParameter::new(EntryPointId::Entities, Method::GET, tenant)
            .path(&[id, "attrs", attr])
            .query(query);
        self.access_json(param).await
    }

    /// `PATCH /v2/entities/{id}/attrs`: update existing attributes.
    pub async fn update_entity<T: Serialize>(
        &self,
        tenant: &Tenant,
        id: &str,
        type_name: Option<&str>,
        attrs: &T,
    ) -> Result<()> {
        let query = type_query(type_name);
        let param = AccessParameter::new(EntryPointId::Entities, Method::PATCH, tenant)
            .path(&[id, "attrs"])
            .query(query.as_ref())
            .body(serde_json::to_value(attrs)?);
        self.access_empty(param).await?;
        Ok(())
    }

    /// `POST /v2/entities/{id}/attrs`: update or append attributes.
    pub async fn update_or_append_entity_attributes<T: Serialize>(
        &self,
        tenant: &Tenant,
        id: &str,
        query: Option<&Query>,
        attrs: &T,
    ) -> Result<()> {
        let param = AccessParameter::new(EntryPointId::Entities, Method::POST, tenant)
            .path(&[id, "attrs"])
            .query(query)
            .body(serde_json::to_value(attrs)?);
        self.access_empty(param).await?;
        Ok(())
    }

    /// `DELETE /v2/entities/{id}`
    pub async fn delete_entity(
        &self,
        tenant: &Tenant,
        id: &str,
        type_name: Option<&str>,
    ) -> Result<()> {
        let query = type_query(type_name);
        let param = AccessParameter::new(EntryPointId::Entities, Method::DELETE, tenant)
            .path(&[id])
            .query(query.as_ref());
        self.access_empty(param).await?;
        Ok(())
    }

    /// `GET /v2/types`
    pub async fn list_entity_types(
        &self,
        tenant: &Tenant,
        query: Option<&Query>,
    ) -> Result<Vec<EntityType>> {
        let param = AccessParameter::new(EntryPointId::Types, Method::GET, tenant).query(query);
        self.access_json(param).await
    }

    /// `GET /v2/types/{type}`
    pub async fn get_entity_type(&self, tenant: &Tenant, type_name: &str) -> Result<EntityType> {
        let param =
            AccessParameter::new(EntryPointId::Types, Method::GET, tenant).path(&[type_name]);
        let mut info: Value = self.access_json(param).await?;
        // the single-type form omits the type name
        if let Some(obj) = info.as_object_mut() {
            obj.entry("type")
                .or_insert_with(|| Value::String(type_name.to_string()));
        }
        Ok(serde_json::from_value(info)?)
    }
}
