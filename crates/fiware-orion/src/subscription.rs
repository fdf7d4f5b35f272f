//! Subscriptions (`/v2/subscriptions`).

use crate::accessor::{AccessParameter, OrionAccessor};
use crate::common::{EntitySelector, Http};
use crate::entry_point::EntryPointId;
use crate::error::Result;
use crate::query::Query;
use chrono::{DateTime, Utc};
use fiware_common::{location_id, Tenant};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionCondition {
    /// Attributes whose change triggers a notification.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionSubject {
    pub entities: Vec<EntitySelector>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<SubscriptionCondition>,
}

/// Notification endpoint with a templated request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpCustom {
    pub url: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub qs: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionNotification {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub except_attrs: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs_format: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http: Option<Http>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_custom: Option<HttpCustom>,

    // Read-only, only present in responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub times_sent: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_notification: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_failure: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_success: Option<DateTime<Utc>>,
}

/// NGSI v2 subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    /// Assigned by Orion; leave unset when creating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub subject: SubscriptionSubject,

    pub notification: SubscriptionNotification,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<DateTime<Utc>>,

    /// `active`, `inactive`, `failed` or `expired`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Minimal period in seconds between two notifications.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub throttling: Option<u64>,
}

impl Subscription {
    /// Subscription notifying `url` about changes of `entities`.
    pub fn new(entities: Vec<EntitySelector>, url: impl Into<String>) -> Self {
        Self {
            subject: SubscriptionSubject {
                entities,
                condition: None,
            },
            notification: SubscriptionNotification {
                http: Some(Http::new(url)),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

impl OrionAccessor {
    /// Create a subscription and return the id Orion assigned to it.
    pub async fn create_subscription(
        &self,
        tenant: &Tenant,
        subscription: &Subscription,
    ) -> Result<String> {
        let param = AccessParameter::new(EntryPointId::Subscriptions, Method::POST, tenant)
            .body(serde_json::to_value(subscription)?);
        let headers = self.access_empty(param).await?;
        Ok(location_id(&headers)?)
    }

    /// Subscriptions of the tenant; `query` may carry `limit`, `offset` and
    /// `options=count`.
    pub async fn list_subscriptions(
        &self,
        tenant: &Tenant,
        query: Option<&Query>,
    ) -> Result<Vec<Subscription>> {
        let param =
            AccessParameter::new(EntryPointId::Subscriptions, Method::GET, tenant).query(query);
        self.access_json(param).await
    }

    pub async fn get_subscription(&self, tenant: &Tenant, id: &str) -> Result<Subscription> {
        let param =
            AccessParameter::new(EntryPointId::Subscriptions, Method::GET, tenant).path(&[id]);
        self.access_json(param).await
    }

    /// `PATCH /v2/subscriptions/{id}` with the fields to change.
    pub async fn update_subscription<T: Serialize>(
        &self,
        tenant: &Tenant,
        id: &str,
        fields: &T,
    ) -> Result<()> {
        let param = AccessParameter::new(EntryPointId::Subscriptions, Method::PATCH, tenant)
            .path(&[id])
            .body(serde_json::to_value(fields)?);
        self.access_empty(param).await?;
        Ok(())
    }

    pub async fn delete_subscription(&self, tenant: &Tenant, id: &str) -> Result<()> {
        let param =
            AccessParameter::new(EntryPointId::Subscriptions, Method::DELETE, tenant).path(&[id]);
        self.access_empty(param).await?;
        Ok(())
    }
}
