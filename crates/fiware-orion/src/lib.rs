//! Client for the FIWARE Orion Context Broker (NGSI v2).
//!
//! ```rust,ignore
//! use fiware_common::{ClientConfig, Tenant};
//! use fiware_orion::{OrionAccessor, Query};
//!
//! let orion = OrionAccessor::connect(ClientConfig::new("http://localhost:1026")).await?;
//! let mut query = Query::new();
//! query.set_type_query(&["Room"])?.set_limit(20);
//! let rooms: Vec<serde_json::Value> =
//!     orion.list_entities(&Tenant::new("openiot", "/"), Some(&query)).await?;
//! ```

pub mod accessor;
pub mod common;
pub mod entity;
pub mod entry_point;
pub mod error;
pub mod query;
pub mod registration;
pub mod subscription;
pub mod version;

pub use accessor::{AccessParameter, OrionAccessor};
pub use common::{gen_entities, EntitySelector, Http, SelectorKind};
pub use entity::EntityType;
pub use entry_point::{EntryPointId, EntryPoints};
pub use error::{OrionError, Result};
pub use query::{GeoRel, GeometryShape, Query, QueryOption};
pub use registration::{DataProvided, ForwardingInformation, Registration, RegistrationProvider};
pub use subscription::{
    HttpCustom, Subscription, SubscriptionCondition, SubscriptionNotification, SubscriptionSubject,
};
pub use version::Version;

pub use fiware_common::Tenant;
