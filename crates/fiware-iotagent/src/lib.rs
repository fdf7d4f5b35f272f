//! Client for FIWARE IoT Agents.
//!
//! Covers the provisioning API served on the configuration URL (about,
//! devices, service groups, log level) and the JSON measure endpoint served
//! on the report URL.
//!
//! ```no_run
//! use fiware_iotagent::{Device, IotAgentAccessor, IotAgentConfig, Tenant};
//!
//! # async fn run() -> fiware_iotagent::Result<()> {
//! let iota = IotAgentAccessor::new(IotAgentConfig::default())?;
//! let tenant = Tenant::new("openiot", "/");
//! iota.create_devices(&tenant, &[Device::new("motion001", "urn:ngsi-ld:Motion:001", "Motion")])
//!     .await?;
//! iota.send_json_report(&tenant, "4jggokgpepnvsb2uv4s40d59ov", "motion001", &serde_json::json!({"c": 1}))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod about;
pub mod accessor;
pub mod config;
pub mod device;
pub mod error;
pub mod json_report;
pub mod log;
pub mod service_group;
pub mod types;

pub use about::{About, AboutResponse, RawPort};
pub use accessor::{iot_headers, IotAgentAccessor};
pub use config::IotAgentConfig;
pub use device::{Device, DeviceList};
pub use error::{IotAgentError, Result};
pub use fiware_common::Tenant;
pub use log::LogLevel;
pub use service_group::{ServiceGroup, ServiceGroupList};
pub use types::{
    DeviceAttribute, NameTypePair, NameTypeValues, TypeValuePair, UnitCode, UnitMetadata,
    DEFAULT_IOT_API_KEY, JSON_PROTOCOL, TRANSPORT_HTTP, WRONG_SYNTAX_ERROR,
};
