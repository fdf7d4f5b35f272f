//! Device and DeviceModel data models.
//!
//! - <https://fiware-datamodels.readthedocs.io/en/stable/Device/Device/doc/spec/index.html>
//! - <https://fiware-datamodels.readthedocs.io/en/stable/Device/DeviceModel/doc/spec/index.html>

pub mod entity;
pub mod enums;
pub mod model;

pub use entity::Device;
pub use enums::{
    Category, ControlledProperty, DeviceClass, EnergyLimitationClass, Function, SupportedProtocol,
};
pub use model::DeviceModel;

use serde::{Deserialize, Serialize};

/// Attributes shared by Device and DeviceModel (`#Device-Commons`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceCommon {
    pub category: Vec<Category>,

    pub controlled_property: Vec<ControlledProperty>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supported_protocol: Vec<SupportedProtocol>,
}

impl DeviceCommon {
    pub fn new(category: Category, controlled_property: ControlledProperty) -> Self {
        Self {
            category: vec![category],
            controlled_property: vec![controlled_property],
            supported_protocol: Vec::new(),
        }
    }
}
