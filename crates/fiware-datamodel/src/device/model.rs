//! DeviceModel entity.

use super::{
    Category, ControlledProperty, DeviceClass, DeviceCommon, EnergyLimitationClass, Function,
};
use crate::core::Core;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Static properties shared by every device of one model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceModel {
    /// `type` is always `DeviceModel`.
    #[serde(flatten)]
    pub core: Core,

    #[serde(flatten)]
    pub common: DeviceCommon,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_class: Option<DeviceClass>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub function: Vec<Function>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supported_units: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_limitation_class: Option<EnergyLimitationClass>,

    /// URI of the model documentation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,

    pub brand_name: String,

    pub model_name: String,

    pub manufacturer_name: String,
}

impl DeviceModel {
    pub const TYPE: &'static str = "DeviceModel";

    /// DeviceModel with mandatory attributes only.
    pub fn new(
        base_name: &str,
        category: Category,
        controlled_property: ControlledProperty,
        brand_name: impl Into<String>,
        model_name: impl Into<String>,
        manufacturer_name: impl Into<String>,
    ) -> Result<Self> {
        let core = Core::new(base_name, Self::TYPE)?;
        Ok(Self {
            core,
            common: DeviceCommon::new(category, controlled_property),
            device_class: None,
            function: Vec::new(),
            supported_units: Vec::new(),
            energy_limitation_class: None,
            documentation: None,
            brand_name: brand_name.into(),
            model_name: model_name.into(),
            manufacturer_name: manufacturer_name.into(),
        })
    }
}
