//! Device entity.

use super::{Category, ControlledProperty, DeviceCommon, DeviceModel};
use crate::core::Core;
use crate::error::Result;
use crate::identifier::Identifier;
use crate::location::Geometry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An apparatus equipped with electronics, software and sensors or actuators.
///
/// Mandatory attributes are the `Core` ones plus `category` and
/// `controlledProperty`; everything else is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// `type` is always `Device`.
    #[serde(flatten)]
    pub core: Core,

    #[serde(flatten)]
    pub common: DeviceCommon,

    /// Mobile network code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mnc: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub controlled_asset: Vec<Identifier>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mac_address: Vec<String>,

    /// IPv4 or IPv6 addresses.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ip_address: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Geometry>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_installed: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_first_used: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_manufactured: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardware_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub software_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firmware_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_last_calibration: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    /// Identifier of the DeviceModel this device is an instance of.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_device_model: Option<Identifier>,

    /// 0.0 to 1.0, or -1.0 when the level could not be read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_level: Option<f64>,

    /// 0.0 (weak) to 1.0 (max), or -1.0 when it could not be read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rssi: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_state: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_last_value_reported: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Device {
    pub const TYPE: &'static str = "Device";

    /// Device with mandatory attributes only.
    pub fn new(
        base_name: &str,
        category: Category,
        controlled_property: ControlledProperty,
    ) -> Result<Self> {
        let core = Core::new(base_name, Self::TYPE)?;
        Ok(Self {
            core,
            common: DeviceCommon::new(category, controlled_property),
            mnc: None,
            controlled_asset: Vec::new(),
            mac_address: Vec::new(),
            ip_address: Vec::new(),
            configuration: None,
            location: None,
            name: None,
            date_installed: None,
            date_first_used: None,
            date_manufactured: None,
            hardware_version: None,
            software_version: None,
            firmware_version: None,
            os_version: None,
            date_last_calibration: None,
            serial_number: None,
            provider: None,
            ref_device_model: None,
            battery_level: None,
            rssi: None,
            device_state: None,
            date_last_value_reported: None,
            value: None,
        })
    }

    /// Point `refDeviceModel` at `model`.
    pub fn with_model(mut self, model: &DeviceModel) -> Self {
        self.ref_device_model = Some(model.core.id.clone());
        self
    }

    pub fn id(&self) -> &Identifier {
        &self.core.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DataModelError;
    use crate::identifier::MAX_LENGTH_ENTITY_IDENTIFIER;

    #[test]
    fn test_new_device() {
        let device = Device::new(
            "test",
            Category::misc("test").unwrap(),
            ControlledProperty::AirPollution,
        )
        .unwrap();
        assert_eq!(device.id(), &Identifier::ngsi_ld("test", Device::TYPE));
        assert_eq!(device.core.type_name, "Device");
    }

    #[test]
    fn test_new_device_errors() {
        assert!(matches!(
            Device::new("", Category::Sensor, ControlledProperty::Location),
            Err(DataModelError::TooShortBaseName)
        ));

        let id = "a".repeat(MAX_LENGTH_ENTITY_IDENTIFIER);
        assert!(matches!(
            Device::new(&id, Category::Sensor, ControlledProperty::Location),
            Err(DataModelError::TooLongIdLength { .. })
        ));
    }

    #[test]
    fn test_device_json() {
        let mut device =
            Device::new("lamp1", Category::Actuator, ControlledProperty::Light).unwrap();
        device.battery_level = Some(0.75);
        device.location = Some(Geometry::point(-3.7, 40.4));

        let json = serde_json::to_value(&device).unwrap();
        assert_eq!(json["id"], "urn:ngsi-ld:Device:lamp1");
        assert_eq!(json["type"], "Device");
        assert_eq!(json["category"], serde_json::json!(["actuator"]));
        assert_eq!(json["controlledProperty"], serde_json::json!(["light"]));
        assert_eq!(json["batteryLevel"], 0.75);
        assert_eq!(json["location"]["type"], "Point");
        assert!(json.get("mnc").is_none());
        assert!(json.get("supportedProtocol").is_none());

        let back: Device = serde_json::from_value(json).unwrap();
        assert_eq!(back, device);
    }
}
