//! Attribute helper types and constants shared by devices and service groups.
//!
//! <https://github.com/telefonicaid/iotagent-node-lib/blob/master/doc/api.md>

use serde::{Deserialize, Serialize};
use std::fmt;

/// API key used by the FIWARE step-by-step tutorials.
pub const DEFAULT_IOT_API_KEY: &str = "1234";

/// `name` of the error body returned for a malformed request.
pub const WRONG_SYNTAX_ERROR: &str = "WRONG_SYNTAX";

pub const TYPE_COMMAND: &str = "command";
pub const TYPE_TEXT: &str = "Text";
pub const TYPE_RELATIONSHIP: &str = "Relationship";
pub const TYPE_INTEGER: &str = "Integer";
pub const TYPE_FLOAT: &str = "Float";
pub const TYPE_BOOLEAN: &str = "Boolean";
pub const TYPE_PERCENTAGE: &str = "percentage";

pub const TRANSPORT_HTTP: &str = "HTTP";
pub const JSON_PROTOCOL: &str = "json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameTypePair {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeValuePair {
    #[serde(rename = "type")]
    pub type_name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameTypeValues {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub value: String,
}

impl NameTypeValues {
    /// Relationship attribute `ref<category>` pointing at `id`.
    pub fn reference(category: &str, id: &str) -> Self {
        Self {
            name: format!("ref{}", category),
            type_name: TYPE_RELATIONSHIP.to_string(),
            value: id.to_string(),
        }
    }

    pub fn text(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            type_name: TYPE_TEXT.to_string(),
            value: value.to_string(),
        }
    }
}

/// `metadata` member carrying the unit of an attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitMetadata {
    pub unit_code: TypeValuePair,
}

/// Attribute mapping of a device or service group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceAttribute {
    /// Name used by the device in its measures, when it differs from `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,

    pub name: String,

    #[serde(rename = "type")]
    pub type_name: String,

    /// Only meaningful for static attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<UnitMetadata>,
}

impl DeviceAttribute {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            object_id: None,
            name: name.into(),
            type_name: type_name.into(),
            value: None,
            metadata: None,
        }
    }

    pub fn with_object_id(mut self, object_id: impl Into<String>) -> Self {
        self.object_id = Some(object_id.into());
        self
    }

    pub fn with_unit(mut self, unit: UnitCode) -> Self {
        self.metadata = Some(unit.metadata());
        self
    }
}

/// UN/CEFACT Common Code for units of measure (Recommendation 20).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitCode {
    Decibel,
    Kilobyte,
    MeterPerMinute,
    MilliVolt,
    ManMonth,
    MicroMetre,
    MilliAmpere,
    MegaByte,
    AmpereHour,
    Ampere,
    Year,
    MicroAmpere,
    MicroSecond,
    GigaByte,
    TeraByte,
    PetaByte,
    Pixel,
    MegaPixel,
    Dpi,
    Percentage,
    Fahrenheit,
    Hour,
    KiloGram,
    KiloHertz,
    KiloMeter,
    KiloWatt,
    MegaWatt,
    Minute,
    Millimeter,
    Meter,
    Volt,
    WattHour,
    Watt,
}

impl UnitCode {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Decibel => "2N",
            Self::Kilobyte => "2P",
            Self::MeterPerMinute => "2X",
            Self::MilliVolt => "2Z",
            Self::ManMonth => "3C",
            Self::MicroMetre => "4H",
            Self::MilliAmpere => "4K",
            Self::MegaByte => "4L",
            Self::AmpereHour => "AMH",
            Self::Ampere => "AMP",
            Self::Year => "ANN",
            Self::MicroAmpere => "B84",
            Self::MicroSecond => "B98",
            Self::GigaByte => "E34",
            Self::TeraByte => "E35",
            Self::PetaByte => "E36",
            Self::Pixel => "E37",
            Self::MegaPixel => "E38",
            Self::Dpi => "E39",
            Self::Percentage => "P1",
            Self::Fahrenheit => "FAH",
            Self::Hour => "HUR",
            Self::KiloGram => "KGM",
            Self::KiloHertz => "KHZ",
            Self::KiloMeter => "KMT",
            Self::KiloWatt => "KWT",
            Self::MegaWatt => "MAW",
            Self::Minute => "MIN",
            Self::Millimeter => "MMT",
            Self::Meter => "MTR",
            Self::Volt => "VLT",
            Self::WattHour => "WHR",
            Self::Watt => "WTT",
        }
    }

    /// `{"type": "Text", "value": <code>}`
    pub fn type_value(&self) -> TypeValuePair {
        TypeValuePair {
            type_name: TYPE_TEXT.to_string(),
            value: self.code().to_string(),
        }
    }

    pub fn metadata(&self) -> UnitMetadata {
        UnitMetadata {
            unit_code: self.type_value(),
        }
    }
}

impl fmt::Display for UnitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reference_and_text() {
        let r = NameTypeValues::reference("Building", "urn:ngsi-ld:Building:001");
        assert_eq!(r.name, "refBuilding");
        assert_eq!(r.type_name, "Relationship");

        let t = NameTypeValues::text("category", "sensor");
        assert_eq!(
            serde_json::to_value(&t).unwrap(),
            json!({"name": "category", "type": "Text", "value": "sensor"})
        );
    }

    #[test]
    fn test_unit_codes() {
        assert_eq!(UnitCode::Percentage.code(), "P1");
        assert_eq!(UnitCode::KiloWatt.to_string(), "KWT");
        assert_eq!(
            serde_json::to_value(UnitCode::Volt.metadata()).unwrap(),
            json!({"unitCode": {"type": "Text", "value": "VLT"}})
        );
    }

    #[test]
    fn test_device_attribute_json() {
        let attr = DeviceAttribute::new("temperature", TYPE_FLOAT)
            .with_object_id("t")
            .with_unit(UnitCode::Fahrenheit);
        assert_eq!(
            serde_json::to_value(&attr).unwrap(),
            json!({
                "object_id": "t",
                "name": "temperature",
                "type": "Float",
                "metadata": {"unitCode": {"type": "Text", "value": "FAH"}}
            })
        );

        let plain = DeviceAttribute::new("on", TYPE_COMMAND);
        assert_eq!(
            serde_json::to_value(&plain).unwrap(),
            json!({"name": "on", "type": "command"})
        );
    }
}
