//! Allowed values of the `Device-Commons` enumerations.
//!
//! <https://github.com/FIWARE/data-models/blob/master/specs/Device/device-schema.json>

use crate::error::{DataModelError, Result};
use crate::macros::string_enum;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Value of the `category` attribute.
///
/// Every token is fixed except [`Category::Misc`], whose label is chosen by
/// the application when the value is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    /// Detects and responds to changes in the physical environment.
    /// <https://w3id.org/saref#Sensor>
    Sensor,
    /// Moves or controls a mechanism or system. <https://w3id.org/saref#Actuator>
    Actuator,
    /// Detects and displays a quantity in a human readable form.
    Meter,
    /// Heating, Ventilation and Air Conditioning. <https://w3id.org/saref#HVAC>
    Hvac,
    /// Hub, switch or router. <https://w3id.org/saref#Network>
    Network,
    /// Displays, stores, records or plays multimedia content.
    Multimedia,
    /// Tool, instrument, utensil used in a given activity.
    Implement,
    /// Mobile or fixed irrigation system.
    IrrSystem,
    /// Section of an irrigation system.
    IrrSection,
    /// Projects water beyond an irrigation system.
    Endgun,
    /// Any other category meaningful to the application.
    Misc(String),
}

impl Category {
    /// Application-defined category; `label` must not be empty.
    pub fn misc(label: impl Into<String>) -> Result<Self> {
        let label = label.into();
        if label.is_empty() {
            return Err(DataModelError::EmptyCategoryName);
        }
        Ok(Self::Misc(label))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Sensor => "sensor",
            Self::Actuator => "actuator",
            Self::Meter => "meter",
            Self::Hvac => "HVAC",
            Self::Network => "network",
            Self::Multimedia => "multimedia",
            Self::Implement => "implement",
            Self::IrrSystem => "irrSystem",
            Self::IrrSection => "irrSection",
            Self::Endgun => "endgun",
            Self::Misc(label) => label,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown tokens become [`Category::Misc`].
impl FromStr for Category {
    type Err = DataModelError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "sensor" => Self::Sensor,
            "actuator" => Self::Actuator,
            "meter" => Self::Meter,
            "HVAC" => Self::Hvac,
            "network" => Self::Network,
            "multimedia" => Self::Multimedia,
            "implement" => Self::Implement,
            "irrSystem" => Self::IrrSystem,
            "irrSection" => Self::IrrSection,
            "endgun" => Self::Endgun,
            other => return Self::misc(other),
        })
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

string_enum! {
    /// Value of the `controlledProperty` attribute. Some of these are
    /// instances of the SAREF class Property.
    pub enum ControlledProperty {
        Temperature => "temperature",
        Humidity => "humidity",
        Light => "light",
        Motion => "motion",
        FillingLevel => "fillingLevel",
        Occupancy => "occupancy",
        Power => "power",
        Pressure => "pressure",
        Smoke => "smoke",
        Energy => "energy",
        AirPollution => "airPollution",
        NoiseLevel => "noiseLevel",
        WeatherConditions => "weatherConditions",
        Precipitation => "precipitation",
        WindSpeed => "windSpeed",
        WindDirection => "windDirection",
        AtmosphericPressure => "atmosphericPressure",
        SolarRadiation => "solarRadiation",
        Depth => "depth",
        PH => "pH",
        Conductivity => "conductivity",
        Conductance => "conductance",
        Tss => "tss",
        /// Total Dissolved Solids
        Tds => "tds",
        Turbidity => "turbidity",
        Salinity => "salinity",
        /// Oxygen reduction potential
        Orp => "orp",
        /// Colored Dissolved Organic Matter
        Cdom => "cdom",
        WaterPollution => "waterPollution",
        Location => "location",
        Speed => "speed",
        Heading => "heading",
        Weight => "weight",
        WaterConsumption => "waterConsumption",
        // upstream schema spelling
        GasConsumption => "gasComsumption",
        ElectricityConsumption => "electricityConsumption",
        EatingActivity => "eatingActivity",
        Milking => "milking",
        MovementActivity => "movementActivity",
        SoilMoisture => "soilMoisture",
    }
}

string_enum! {
    /// Value of the `supportedProtocol` attribute.
    pub enum SupportedProtocol {
        Ul20 => "ul20",
        Mqtt => "mqtt",
        Lwm2m => "lwm2m",
        Http => "http",
        Websocket => "websocket",
        Onem2m => "onem2m",
        Sigfox => "sigfox",
        Lora => "lora",
        NbIot => "nb-iot",
        EcGsmIot => "ec-gsm-iot",
        LteM => "lte-m",
        CatM => "cat-m",
        ThreeG => "3g",
        Gprs => "gprs",
        Coap => "coap",
    }
}

string_enum! {
    /// Value of the `deviceClass` attribute (RFC 7228 constrained device classes).
    pub enum DeviceClass {
        C0 => "C0",
        C1 => "C1",
        C2 => "C2",
    }
}

string_enum! {
    /// Value of the `function` attribute.
    pub enum Function {
        LevelControl => "levelControl",
        Sensing => "sensing",
        OnOff => "onOff",
        OpenClose => "openClose",
        Metering => "metering",
        EventNotification => "eventNotification",
    }
}

string_enum! {
    /// Value of the `energyLimitationClass` attribute.
    pub enum EnergyLimitationClass {
        E0 => "E0",
        E1 => "E1",
        E2 => "E2",
        E9 => "E9",
    }
}
