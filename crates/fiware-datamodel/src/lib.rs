//! FIWARE data model structures.
//!
//! Rust types mirroring the FIWARE / NGSI-LD JSON schemas:
//!
//! - `Core` and `CoreOpt` (GSMA-Commons), with identifier construction
//! - `Location` and the GeoJSON geometries
//! - `PhysicalObject`, `DateYearLess`
//! - `Device` and `DeviceModel` with their closed enumerations
//!
//! Every type serializes to the upstream camelCase field names.

mod macros;

pub mod core;
pub mod date;
pub mod device;
pub mod error;
pub mod identifier;
pub mod location;
pub mod ngsi;
pub mod physical_object;

pub use crate::core::{Core, CoreOpt};
pub use date::DateYearLess;
pub use device::{
    Category, ControlledProperty, Device, DeviceClass, DeviceCommon, DeviceModel,
    EnergyLimitationClass, Function, SupportedProtocol,
};
pub use error::{DataModelError, Result};
pub use identifier::{
    validate_identifier, validate_type_name, Identifier, ALLOWED_IDENTIFIER_LENGTH,
    MAX_LENGTH_ENTITY_IDENTIFIER, MIN_LENGTH_ENTITY_IDENTIFIER, NGSI_LD_OFFSET, NGSI_LD_PREFIX,
};
pub use location::{Address, Geometry, GeometryType, LatLng, Location, XY};
pub use ngsi::AttributeType;
pub use physical_object::PhysicalObject;
