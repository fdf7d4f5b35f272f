//! API entry points advertised by Orion at `GET /v2`.

use crate::error::{OrionError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Logical resource collection of the NGSI v2 API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryPointId {
    Entities,
    Types,
    Subscriptions,
    Registrations,
}

impl EntryPointId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Entities => "entities",
            Self::Types => "types",
            Self::Subscriptions => "subscriptions",
            Self::Registrations => "registrations",
        }
    }
}

impl fmt::Display for EntryPointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryPointId {
    type Err = OrionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "entities" => Ok(Self::Entities),
            "types" => Ok(Self::Types),
            "subscriptions" => Ok(Self::Subscriptions),
            "registrations" => Ok(Self::Registrations),
            _ => Err(OrionError::IllegalEndPointId(s.to_string())),
        }
    }
}

/// Path of every resource collection, e.g. `/v2/entities`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryPoints {
    pub entities_url: String,
    pub types_url: String,
    pub subscriptions_url: String,
    pub registrations_url: String,
}

impl EntryPoints {
    pub fn path(&self, id: EntryPointId) -> &str {
        match id {
            EntryPointId::Entities => &self.entities_url,
            EntryPointId::Types => &self.types_url,
            EntryPointId::Subscriptions => &self.subscriptions_url,
            EntryPointId::Registrations => &self.registrations_url,
        }
    }
}
