//! `GSMA-Commons` attributes shared by every data model entity.

use crate::error::{DataModelError, Result};
use crate::identifier::{
    validate_type_name, Identifier, ALLOWED_IDENTIFIER_LENGTH, MIN_LENGTH_ENTITY_IDENTIFIER,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Mandatory part of a data model entity.
///
/// A freshly built `Core` carries no timestamps; the first [`Core::stamp`]
/// sets both of them to the same instant and later stamps only move
/// `dateModified`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Core {
    /// Unique identifier of the entity, following the NGSI-LD rules.
    pub id: Identifier,

    /// Entity type, i.e. the name of the data model (e.g. `Device`).
    #[serde(rename = "type")]
    pub type_name: String,

    /// Last update timestamp of the entity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<DateTime<Utc>>,

    /// Creation timestamp of the entity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,
}

impl Core {
    /// Build the identifier `urn:ngsi-ld:<typeName>:<baseName>` and an
    /// unstamped `Core` around it.
    pub fn new(base_name: &str, type_name: &str) -> Result<Self> {
        if base_name.len() < MIN_LENGTH_ENTITY_IDENTIFIER {
            return Err(DataModelError::TooShortBaseName);
        }
        if type_name.len() < MIN_LENGTH_ENTITY_IDENTIFIER {
            return Err(DataModelError::TooShortTypeName);
        }
        if !validate_type_name(type_name) {
            return Err(DataModelError::InvalidTypeName(type_name.to_string()));
        }
        let length = base_name.len() + type_name.len();
        if length > ALLOWED_IDENTIFIER_LENGTH {
            return Err(DataModelError::TooLongIdLength {
                length,
                allowed: ALLOWED_IDENTIFIER_LENGTH,
            });
        }

        Ok(Self {
            id: Identifier::ngsi_ld(base_name, type_name),
            type_name: type_name.to_string(),
            date_modified: None,
            date_created: None,
        })
    }

    /// Stamp with the current time.
    pub fn stamp(&mut self) {
        self.stamp_at(Utc::now());
    }

    /// Set `dateModified`, and `dateCreated` too when it is not set yet.
    pub fn stamp_at(&mut self, at: DateTime<Utc>) {
        self.date_modified = Some(at);
        if self.date_created.is_none() {
            self.date_created = Some(at);
        }
    }

    /// Whether this entity has been stamped at least once.
    pub fn is_stamped(&self) -> bool {
        self.date_created.is_some()
    }
}

/// Optional part of `GSMA-Commons` (everything but `Core` and `seeAlso`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreOpt {
    /// URIs or pointers to NGSI entities representing the owner(s) of the entity.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub owner: Vec<Identifier>,

    /// Pointer (eventually an URI) to the service providing the data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Name identifying the entity providing the data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_provider: Option<String>,
}
