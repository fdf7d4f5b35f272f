//! Entity identifiers (common-schema `EntityIdentifierType`).

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

pub const MIN_LENGTH_ENTITY_IDENTIFIER: usize = 1;
pub const MAX_LENGTH_ENTITY_IDENTIFIER: usize = 256;

/// Scheme and namespace every generated identifier starts with.
pub const NGSI_LD_PREFIX: &str = "urn:ngsi-ld";

/// Characters `urn:ngsi-ld::` adds around type and base name.
pub const NGSI_LD_OFFSET: usize = NGSI_LD_PREFIX.len() + 2;

/// Room left for `typeName` + `baseName` inside one identifier.
pub const ALLOWED_IDENTIFIER_LENGTH: usize = MAX_LENGTH_ENTITY_IDENTIFIER - NGSI_LD_OFFSET;

fn identifier_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[0-9A-Za-z_\-\.\{\}\$\+\*\[\]` |~^@!,:\\]+$")
            .expect("identifier pattern is valid")
    })
}

/// Whether `id` suits `EntityIdentifierType`.
pub fn validate_identifier(id: &str) -> bool {
    identifier_regex().is_match(id)
}

/// Type names have to begin with an upper case letter.
pub fn validate_type_name(type_name: &str) -> bool {
    type_name
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_uppercase())
}

/// Identifier of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// `urn:ngsi-ld:<typeName>:<baseName>`
    pub fn ngsi_ld(base_name: &str, type_name: &str) -> Self {
        Self(format!("{}:{}:{}", NGSI_LD_PREFIX, type_name, base_name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn is_valid(&self) -> bool {
        validate_identifier(&self.0)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<Identifier> for String {
    fn from(value: Identifier) -> Self {
        value.0
    }
}
