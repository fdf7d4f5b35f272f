//! Query parameters for the NGSI v2 list operations.
//!
//! See "List Entities" in the NGSI v2 specification for the meaning of each
//! parameter. The builder only formats and checks values locally; it never
//! interprets how the broker applies them.

use crate::error::{OrionError, Result};
use fiware_datamodel::LatLng;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use url::Url;

pub const ID: &str = "id";
pub const ID_PATTERN: &str = "idPattern";
pub const TYPE: &str = "type";
pub const TYPE_PATTERN: &str = "typePattern";

/// Spatial relationship between matching entities and the reference shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoRel {
    /// `near`, optionally bounded in meters.
    Near {
        max_distance: Option<u64>,
        min_distance: Option<u64>,
    },
    CoveredBy,
    Intersects,
    Equals,
    Disjoint,
}

impl fmt::Display for GeoRel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Near {
                max_distance,
                min_distance,
            } => {
                f.write_str("near")?;
                if let Some(d) = max_distance {
                    write!(f, ";maxDistance:{}", d)?;
                }
                if let Some(d) = min_distance {
                    write!(f, ";minDistance:{}", d)?;
                }
                Ok(())
            }
            Self::CoveredBy => f.write_str("coveredBy"),
            Self::Intersects => f.write_str("intersects"),
            Self::Equals => f.write_str("equals"),
            Self::Disjoint => f.write_str("disjoint"),
        }
    }
}

/// Reference shape of a geographical query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryShape {
    Point,
    Line,
    Polygon,
    Box,
}

impl GeometryShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Point => "point",
            Self::Line => "line",
            Self::Polygon => "polygon",
            Self::Box => "box",
        }
    }
}

/// Value of the `options` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOption {
    Count,
    KeyValues,
    Values,
    Unique,
    Append,
}

impl QueryOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::KeyValues => "keyValues",
            Self::Values => "values",
            Self::Unique => "unique",
            Self::Append => "append",
        }
    }
}

/// Accumulated query parameters, one value per key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    params: BTreeMap<String, String>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Query asking for the simplified `keyValues` representation.
    pub fn key_values() -> Self {
        let mut query = Self::new();
        query.set_options(&[QueryOption::KeyValues]);
        query
    }

    /// Set `key`, replacing any previous value.
    pub fn set_query(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.params.remove(key);
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn ensure_absent(&self, key: &'static str, conflicts_with: &'static str) -> Result<()> {
        if self.contains(conflicts_with) {
            return Err(OrionError::IncompatibleQuery {
                key,
                conflicts_with,
            });
        }
        Ok(())
    }

    /// Entities whose id is one of `ids`. Incompatible with `idPattern`.
    pub fn set_id_query<S: AsRef<str>>(&mut self, ids: &[S]) -> Result<&mut Self> {
        self.ensure_absent(ID, ID_PATTERN)?;
        Ok(self.set_query(ID, join(ids, ",")))
    }

    /// Entities whose type is one of `types`. Incompatible with `typePattern`.
    pub fn set_type_query<S: AsRef<str>>(&mut self, types: &[S]) -> Result<&mut Self> {
        self.ensure_absent(TYPE, TYPE_PATTERN)?;
        Ok(self.set_query(TYPE, join(types, ",")))
    }

    /// Entities whose id matches `pattern`. Incompatible with `id`.
    pub fn set_id_pattern_query(&mut self, pattern: &str) -> Result<&mut Self> {
        self.ensure_absent(ID_PATTERN, ID)?;
        Regex::new(pattern)?;
        Ok(self.set_query(ID_PATTERN, pattern))
    }

    /// Entities whose type matches `pattern`. Incompatible with `type`.
    pub fn set_type_pattern_query(&mut self, pattern: &str) -> Result<&mut Self> {
        self.ensure_absent(TYPE_PATTERN, TYPE)?;
        Regex::new(pattern)?;
        Ok(self.set_query(TYPE_PATTERN, pattern))
    }

    /// Simple Query Language statements, e.g. `temperature>40`.
    pub fn set_q<S: AsRef<str>>(&mut self, statements: &[S]) -> &mut Self {
        self.set_query("q", join(statements, ";"))
    }

    /// Statements over attribute metadata, e.g. `temperature.accuracy<0.9`.
    pub fn set_mq<S: AsRef<str>>(&mut self, statements: &[S]) -> &mut Self {
        self.set_query("mq", join(statements, ";"))
    }

    pub fn set_georel(&mut self, georel: GeoRel) -> &mut Self {
        self.set_query("georel", georel.to_string())
    }

    pub fn set_geometry(&mut self, shape: GeometryShape) -> &mut Self {
        self.set_query("geometry", shape.as_str())
    }

    /// `lat,lng` pairs joined with `;`.
    ///
    /// Fails without touching the query when any pair is out of range.
    pub fn set_coords(&mut self, coords: &[LatLng]) -> Result<&mut Self> {
        if let Some(bad) = coords.iter().find(|c| !c.is_valid()) {
            return Err(OrionError::InvalidLatLng(bad.to_string()));
        }
        let value = coords
            .iter()
            .map(LatLng::to_string)
            .collect::<Vec<_>>()
            .join(";");
        Ok(self.set_query("coords", value))
    }

    pub fn set_limit(&mut self, limit: u32) -> &mut Self {
        self.set_query("limit", limit.to_string())
    }

    pub fn set_offset(&mut self, offset: u32) -> &mut Self {
        self.set_query("offset", offset.to_string())
    }

    /// Attributes to include in the response, in this order.
    pub fn set_attrs<S: AsRef<str>>(&mut self, attrs: &[S]) -> &mut Self {
        self.set_query("attrs", join(attrs, ","))
    }

    pub fn set_metadata<S: AsRef<str>>(&mut self, metadata: &[S]) -> &mut Self {
        self.set_query("metadata", join(metadata, ","))
    }

    /// Ordering criteria, e.g. `["temperature", "!speed"]`.
    pub fn set_order_by<S: AsRef<str>>(&mut self, criteria: &[S]) -> &mut Self {
        self.set_query("orderBy", join(criteria, ","))
    }

    pub fn set_options(&mut self, options: &[QueryOption]) -> &mut Self {
        let value = options
            .iter()
            .map(QueryOption::as_str)
            .collect::<Vec<_>>()
            .join(",");
        self.set_query("options", value)
    }

    /// Merge into `url`'s query string; each key replaces any same-named
    /// key already present.
    pub fn set_to_url(&self, url: &mut Url) {
        if self.params.is_empty() {
            return;
        }
        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(k, _)| !self.params.contains_key(&**k))
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        url.query_pairs_mut()
            .clear()
            .extend_pairs(kept)
            .extend_pairs(self.params.iter());
    }
}

fn join<S: AsRef<str>>(items: &[S], sep: &str) -> String {
    items
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<&str>>()
        .join(sep)
}
