//! `Location-Commons` and the GeoJSON geometries it references.

use crate::error::{DataModelError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// GeoJSON geometry (<https://geojson.org/schema/Geometry.json>).
///
/// `bbox`, when present, holds at least four numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point {
        /// At least two numbers.
        coordinates: Vec<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bbox: Option<Vec<f64>>,
    },
    LineString {
        /// At least two positions.
        coordinates: Vec<Vec<f64>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bbox: Option<Vec<f64>>,
    },
    Polygon {
        /// Linear rings of at least four positions.
        coordinates: Vec<Vec<Vec<f64>>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bbox: Option<Vec<f64>>,
    },
    MultiPoint {
        coordinates: Vec<Vec<f64>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bbox: Option<Vec<f64>>,
    },
    MultiLineString {
        coordinates: Vec<Vec<Vec<f64>>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bbox: Option<Vec<f64>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Vec<f64>>>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bbox: Option<Vec<f64>>,
    },
}

/// Name of a GeoJSON geometry type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryType {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
}

impl GeometryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Point => "Point",
            Self::LineString => "LineString",
            Self::Polygon => "Polygon",
            Self::MultiPoint => "MultiPoint",
            Self::MultiLineString => "MultiLineString",
            Self::MultiPolygon => "MultiPolygon",
        }
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeometryType {
    type Err = DataModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Point" => Ok(Self::Point),
            "LineString" => Ok(Self::LineString),
            "Polygon" => Ok(Self::Polygon),
            "MultiPoint" => Ok(Self::MultiPoint),
            "MultiLineString" => Ok(Self::MultiLineString),
            "MultiPolygon" => Ok(Self::MultiPolygon),
            _ => Err(DataModelError::MismatchLocationType(s.to_string())),
        }
    }
}

fn position() -> Vec<f64> {
    vec![0.0; 2]
}

fn zero_bbox() -> Option<Vec<f64>> {
    Some(vec![0.0; 4])
}

impl Geometry {
    /// Zero-filled geometry of the given type holding the minimum number of
    /// positions the type requires.
    pub fn template(kind: GeometryType) -> Self {
        let ring = || vec![position(), position(), position(), position()];
        match kind {
            GeometryType::Point => Self::Point {
                coordinates: position(),
                bbox: zero_bbox(),
            },
            GeometryType::LineString => Self::LineString {
                coordinates: vec![position(), position()],
                bbox: zero_bbox(),
            },
            GeometryType::Polygon => Self::Polygon {
                coordinates: vec![ring()],
                bbox: zero_bbox(),
            },
            GeometryType::MultiPoint => Self::MultiPoint {
                coordinates: vec![position()],
                bbox: zero_bbox(),
            },
            GeometryType::MultiLineString => Self::MultiLineString {
                coordinates: vec![vec![position(), position()]],
                bbox: zero_bbox(),
            },
            GeometryType::MultiPolygon => Self::MultiPolygon {
                coordinates: vec![vec![ring()]],
                bbox: zero_bbox(),
            },
        }
    }

    pub fn point(lng: f64, lat: f64) -> Self {
        Self::Point {
            coordinates: vec![lng, lat],
            bbox: None,
        }
    }

    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Self::Point { .. } => GeometryType::Point,
            Self::LineString { .. } => GeometryType::LineString,
            Self::Polygon { .. } => GeometryType::Polygon,
            Self::MultiPoint { .. } => GeometryType::MultiPoint,
            Self::MultiLineString { .. } => GeometryType::MultiLineString,
            Self::MultiPolygon { .. } => GeometryType::MultiPolygon,
        }
    }

    pub fn bbox(&self) -> Option<&[f64]> {
        match self {
            Self::Point { bbox, .. }
            | Self::LineString { bbox, .. }
            | Self::Polygon { bbox, .. }
            | Self::MultiPoint { bbox, .. }
            | Self::MultiLineString { bbox, .. }
            | Self::MultiPolygon { bbox, .. } => bbox.as_deref(),
        }
    }
}

/// Postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_locality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_office_box_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Geometry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_served: Option<String>,
}

impl Location {
    /// Location holding a zero-filled geometry named by `type_name`.
    pub fn with_geometry(type_name: &str) -> Result<Self> {
        let kind: GeometryType = type_name.parse()?;
        Ok(Self {
            location: Some(Geometry::template(kind)),
            ..Default::default()
        })
    }
}

/// Latitude / longitude pair. Not part of the FIWARE data models.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLng {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude within [-90, 90] and longitude within [-180, 180].
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// `"<lat>,<lng>"` in shortest decimal form.
impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Planar coordinate. Not part of the FIWARE data models.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XY {
    pub x: f64,
    pub y: f64,
}

impl fmt::Display for XY {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_geometry_point() {
        let location = Location::with_geometry("Point").unwrap();
        match location.location.unwrap() {
            Geometry::Point { coordinates, bbox } => {
                assert_eq!(coordinates.len(), 2);
                assert_eq!(bbox.unwrap().len(), 4);
            }
            other => panic!("unexpected geometry {:?}", other),
        }
    }

    #[test]
    fn test_with_geometry_polygons() {
        let location = Location::with_geometry("Polygon").unwrap();
        match location.location.unwrap() {
            Geometry::Polygon { coordinates, .. } => {
                assert_eq!(coordinates.len(), 1);
                assert_eq!(coordinates[0].len(), 4);
                assert!(coordinates[0].iter().all(|p| p.len() == 2));
            }
            other => panic!("unexpected geometry {:?}", other),
        }

        let location = Location::with_geometry("MultiPolygon").unwrap();
        match location.location.unwrap() {
            Geometry::MultiPolygon { coordinates, .. } => {
                assert_eq!(coordinates.len(), 1);
                assert_eq!(coordinates[0].len(), 1);
                assert_eq!(coordinates[0][0].len(), 4);
            }
            other => panic!("unexpected geometry {:?}", other),
        }
    }

    #[test]
    fn test_with_geometry_every_type() {
        for name in [
            "Point",
            "LineString",
            "Polygon",
            "MultiPoint",
            "MultiLineString",
            "MultiPolygon",
        ] {
            let geometry = Location::with_geometry(name).unwrap().location.unwrap();
            assert_eq!(geometry.geometry_type().as_str(), name);
        }
    }

    #[test]
    fn test_with_geometry_mismatch() {
        assert!(matches!(
            Location::with_geometry("Circle"),
            Err(DataModelError::MismatchLocationType(_))
        ));
    }

    #[test]
    fn test_geometry_json() {
        let point = Geometry::point(2.154007, 41.390205);
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "Point", "coordinates": [2.154007, 41.390205]})
        );

        let parsed: Geometry = serde_json::from_str(
            r#"{"type":"LineString","coordinates":[[1,2],[3,4]],"bbox":[1,2,3,4]}"#,
        )
        .unwrap();
        assert_eq!(parsed.geometry_type(), GeometryType::LineString);
        assert_eq!(parsed.bbox(), Some(&[1.0, 2.0, 3.0, 4.0][..]));
    }

    #[test]
    fn test_lat_lng() {
        let ll = LatLng::new(41.390205, 2.154007);
        assert_eq!(ll.to_string(), "41.390205,2.154007");
        assert!(ll.is_valid());
        assert_eq!(LatLng::new(48.0, 2.0).to_string(), "48,2");
        assert!(!LatLng::new(-100.0, 0.0).is_valid());
        assert!(!LatLng::new(0.0, 180.5).is_valid());
        assert!(LatLng::new(-90.0, -180.0).is_valid());
    }

    #[test]
    fn test_xy() {
        let xy = XY { x: 1.5, y: -3.0 };
        assert_eq!(xy.to_string(), "1.5,-3");
    }
}
