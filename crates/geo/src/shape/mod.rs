//! Geographic shapes with point containment and bounding circles.
//!
//! Every shape answers the same two questions:
//! - [`Shape::contains`]: is a latitude/longitude point inside the shape?
//! - [`Shape::circle_bound`]: what is the smallest enclosing circle?
//!
//! Raw coordinates are always `[longitude, latitude]` pairs in degrees
//! (GeoJSON ordering). Shapes validate their input on construction and are
//! immutable afterwards, so they can be shared freely across threads.
//!
//! # Example
//!
//! ```
//! use geoshape::{LatLng, Shape};
//!
//! let shape = Shape::from_json(r#"{
//!     "type": "Circle",
//!     "coordinates": [25.608530044555668, 43.07380969664719],
//!     "radius": 297.82929433609627
//! }"#).unwrap();
//!
//! assert!(shape.contains(LatLng::new(43.07409, 25.60987)));
//! assert!(!shape.contains(LatLng::new(43.07415, 25.61671)));
//! ```

mod circle;
mod point;
mod polygon;
mod rectangle;

pub use circle::Circle;
pub use point::Point;
pub use polygon::Polygon;
pub use rectangle::Rectangle;

use crate::config::ShapeConfig;
use crate::sphere::Cap;
use crate::{GeoError, LatLng, Result, EARTH_RADIUS_M};
use serde::{Deserialize, Serialize};

/// Minimal enclosing circle of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleBound {
    /// Center of the circle
    pub center: LatLng,
    /// Radius in meters
    pub radius: f64,
}

impl CircleBound {
    /// Converts a spherical cap to degrees and meters.
    pub(crate) fn from_cap(cap: &Cap) -> Self {
        Self {
            center: cap.center().to_degrees(),
            radius: cap.radius() * EARTH_RADIUS_M,
        }
    }
}

/// Any supported shape.
///
/// Serializes as a GeoJSON-like object tagged by `type`:
///
/// ```json
/// {"type": "Point", "coordinates": [lng, lat]}
/// {"type": "Polygon", "coordinates": [[[lng, lat], ...]]}
/// {"type": "Circle", "coordinates": [lng, lat], "radius": 250.0}
/// {"type": "Rectangle", "coordinates": [[lng, lat], [lng, lat]]}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ShapeData", into = "ShapeData")]
pub enum Shape {
    Point(Point),
    Polygon(Polygon),
    Circle(Circle),
    Rectangle(Rectangle),
}

impl Shape {
    /// Returns true if `point` lies inside the shape.
    pub fn contains(&self, point: LatLng) -> bool {
        match self {
            Shape::Point(s) => s.contains(point),
            Shape::Polygon(s) => s.contains(point),
            Shape::Circle(s) => s.contains(point),
            Shape::Rectangle(s) => s.contains(point),
        }
    }

    /// Returns the minimal enclosing circle of the shape.
    pub fn circle_bound(&self) -> CircleBound {
        match self {
            Shape::Point(s) => s.circle_bound(),
            Shape::Polygon(s) => s.circle_bound(),
            Shape::Circle(s) => s.circle_bound(),
            Shape::Rectangle(s) => s.circle_bound(),
        }
    }

    /// The shape's `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Point(_) => "Point",
            Shape::Polygon(_) => "Polygon",
            Shape::Circle(_) => "Circle",
            Shape::Rectangle(_) => "Rectangle",
        }
    }

    /// Parses a shape from its JSON form using the default configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_json_with_config(json, &ShapeConfig::default())
    }

    /// Parses a shape from its JSON form, applying `config` during
    /// validation.
    pub fn from_json_with_config(json: &str, config: &ShapeConfig) -> Result<Self> {
        let data: ShapeData = serde_json::from_str(json)?;
        Self::from_data(data, config)
    }

    fn from_data(data: ShapeData, config: &ShapeConfig) -> Result<Self> {
        Ok(match data {
            ShapeData::Point { coordinates } => {
                Shape::Point(Point::with_config(coordinates, config)?)
            }
            ShapeData::Polygon { coordinates } => {
                Shape::Polygon(Polygon::with_config(coordinates, config)?)
            }
            ShapeData::Circle { coordinates, radius } => {
                Shape::Circle(Circle::with_config(coordinates, radius, config)?)
            }
            ShapeData::Rectangle { coordinates } => {
                Shape::Rectangle(Rectangle::with_config(coordinates, config)?)
            }
        })
    }
}

impl From<Point> for Shape {
    fn from(s: Point) -> Self {
        Shape::Point(s)
    }
}

impl From<Polygon> for Shape {
    fn from(s: Polygon) -> Self {
        Shape::Polygon(s)
    }
}

impl From<Circle> for Shape {
    fn from(s: Circle) -> Self {
        Shape::Circle(s)
    }
}

impl From<Rectangle> for Shape {
    fn from(s: Rectangle) -> Self {
        Shape::Rectangle(s)
    }
}

/// Wire form of a shape, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
enum ShapeData {
    Point {
        coordinates: [f64; 2],
    },
    Polygon {
        coordinates: Vec<Vec<[f64; 2]>>,
    },
    Circle {
        coordinates: [f64; 2],
        radius: f64,
    },
    Rectangle {
        coordinates: Vec<[f64; 2]>,
    },
}

impl TryFrom<ShapeData> for Shape {
    type Error = GeoError;

    fn try_from(data: ShapeData) -> Result<Self> {
        Shape::from_data(data, &ShapeConfig::default())
    }
}

impl From<Shape> for ShapeData {
    fn from(shape: Shape) -> Self {
        match shape {
            Shape::Point(s) => ShapeData::Point { coordinates: s.coordinates() },
            Shape::Polygon(s) => ShapeData::Polygon { coordinates: s.into_rings() },
            Shape::Circle(s) => ShapeData::Circle {
                coordinates: s.coordinates(),
                radius: s.radius(),
            },
            Shape::Rectangle(s) => ShapeData::Rectangle { coordinates: s.into_corners() },
        }
    }
}

/// Checks a raw `[lng, lat]` pair and converts it to a [`LatLng`].
pub(crate) fn validate_coordinate(coordinate: [f64; 2], config: &ShapeConfig) -> Result<LatLng> {
    let ll = LatLng::from_lng_lat(coordinate);
    if !ll.lat.is_finite() || !ll.lng.is_finite() {
        return Err(GeoError::InvalidCoordinate(format!(
            "non-finite coordinate [{}, {}]",
            ll.lng, ll.lat
        )));
    }
    if config.validate_coordinates && !ll.is_valid() {
        return Err(GeoError::InvalidCoordinate(format!(
            "[{}, {}] is outside [-180, 180] x [-90, 90]",
            ll.lng, ll.lat
        )));
    }
    Ok(ll)
}

#[cfg(test)]
mod tests {
    use super::*;

    const POLYGON_JSON: &str = r#"{
        "type": "Polygon",
        "coordinates": [[
            [25.7244873046875, 43.11110313559475],
            [25.726847648620605, 43.11417334786724],
            [25.73268413543701, 43.110163243903585],
            [25.728735923767093, 43.10712416198819],
            [25.724401473999023, 43.10865938717618],
            [25.7244873046875, 43.11110313559475]
        ]]
    }"#;

    #[test]
    fn test_parse_each_kind() {
        let point = Shape::from_json(r#"{"type": "Point", "coordinates": [25.6, 43.0]}"#).unwrap();
        assert_eq!(point.kind(), "Point");
        assert!(point.contains(LatLng::new(43.0, 25.6)));

        let polygon = Shape::from_json(POLYGON_JSON).unwrap();
        assert_eq!(polygon.kind(), "Polygon");
        assert!(polygon.contains(LatLng::new(43.1089613, 25.7267396)));

        let rect = Shape::from_json(
            r#"{"type": "Rectangle", "coordinates": [[25.288888, 42.244444], [25.322222, 42.288888]]}"#,
        )
        .unwrap();
        assert_eq!(rect.kind(), "Rectangle");
        assert!(rect.contains(LatLng::new(42.266667, 25.305549)));
    }

    #[test]
    fn test_parse_rejects_invalid_shapes() {
        let err = Shape::from_json(r#"{"type": "Circle", "coordinates": [0.0, 0.0], "radius": -5.0}"#)
            .unwrap_err();
        assert!(matches!(err, GeoError::InvalidShape(_)));

        let err = Shape::from_json(r#"{"type": "Polygon", "coordinates": []}"#).unwrap_err();
        assert!(matches!(err, GeoError::InvalidShape(_)));

        let err = Shape::from_json(r#"{"type": "Point", "coordinates": [200.0, 0.0]}"#).unwrap_err();
        assert!(matches!(err, GeoError::InvalidCoordinate(_)));

        let err = Shape::from_json(r#"{"type": "Hexagon", "coordinates": []}"#).unwrap_err();
        assert!(matches!(err, GeoError::JsonError(_)));
    }

    #[test]
    fn test_serde_derive_validates() {
        let result: std::result::Result<Shape, _> =
            serde_json::from_str(r#"{"type": "Rectangle", "coordinates": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_round_trip() {
        let shape = Shape::from_json(POLYGON_JSON).unwrap();
        let json = serde_json::to_string(&shape).unwrap();
        assert!(json.contains(r#""type":"Polygon""#));

        let back: Shape = serde_json::from_str(&json).unwrap();
        assert_eq!(back.circle_bound(), shape.circle_bound());
    }

    #[test]
    fn test_config_applies_point_tolerance() {
        let config = ShapeConfig { point_tolerance_m: 10.0, ..ShapeConfig::default() };
        let json = r#"{"type": "Point", "coordinates": [25.608530044555668, 43.07380969664719]}"#;

        let strict = Shape::from_json(json).unwrap();
        let tolerant = Shape::from_json_with_config(json, &config).unwrap();
        let nearby = LatLng::new(43.07381, 25.60853);

        assert!(!strict.contains(nearby));
        assert!(tolerant.contains(nearby));
    }

    #[test]
    fn test_config_allows_out_of_range_when_disabled() {
        let config = ShapeConfig { validate_coordinates: false, ..ShapeConfig::default() };
        let json = r#"{"type": "Point", "coordinates": [190.0, 0.0]}"#;
        assert!(Shape::from_json(json).is_err());
        assert!(Shape::from_json_with_config(json, &config).is_ok());
    }

    #[test]
    fn test_circle_bound_center_is_contained() {
        let shapes = [
            Shape::from_json(POLYGON_JSON).unwrap(),
            Shape::from_json(
                r#"{"type": "Rectangle", "coordinates": [[25.288888, 42.244444], [25.322222, 42.288888]]}"#,
            )
            .unwrap(),
            Shape::from_json(r#"{"type": "Circle", "coordinates": [25.6, 43.07], "radius": 300.0}"#)
                .unwrap(),
            Shape::from_json(r#"{"type": "Point", "coordinates": [25.6, 43.07]}"#).unwrap(),
        ];
        for shape in &shapes {
            let bound = shape.circle_bound();
            assert!(shape.contains(bound.center), "{} center not contained", shape.kind());
        }
    }
}
