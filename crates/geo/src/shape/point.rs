//! Single-location shape.

use super::{validate_coordinate, CircleBound};
use crate::config::ShapeConfig;
use crate::{LatLng, Result};

/// A single location.
///
/// Containment is exact floating-point equality unless a tolerance is set,
/// in which case any point within that many meters is contained.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    location: LatLng,
    tolerance_m: f64,
}

impl Point {
    /// Creates a point from a `[longitude, latitude]` pair.
    pub fn new(coordinates: [f64; 2]) -> Result<Self> {
        Self::with_config(coordinates, &ShapeConfig::default())
    }

    /// Creates a point, validating and applying the tolerance from `config`.
    pub fn with_config(coordinates: [f64; 2], config: &ShapeConfig) -> Result<Self> {
        let location = validate_coordinate(coordinates, config)?;
        Ok(Self { location, tolerance_m: 0.0 }.with_tolerance(config.point_tolerance_m))
    }

    /// Sets the containment tolerance in meters. Negative or non-finite
    /// values mean exact matching.
    pub fn with_tolerance(mut self, meters: f64) -> Self {
        self.tolerance_m = if meters.is_finite() && meters > 0.0 { meters } else { 0.0 };
        self
    }

    /// The stored location.
    #[inline]
    pub fn location(&self) -> LatLng {
        self.location
    }

    /// The stored `[longitude, latitude]` pair.
    #[inline]
    pub fn coordinates(&self) -> [f64; 2] {
        self.location.to_lng_lat()
    }

    #[inline]
    pub fn tolerance(&self) -> f64 {
        self.tolerance_m
    }

    pub fn contains(&self, point: LatLng) -> bool {
        if self.tolerance_m == 0.0 {
            return point.lng == self.location.lng && point.lat == self.location.lat;
        }
        self.location.great_circle_distance_meters(&point) <= self.tolerance_m
    }

    /// The point itself, with the tolerance (0 by default) as radius.
    pub fn circle_bound(&self) -> CircleBound {
        CircleBound { center: self.location, radius: self.tolerance_m }
    }
}
