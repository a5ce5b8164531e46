//! Circle shape: all points within a distance of a center.

use super::{validate_coordinate, CircleBound};
use crate::config::ShapeConfig;
use crate::sphere::{self, Cap};
use crate::{GeoError, LatLng, Result, EARTH_RADIUS_M};

/// A circle on the Earth's surface with a radius in meters.
#[derive(Debug, Clone)]
pub struct Circle {
    center: LatLng,
    radius: f64,
    cap: Cap,
}

impl Circle {
    /// Creates a circle from a `[longitude, latitude]` center and a radius
    /// in meters.
    pub fn new(center: [f64; 2], radius: f64) -> Result<Self> {
        Self::with_config(center, radius, &ShapeConfig::default())
    }

    pub fn with_config(center: [f64; 2], radius: f64, config: &ShapeConfig) -> Result<Self> {
        let center = validate_coordinate(center, config)?;
        if !radius.is_finite() || radius < 0.0 {
            return Err(GeoError::InvalidShape(format!(
                "circle radius must be a non-negative number of meters, got {radius}"
            )));
        }

        let cap = Cap::from_center_angle(sphere::Point::from_degrees(center), radius / EARTH_RADIUS_M);
        Ok(Self { center, radius, cap })
    }

    #[inline]
    pub fn center(&self) -> LatLng {
        self.center
    }

    /// The center as a `[longitude, latitude]` pair.
    #[inline]
    pub fn coordinates(&self) -> [f64; 2] {
        self.center.to_lng_lat()
    }

    /// Radius in meters.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Compares chord angles on the unit sphere; no Haversine distance is
    /// involved.
    pub fn contains(&self, point: LatLng) -> bool {
        self.cap.contains_point(&sphere::Point::from_degrees(point))
    }

    /// The circle's own center and radius, unchanged.
    pub fn circle_bound(&self) -> CircleBound {
        CircleBound { center: self.center, radius: self.radius }
    }
}
