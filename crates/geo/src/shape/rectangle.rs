//! Latitude/longitude bounding-box shape.

use super::{validate_coordinate, CircleBound};
use crate::config::ShapeConfig;
use crate::sphere::{LatLngRad, Rect};
use crate::{GeoError, LatLng, Result};
use tracing::trace;

/// The latitude/longitude bounding box of a set of corner points.
///
/// This is not a fixed four-corner quadrilateral: every given point widens
/// the box, so passing more than two corners grows the shape to cover all
/// of them. Longitude ranges take the shorter way around, so two corners on
/// either side of the antimeridian give a box spanning it.
#[derive(Debug, Clone)]
pub struct Rectangle {
    corners: Vec<[f64; 2]>,
    rect: Rect,
}

impl Rectangle {
    /// Creates a rectangle from `[longitude, latitude]` corner points.
    pub fn new(corners: Vec<[f64; 2]>) -> Result<Self> {
        Self::with_config(corners, &ShapeConfig::default())
    }

    pub fn with_config(corners: Vec<[f64; 2]>, config: &ShapeConfig) -> Result<Self> {
        let (first, rest) = corners
            .split_first()
            .ok_or_else(|| GeoError::InvalidShape("rectangle has no corners".to_string()))?;

        let start = Rect::from_lat_lng(LatLngRad::from_degrees(validate_coordinate(*first, config)?));
        let rect = rest.iter().try_fold(start, |rect, &corner| {
            let ll = validate_coordinate(corner, config)?;
            Ok::<_, GeoError>(rect.add_point(LatLngRad::from_degrees(ll)))
        })?;
        trace!(corners = corners.len(), ?rect, "built rectangle");

        Ok(Self { corners, rect })
    }

    /// The corner points exactly as given.
    pub fn corners(&self) -> &[[f64; 2]] {
        &self.corners
    }

    pub(crate) fn into_corners(self) -> Vec<[f64; 2]> {
        self.corners
    }

    /// Points with out-of-range coordinates are never contained.
    pub fn contains(&self, point: LatLng) -> bool {
        self.rect.contains_lat_lng(LatLngRad::from_degrees(point))
    }

    pub fn circle_bound(&self) -> CircleBound {
        CircleBound::from_cap(&self.rect.cap_bound())
    }
}
