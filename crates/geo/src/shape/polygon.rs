//! Spherical polygon shape.

use super::{validate_coordinate, CircleBound};
use crate::config::ShapeConfig;
use crate::sphere::{self, Loop};
use crate::{GeoError, LatLng, Result};
use std::cmp::Ordering;
use tracing::{debug, warn};

/// Out-of-plane distance below which a vertex counts as lying on a great
/// circle.
const GREAT_CIRCLE_TOLERANCE: f64 = 1e-14;

/// A polygon bounded by great-circle edges.
///
/// Only the outer ring is used; holes are ignored. Input rings follow the
/// GeoJSON convention and are consumed in reverse order when the spherical
/// loop is built, which puts the intended interior on the loop's left. A
/// ring listed in the opposite orientation describes the complement: the
/// whole sphere except the enclosed area.
#[derive(Debug, Clone)]
pub struct Polygon {
    rings: Vec<Vec<[f64; 2]>>,
    outer: Loop,
}

impl Polygon {
    /// Creates a polygon from GeoJSON-style rings of `[longitude, latitude]`
    /// pairs. The first ring is the boundary.
    pub fn new(rings: Vec<Vec<[f64; 2]>>) -> Result<Self> {
        Self::with_config(rings, &ShapeConfig::default())
    }

    /// Creates a polygon from a single ring.
    pub fn from_ring(ring: Vec<[f64; 2]>) -> Result<Self> {
        Self::new(vec![ring])
    }

    pub fn with_config(rings: Vec<Vec<[f64; 2]>>, config: &ShapeConfig) -> Result<Self> {
        let ring = rings
            .first()
            .ok_or_else(|| GeoError::InvalidShape("polygon has no rings".to_string()))?;
        if rings.len() > 1 {
            debug!(holes = rings.len() - 1, "polygon holes are ignored");
        }

        let outer = build_loop(ring, config)?;
        debug!(vertices = outer.num_vertices(), "built polygon loop");

        Ok(Self { rings, outer })
    }

    /// The rings exactly as given.
    pub fn rings(&self) -> &[Vec<[f64; 2]>] {
        &self.rings
    }

    pub(crate) fn into_rings(self) -> Vec<Vec<[f64; 2]>> {
        self.rings
    }

    /// Number of distinct boundary vertices.
    pub fn num_vertices(&self) -> usize {
        self.outer.num_vertices()
    }

    pub fn contains(&self, point: LatLng) -> bool {
        self.outer.contains_point(&sphere::Point::from_degrees(point))
    }

    /// Cap bound of the loop's latitude/longitude bound.
    pub fn circle_bound(&self) -> CircleBound {
        CircleBound::from_cap(&self.outer.cap_bound())
    }
}

/// Validates a ring and builds its loop with vertices in reverse order.
fn build_loop(ring: &[[f64; 2]], config: &ShapeConfig) -> Result<Loop> {
    for &coordinate in ring {
        validate_coordinate(coordinate, config)?;
    }

    let open = match ring {
        [first, .., last] if first == last => &ring[..ring.len() - 1],
        _ => ring,
    };
    if open.len() < 3 {
        return Err(GeoError::InvalidShape(format!(
            "polygon ring needs at least 3 distinct vertices, got {}",
            open.len()
        )));
    }

    check_distinct(open).inspect_err(|e| warn!(error = %e, "rejected polygon"))?;

    let vertices: Vec<sphere::Point> = open
        .iter()
        .rev()
        .map(|&c| sphere::Point::from_degrees(LatLng::from_lng_lat(c)))
        .collect();

    check_geometry(&vertices).inspect_err(|e| warn!(error = %e, "rejected polygon"))?;

    Ok(Loop::from_points(vertices))
}

/// Rejects rings that visit the same location twice, comparing locations
/// rather than raw pairs.
fn check_distinct(open: &[[f64; 2]]) -> Result<()> {
    let mut sorted: Vec<[f64; 2]> = open.iter().map(|&c| canonical_coordinate(c)).collect();
    sorted.sort_by(cmp_coordinate);
    if let Some(pair) = sorted.windows(2).find(|w| w[0] == w[1]) {
        return Err(GeoError::DegenerateShape(format!(
            "polygon ring repeats vertex [{}, {}]",
            pair[0][0], pair[0][1]
        )));
    }
    Ok(())
}

/// One spelling per location: every longitude at a pole is 0, -180 is 180,
/// and negative zero is zero.
fn canonical_coordinate([lng, lat]: [f64; 2]) -> [f64; 2] {
    let lat = lat + 0.0;
    if lat.abs() == 90.0 {
        return [0.0, lat];
    }
    if lng == -180.0 {
        return [180.0, lat];
    }
    [lng + 0.0, lat]
}

fn cmp_coordinate(a: &[f64; 2], b: &[f64; 2]) -> Ordering {
    a[0].total_cmp(&b[0]).then(a[1].total_cmp(&b[1]))
}

/// Rejects rings with antipodal neighbours or with every vertex on a
/// single great circle, neither of which bounds a region.
fn check_geometry(vertices: &[sphere::Point]) -> Result<()> {
    let n = vertices.len();
    for i in 0..n {
        let a = &vertices[i];
        let b = &vertices[(i + 1) % n];
        if a.0.dot(&b.0) <= -1.0 + 4.0 * f64::EPSILON {
            return Err(GeoError::DegenerateShape(
                "polygon ring has antipodal adjacent vertices".to_string(),
            ));
        }
    }

    let v0 = &vertices[0].0;
    let normal = vertices[1..]
        .iter()
        .map(|v| v0.cross(&v.0))
        .max_by(|a, b| a.norm2().total_cmp(&b.norm2()))
        .map(|c| c.normalize())
        .unwrap_or_default();
    if vertices.iter().all(|v| normal.dot(&v.0).abs() <= GREAT_CIRCLE_TOLERANCE) {
        return Err(GeoError::DegenerateShape(
            "polygon ring lies on a single great circle".to_string(),
        ));
    }
    Ok(())
}
