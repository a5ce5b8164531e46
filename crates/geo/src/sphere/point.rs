//! Points on the unit sphere and their latitude/longitude form in radians.

use super::vector::{Axis, Vector};
use crate::LatLng;
use std::cmp::Ordering;

/// Latitude/longitude pair in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLngRad {
    pub lat: f64,
    pub lng: f64,
}

impl LatLngRad {
    /// Creates a point from latitude and longitude in radians.
    #[inline]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Converts a degree-valued point.
    #[inline]
    pub fn from_degrees(ll: LatLng) -> Self {
        let (lat, lng) = ll.to_radians();
        Self { lat, lng }
    }

    /// Converts to degrees.
    #[inline]
    pub fn to_degrees(self) -> LatLng {
        LatLng::new(self.lat.to_degrees(), self.lng.to_degrees())
    }

    /// Latitude within [-π/2, π/2] and longitude within [-π, π].
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.lat.abs() <= std::f64::consts::FRAC_PI_2 && self.lng.abs() <= std::f64::consts::PI
    }
}

/// A point on the unit sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point(pub Vector);

impl Point {
    /// The north pole, (0, 0, 1).
    pub const NORTH_POLE: Point = Point(Vector::new(0.0, 0.0, 1.0));
    /// The south pole, (0, 0, -1).
    pub const SOUTH_POLE: Point = Point(Vector::new(0.0, 0.0, -1.0));

    /// Fixed reference point for crossing-count containment. Chosen off every
    /// axis and great circle a typical input would use.
    pub const ORIGIN: Point = Point(Vector::new(
        -0.0099994664350250197,
        0.0025924542609324121,
        0.99994664350250195,
    ));

    /// Unit vector for a latitude/longitude in radians.
    pub fn from_lat_lng(ll: LatLngRad) -> Self {
        let phi = ll.lat;
        let theta = ll.lng;
        let cos_phi = phi.cos();
        Point(Vector::new(theta.cos() * cos_phi, theta.sin() * cos_phi, phi.sin()))
    }

    /// Unit vector for a latitude/longitude in degrees.
    #[inline]
    pub fn from_degrees(ll: LatLng) -> Self {
        Self::from_lat_lng(LatLngRad::from_degrees(ll))
    }

    /// Latitude/longitude in radians.
    pub fn to_lat_lng(&self) -> LatLngRad {
        let v = &self.0;
        LatLngRad::new(v.z.atan2((v.x * v.x + v.y * v.y).sqrt()), v.y.atan2(v.x))
    }

    /// Latitude/longitude in degrees.
    #[inline]
    pub fn to_degrees(&self) -> LatLng {
        self.to_lat_lng().to_degrees()
    }

    /// A unit vector orthogonal to this point, with `ortho(-p) == -ortho(p)`.
    pub fn ortho(&self) -> Point {
        let mut temp = Vector::new(0.012, 0.0053, 0.00457);
        match self.0.largest_component() {
            Axis::X => temp.z = 1.0,
            Axis::Y => temp.x = 1.0,
            Axis::Z => temp.y = 1.0,
        }
        Point(self.0.cross(&temp).normalize())
    }

    /// Lexicographic (x, y, z) ordering.
    pub fn lex_cmp(&self, other: &Point) -> Ordering {
        let a = &self.0;
        let b = &other.0;
        a.x.total_cmp(&b.x)
            .then(a.y.total_cmp(&b.y))
            .then(a.z.total_cmp(&b.z))
    }
}
