//! Latitude/longitude rectangles and bounding of great-circle edge chains.

use super::cap::Cap;
use super::chord_angle::ChordAngle;
use super::interval::{R1Interval, S1Interval};
use super::point::{LatLngRad, Point};
use super::vector::Vector;
use std::f64::consts::{FRAC_PI_2, PI};

const DBL_EPSILON: f64 = f64::EPSILON;

/// A closed latitude/longitude rectangle, in radians.
///
/// Longitude ranges may be inverted to span the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub lat: R1Interval,
    pub lng: S1Interval,
}

const VALID_LAT_RANGE: R1Interval = R1Interval::new(-FRAC_PI_2, FRAC_PI_2);

impl Rect {
    /// Rectangle containing nothing.
    pub const EMPTY: Rect = Rect { lat: R1Interval::EMPTY, lng: S1Interval::EMPTY };
    /// Rectangle covering the whole sphere.
    pub const FULL: Rect = Rect { lat: VALID_LAT_RANGE, lng: S1Interval::FULL };

    /// Rectangle containing the single point `ll`.
    pub fn from_lat_lng(ll: LatLngRad) -> Self {
        Self {
            lat: R1Interval::from_point(ll.lat),
            lng: S1Interval::from_point(ll.lng),
        }
    }

    /// True if the latitude range is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lat.is_empty()
    }

    /// Midpoint of the latitude and longitude ranges.
    pub fn center(&self) -> LatLngRad {
        LatLngRad::new(self.lat.center(), self.lng.center())
    }

    /// Vertices in counter-clockwise order starting at the lower-left.
    pub fn vertex(&self, k: usize) -> LatLngRad {
        match k % 4 {
            0 => LatLngRad::new(self.lat.lo, self.lng.lo),
            1 => LatLngRad::new(self.lat.lo, self.lng.hi),
            2 => LatLngRad::new(self.lat.hi, self.lng.hi),
            _ => LatLngRad::new(self.lat.hi, self.lng.lo),
        }
    }

    /// Expands the rectangle to include `ll`. Invalid points are ignored.
    pub fn add_point(self, ll: LatLngRad) -> Self {
        if !ll.is_valid() {
            return self;
        }
        Self {
            lat: self.lat.add_point(ll.lat),
            lng: self.lng.add_point(ll.lng),
        }
    }

    /// True if `ll` lies in the rectangle. Invalid points never do.
    pub fn contains_lat_lng(&self, ll: LatLngRad) -> bool {
        if !ll.is_valid() {
            return false;
        }
        self.lat.contains(ll.lat) && self.lng.contains(ll.lng)
    }

    /// True if the unit vector `p` lies in the rectangle.
    pub fn contains_point(&self, p: &Point) -> bool {
        self.contains_lat_lng(p.to_lat_lng())
    }

    /// Smallest rectangle containing both.
    pub fn union(self, other: Rect) -> Self {
        Self {
            lat: self.lat.union(other.lat),
            lng: self.lng.union(other.lng),
        }
    }

    /// Pads the latitude range by `lat_margin`, clamped to the poles.
    fn expanded_lat(self, lat_margin: f64) -> Self {
        let lat = self.lat.expanded(lat_margin);
        if lat.is_empty() || self.lng.is_empty() {
            return Self::EMPTY;
        }
        Self { lat: lat.intersection(VALID_LAT_RANGE), lng: self.lng }
    }

    /// A rectangle touching a pole includes every longitude.
    pub fn polar_closure(self) -> Self {
        if self.lat.lo == -FRAC_PI_2 || self.lat.hi == FRAC_PI_2 {
            return Self { lat: self.lat, lng: S1Interval::FULL };
        }
        self
    }

    /// Smallest of two candidate caps: one centered on the nearer pole, and
    /// one centered on the rectangle's center covering its four vertices.
    pub fn cap_bound(&self) -> Cap {
        if self.is_empty() {
            return Cap::from_center_chord_angle(Point::NORTH_POLE, ChordAngle::NEGATIVE);
        }

        let (pole, pole_angle) = if self.lat.hi + self.lat.lo < 0.0 {
            (Point::SOUTH_POLE, FRAC_PI_2 + self.lat.hi)
        } else {
            (Point::NORTH_POLE, FRAC_PI_2 - self.lat.lo)
        };
        let pole_cap = Cap::from_center_angle(pole, pole_angle);

        // Beyond 180° of longitude the vertices no longer bound the
        // rectangle, so only the pole cap is safe.
        let lng_span = self.lng.length();
        if (0.0..=PI).contains(&lng_span) {
            let mid_cap = (0..4).fold(
                Cap::from_point(Point::from_lat_lng(self.center())),
                |cap, k| cap.add_point(&Point::from_lat_lng(self.vertex(k))),
            );
            if mid_cap.height() < pole_cap.height() {
                return mid_cap;
            }
        }
        pole_cap
    }
}

/// Computes a bounding rectangle for a chain of great-circle edges.
///
/// The bound accounts for latitude extrema reached in the interior of an
/// edge, so it contains every point on the chain and not just its vertices.
#[derive(Debug, Clone)]
pub struct RectBounder {
    a: Point,
    a_ll: LatLngRad,
    bound: Rect,
}

impl Default for RectBounder {
    fn default() -> Self {
        Self {
            a: Point(Vector::default()),
            a_ll: LatLngRad::new(0.0, 0.0),
            bound: Rect::EMPTY,
        }
    }
}

impl RectBounder {
    /// Bounder with no points yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the next vertex of the chain, extending the bound by the edge
    /// from the previous vertex.
    pub fn add_point(&mut self, b: &Point) {
        let b_ll = b.to_lat_lng();

        if self.bound.is_empty() {
            self.a = *b;
            self.a_ll = b_ll;
            self.bound = self.bound.add_point(b_ll);
            return;
        }

        // N = 2 * (A x B), computed in a form that stays accurate when A and
        // B are close together.
        let n = (self.a.0 - b.0).cross(&(self.a.0 + b.0));
        let n_norm = n.norm();

        if n_norm < 1.91346e-15 {
            // A and B are nearly identical or nearly antipodal.
            if self.a.0.dot(&b.0) < 0.0 {
                self.bound = Rect::FULL;
            } else {
                self.bound = self
                    .bound
                    .union(Rect::from_lat_lng(self.a_ll).add_point(b_ll));
            }
            self.a = *b;
            self.a_ll = b_ll;
            return;
        }

        let mut lng_ab = S1Interval::EMPTY.add_point(self.a_ll.lng).add_point(b_ll.lng);
        if lng_ab.length() >= PI - 2.0 * DBL_EPSILON {
            // Nearly opposite meridians; the edge may pass either side of a pole.
            lng_ab = S1Interval::FULL;
        }

        let mut lat_ab = R1Interval::from_point(self.a_ll.lat).add_point(b_ll.lat);

        // The great circle through A and B reaches its latitude extrema where
        // it crosses the plane through N and the z-axis. M is normal to that
        // plane; the edge crosses it iff A and B project to opposite signs.
        let m = n.cross(&Vector::new(0.0, 0.0, 1.0));
        let m_a = m.dot(&self.a.0);
        let m_b = m.dot(&b.0);

        let m_error = 6.06638e-16 * n_norm + 6.83174e-31;
        if m_a * m_b < 0.0 || m_a.abs() <= m_error || m_b.abs() <= m_error {
            let max_lat = ((n.x * n.x + n.y * n.y).sqrt().atan2(n.z.abs()) + 3.0 * DBL_EPSILON)
                .min(FRAC_PI_2);

            // Latitude change budget between A and B along the great circle;
            // what is not spent getting from A to B bounds the excursion.
            let lat_budget = 2.0 * (0.5 * (self.a.0 - b.0).norm() * max_lat.sin()).asin();
            let max_delta = 0.5 * (lat_budget - lat_ab.length()) + DBL_EPSILON;

            if m_a <= m_error && m_b >= -m_error {
                lat_ab.hi = max_lat.min(lat_ab.hi + max_delta);
            }
            if m_b <= m_error && m_a >= -m_error {
                lat_ab.lo = (-max_lat).max(lat_ab.lo - max_delta);
            }
        }

        self.a = *b;
        self.a_ll = b_ll;
        self.bound = self.bound.union(Rect { lat: lat_ab, lng: lng_ab });
    }

    /// The bound of all edges added so far, padded for the latitude error
    /// of converting points to lat/lng.
    pub fn bound(&self) -> Rect {
        self.bound.expanded_lat(2.0 * DBL_EPSILON).polar_closure()
    }
}
