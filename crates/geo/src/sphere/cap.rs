//! Spherical caps: all points within an angular distance of a center.

use super::chord_angle::ChordAngle;
use super::point::Point;

/// A spherical cap, stored as a center and a chord-angle radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cap {
    center: Point,
    radius: ChordAngle,
}

impl Cap {
    /// Cap with the given center and chord-angle radius.
    pub fn from_center_chord_angle(center: Point, radius: ChordAngle) -> Self {
        Self { center, radius }
    }

    /// Cap with the given angular radius in radians.
    pub fn from_center_angle(center: Point, radians: f64) -> Self {
        Self::from_center_chord_angle(center, ChordAngle::from_radians(radians))
    }

    /// Cap containing only `center`.
    pub fn from_point(center: Point) -> Self {
        Self::from_center_chord_angle(center, ChordAngle::ZERO)
    }

    /// Center of the cap.
    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Angular radius in radians; negative for an empty cap.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius.radians()
    }

    /// True for a cap with a negative radius, which contains nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.radius.is_negative()
    }

    /// Distance from the cap's base plane to its apex, in [0, 2].
    #[inline]
    pub fn height(&self) -> f64 {
        0.5 * self.radius.length2()
    }

    /// True if `p` is within the radius, boundary included.
    pub fn contains_point(&self, p: &Point) -> bool {
        ChordAngle::between(&self.center, p) <= self.radius
    }

    /// Grows the radius just enough to contain `p`, keeping the center.
    pub fn add_point(self, p: &Point) -> Self {
        if self.is_empty() {
            return Self::from_point(*p);
        }
        let needed = ChordAngle::between(&self.center, p);
        if needed > self.radius {
            return Self { center: self.center, radius: needed };
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LatLng;
    use std::f64::consts::PI;

    #[test]
    fn test_point_cap() {
        let p = Point::from_degrees(LatLng::new(10.0, 20.0));
        let cap = Cap::from_point(p);
        assert!(cap.contains_point(&p));
        assert_eq!(cap.radius(), 0.0);
        assert_eq!(cap.height(), 0.0);
    }

    #[test]
    fn test_contains_point() {
        let center = Point::from_degrees(LatLng::new(0.0, 0.0));
        let cap = Cap::from_center_angle(center, 10f64.to_radians());
        assert!(cap.contains_point(&Point::from_degrees(LatLng::new(0.0, 9.9))));
        assert!(!cap.contains_point(&Point::from_degrees(LatLng::new(0.0, 10.1))));
    }

    #[test]
    fn test_empty_cap() {
        let center = Point::from_degrees(LatLng::new(0.0, 0.0));
        let cap = Cap::from_center_angle(center, -1.0);
        assert!(cap.is_empty());
        assert!(!cap.contains_point(&center));

        let grown = cap.add_point(&center);
        assert!(!grown.is_empty());
        assert!(grown.contains_point(&center));
    }

    #[test]
    fn test_full_cap_contains_antipode() {
        let center = Point::from_degrees(LatLng::new(45.0, 45.0));
        let cap = Cap::from_center_angle(center, PI);
        assert!(cap.contains_point(&Point::from_degrees(LatLng::new(-45.0, -135.0))));
        assert_eq!(cap.height(), 2.0);
    }

    #[test]
    fn test_add_point_grows_radius() {
        let center = Point::from_degrees(LatLng::new(0.0, 0.0));
        let far = Point::from_degrees(LatLng::new(0.0, 30.0));
        let cap = Cap::from_point(center).add_point(&far);
        assert!(cap.contains_point(&far));
        assert!((cap.radius() - 30f64.to_radians()).abs() < 1e-12);
        assert_eq!(cap.center(), center);
    }
}
