//! Chord angles: squared chord length as a proxy for angular distance.
//!
//! Comparing squared chord lengths is monotonic in the angle and avoids the
//! trigonometric precision loss of working with angles directly.

use super::point::Point;
use std::f64::consts::PI;

/// Largest squared chord length, reached between antipodal points.
const MAX_LENGTH2: f64 = 4.0;

/// Angle between two points, stored as the squared length of the chord
/// joining them, in [0, 4]. Negative means empty.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ChordAngle(pub f64);

impl ChordAngle {
    /// Angle between a point and itself.
    pub const ZERO: ChordAngle = ChordAngle(0.0);
    /// Smaller than every real angle; the radius of an empty cap.
    pub const NEGATIVE: ChordAngle = ChordAngle(-1.0);
    /// Angle between antipodal points.
    pub const STRAIGHT: ChordAngle = ChordAngle(MAX_LENGTH2);

    /// Converts an angle in radians. Negative angles map to `NEGATIVE`,
    /// angles of π or more to `STRAIGHT`. NaN stays NaN.
    pub fn from_radians(angle: f64) -> Self {
        if angle < 0.0 {
            return Self::NEGATIVE;
        }
        if angle >= PI {
            return Self::STRAIGHT;
        }
        let l = 2.0 * (0.5 * angle).sin();
        ChordAngle(l * l)
    }

    /// Chord angle between two points. A NaN coordinate gives a NaN angle,
    /// which compares false against every radius.
    pub fn between(a: &Point, b: &Point) -> Self {
        let d = (a.0 - b.0).norm2();
        if d > MAX_LENGTH2 {
            return Self::STRAIGHT;
        }
        ChordAngle(d)
    }

    /// Squared chord length.
    #[inline]
    pub fn length2(&self) -> f64 {
        self.0
    }

    /// True for `NEGATIVE`.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// The angle in radians; negative for `NEGATIVE`.
    pub fn radians(&self) -> f64 {
        if self.is_negative() {
            return -1.0;
        }
        2.0 * (0.5 * self.0.sqrt()).asin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LatLng;

    #[test]
    fn test_from_radians_round_trip() {
        for angle in [0.0, 1e-6, 0.5, 1.0, 3.0] {
            let back = ChordAngle::from_radians(angle).radians();
            assert!((back - angle).abs() < 1e-12, "angle {angle} -> {back}");
        }
    }

    #[test]
    fn test_special_values() {
        assert!(ChordAngle::from_radians(-0.1).is_negative());
        assert_eq!(ChordAngle::from_radians(f64::INFINITY), ChordAngle::STRAIGHT);
        assert_eq!(ChordAngle::from_radians(10.0), ChordAngle::STRAIGHT);
        assert_eq!(ChordAngle::NEGATIVE.radians(), -1.0);
        assert!(ChordAngle::from_radians(f64::NAN).length2().is_nan());
    }

    #[test]
    fn test_between_keeps_nan() {
        let a = Point::from_degrees(LatLng::new(0.0, 0.0));
        let nan = Point::from_degrees(LatLng::new(f64::NAN, 0.0));
        let angle = ChordAngle::between(&a, &nan);
        assert!(angle.length2().is_nan());
        assert!(angle.partial_cmp(&ChordAngle::STRAIGHT).is_none());
    }

    #[test]
    fn test_between_points() {
        let a = Point::from_degrees(LatLng::new(0.0, 0.0));
        let b = Point::from_degrees(LatLng::new(0.0, 90.0));
        let angle = ChordAngle::between(&a, &b).radians();
        assert!((angle - PI / 2.0).abs() < 1e-12);
        assert_eq!(ChordAngle::between(&a, &a), ChordAngle::ZERO);
    }
}
