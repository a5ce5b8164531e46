//! Latitude/longitude query points.

use crate::haversine::{haversine_distance, haversine_distance_meters};
use serde::{Deserialize, Serialize};

/// A geographic point with latitude and longitude in degrees.
///
/// No range is enforced; values outside [-90, 90] x [-180, 180] are carried
/// through as given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in degrees (-90 to 90)
    pub lat: f64,
    /// Longitude in degrees (-180 to 180)
    pub lng: f64,
}

impl LatLng {
    /// Creates a new point from latitude and longitude in degrees.
    #[inline]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Creates a point from a GeoJSON-ordered `[longitude, latitude]` pair.
    #[inline]
    pub const fn from_lng_lat([lng, lat]: [f64; 2]) -> Self {
        Self { lat, lng }
    }

    /// Returns the GeoJSON-ordered `[longitude, latitude]` pair.
    #[inline]
    pub const fn to_lng_lat(&self) -> [f64; 2] {
        [self.lng, self.lat]
    }

    /// Returns true if both components are finite and within range.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.lat >= -90.0 && self.lat <= 90.0 && self.lng >= -180.0 && self.lng <= 180.0
    }

    /// Great-circle distance to `other` in kilometers.
    #[inline]
    pub fn great_circle_distance(&self, other: &LatLng) -> f64 {
        haversine_distance(self, other)
    }

    /// Great-circle distance to `other` in meters.
    #[inline]
    pub fn great_circle_distance_meters(&self, other: &LatLng) -> f64 {
        haversine_distance_meters(self, other)
    }

    #[inline]
    pub(crate) fn to_radians(self) -> (f64, f64) {
        (self.lat.to_radians(), self.lng.to_radians())
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latlng_creation() {
        let p = LatLng::new(52.5200, 13.4050);
        assert_eq!(p.lat, 52.5200);
        assert_eq!(p.lng, 13.4050);
    }

    #[test]
    fn test_lng_lat_ordering() {
        let p = LatLng::from_lng_lat([25.608530044555668, 43.07380969664719]);
        assert_eq!(p.lat, 43.07380969664719);
        assert_eq!(p.lng, 25.608530044555668);
        assert_eq!(p.to_lng_lat(), [25.608530044555668, 43.07380969664719]);
    }

    #[test]
    fn test_latlng_validation() {
        assert!(LatLng::new(0.0, 0.0).is_valid());
        assert!(LatLng::new(90.0, 180.0).is_valid());
        assert!(LatLng::new(-90.0, -180.0).is_valid());
        assert!(!LatLng::new(91.0, 0.0).is_valid());
        assert!(!LatLng::new(0.0, 181.0).is_valid());
        assert!(!LatLng::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn test_latlng_from_tuple() {
        let p: LatLng = (52.5200, 13.4050).into();
        assert_eq!(p.lat, 52.5200);
    }

    #[test]
    fn test_great_circle_distance_symmetric() {
        let a = LatLng::new(43.1089613, 25.7267396);
        let b = LatLng::new(43.0765023, 25.6312193);
        assert_eq!(a.great_circle_distance(&b), b.great_circle_distance(&a));
        assert_eq!(a.great_circle_distance(&a), 0.0);
    }
}
