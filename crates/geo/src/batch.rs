//! Batch containment and distance calculations with optional parallelism.
//!
//! Shapes are immutable after construction, so one shape can be tested
//! against many points (or many shapes against one point) from several
//! threads at once. With the `parallel` feature, inputs at or above
//! [`BatchConfig::parallel_threshold`] are spread across rayon's pool.

use crate::config::BatchConfig;
use crate::{haversine_distance, haversine_distance_meters, LatLng, Shape};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Input item for batch calculations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocatedItem {
    /// The item ID
    pub id: i64,
    /// Item location
    pub location: LatLng,
}

/// Result of a containment test for a single item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainmentResult {
    /// The item ID
    pub id: i64,
    /// Whether the shape contains the item's location
    pub contained: bool,
    /// Distance in meters from the shape's bounding-circle center
    pub distance_m: f64,
}

/// Result of a distance calculation for a single item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceResult {
    /// The item ID
    pub id: i64,
    /// Calculated distance in kilometers (Infinity if location is invalid)
    pub distance: f64,
}

/// Tests every point against `shape`, returning one flag per point.
///
/// # Example
/// ```
/// use geoshape::{batch, BatchConfig, Circle, LatLng, Shape};
///
/// let shape = Shape::from(Circle::new([13.4050, 52.5200], 5_000.0).unwrap());
/// let points = [LatLng::new(52.52, 13.40), LatLng::new(48.8566, 2.3522)];
///
/// let flags = batch::contains_all(&shape, &points, &BatchConfig::default());
/// assert_eq!(flags, vec![true, false]);
/// ```
pub fn contains_all(shape: &Shape, points: &[LatLng], config: &BatchConfig) -> Vec<bool> {
    map_items(points, config.parallel_threshold, |p| shape.contains(*p))
}

/// Tests each item's location against `shape`.
pub fn check_containment(
    shape: &Shape,
    items: &[LocatedItem],
    config: &BatchConfig,
) -> Vec<ContainmentResult> {
    let center = shape.circle_bound().center;
    map_items(items, config.parallel_threshold, |item| ContainmentResult {
        id: item.id,
        contained: shape.contains(item.location),
        distance_m: haversine_distance_meters(&center, &item.location),
    })
}

/// IDs of the items whose location lies inside `shape`, in input order.
pub fn filter_contained(shape: &Shape, items: &[LocatedItem], config: &BatchConfig) -> Vec<i64> {
    check_containment(shape, items, config)
        .into_iter()
        .filter(|r| r.contained)
        .map(|r| r.id)
        .collect()
}

/// Indices of the shapes that contain `point`.
pub fn shapes_containing(shapes: &[Shape], point: LatLng, config: &BatchConfig) -> Vec<usize> {
    map_items(shapes, config.parallel_threshold, |s| s.contains(point))
        .into_iter()
        .enumerate()
        .filter_map(|(i, contained)| contained.then_some(i))
        .collect()
}

/// Calculate distances from `origin` to multiple items.
pub fn calculate_distances(
    origin: LatLng,
    items: &[LocatedItem],
    config: &BatchConfig,
) -> Vec<DistanceResult> {
    map_items(items, config.parallel_threshold, |item| calculate_single_distance(&origin, item))
}

#[inline]
fn calculate_single_distance(origin: &LatLng, item: &LocatedItem) -> DistanceResult {
    let distance = if item.location.is_valid() {
        haversine_distance(origin, &item.location)
    } else {
        f64::INFINITY
    };

    DistanceResult { id: item.id, distance }
}

/// Maps `f` over `items`, in parallel when enabled and worthwhile.
fn map_items<T, R, F>(items: &[T], parallel_threshold: usize, f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        if items.len() >= parallel_threshold {
            use rayon::prelude::*;
            trace!(items = items.len(), "running batch in parallel");
            return items.par_iter().map(f).collect();
        }
    }

    #[cfg(not(feature = "parallel"))]
    let _ = parallel_threshold;

    trace!(items = items.len(), "running batch sequentially");
    items.iter().map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Circle, Polygon, Rectangle};

    fn create_test_items() -> Vec<LocatedItem> {
        vec![
            // Berlin
            LocatedItem { id: 1, location: LatLng::new(52.5200, 13.4050) },
            // Paris
            LocatedItem { id: 2, location: LatLng::new(48.8566, 2.3522) },
            // London
            LocatedItem { id: 3, location: LatLng::new(51.5074, -0.1276) },
            // Invalid location
            LocatedItem { id: 4, location: LatLng::new(f64::NAN, 0.0) },
        ]
    }

    fn germany_box() -> Shape {
        Rectangle::new(vec![[5.87, 47.27], [15.04, 55.06]]).unwrap().into()
    }

    #[test]
    fn test_contains_all() {
        let points: Vec<LatLng> = create_test_items().iter().map(|i| i.location).collect();
        let flags = contains_all(&germany_box(), &points, &BatchConfig::default());
        assert_eq!(flags, vec![true, false, false, false]);
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        let shape: Shape = Circle::new([10.0, 50.0], 500_000.0).unwrap().into();
        let points: Vec<LatLng> = (0..500)
            .map(|i| LatLng::new(45.0 + (i as f64 * 0.02), 5.0 + (i as f64 * 0.02)))
            .collect();

        let sequential = contains_all(&shape, &points, &BatchConfig { parallel_threshold: usize::MAX });
        let parallel = contains_all(&shape, &points, &BatchConfig { parallel_threshold: 1 });
        assert_eq!(sequential, parallel);
        assert!(sequential.iter().any(|c| *c));
        assert!(sequential.iter().any(|c| !*c));
    }

    #[test]
    fn test_filter_contained() {
        let ids = filter_contained(&germany_box(), &create_test_items(), &BatchConfig::default());
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_check_containment_keeps_order() {
        let results = check_containment(&germany_box(), &create_test_items(), &BatchConfig::default());
        let ids: Vec<i64> = results.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);

        // Box center is near Erfurt, ~250km from Berlin
        assert!(results[0].distance_m > 100_000.0 && results[0].distance_m < 400_000.0);
        assert!(results[3].distance_m.is_nan());
    }

    #[test]
    fn test_shapes_containing() {
        let shapes = vec![
            germany_box(),
            Circle::new([2.3522, 48.8566], 10_000.0).unwrap().into(),
            Polygon::from_ring(vec![[12.0, 51.0], [12.0, 54.0], [15.0, 54.0], [15.0, 51.0], [12.0, 51.0]])
                .unwrap()
                .into(),
        ];
        let berlin = LatLng::new(52.5200, 13.4050);
        assert_eq!(shapes_containing(&shapes, berlin, &BatchConfig::default()), vec![0, 2]);

        let paris = LatLng::new(48.8566, 2.3522);
        assert_eq!(shapes_containing(&shapes, paris, &BatchConfig::default()), vec![1]);
    }

    #[test]
    fn test_batch_distances() {
        let items = create_test_items();
        // Origin in Frankfurt (roughly between Berlin and Paris)
        let results = calculate_distances(LatLng::new(50.1109, 8.6821), &items, &BatchConfig::default());

        assert_eq!(results.len(), 4);

        let berlin = results.iter().find(|r| r.id == 1).unwrap();
        assert!(berlin.distance > 0.0 && berlin.distance < 500.0);

        let invalid = results.iter().find(|r| r.id == 4).unwrap();
        assert!(invalid.distance.is_infinite());
    }
}
