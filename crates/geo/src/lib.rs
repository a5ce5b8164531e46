//! Spherical point-in-shape containment and bounding circles.
//!
//! This crate provides:
//! - Haversine great-circle distance
//! - Point, Polygon, Circle and Rectangle shapes on the sphere
//! - Point containment and minimal enclosing circles for every shape
//! - Batch processing with optional parallelism
//! - TOML configuration
//!
//! # Example
//!
//! ```
//! use geoshape::{LatLng, Polygon};
//!
//! let polygon = Polygon::from_ring(vec![
//!     [25.7244873046875, 43.11110313559475],
//!     [25.726847648620605, 43.11417334786724],
//!     [25.73268413543701, 43.110163243903585],
//!     [25.728735923767093, 43.10712416198819],
//!     [25.724401473999023, 43.10865938717618],
//!     [25.7244873046875, 43.11110313559475],
//! ])
//! .unwrap();
//!
//! assert!(polygon.contains(LatLng::new(43.1089613, 25.7267396)));
//!
//! let bound = polygon.circle_bound();
//! assert!((bound.radius - 516.353).abs() < 0.01);
//! ```

mod error;
mod haversine;
mod latlng;
pub mod batch;
pub mod config;
pub mod shape;
pub mod sphere;

pub use batch::{ContainmentResult, DistanceResult, LocatedItem};
pub use config::{BatchConfig, GeoConfig, ShapeConfig};
pub use error::{GeoError, GeoErrorCode, Result};
pub use haversine::{haversine_distance, haversine_distance_meters, EARTH_RADIUS_KM, EARTH_RADIUS_M};
pub use latlng::LatLng;
pub use shape::{Circle, CircleBound, Point, Polygon, Rectangle, Shape};
