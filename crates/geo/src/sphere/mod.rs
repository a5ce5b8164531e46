//! Spherical geometry primitives.
//!
//! Shapes are evaluated on the unit sphere rather than in a planar
//! projection, so containment stays correct across the antimeridian, around
//! the poles, and for regions of any size:
//!
//! - [`Point`]: unit vectors, converted from and to latitude/longitude
//! - [`ChordAngle`]: squared chord length, a stable stand-in for angles
//! - [`Cap`]: spherical caps (circles on the sphere)
//! - [`Rect`]: latitude/longitude rectangles, including antimeridian spans
//! - [`Loop`]: spherical polygons with crossing-count containment
//!
//! Orientation tests are robust: three distinct points always get a
//! definite orientation, which keeps crossing parity consistent when a query
//! point lies exactly on an edge or lines up with a vertex.

mod cap;
mod chord_angle;
mod edge_crossings;
mod interval;
mod loops;
mod point;
mod predicates;
mod rect;
mod vector;

pub use cap::Cap;
pub use chord_angle::ChordAngle;
pub use edge_crossings::{
    angle_contains_vertex, crossing_sign, edge_or_vertex_crossing, vertex_crossing, Crossing,
};
pub use interval::{R1Interval, S1Interval};
pub use loops::Loop;
pub use point::{LatLngRad, Point};
pub use predicates::{ordered_ccw, robust_sign, Direction};
pub use rect::{Rect, RectBounder};
pub use vector::{Axis, Vector};
