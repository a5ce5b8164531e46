//! Edge crossing tests for great-circle edges.

use super::point::Point;
use super::predicates::{ordered_ccw, robust_sign};

/// Result of testing two edges for an interior crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossing {
    /// The edges cross at a point interior to both.
    Cross,
    /// Two vertices from different edges coincide.
    MaybeCross,
    /// The edges do not cross.
    DoNotCross,
}

/// Tests whether edge AB crosses edge CD at a point interior to both.
///
/// Returns `MaybeCross` when any vertex of AB equals a vertex of CD, so the
/// caller can apply a vertex rule.
pub fn crossing_sign(a: &Point, b: &Point, c: &Point, d: &Point) -> Crossing {
    if a == c || a == d || b == c || b == d {
        return Crossing::MaybeCross;
    }
    if a == b || c == d {
        return Crossing::DoNotCross;
    }

    // For a crossing, the triangles ACB, BDA, CBD, DAC must all share one
    // orientation.
    let acb = robust_sign(a, b, c).reverse();
    let bda = robust_sign(a, b, d);
    if bda != acb {
        return Crossing::DoNotCross;
    }
    let cbd = robust_sign(c, d, b).reverse();
    if cbd != acb {
        return Crossing::DoNotCross;
    }
    let dac = robust_sign(c, d, a);
    if dac != acb {
        return Crossing::DoNotCross;
    }
    Crossing::Cross
}

/// Vertex rule for edges that share a vertex: the shared vertex counts as a
/// crossing only when AB lies further counter-clockwise around it than CD,
/// measured from a fixed reference direction. Applied consistently, this
/// makes crossing parity correct when a ray passes exactly through a vertex.
pub fn vertex_crossing(a: &Point, b: &Point, c: &Point, d: &Point) -> bool {
    if a == b || c == d {
        return false;
    }
    if a == d {
        return ordered_ccw(&a.ortho(), c, b, a);
    }
    if b == c {
        return ordered_ccw(&b.ortho(), d, a, b);
    }
    if a == c {
        return ordered_ccw(&a.ortho(), d, b, a);
    }
    if b == d {
        return ordered_ccw(&b.ortho(), c, a, b);
    }
    false
}

/// True if AB crosses CD in their interiors, or if they share a vertex and
/// the vertex rule counts it as a crossing.
pub fn edge_or_vertex_crossing(a: &Point, b: &Point, c: &Point, d: &Point) -> bool {
    match crossing_sign(a, b, c, d) {
        Crossing::Cross => true,
        Crossing::DoNotCross => false,
        Crossing::MaybeCross => vertex_crossing(a, b, c, d),
    }
}

/// Reports whether the angle ABC contains its vertex B, i.e. whether a point
/// infinitesimally close to B inside the region to the left of A→B→C is
/// inside. Needed to seed loop containment. Requires a != b and b != c.
pub fn angle_contains_vertex(a: &Point, b: &Point, c: &Point) -> bool {
    !ordered_ccw(&b.ortho(), c, a, b)
}
