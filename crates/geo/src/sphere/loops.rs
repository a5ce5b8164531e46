//! Spherical loops: closed chains of great-circle edges.

use super::cap::Cap;
use super::edge_crossings::{angle_contains_vertex, edge_or_vertex_crossing};
use super::interval::{R1Interval, S1Interval};
use super::point::Point;
use super::rect::{Rect, RectBounder};
use std::f64::consts::FRAC_PI_2;

/// A simple spherical polygon.
///
/// The interior is on the left of the edges, so vertices must be given in
/// counter-clockwise order as seen from outside the sphere. A clockwise
/// chain around a small area describes the complement of that area. The
/// last vertex is implicitly joined to the first.
#[derive(Debug, Clone)]
pub struct Loop {
    vertices: Vec<Point>,
    /// Whether `Point::ORIGIN` lies inside the loop.
    origin_inside: bool,
    /// Conservative bound: if the loop contains P, the bound contains P.
    bound: Rect,
}

impl Loop {
    /// Builds a loop from its vertices. Chains of fewer than three vertices
    /// produce an empty loop.
    pub fn from_points(vertices: Vec<Point>) -> Self {
        let mut l = Self {
            vertices,
            origin_inside: false,
            bound: Rect::EMPTY,
        };
        if l.vertices.len() >= 3 {
            l.init_origin_and_bound();
        }
        l
    }

    fn init_origin_and_bound(&mut self) {
        // Guess that the origin is outside, then check the guess against the
        // locally known answer for vertex 1.
        let v1_inside = self.vertices[0] != self.vertices[1]
            && self.vertices[2] != self.vertices[1]
            && angle_contains_vertex(&self.vertices[0], &self.vertices[1], &self.vertices[2]);

        self.origin_inside = false;
        if v1_inside != self.brute_force_contains_point(&self.vertices[1]) {
            self.origin_inside = true;
        }

        self.init_bound();
    }

    fn init_bound(&mut self) {
        let mut bounder = RectBounder::new();
        for i in 0..=self.vertices.len() {
            bounder.add_point(&self.vertex(i));
        }
        let mut bound = bounder.bound();

        if self.brute_force_contains_point(&Point::NORTH_POLE) {
            bound = Rect {
                lat: R1Interval::new(bound.lat.lo, FRAC_PI_2),
                lng: S1Interval::FULL,
            };
        }
        // A loop containing the south pole either wraps every longitude or
        // also contains the north pole, so the test is only needed then.
        if bound.lng.is_full() && self.brute_force_contains_point(&Point::SOUTH_POLE) {
            bound.lat.lo = -FRAC_PI_2;
        }
        self.bound = bound;
    }

    /// Number of vertices, without a repeated closing vertex.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Vertex `i`, wrapping around so `vertex(num_vertices())` is `vertex(0)`.
    #[inline]
    pub fn vertex(&self, i: usize) -> Point {
        self.vertices[i % self.vertices.len()]
    }

    /// All vertices in loop order.
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Latitude/longitude bound of the loop, including pole expansion.
    #[inline]
    pub fn rect_bound(&self) -> Rect {
        self.bound
    }

    /// A bounding cap derived from the rectangle bound.
    pub fn cap_bound(&self) -> Cap {
        self.bound.cap_bound()
    }

    /// True if `p` is inside the loop. Checks the bound first.
    pub fn contains_point(&self, p: &Point) -> bool {
        if !self.bound.contains_point(p) {
            return false;
        }
        self.brute_force_contains_point(p)
    }

    /// Counts edge crossings along the great-circle arc from the origin to
    /// `p`; each crossing toggles containment.
    fn brute_force_contains_point(&self, p: &Point) -> bool {
        if self.vertices.len() < 3 {
            return false;
        }
        let origin = Point::ORIGIN;
        let mut inside = self.origin_inside;
        for i in 0..self.vertices.len() {
            let c = &self.vertices[i];
            let d = &self.vertices[(i + 1) % self.vertices.len()];
            if edge_or_vertex_crossing(&origin, p, c, d) {
                inside = !inside;
            }
        }
        inside
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LatLng;

    fn p(lat: f64, lng: f64) -> Point {
        Point::from_degrees(LatLng::new(lat, lng))
    }

    /// Counter-clockwise square of side 2° around (lat, lng).
    fn square(lat: f64, lng: f64) -> Vec<Point> {
        vec![
            p(lat - 1.0, lng - 1.0),
            p(lat - 1.0, lng + 1.0),
            p(lat + 1.0, lng + 1.0),
            p(lat + 1.0, lng - 1.0),
        ]
    }

    #[test]
    fn test_ccw_square_contains_center() {
        let l = Loop::from_points(square(10.0, 20.0));
        assert_eq!(l.num_vertices(), 4);
        assert!(l.contains_point(&p(10.0, 20.0)));
        assert!(!l.contains_point(&p(15.0, 20.0)));
        assert!(!l.contains_point(&Point::NORTH_POLE));
    }

    #[test]
    fn test_cw_square_is_complement() {
        let mut vertices = square(10.0, 20.0);
        vertices.reverse();
        let l = Loop::from_points(vertices);
        assert!(!l.contains_point(&p(10.0, 20.0)));
        assert!(l.contains_point(&p(-40.0, -100.0)));
        assert!(l.contains_point(&Point::NORTH_POLE));
        assert!(l.rect_bound().lng.is_full());
        assert_eq!(l.rect_bound().lat.hi, FRAC_PI_2);
    }

    #[test]
    fn test_loop_around_north_pole() {
        let l = Loop::from_points(vec![p(80.0, 0.0), p(80.0, 120.0), p(80.0, -120.0)]);
        assert!(l.contains_point(&Point::NORTH_POLE));
        assert!(l.contains_point(&p(85.0, 45.0)));
        assert!(!l.contains_point(&p(60.0, 45.0)));
        assert!(l.cap_bound().contains_point(&Point::NORTH_POLE));
    }

    #[test]
    fn test_loop_across_antimeridian() {
        let l = Loop::from_points(square(0.0, 180.0));
        assert!(l.contains_point(&p(0.0, 180.0)));
        assert!(l.contains_point(&p(0.5, -179.5)));
        assert!(l.contains_point(&p(-0.5, 179.5)));
        assert!(!l.contains_point(&p(0.0, 0.0)));
        assert!(l.rect_bound().lng.is_inverted());
    }

    #[test]
    fn test_cap_bound_contains_vertices() {
        let l = Loop::from_points(square(-33.0, 151.0));
        let cap = l.cap_bound();
        for v in l.vertices() {
            assert!(cap.contains_point(v));
        }
        assert!(cap.contains_point(&p(-33.0, 151.0)));
    }

    #[test]
    fn test_too_few_vertices_is_empty() {
        let l = Loop::from_points(vec![p(0.0, 0.0), p(1.0, 1.0)]);
        assert!(!l.contains_point(&p(0.5, 0.5)));
        assert!(l.rect_bound().is_empty());
    }
}
