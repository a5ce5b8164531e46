//! Orientation predicates for triples of points on the sphere.
//!
//! `robust_sign` never reports a collinear result for three distinct points:
//! it escalates from a fast floating-point test, to a numerically stable
//! determinant, to an exact determinant (adaptive-precision arithmetic from
//! the `robust` crate) with symbolic perturbation for exact zeros.

use super::point::Point;
use super::vector::Vector;
use robust::{orient2d, orient3d, Coord, Coord3D};
use std::cmp::Ordering;

const DBL_EPSILON: f64 = f64::EPSILON;

/// Maximum error of `a.cross(b).dot(c)` for unit-length inputs.
const MAX_DETERMINANT_ERROR: f64 = 1.8274 * DBL_EPSILON;

/// Error multiplier of the stable determinant, relative to its edge lengths.
const DET_ERROR_MULTIPLIER: f64 = 3.2321 * DBL_EPSILON;

/// Orientation of an ordered triple of points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    Indeterminate,
    CounterClockwise,
}

impl Direction {
    fn from_sign(det: f64) -> Self {
        if det > 0.0 {
            Direction::CounterClockwise
        } else if det < 0.0 {
            Direction::Clockwise
        } else {
            Direction::Indeterminate
        }
    }

    /// The opposite orientation.
    pub fn reverse(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::Indeterminate => Direction::Indeterminate,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Orientation of `a, b, c`: counter-clockwise when `c` lies to the left
/// of the great circle from `a` to `b`. Only indeterminate when two of the
/// points are equal.
pub fn robust_sign(a: &Point, b: &Point, c: &Point) -> Direction {
    let sign = triage_sign(a, b, c);
    if sign != Direction::Indeterminate {
        return sign;
    }
    expensive_sign(a, b, c)
}

fn triage_sign(a: &Point, b: &Point, c: &Point) -> Direction {
    let det = a.0.cross(&b.0).dot(&c.0);
    if det > MAX_DETERMINANT_ERROR {
        return Direction::CounterClockwise;
    }
    if det < -MAX_DETERMINANT_ERROR {
        return Direction::Clockwise;
    }
    Direction::Indeterminate
}

fn expensive_sign(a: &Point, b: &Point, c: &Point) -> Direction {
    if a == b || b == c || c == a {
        return Direction::Indeterminate;
    }
    let sign = stable_sign(a, b, c);
    if sign != Direction::Indeterminate {
        return sign;
    }
    exact_sign(a, b, c)
}

/// Determinant computed around the longest edge, which keeps the error
/// proportional to the two shorter edge lengths.
fn stable_sign(a: &Point, b: &Point, c: &Point) -> Direction {
    let ab = b.0 - a.0;
    let bc = c.0 - b.0;
    let ca = a.0 - c.0;
    let ab2 = ab.norm2();
    let bc2 = bc.norm2();
    let ca2 = ca.norm2();

    let (e1, e2, op) = if ab2 >= bc2 && ab2 >= ca2 {
        (ca, bc, c.0)
    } else if bc2 >= ca2 {
        (ab, ca, a.0)
    } else {
        (bc, ab, b.0)
    };

    let det = -e1.cross(&e2).dot(&op);
    let max_err = DET_ERROR_MULTIPLIER * (e1.norm2() * e2.norm2()).sqrt();
    if det > max_err {
        return Direction::CounterClockwise;
    }
    if det < -max_err {
        return Direction::Clockwise;
    }
    Direction::Indeterminate
}

/// Sorts the points lexicographically so the result is independent of the
/// argument order up to the permutation sign, then evaluates the determinant
/// exactly. Only an exact zero falls through to symbolic perturbation.
fn exact_sign(a: &Point, b: &Point, c: &Point) -> Direction {
    let (mut pa, mut pb, mut pc) = (a, b, c);
    let mut perm_flipped = false;
    if pa.lex_cmp(pb) == Ordering::Greater {
        std::mem::swap(&mut pa, &mut pb);
        perm_flipped = !perm_flipped;
    }
    if pb.lex_cmp(pc) == Ordering::Greater {
        std::mem::swap(&mut pb, &mut pc);
        perm_flipped = !perm_flipped;
    }
    if pa.lex_cmp(pb) == Ordering::Greater {
        std::mem::swap(&mut pa, &mut pb);
        perm_flipped = !perm_flipped;
    }

    let mut sign = Direction::from_sign(exact_determinant(&pa.0, &pb.0, &pc.0));
    if sign == Direction::Indeterminate {
        sign = symbolically_perturbed_sign(&pa.0, &pb.0, &pc.0);
    }
    if perm_flipped {
        sign.reverse()
    } else {
        sign
    }
}

/// `a · (b × c)` with an exact sign: the orientation of the tetrahedron
/// `a, b, c, 0`.
fn exact_determinant(a: &Vector, b: &Vector, c: &Vector) -> f64 {
    let coord = |v: &Vector| Coord3D { x: v.x, y: v.y, z: v.z };
    orient3d(coord(a), coord(b), coord(c), Coord3D { x: 0.0, y: 0.0, z: 0.0 })
}

/// Exact sign of the 2x2 determinant `u.0 * v.1 - u.1 * v.0`.
fn det2_sign(u: (f64, f64), v: (f64, f64)) -> Direction {
    Direction::from_sign(orient2d(
        Coord { x: u.0, y: u.1 },
        Coord { x: v.0, y: v.1 },
        Coord { x: 0.0, y: 0.0 },
    ))
}

/// Sign of the determinant after perturbing each point by an infinitesimal
/// amount that shrinks with its lexicographic rank. Requires a < b < c and
/// an exactly zero unperturbed determinant. Every term is evaluated exactly.
fn symbolically_perturbed_sign(a: &Vector, b: &Vector, c: &Vector) -> Direction {
    let terms = [
        det2_sign((b.x, b.y), (c.x, c.y)),
        det2_sign((b.z, b.x), (c.z, c.x)),
        det2_sign((b.y, b.z), (c.y, c.z)),
        det2_sign((c.x, c.y), (a.x, a.y)),
        Direction::from_sign(c.x),
        Direction::from_sign(-c.y),
        det2_sign((c.z, c.x), (a.z, a.x)),
        Direction::from_sign(c.z),
        det2_sign((a.x, a.y), (b.x, b.y)),
        Direction::from_sign(-b.x),
        Direction::from_sign(b.y),
        Direction::from_sign(a.x),
    ];
    terms
        .into_iter()
        .find(|d| *d != Direction::Indeterminate)
        .unwrap_or(Direction::CounterClockwise)
}

/// Reports whether `a`, `b`, `c` are encountered in that order when sweeping
/// counter-clockwise around `o`. Ties are counted as ordered.
pub fn ordered_ccw(a: &Point, b: &Point, c: &Point, o: &Point) -> bool {
    let mut sum = 0;
    if robust_sign(b, o, a) != Direction::Clockwise {
        sum += 1;
    }
    if robust_sign(c, o, b) != Direction::Clockwise {
        sum += 1;
    }
    if robust_sign(a, o, c) == Direction::CounterClockwise {
        sum += 1;
    }
    sum >= 2
}
