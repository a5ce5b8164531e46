//! Closed intervals on the real line (latitudes) and on the unit circle
//! (longitudes).

use std::f64::consts::PI;

/// Closed interval on the real line. Empty when `lo > hi`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct R1Interval {
    pub lo: f64,
    pub hi: f64,
}

impl R1Interval {
    /// Interval containing nothing.
    pub const EMPTY: R1Interval = R1Interval { lo: 1.0, hi: 0.0 };

    /// Interval `[lo, hi]`.
    #[inline]
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Interval containing only `p`.
    #[inline]
    pub const fn from_point(p: f64) -> Self {
        Self { lo: p, hi: p }
    }

    /// True if `lo > hi`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lo > self.hi
    }

    /// Midpoint of the interval.
    #[inline]
    pub fn center(&self) -> f64 {
        0.5 * (self.lo + self.hi)
    }

    /// `hi - lo`; negative when empty.
    #[inline]
    pub fn length(&self) -> f64 {
        self.hi - self.lo
    }

    /// True if `lo <= p <= hi`.
    #[inline]
    pub fn contains(&self, p: f64) -> bool {
        self.lo <= p && p <= self.hi
    }

    /// Smallest interval containing this one and `p`.
    pub fn add_point(self, p: f64) -> Self {
        if self.is_empty() {
            return Self::from_point(p);
        }
        if p < self.lo {
            return Self::new(p, self.hi);
        }
        if p > self.hi {
            return Self::new(self.lo, p);
        }
        self
    }

    /// Smallest interval containing both.
    pub fn union(self, other: R1Interval) -> Self {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        Self::new(self.lo.min(other.lo), self.hi.max(other.hi))
    }

    /// Overlap of both intervals; empty when they are disjoint.
    pub fn intersection(self, other: R1Interval) -> Self {
        Self::new(self.lo.max(other.lo), self.hi.min(other.hi))
    }

    /// Grows both ends by `margin`. Empty stays empty.
    pub fn expanded(self, margin: f64) -> Self {
        if self.is_empty() {
            return self;
        }
        Self::new(self.lo - margin, self.hi + margin)
    }
}

/// Closed interval on the unit circle, endpoints in [-π, π].
///
/// An interval with `lo > hi` is "inverted" and wraps through ±π, which is
/// how longitude ranges crossing the antimeridian are represented. The point
/// -π is normalized to π except in the full interval [-π, π].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct S1Interval {
    pub lo: f64,
    pub hi: f64,
}

impl S1Interval {
    /// Interval containing no angle.
    pub const EMPTY: S1Interval = S1Interval { lo: PI, hi: -PI };
    /// Interval containing every angle.
    pub const FULL: S1Interval = S1Interval { lo: -PI, hi: PI };

    /// Interval from `lo` counter-clockwise to `hi`, with -π normalized to π.
    pub fn from_endpoints(lo: f64, hi: f64) -> Self {
        let mut i = Self { lo, hi };
        if lo == -PI && hi != PI {
            i.lo = PI;
        }
        if hi == -PI && lo != PI {
            i.hi = PI;
        }
        i
    }

    /// Interval containing only `p`.
    #[inline]
    pub fn from_point(p: f64) -> Self {
        Self::from_endpoints(p, p)
    }

    /// True if the interval wraps through ±π.
    #[inline]
    pub fn is_inverted(&self) -> bool {
        self.lo > self.hi
    }

    /// True for the empty interval `[π, -π]`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lo == PI && self.hi == -PI
    }

    /// True for the full circle.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.lo == -PI && self.hi == PI
    }

    /// Midpoint, measured the way the interval runs.
    pub fn center(&self) -> f64 {
        let c = 0.5 * (self.lo + self.hi);
        if !self.is_inverted() {
            return c;
        }
        if c <= 0.0 {
            return c + PI;
        }
        c - PI
    }

    /// Arc length; negative for the empty interval.
    pub fn length(&self) -> f64 {
        let mut l = self.hi - self.lo;
        if l >= 0.0 {
            return l;
        }
        l += 2.0 * PI;
        if l > 0.0 {
            return l;
        }
        -1.0
    }

    fn fast_contains(&self, p: f64) -> bool {
        if self.is_inverted() {
            return (p >= self.lo || p <= self.hi) && !self.is_empty();
        }
        p >= self.lo && p <= self.hi
    }

    /// True if the angle `p` lies in the interval.
    pub fn contains(&self, p: f64) -> bool {
        let p = if p == -PI { PI } else { p };
        self.fast_contains(p)
    }

    /// True if `other` lies entirely within this interval.
    pub fn contains_interval(&self, other: &S1Interval) -> bool {
        if self.is_inverted() {
            if other.is_inverted() {
                return other.lo >= self.lo && other.hi <= self.hi;
            }
            return (other.lo >= self.lo || other.hi <= self.hi) && !self.is_empty();
        }
        if other.is_inverted() {
            return self.is_full() || other.is_empty();
        }
        other.lo >= self.lo && other.hi <= self.hi
    }

    /// Smallest interval containing this one and `p`. When `p` is outside,
    /// the interval grows in whichever direction is shorter.
    pub fn add_point(self, p: f64) -> Self {
        if p.abs() > PI {
            return self;
        }
        let p = if p == -PI { PI } else { p };

        if self.fast_contains(p) {
            return self;
        }
        if self.is_empty() {
            return Self { lo: p, hi: p };
        }
        if positive_distance(p, self.lo) < positive_distance(self.hi, p) {
            return Self { lo: p, hi: self.hi };
        }
        Self { lo: self.lo, hi: p }
    }

    /// Smallest interval containing both, joining disjoint intervals across
    /// the shorter gap.
    pub fn union(self, other: S1Interval) -> Self {
        if other.is_empty() {
            return self;
        }
        if self.fast_contains(other.lo) {
            if self.fast_contains(other.hi) {
                // Either other ⊂ self, or the union wraps the whole circle.
                if self.contains_interval(&other) {
                    return self;
                }
                return Self::FULL;
            }
            return Self { lo: self.lo, hi: other.hi };
        }
        if self.fast_contains(other.hi) {
            return Self { lo: other.lo, hi: self.hi };
        }

        // Neither endpoint of other is in self: self ⊂ other, or disjoint.
        if self.is_empty() || other.fast_contains(self.lo) {
            return other;
        }

        // Disjoint; join through the closer pair of endpoints.
        if positive_distance(other.hi, self.lo) < positive_distance(self.hi, other.lo) {
            return Self { lo: other.lo, hi: self.hi };
        }
        Self { lo: self.lo, hi: other.hi }
    }
}

/// Distance from `a` to `b` going counter-clockwise, in [0, 2π).
fn positive_distance(a: f64, b: f64) -> f64 {
    let d = b - a;
    if d >= 0.0 {
        return d;
    }
    (b + PI) - (a - PI)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_r1_add_point_and_union() {
        let i = R1Interval::EMPTY.add_point(2.0).add_point(-1.0).add_point(0.5);
        assert_eq!(i, R1Interval::new(-1.0, 2.0));
        assert_eq!(i.length(), 3.0);
        assert_eq!(i.center(), 0.5);
        assert_eq!(R1Interval::EMPTY.union(i), i);
        assert_eq!(i.union(R1Interval::new(3.0, 4.0)), R1Interval::new(-1.0, 4.0));
        assert!(R1Interval::new(0.0, 1.0).intersection(R1Interval::new(2.0, 3.0)).is_empty());
    }

    #[test]
    fn test_r1_expanded() {
        assert_eq!(R1Interval::new(0.0, 1.0).expanded(0.5), R1Interval::new(-0.5, 1.5));
        assert!(R1Interval::EMPTY.expanded(1.0).is_empty());
    }

    #[test]
    fn test_s1_empty_and_full() {
        assert!(S1Interval::EMPTY.is_empty());
        assert!(S1Interval::FULL.is_full());
        assert_eq!(S1Interval::EMPTY.length(), -1.0);
        assert!((S1Interval::FULL.length() - 2.0 * PI).abs() < 1e-15);
        assert!(!S1Interval::EMPTY.contains(0.0));
        assert!(S1Interval::FULL.contains(-PI));
    }

    #[test]
    fn test_s1_add_point_chooses_shorter_side() {
        // 170° then -170° should wrap through the antimeridian.
        let a = 170f64.to_radians();
        let b = (-170f64).to_radians();
        let i = S1Interval::from_point(a).add_point(b);
        assert!(i.is_inverted());
        assert!((i.length() - 20f64.to_radians()).abs() < 1e-12);
        assert!(i.contains(PI));
        assert!(!i.contains(0.0));
        assert!((i.center().abs() - PI).abs() < 1e-12);
    }

    #[test]
    fn test_s1_add_point_normal() {
        let i = S1Interval::from_point(0.1).add_point(0.3).add_point(0.2);
        assert_eq!(i, S1Interval { lo: 0.1, hi: 0.3 });
        assert!((i.center() - 0.2).abs() < 1e-15);
    }

    #[test]
    fn test_s1_union() {
        let a = S1Interval { lo: 0.0, hi: 1.0 };
        let b = S1Interval { lo: 0.5, hi: 2.0 };
        assert_eq!(a.union(b), S1Interval { lo: 0.0, hi: 2.0 });
        assert_eq!(a.union(S1Interval::EMPTY), a);
        assert_eq!(S1Interval::EMPTY.union(a), a);

        // Disjoint intervals join across the shorter gap.
        let c = S1Interval { lo: 3.0, hi: 3.1 };
        let d = S1Interval { lo: -3.1, hi: -3.0 };
        let u = c.union(d);
        assert!(u.is_inverted());
        assert_eq!(u, S1Interval { lo: 3.0, hi: -3.0 });

        let wrap = S1Interval { lo: FRAC_PI_2, hi: -FRAC_PI_2 };
        let rest = S1Interval { lo: -FRAC_PI_2 - 0.1, hi: FRAC_PI_2 + 0.1 };
        assert!(wrap.union(rest).is_full());
    }

    #[test]
    fn test_s1_from_endpoints_normalizes_minus_pi() {
        assert_eq!(S1Interval::from_point(-PI), S1Interval { lo: PI, hi: PI });
        assert!(S1Interval::from_endpoints(-PI, PI).is_full());
    }
}
