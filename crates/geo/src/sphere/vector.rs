//! Three-dimensional vectors used to represent points on the unit sphere.

use std::ops::{Add, Mul, Sub};

/// A vector in R³.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Axis of a vector component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Vector {
    /// Creates a vector from its components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: &Vector) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product.
    #[inline]
    pub fn cross(&self, other: &Vector) -> Vector {
        Vector {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Squared length.
    #[inline]
    pub fn norm2(&self) -> f64 {
        self.dot(self)
    }

    /// Length.
    #[inline]
    pub fn norm(&self) -> f64 {
        self.norm2().sqrt()
    }

    /// Returns a unit vector in the same direction, or the zero vector.
    pub fn normalize(&self) -> Vector {
        let n = self.norm();
        if n == 0.0 {
            return Vector::default();
        }
        *self * (1.0 / n)
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(&self) -> Vector {
        Vector::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// The axis with the largest absolute component.
    pub fn largest_component(&self) -> Axis {
        let t = self.abs();
        if t.x > t.y {
            if t.x > t.z {
                return Axis::X;
            }
            return Axis::Z;
        }
        if t.y > t.z {
            return Axis::Y;
        }
        Axis::Z
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, m: f64) -> Vector {
        Vector::new(self.x * m, self.y * m, self.z * m)
    }
}
