use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{GeometryError, Result};
use crate::math::Vector2;

use super::Point2D;

/// A free 2D displacement, not anchored to any location.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    /// Creates a new vector from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the Euclidean norm.
    #[must_use]
    pub fn length(&self) -> f64 {
        Vector2::from(*self).norm()
    }

    /// Returns the angle to the positive x-axis, `atan2(y, x)`, in `(-π, π]`.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Returns the unit vector pointing the same way.
    ///
    /// Only an exactly zero length is rejected; tiny vectors still normalize.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateDirection`] if the length is zero.
    pub fn unit(&self) -> Result<Self> {
        let mut v = *self;
        v.normalize()?;
        Ok(v)
    }

    /// Normalizes the vector in place and returns it for chaining.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateDirection`] if the length is zero.
    /// The vector is left unchanged in that case.
    #[allow(clippy::float_cmp)]
    pub fn normalize(&mut self) -> Result<&mut Self> {
        let len = self.length();
        if len == 0.0 {
            tracing::debug!(x = self.x, y = self.y, "cannot normalize zero-length vector");
            return Err(GeometryError::DegenerateDirection);
        }
        self.x /= len;
        self.y /= len;
        Ok(self)
    }

    /// Returns the perpendicular `(y, -x)`.
    ///
    /// This is a clockwise quarter turn. Line intersection relies on this
    /// exact sign convention.
    #[must_use]
    pub fn perp_to(&self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// Dot product.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        Vector2::from(*self).dot(&Vector2::from(*other))
    }

    /// Reinterprets the vector as a point with the same components.
    #[must_use]
    pub const fn point(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }
}

impl From<Vector2> for Vector2D {
    fn from(v: Vector2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2D> for Vector2 {
    fn from(v: Vector2D) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl From<Point2D> for Vector2D {
    fn from(p: Point2D) -> Self {
        p.vector()
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl Mul<Vector2D> for f64 {
    type Output = Vector2D;

    fn mul(self, v: Vector2D) -> Vector2D {
        v * self
    }
}

impl Neg for Vector2D {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl AddAssign for Vector2D {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vector2D {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl MulAssign<f64> for Vector2D {
    fn mul_assign(&mut self, scalar: f64) {
        self.x *= scalar;
        self.y *= scalar;
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2D({}, {})", self.x, self.y)
    }
}
