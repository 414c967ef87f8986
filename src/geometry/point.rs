use std::fmt;

use crate::error::Result;
use crate::math::Point2;

use super::{Line2D, Vector2D};

/// An anchored 2D location.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    /// Creates a new point from its coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the Euclidean distance to `other`.
    ///
    /// Computes `sqrt(dx² + dy²)`.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        (other.vector() - self.vector()).length()
    }

    /// Reinterprets the point as a displacement from the origin.
    #[must_use]
    pub const fn vector(&self) -> Vector2D {
        Vector2D::new(self.x, self.y)
    }

    /// Orthogonal projection of this point onto the infinite line through
    /// `line`'s endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateDirection`](crate::GeometryError::DegenerateDirection)
    /// if the line has zero length.
    pub fn projection_on(&self, line: &Line2D) -> Result<Self> {
        let u = line.direction()?;
        let p0v = line.p0.vector();
        let p0p = self.vector() - p0v;
        Ok((p0v + p0p.dot(&u) * u).point())
    }
}

impl From<Point2> for Point2D {
    fn from(p: Point2) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point2D> for Point2 {
    fn from(p: Point2D) -> Self {
        Point2::new(p.x, p.y)
    }
}

impl From<Vector2D> for Point2D {
    fn from(v: Vector2D) -> Self {
        v.point()
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point2D({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::GeometryError;

    const TOL: f64 = 1e-12;

    #[test]
    fn distance_3_4_5() {
        let d = Point2D::new(0.0, 0.0).distance_to(&Point2D::new(3.0, 4.0));
        assert_abs_diff_eq!(d, 5.0, epsilon = TOL);
    }

    #[test]
    fn distance_depends_on_y() {
        // Same x, different y: the x-only formula would give zero here.
        let d = Point2D::new(2.0, -1.0).distance_to(&Point2D::new(2.0, 6.0));
        assert_abs_diff_eq!(d, 7.0, epsilon = TOL);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Point2D::new(-1.5, 2.0);
        let b = Point2D::new(4.0, -3.0);
        assert_abs_diff_eq!(a.distance_to(&b), b.distance_to(&a), epsilon = TOL);
    }

    #[test]
    fn vector_point_round_trip() {
        let p = Point2D::new(-3.5, 9.25);
        assert_eq!(p.vector().point(), p);
        assert_eq!(Point2D::from(Vector2D::from(p)), p);
    }

    #[test]
    fn projection_onto_x_axis() {
        let line = Line2D::new(Point2D::new(0.0, 0.0), Point2D::new(1.0, 0.0));
        let proj = Point2D::new(3.0, 5.0).projection_on(&line).unwrap();
        assert_abs_diff_eq!(proj.x, 3.0, epsilon = TOL);
        assert_abs_diff_eq!(proj.y, 0.0, epsilon = TOL);
    }

    #[test]
    fn projection_onto_diagonal() {
        let line = Line2D::new(Point2D::new(1.0, 1.0), Point2D::new(3.0, 3.0));
        let proj = Point2D::new(0.0, 2.0).projection_on(&line).unwrap();
        assert_abs_diff_eq!(proj.x, 1.0, epsilon = TOL);
        assert_abs_diff_eq!(proj.y, 1.0, epsilon = TOL);
    }

    #[test]
    fn projection_onto_degenerate_line_fails() {
        let p = Point2D::new(1.0, 1.0);
        let line = Line2D::new(p, p);
        assert_eq!(
            Point2D::new(0.0, 0.0).projection_on(&line),
            Err(GeometryError::DegenerateDirection)
        );
    }

    #[test]
    fn nalgebra_round_trip() {
        let p = Point2D::new(0.5, -0.25);
        let na: Point2 = p.into();
        assert_eq!(Point2D::from(na), p);
    }

    #[test]
    fn display() {
        assert_eq!(Point2D::new(0.5, 3.0).to_string(), "Point2D(0.5, 3)");
    }
}
