use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::TOLERANCE;

use super::{Point2D, Vector2D};

/// Parameters locating the common point of two lines.
///
/// `t1` is the parameter on the first line and `t2` on the second, so that
/// `first.point(t1) == second.point(t2)`. A parameter is `None` when its
/// denominator falls below [`TOLERANCE`]. Each one is solved independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionParameters {
    /// Parameter on the first line.
    pub t1: Option<f64>,
    /// Parameter on the second line.
    pub t2: Option<f64>,
}

/// A line through two points.
///
/// The parametric form is: `P(t) = p0 + t * (p1 - p0)`, valid for any real `t`,
/// so for intersection purposes the line is infinite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2D {
    pub p0: Point2D,
    pub p1: Point2D,
}

impl Line2D {
    /// Creates a new line through `p0` and `p1`.
    ///
    /// Coincident endpoints are accepted; operations needing a direction
    /// then fail with [`GeometryError::DegenerateDirection`].
    #[must_use]
    pub const fn new(p0: Point2D, p1: Point2D) -> Self {
        Self { p0, p1 }
    }

    /// Returns the distance between the two endpoints.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.p0.distance_to(&self.p1)
    }

    /// Returns the unit vector from `p0` toward `p1`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateDirection`] if the endpoints coincide.
    pub fn direction(&self) -> Result<Vector2D> {
        self.delta().unit()
    }

    /// Evaluates the line at parameter `t`.
    #[must_use]
    pub fn point(&self, t: f64) -> Point2D {
        (self.p0.vector() + t * self.delta()).point()
    }

    /// Solves `self.point(t1) == other.point(t2)` for both parameters.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateDirection`] if either line has
    /// zero length.
    pub fn intersection_parameters(&self, other: &Self) -> Result<IntersectionParameters> {
        let u1_perp = self.direction()?.perp_to();
        let u2_perp = other.direction()?.perp_to();

        let v10 = self.p0.vector();
        let v20 = other.p0.vector();

        let t1 = solve_parameter(v20 - v10, self.delta(), u2_perp);
        let t2 = solve_parameter(v10 - v20, other.delta(), u1_perp);

        if t1.is_none() || t2.is_none() {
            tracing::debug!(
                line = %self,
                other = %other,
                ?t1,
                ?t2,
                "intersection denominator below tolerance"
            );
        }

        Ok(IntersectionParameters { t1, t2 })
    }

    /// Returns the point where this line meets `other`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateDirection`] if either line has zero
    /// length, or [`GeometryError::ParallelLines`] if the parameter on this
    /// line cannot be solved.
    pub fn intersection_point(&self, other: &Self) -> Result<Point2D> {
        let t1 = self
            .intersection_parameters(other)?
            .t1
            .ok_or(GeometryError::ParallelLines)?;
        Ok(self.point(t1))
    }

    /// Returns `p1 - p0`.
    fn delta(&self) -> Vector2D {
        self.p1.vector() - self.p0.vector()
    }
}

/// Returns `offset·perp / delta·perp`, or `None` when the denominator is
/// below [`TOLERANCE`].
fn solve_parameter(offset: Vector2D, delta: Vector2D, perp: Vector2D) -> Option<f64> {
    let denom = delta.dot(&perp);
    if denom.abs() < TOLERANCE {
        return None;
    }
    Some(offset.dot(&perp) / denom)
}

impl fmt::Display for Line2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line2D({}, {})", self.p0, self.p1)
    }
}
