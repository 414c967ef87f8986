use thiserror::Error;

/// Errors produced by the 2D primitives.
///
/// Every failure is a pure function of the inputs, so retrying with the same
/// values always yields the same error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// A zero-length vector was normalized, or a zero-length line was asked
    /// for its direction.
    #[error("degenerate direction: zero-length vector")]
    DegenerateDirection,

    /// The intersection parameter denominator fell below
    /// [`TOLERANCE`](crate::math::TOLERANCE).
    #[error("lines are parallel")]
    ParallelLines,
}

/// Convenience type alias for results using [`GeometryError`].
pub type Result<T> = std::result::Result<T, GeometryError>;
