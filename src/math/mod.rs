/// 2D point type used for `nalgebra` interop.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type used for `nalgebra` interop.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global tolerance below which an intersection denominator is treated as
/// zero.
pub const TOLERANCE: f64 = 1e-12;
