pub mod error;
pub mod geometry;
pub mod math;

pub use error::{GeometryError, Result};
pub use geometry::{IntersectionParameters, Line2D, Point2D, Vector2D};
pub use math::TOLERANCE;
