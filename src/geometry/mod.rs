mod line;
mod point;
mod vector;

pub use line::{IntersectionParameters, Line2D};
pub use point::Point2D;
pub use vector::Vector2D;
