//! Value types for 2D geometry: displacements, positions and axis-aligned rectangles

mod point;
mod rect;
mod vec2;

pub use point::Point2D;
pub use rect::Rect;
pub use vec2::Vec2;
