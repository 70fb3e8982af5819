#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![doc = "A `no_std` library of 2D primitives for real-time games and simulations."]
#![doc = ""]
#![doc = "This crate provides segments, infinite lines, circles, rectangles and reusable rays."]
#![doc = "Intersections use the determinant method; parallel primitives never intersect."]

extern crate alloc;

pub mod circle;
pub mod error;
pub mod line;
pub mod math;
pub mod point;
pub mod ray;
pub mod rect;
pub mod render;

pub use circle::Circle;
pub use error::GeometryError;
pub use line::{Line, LineLike, Segment};
pub use point::Point;
pub use ray::{Movable, Ray};
pub use rect::{HasBounds, Rect};
pub use render::{Color, RenderSink};
