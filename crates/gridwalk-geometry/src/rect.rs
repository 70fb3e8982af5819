//! Axis-aligned rectangles used as hit regions.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::point::Point;

/// An axis-aligned rectangle in pixel space, anchored at its top-left corner.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub w: f64,
    /// Height.
    pub h: f64,
}

impl Rect {
    /// Construct a rectangle from its top-left corner and size.
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Rect { x, y, w, h }
    }

    /// Construct a rectangle of the given size centered on `center`.
    pub fn from_center(center: Point, w: f64, h: f64) -> Self {
        Rect::new(center.x - w / 2.0, center.y - h / 2.0, w, h)
    }

    /// Left edge x-coordinate.
    pub fn left(&self) -> f64 {
        self.x
    }

    /// Right edge x-coordinate.
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    /// Top edge y-coordinate.
    pub fn top(&self) -> f64 {
        self.y
    }

    /// Bottom edge y-coordinate.
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Center point.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Top-left corner.
    pub fn top_left(&self) -> Point {
        Point::new(self.left(), self.top())
    }

    /// Top-right corner.
    pub fn top_right(&self) -> Point {
        Point::new(self.right(), self.top())
    }

    /// Bottom-left corner.
    pub fn bottom_left(&self) -> Point {
        Point::new(self.left(), self.bottom())
    }

    /// Bottom-right corner.
    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    /// Returns `true` if the point is inside the rectangle.
    ///
    /// The left and top edges are inside, the right and bottom edges are not,
    /// so adjacent rectangles never both claim a point.
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
    }

    /// The four edges as point pairs: left, top, bottom, right.
    pub fn edges(&self) -> [(Point, Point); 4] {
        [
            (self.top_left(), self.bottom_left()),
            (self.top_left(), self.top_right()),
            (self.bottom_left(), self.bottom_right()),
            (self.top_right(), self.bottom_right()),
        ]
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rect(x: {:.1}, y: {:.1}, w: {:.1}, h: {:.1})", self.x, self.y, self.w, self.h)
    }
}

/// Anything exposing a bounding rectangle usable in hit tests.
///
/// Implemented by whatever entity type the application defines; consumed by
/// [`Ray::cast`](crate::Ray::cast) and the `collides_rect` tests.
pub trait HasBounds {
    /// The axis-aligned bounding rectangle in pixel space.
    fn bounds(&self) -> Rect;
}

impl HasBounds for Rect {
    fn bounds(&self) -> Rect {
        *self
    }
}

impl<T: HasBounds + ?Sized> HasBounds for &T {
    fn bounds(&self) -> Rect {
        (**self).bounds()
    }
}
