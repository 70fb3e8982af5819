//! Reusable rays for line-of-sight checks.

use alloc::vec::Vec;
use core::fmt;

use crate::line::{LineLike, Segment};
use crate::point::Point;
use crate::rect::HasBounds;
use crate::render::{Color, RenderSink};

/// Anything with a position and a facing direction that a [`Ray`] can follow.
pub trait Movable {
    /// Current position in pixel space.
    fn position(&self) -> Point;
    /// Current facing direction. Need not be normalized.
    fn direction(&self) -> Point;
}

/// A reusable ray, re-cast every tick against a set of hit-testable objects.
///
/// The ray keeps one [`Segment`] from `origin` to `origin + direction * length`
/// and updates it in place when any of the three inputs change. The fields are
/// private so the segment can never disagree with them.
#[derive(Debug, Clone, PartialEq)]
pub struct Ray {
    origin: Point,
    direction: Point,
    length: f64,
    segment: Segment,
}

impl Ray {
    /// Construct a white ray of the default width.
    ///
    /// # Arguments
    ///
    /// * `origin`: Start of the ray in pixel space.
    /// * `direction`: Direction vector, scaled by `length` as given (not normalized).
    /// * `length`: Scale applied to `direction` to find the end point.
    pub fn new(origin: Point, direction: Point, length: f64) -> Self {
        let segment = Segment::new(origin, origin + direction * length);
        Ray { origin, direction, length, segment }
    }

    /// Returns the ray with the given color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.segment.color = color;
        self
    }

    /// Returns the ray with the given stroke width.
    pub fn with_width(mut self, width: f32) -> Self {
        self.segment.width = width;
        self
    }

    /// Start of the ray.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Direction vector as set.
    pub fn direction(&self) -> Point {
        self.direction
    }

    /// Length scale.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Derived end point.
    pub fn end(&self) -> Point {
        self.segment.end
    }

    /// The segment used for hit tests and drawing.
    pub fn segment(&self) -> &Segment {
        &self.segment
    }

    fn recompute_end(&mut self) {
        self.segment.end = self.origin + self.direction * self.length;
    }

    /// Move the origin. The end moves with it.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
        self.segment.start = origin;
        self.recompute_end();
    }

    /// Change the direction. The origin stays put.
    pub fn set_direction(&mut self, direction: Point) {
        self.direction = direction;
        self.recompute_end();
    }

    /// Change the length. The origin stays put.
    pub fn set_length(&mut self, length: f64) {
        self.length = length;
        self.recompute_end();
    }

    /// Change the color. Visual only.
    pub fn set_color(&mut self, color: Color) {
        self.segment.color = color;
    }

    /// Change the stroke width. Visual only, the hit test ignores it.
    pub fn set_width(&mut self, width: f32) {
        self.segment.width = width;
    }

    /// Objects whose bounds the ray crosses, in input order.
    ///
    /// Evaluated from scratch on every call.
    pub fn cast<'a, T, I>(&self, candidates: I) -> Vec<&'a T>
    where
        T: HasBounds + ?Sized + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        candidates
            .into_iter()
            .filter(|c| self.segment.collides_rect(&c.bounds()))
            .collect()
    }

    /// Put the origin on the entity and, if `follow_direction`, aim along its facing.
    pub fn follow<M: Movable + ?Sized>(&mut self, entity: &M, follow_direction: bool) {
        self.set_origin(entity.position());
        if follow_direction {
            self.set_direction(entity.direction());
        }
    }

    /// Draw the ray without casting it.
    pub fn draw<S: RenderSink + ?Sized>(&self, sink: &mut S) {
        self.segment.draw(sink);
    }
}

impl fmt::Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ray(origin: {}, direction: {}, length: {:.2})", self.origin, self.direction, self.length)
    }
}
