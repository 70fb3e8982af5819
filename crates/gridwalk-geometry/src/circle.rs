//! Circles with point, circle, list and map collision queries.
//!
//! Circle-circle overlap is strict: touching circles do not collide.

use alloc::vec::Vec;
use core::f64::consts::PI;
use core::fmt;
use libm::{fabs, sqrt};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::math::distance;
use crate::point::Point;
use crate::rect::{HasBounds, Rect};
use crate::render::{Color, RenderSink};

/// A circle with display metadata, mirroring the API of [`Rect`].
///
/// The radius may be set negative; call [`normalize`](Circle::normalize) when a
/// non-negative radius is required. Nothing else corrects it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Center in pixel space.
    pub center: Point,
    /// Radius in pixels.
    pub radius: f64,
    /// Fill or outline color.
    pub color: Color,
    /// Outline width in pixels, `0.0` draws a filled disc.
    pub line_width: f32,
}

impl Circle {
    /// Construct a filled white circle.
    pub fn new(center: Point, radius: f64) -> Self {
        Circle { center, radius, color: Color::WHITE, line_width: 0.0 }
    }

    /// Returns the circle with the given color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Returns the circle with the given outline width.
    pub fn with_line_width(mut self, line_width: f32) -> Self {
        self.line_width = line_width;
        self
    }

    /// Build the circle inscribed in a square rectangle.
    ///
    /// # Errors
    ///
    /// Returns `Err(GeometryError::MismatchedDimensions)` if the rectangle is not square.
    pub fn from_rect(rect: &Rect) -> Result<Self, GeometryError> {
        if rect.w != rect.h {
            return Err(GeometryError::MismatchedDimensions(
                "rect width and height must be equal",
            ));
        }
        Ok(Circle::new(rect.center(), rect.w / 2.0))
    }

    /// The bounding rectangle.
    pub fn to_rect(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.radius * 2.0,
            self.radius * 2.0,
        )
    }

    /// Center x-coordinate.
    pub fn x(&self) -> f64 {
        self.center.x
    }

    /// Center y-coordinate.
    pub fn y(&self) -> f64 {
        self.center.y
    }

    /// Move the center.
    pub fn set_center(&mut self, pos: Point) {
        self.center = pos;
    }

    /// Shift the center.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.center += Point::new(dx, dy);
    }

    /// Move this circle onto the center of another one.
    pub fn clamp(&mut self, other: &Circle) {
        self.center = other.center;
    }

    /// Make the radius non-negative.
    pub fn normalize(&mut self) {
        self.radius = fabs(self.radius);
    }

    /// `2 * radius`.
    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }

    /// Set the radius from a diameter.
    pub fn set_diameter(&mut self, diameter: f64) {
        self.radius = diameter / 2.0;
    }

    /// `2 * PI * radius`.
    pub fn circumference(&self) -> f64 {
        self.radius * 2.0 * PI
    }

    /// Set the radius from a circumference.
    pub fn set_circumference(&mut self, circumference: f64) {
        self.radius = circumference / (2.0 * PI);
    }

    /// `PI * radius^2`.
    pub fn area(&self) -> f64 {
        self.radius * self.radius * PI
    }

    /// Set the radius from an area.
    pub fn set_area(&mut self, area: f64) {
        self.radius = sqrt(area / PI);
    }

    /// Returns `true` if `other` lies entirely inside this circle.
    pub fn contains(&self, other: &Circle) -> bool {
        distance(self.center, other.center) + other.radius <= self.radius
    }

    /// Returns `true` if the point is inside or on the circle.
    pub fn collides_point(&self, p: Point) -> bool {
        distance(self.center, p) <= self.radius
    }

    /// Returns `true` if the circles overlap. Circles that only touch do not.
    pub fn collides_circle(&self, other: &Circle) -> bool {
        distance(self.center, other.center) < self.radius + other.radius
    }

    /// First circle in `circles` that overlaps this one, with its index.
    pub fn collide_list<'a>(&self, circles: &'a [Circle]) -> Option<(usize, &'a Circle)> {
        circles.iter().enumerate().find(|(_, c)| self.collides_circle(c))
    }

    /// Every circle in `circles` that overlaps this one, with its index, in order.
    pub fn collide_list_all<'a>(&self, circles: &'a [Circle]) -> Vec<(usize, &'a Circle)> {
        circles
            .iter()
            .enumerate()
            .filter(|(_, c)| self.collides_circle(c))
            .collect()
    }

    /// First keyed circle that overlaps this one.
    ///
    /// Accepts any iterable of `(key, &Circle)`, such as `HashMap::iter()`.
    /// "First" follows the iteration order of the collection.
    pub fn collide_dict<'a, K, I>(&self, entries: I) -> Option<(K, &'a Circle)>
    where
        I: IntoIterator<Item = (K, &'a Circle)>,
    {
        entries.into_iter().find(|(_, c)| self.collides_circle(c))
    }

    /// Every keyed circle that overlaps this one, in iteration order.
    pub fn collide_dict_all<'a, K, I>(&self, entries: I) -> Vec<(K, &'a Circle)>
    where
        I: IntoIterator<Item = (K, &'a Circle)>,
    {
        entries
            .into_iter()
            .filter(|(_, c)| self.collides_circle(c))
            .collect()
    }

    /// Circle filling the gap (or overlap) between this circle and `other`.
    ///
    /// Its radius is half of `|d - (r1 + r2)|`, and its center lies on the
    /// line from this center toward `other`, `r1 - new_radius` away.
    ///
    /// # Errors
    ///
    /// Returns `Err(GeometryError::DegenerateGeometry)` if both circles share a
    /// center, since there is no direction to place the result along.
    pub fn clip(&self, other: &Circle) -> Result<Circle, GeometryError> {
        let length = distance(self.center, other.center);
        let new_radius = fabs(length - (self.radius + other.radius)) / 2.0;
        let offset = (other.center - self.center)
            .scale_to_length(self.radius - new_radius)
            .map_err(|_| GeometryError::DegenerateGeometry("cannot clip concentric circles"))?;
        Ok(Circle::new(self.center + offset, new_radius))
    }

    /// Draw the circle.
    pub fn draw<S: RenderSink + ?Sized>(&self, sink: &mut S) {
        sink.draw_circle(self.center, self.radius, self.line_width, self.color);
    }
}

impl HasBounds for Circle {
    fn bounds(&self) -> Rect {
        self.to_rect()
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle(center: {}, r: {:.2})", self.center, self.radius)
    }
}
