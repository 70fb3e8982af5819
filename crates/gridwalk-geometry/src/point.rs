//! 2D vectors in pixel space.

use core::fmt;
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use libm::{sqrt, trunc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// A 2D point (or vector) in pixel space.
///
/// The y-axis points down, as on a screen.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// The origin, also used as the "no direction" vector.
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Construct a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Length of the vector from the origin to this point.
    pub fn length(&self) -> f64 {
        sqrt(self.x * self.x + self.y * self.y)
    }

    /// Distance to another point.
    pub fn distance_to(&self, other: Point) -> f64 {
        (other - *self).length()
    }

    /// Dot product.
    pub fn dot(&self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Returns the unit vector with the same direction.
    ///
    /// # Errors
    ///
    /// Returns `Err(GeometryError::DegenerateGeometry)` for the zero vector.
    pub fn normalize(&self) -> Result<Point, GeometryError> {
        self.scale_to_length(1.0)
    }

    /// Returns a vector with the same direction and the given length.
    ///
    /// # Errors
    ///
    /// Returns `Err(GeometryError::DegenerateGeometry)` for the zero vector.
    pub fn scale_to_length(&self, length: f64) -> Result<Point, GeometryError> {
        let current = self.length();
        if current == 0.0 {
            return Err(GeometryError::DegenerateGeometry(
                "cannot scale a zero-length vector",
            ));
        }
        Ok(*self * (length / current))
    }

    /// Returns a copy with both coordinates truncated toward zero.
    pub fn truncate(&self) -> Point {
        Point::new(trunc(self.x), trunc(self.y))
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Point;
    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_normalize() {
        let n = Point::new(3.0, 4.0).normalize().unwrap();
        assert!((n.x - 0.6).abs() < EPSILON);
        assert!((n.y - 0.8).abs() < EPSILON);
        assert!((n.length() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_normalize_zero_vector_fails() {
        assert!(matches!(
            Point::ZERO.normalize(),
            Err(GeometryError::DegenerateGeometry(_))
        ));
        assert!(Point::ZERO.scale_to_length(5.0).is_err());
    }

    #[test]
    fn test_scale_to_length() {
        let v = Point::new(0.0, -2.0).scale_to_length(5.0).unwrap();
        assert!((v.x - 0.0).abs() < EPSILON);
        assert!((v.y + 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_truncate_rounds_toward_zero() {
        assert_eq!(Point::new(2.7, -2.7).truncate(), Point::new(2.0, -2.0));
    }

    #[test]
    fn test_operators() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, 5.0);
        assert_eq!(a + b, Point::new(4.0, 7.0));
        assert_eq!(b - a, Point::new(2.0, 3.0));
        assert_eq!(a * 2.0, Point::new(2.0, 4.0));
        assert_eq!(b / 2.0, Point::new(1.5, 2.5));
        assert_eq!(-a, Point::new(-1.0, -2.0));
        assert_eq!(a.dot(b), 13.0);
        assert!((a.distance_to(b) - 13.0_f64.sqrt()).abs() < EPSILON);
    }
}
