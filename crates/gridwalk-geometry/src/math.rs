//! Scalar helpers shared by every primitive.

use crate::point::Point;
use libm::sqrt;

/// 2D cross product (determinant) `a.x * b.y - a.y * b.x`.
#[inline]
pub fn cross(a: Point, b: Point) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Returns `true` if `value` lies in `[min(a, b), max(a, b)]`.
///
/// The bounds may be given in either order.
#[inline]
pub fn in_range(a: f64, b: f64, value: f64) -> bool {
    value >= a.min(b) && value <= a.max(b)
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(p1: Point, p2: Point) -> f64 {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    sqrt(dx * dx + dy * dy)
}

/// Slope of the line through `a` and `b`.
///
/// Returns `None` for a vertical pair (equal x-coordinates). Callers must
/// treat `None` as its own case; it is not a slope of zero.
#[inline]
pub fn slope(a: Point, b: Point) -> Option<f64> {
    let dx = b.x - a.x;
    if dx == 0.0 {
        return None;
    }
    Some((b.y - a.y) / dx)
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_cross() {
        assert_eq!(cross(Point::new(1.0, 0.0), Point::new(0.0, 1.0)), 1.0);
        assert_eq!(cross(Point::new(0.0, 1.0), Point::new(1.0, 0.0)), -1.0);
        assert_eq!(cross(Point::new(2.0, 4.0), Point::new(1.0, 2.0)), 0.0); // colinear
    }

    #[test]
    fn test_in_range_is_order_independent() {
        assert!(in_range(0.0, 10.0, 5.0));
        assert!(in_range(10.0, 0.0, 5.0));
        assert!(in_range(0.0, 10.0, 0.0));
        assert!(in_range(0.0, 10.0, 10.0));
        assert!(!in_range(0.0, 10.0, 10.000001));
        assert!(!in_range(10.0, 0.0, -0.5));
    }

    #[test]
    fn test_distance() {
        assert!((distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)) - 5.0).abs() < EPSILON);
        assert_eq!(distance(Point::new(2.0, 2.0), Point::new(2.0, 2.0)), 0.0);
    }

    #[test]
    fn test_slope() {
        assert_eq!(slope(Point::new(0.0, 0.0), Point::new(10.0, 10.0)), Some(1.0));
        assert_eq!(slope(Point::new(0.0, 0.0), Point::new(10.0, 0.0)), Some(0.0));
        // Vertical has no slope, and is distinct from a flat line.
        assert_eq!(slope(Point::new(3.0, 0.0), Point::new(3.0, 10.0)), None);
        assert_ne!(slope(Point::new(3.0, 0.0), Point::new(3.0, 10.0)), Some(0.0));
    }
}
