//! Segments and infinite lines.
//!
//! Both share one solver. Two primitives with equal slopes (including two
//! vertical ones) are parallel and never intersect, even when they overlap.
//! Otherwise the determinant method gives the crossing point of the infinite
//! extensions; bounded primitives then require that point to lie within
//! their extent on both axes.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::math::{cross, distance, in_range, slope};
use crate::point::Point;
use crate::rect::Rect;
use crate::render::{Color, RenderSink};

/// Default stroke width for segments and lines, in pixels.
pub const DEFAULT_WIDTH: f32 = 2.0;

/// Shared behavior of anything defined by two points.
///
/// Implemented by [`Segment`], [`Line`] and raw `(Point, Point)` pairs, so
/// every intersection query accepts any of the three on either side.
pub trait LineLike {
    /// The two defining points.
    fn points(&self) -> (Point, Point);

    /// `true` if the primitive ends at its points (a segment), `false` if it
    /// extends forever in both directions (a line).
    fn is_bounded(&self) -> bool;

    /// Slope of the primitive, `None` when vertical.
    fn slope(&self) -> Option<f64> {
        let (a, b) = self.points();
        slope(a, b)
    }

    /// Two primitives are parallel when their slopes are equal, including
    /// when both are vertical.
    fn is_parallel<L: LineLike + ?Sized>(&self, other: &L) -> bool {
        self.slope() == other.slope()
    }

    /// Intersection of the infinite extensions of both primitives.
    ///
    /// Returns `None` when they are parallel or when either is degenerate.
    fn absolute_intersection_point<L: LineLike + ?Sized>(&self, other: &L) -> Option<Point> {
        if self.is_parallel(other) {
            return None;
        }
        solve(self.points(), other.points())
    }

    /// Intersection point honoring the extent of bounded primitives.
    fn intersection_point<L: LineLike + ?Sized>(&self, other: &L) -> Option<Point> {
        let p = self.absolute_intersection_point(other)?;
        if within_extent(self, p) && within_extent(other, p) {
            Some(p)
        } else {
            None
        }
    }

    /// Returns `true` if [`intersection_point`](LineLike::intersection_point) exists.
    fn intersects<L: LineLike + ?Sized>(&self, other: &L) -> bool {
        self.intersection_point(other).is_some()
    }

    /// Returns `true` if the primitive crosses any of the rectangle's edges.
    fn collides_rect(&self, rect: &Rect) -> bool {
        rect.edges().iter().any(|edge| self.intersects(edge))
    }
}

impl LineLike for (Point, Point) {
    fn points(&self) -> (Point, Point) {
        *self
    }

    fn is_bounded(&self) -> bool {
        true
    }
}

/// Determinant solve for two non-parallel point pairs.
fn solve((a1, a2): (Point, Point), (b1, b2): (Point, Point)) -> Option<Point> {
    let xdiff = Point::new(a1.x - a2.x, b1.x - b2.x);
    let ydiff = Point::new(a1.y - a2.y, b1.y - b2.y);

    let div = cross(xdiff, ydiff);
    // A zero-length primitive has no direction; equal slopes are caught earlier.
    if div == 0.0 {
        return None;
    }

    let d = Point::new(cross(a1, a2), cross(b1, b2));
    let mut p = Point::new(cross(d, xdiff) / div, cross(d, ydiff) / div);

    // An axis-aligned primitive pins one coordinate exactly; rounding in the
    // solve must not push the point off its zero-width extent.
    if a1.x == a2.x {
        p.x = a1.x;
    } else if b1.x == b2.x {
        p.x = b1.x;
    }
    if a1.y == a2.y {
        p.y = a1.y;
    } else if b1.y == b2.y {
        p.y = b1.y;
    }
    Some(p)
}

fn within_extent<L: LineLike + ?Sized>(l: &L, p: Point) -> bool {
    if !l.is_bounded() {
        return true;
    }
    let (a, b) = l.points();
    in_range(a.x, b.x, p.x) && in_range(a.y, b.y, p.y)
}

/// A finite segment between two points, with display metadata.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// First endpoint.
    pub start: Point,
    /// Second endpoint.
    pub end: Point,
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels. Visual only.
    pub width: f32,
}

impl Segment {
    /// Construct a white segment of the default width.
    pub fn new(start: Point, end: Point) -> Self {
        Segment { start, end, color: Color::WHITE, width: DEFAULT_WIDTH }
    }

    /// Returns the segment with the given stroke color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Returns the segment with the given stroke width.
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Move the first endpoint.
    pub fn set_start(&mut self, pos: Point) {
        self.start = pos;
    }

    /// Move the second endpoint.
    pub fn set_end(&mut self, pos: Point) {
        self.end = pos;
    }

    /// Shift both endpoints.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        let offset = Point::new(dx, dy);
        self.start += offset;
        self.end += offset;
    }

    /// Truncate both endpoints toward zero, in place.
    pub fn truncate(&mut self) {
        self.start = self.start.truncate();
        self.end = self.end.truncate();
    }

    /// Distance between the endpoints.
    pub fn length(&self) -> f64 {
        distance(self.start, self.end)
    }

    /// The infinite line through both endpoints, with the same style.
    pub fn to_line(&self) -> Line {
        Line { point1: self.start, point2: self.end, color: self.color, width: self.width }
    }

    /// Draw the segment.
    pub fn draw<S: RenderSink + ?Sized>(&self, sink: &mut S) {
        sink.draw_line(self.start, self.end, self.width, self.color);
    }
}

impl LineLike for Segment {
    fn points(&self) -> (Point, Point) {
        (self.start, self.end)
    }

    fn is_bounded(&self) -> bool {
        true
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Segment[{} -> {}]", self.start, self.end)
    }
}

/// An infinite line through two points, with display metadata.
///
/// Two non-parallel lines always intersect.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// First known point.
    pub point1: Point,
    /// Second known point.
    pub point2: Point,
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels. Visual only.
    pub width: f32,
}

impl Line {
    /// Construct a white line of the default width.
    pub fn new(point1: Point, point2: Point) -> Self {
        Line { point1, point2, color: Color::WHITE, width: DEFAULT_WIDTH }
    }

    /// Returns the line with the given stroke color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Returns the line with the given stroke width.
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Move the first known point.
    pub fn set_point1(&mut self, pos: Point) {
        self.point1 = pos;
    }

    /// Move the second known point.
    pub fn set_point2(&mut self, pos: Point) {
        self.point2 = pos;
    }

    /// Shift both known points.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        let offset = Point::new(dx, dy);
        self.point1 += offset;
        self.point2 += offset;
    }

    /// Truncate both known points toward zero, in place.
    pub fn truncate(&mut self) {
        self.point1 = self.point1.truncate();
        self.point2 = self.point2.truncate();
    }

    /// Distance between the two known points.
    pub fn length(&self) -> f64 {
        distance(self.point1, self.point2)
    }

    /// The segment between the two known points, with the same style.
    pub fn to_segment(&self) -> Segment {
        Segment { start: self.point1, end: self.point2, color: self.color, width: self.width }
    }

    /// Draw the line. Only the part between the known points is visible.
    pub fn draw<S: RenderSink + ?Sized>(&self, sink: &mut S) {
        sink.draw_line(self.point1, self.point2, self.width, self.color);
    }
}

impl LineLike for Line {
    fn points(&self) -> (Point, Point) {
        (self.point1, self.point2)
    }

    fn is_bounded(&self) -> bool {
        false
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line[{} .. {}]", self.point1, self.point2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::RecordingSink;
    const EPSILON: f64 = 1e-9;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Line {
        Line::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[test]
    fn test_crossing_diagonals() {
        let a = seg(0.0, 0.0, 10.0, 10.0);
        let b = seg(0.0, 10.0, 10.0, 0.0);
        assert!(a.intersects(&b));
        assert_eq!(a.intersection_point(&b), Some(Point::new(5.0, 5.0)));
    }

    #[test]
    fn test_horizontal_parallels_have_no_intersection() {
        let a = seg(0.0, 0.0, 10.0, 0.0);
        let b = seg(0.0, 1.0, 10.0, 1.0);
        assert!(a.is_parallel(&b));
        assert!(!a.intersects(&b));
        assert_eq!(a.intersection_point(&b), None);
        assert_eq!(a.absolute_intersection_point(&b), None);
    }

    #[test]
    fn test_vertical_pair_is_parallel() {
        let a = seg(2.0, 0.0, 2.0, 10.0);
        let b = seg(5.0, -3.0, 5.0, 3.0);
        assert_eq!(a.slope(), None);
        assert!(a.is_parallel(&b));
        assert_eq!(a.intersection_point(&b), None);
    }

    #[test]
    fn test_identical_segments_are_not_intersecting() {
        let a = seg(0.0, 0.0, 4.0, 4.0);
        assert!(a.is_parallel(&a));
        assert!(!a.intersects(&a));
        assert!(!a.to_line().intersects(&a.to_line()));
    }

    #[test]
    fn test_intersection_is_symmetric() {
        let pairs = [
            (seg(0.0, 0.0, 10.0, 10.0), seg(0.0, 10.0, 10.0, 0.0)),
            (seg(-3.0, 1.5, 7.25, -2.0), seg(0.1, -4.0, 1.3, 9.0)),
            (seg(1.0, 1.0, 1.0, 8.0), seg(-2.0, 3.0, 6.0, 4.0)),
            (seg(0.0, 0.0, 1.0, 1.0), seg(5.0, 0.0, 6.0, 3.0)), // lines cross outside
        ];
        for (a, b) in pairs {
            assert_eq!(a.intersects(&b), b.intersects(&a));
            assert_eq!(a.intersection_point(&b), b.intersection_point(&a));
            assert_eq!(a.absolute_intersection_point(&b), b.absolute_intersection_point(&a));
        }
    }

    #[test]
    fn test_segments_miss_when_extensions_cross_outside() {
        let a = seg(0.0, 0.0, 1.0, 1.0);
        let b = seg(0.0, 10.0, 10.0, 0.0);
        assert!(!a.intersects(&b));
        let p = a.absolute_intersection_point(&b).unwrap();
        assert!((p.x - 5.0).abs() < EPSILON);
        assert!((p.y - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_lines_always_intersect_unless_parallel() {
        let a = line(0.0, 0.0, 1.0, 1.0);
        let b = line(0.0, 10.0, 1.0, 9.0);
        assert!(a.intersects(&b));
        let p = a.intersection_point(&b).unwrap();
        assert!((p.x - 5.0).abs() < EPSILON);
        assert!((p.y - 5.0).abs() < EPSILON);

        let c = line(0.0, 1.0, 1.0, 2.0);
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_segment_against_line_checks_only_the_segment() {
        let s = seg(4.0, -1.0, 4.0, 1.0);
        let l = line(0.0, 0.0, 1.0, 0.0); // the x-axis, known points far from s
        assert_eq!(s.intersection_point(&l), Some(Point::new(4.0, 0.0)));
        assert_eq!(l.intersection_point(&s), Some(Point::new(4.0, 0.0)));

        let short = seg(4.0, 1.0, 4.0, 2.0);
        assert!(!short.intersects(&l));
        assert!(!l.intersects(&short));
    }

    #[test]
    fn test_raw_point_pair_is_treated_as_segment() {
        let s = seg(0.0, 0.0, 10.0, 10.0);
        let crossing = (Point::new(0.0, 10.0), Point::new(10.0, 0.0));
        let short = (Point::new(0.0, 10.0), Point::new(1.0, 9.0));
        assert_eq!(s.intersection_point(&crossing), Some(Point::new(5.0, 5.0)));
        assert!(!s.intersects(&short));
        assert!(s.to_line().intersects(&crossing));
        assert!(!s.to_line().intersects(&short));
    }

    #[test]
    fn test_degenerate_segment_reports_no_point() {
        let dot = seg(3.0, 3.0, 3.0, 3.0);
        let other = seg(0.0, 0.0, 6.0, 6.0);
        assert_eq!(dot.intersection_point(&other), None);
        // Slopes differ (None vs Some), yet a point has no direction to solve with.
        assert!(!dot.is_parallel(&other));
        assert_eq!(dot.absolute_intersection_point(&other), None);
        assert_eq!(other.to_line().intersection_point(&dot), None);
    }

    #[test]
    fn test_collides_rect() {
        let r = Rect::new(50.0, -5.0, 10.0, 10.0);
        assert!(seg(0.0, 0.0, 100.0, 0.0).collides_rect(&r));
        assert!(!seg(0.0, 0.0, 40.0, 0.0).collides_rect(&r));
        assert!(!seg(0.0, 20.0, 100.0, 20.0).collides_rect(&r));
        // A line collides as soon as one edge crosses it.
        assert!(line(0.0, 0.0, 1.0, 0.0).collides_rect(&r));
    }

    #[test]
    fn test_axis_aligned_crossing_lands_on_both_extents() {
        let horizontal = seg(0.2507, 0.6903, 100.2507, 0.6903);
        let vertical = seg(50.0, 0.0, 50.0, 20.0);
        assert_eq!(horizontal.intersection_point(&vertical), Some(Point::new(50.0, 0.6903)));
        assert_eq!(vertical.intersection_point(&horizontal), Some(Point::new(50.0, 0.6903)));

        let down = seg(53.1173, -0.4409, 53.1173, 99.5591);
        let top = (Point::new(50.0, 0.0), Point::new(60.0, 0.0));
        assert_eq!(down.intersection_point(&top), Some(Point::new(53.1173, 0.0)));
    }

    #[test]
    fn test_round_trip_through_line() {
        let s = seg(1.0, 2.0, 3.0, 4.0).with_color(Color::RED).with_width(5.0);
        assert_eq!(s.to_line().to_segment(), s);
        let l = line(-1.0, 0.5, 2.0, 2.0).with_color(Color::BLUE);
        assert_eq!(l.to_segment().to_line(), l);
    }

    #[test]
    fn test_mutators() {
        let mut s = seg(0.5, 0.5, 2.9, -2.9);
        s.translate(1.0, 1.0);
        assert_eq!(s.start, Point::new(1.5, 1.5));
        s.truncate();
        assert_eq!(s.points(), (Point::new(1.0, 1.0), Point::new(3.0, -1.0)));
        s.set_end(Point::new(4.0, 1.0));
        assert_eq!(s.slope(), Some(0.0));
        assert!((s.length() - 3.0).abs() < EPSILON);
    }

    #[test]
    fn test_draw_uses_style() {
        let mut sink = RecordingSink::default();
        seg(0.0, 0.0, 1.0, 1.0).with_color(Color::GREEN).with_width(4.0).draw(&mut sink);
        assert_eq!(sink.lines, [(Point::new(0.0, 0.0), Point::new(1.0, 1.0), 4.0, Color::GREEN)]);
    }
}
