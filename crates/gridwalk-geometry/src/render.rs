//! The drawing boundary.
//!
//! Primitives never own a surface. Every `draw` call takes the sink explicitly;
//! there is no process-wide default target.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::point::Point;

/// An RGBA color with 8-bit channels.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, 255 is opaque.
    pub a: u8,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Opaque red.
    pub const RED: Color = Color::rgb(255, 0, 0);
    /// Opaque green.
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    /// Opaque blue.
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    /// Opaque orange.
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    /// Opaque gray.
    pub const GRAY: Color = Color::rgb(128, 128, 128);

    /// Construct an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    /// Construct a color with an explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

/// A drawable surface accepting line, circle and polyline commands.
///
/// Widths are in pixels. A circle `line_width` of `0.0` means filled.
pub trait RenderSink {
    /// Draw a straight line between two points.
    fn draw_line(&mut self, start: Point, end: Point, width: f32, color: Color);

    /// Draw a circle outline, or a filled disc when `line_width` is `0.0`.
    fn draw_circle(&mut self, center: Point, radius: f64, line_width: f32, color: Color);

    /// Draw an open polyline through `points`.
    fn draw_polyline(&mut self, points: &[Point], width: f32, color: Color) {
        for pair in points.windows(2) {
            self.draw_line(pair[0], pair[1], width, color);
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use alloc::vec::Vec;

    /// A sink that records every command, for asserting on draw calls.
    #[derive(Debug, Default)]
    pub struct RecordingSink {
        pub lines: Vec<(Point, Point, f32, Color)>,
        pub circles: Vec<(Point, f64, f32, Color)>,
    }

    impl RenderSink for RecordingSink {
        fn draw_line(&mut self, start: Point, end: Point, width: f32, color: Color) {
            self.lines.push((start, end, width, color));
        }

        fn draw_circle(&mut self, center: Point, radius: f64, line_width: f32, color: Color) {
            self.circles.push((center, radius, line_width, color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingSink;
    use super::*;

    #[test]
    fn test_default_polyline_draws_consecutive_pairs() {
        let mut sink = RecordingSink::default();
        let points = [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(1.0, 1.0)];
        sink.draw_polyline(&points, 3.0, Color::RED);
        assert_eq!(sink.lines.len(), 2);
        assert_eq!(sink.lines[1].0, Point::new(1.0, 0.0));
        assert_eq!(sink.lines[1].1, Point::new(1.0, 1.0));
    }

    #[test]
    fn test_polyline_with_single_point_draws_nothing() {
        let mut sink = RecordingSink::default();
        sink.draw_polyline(&[Point::new(4.0, 4.0)], 1.0, Color::WHITE);
        assert!(sink.lines.is_empty());
    }
}
