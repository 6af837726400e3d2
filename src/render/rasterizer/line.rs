//! Bresenham line rasterization.
//!
//! Steep segments are transposed so the walk always runs along the axis with
//! the larger extent, which is what keeps lines with slope magnitude above 1
//! free of gaps. The endpoints are then ordered along that axis so that
//! `(a, b)` and `(b, a)` produce the same pixels.

use std::mem;

use super::stepper::ErrorStepper;
use super::{PixelTarget, Segment, Triangle};
use crate::colors::Color;
use crate::math::point::Point2;

/// Draw the segment from `a` to `b`, both endpoints inclusive.
///
/// Writes exactly `max(|dx|, |dy|) + 1` pixels, each once. No bounds
/// checking is done here.
pub fn draw_line<T: PixelTarget + ?Sized>(target: &mut T, a: Point2, b: Point2, color: Color) {
    let steep = (a.x - b.x).abs() < (a.y - b.y).abs();
    let (mut start, mut end) = if steep {
        (a.transposed(), b.transposed())
    } else {
        (a, b)
    };

    if start.x > end.x {
        mem::swap(&mut start, &mut end);
    }

    let mut minor = ErrorStepper::new(start.y, end.y - start.y, end.x - start.x);

    for major in start.x..=end.x {
        if steep {
            target.set_pixel(minor.minor(), major, color);
        } else {
            target.set_pixel(major, minor.minor(), color);
        }
        minor.step();
    }
}

pub fn draw_segment<T: PixelTarget + ?Sized>(target: &mut T, segment: &Segment) {
    draw_line(target, segment.start, segment.end, segment.color);
}

/// Draw the three edges of a triangle as lines in the triangle's color.
pub fn draw_triangle_outline<T: PixelTarget + ?Sized>(target: &mut T, triangle: &Triangle) {
    let [p0, p1, p2] = triangle.points;
    draw_line(target, p0, p1, triangle.color);
    draw_line(target, p1, p2, triangle.color);
    draw_line(target, p2, p0, triangle.color);
}
