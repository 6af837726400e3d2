//! Integer rasterization of lines and triangles.
//!
//! Both rasterizers are free functions that write through a [`PixelTarget`]
//! and keep no state between calls:
//! - [`draw_line`]: Bresenham segment walker with axis transposition
//! - [`fill_triangle`]: two-phase scanline fill driven by edge walkers
//!
//! Both are built on the same [`ErrorStepper`], so an edge filled as part of
//! a triangle and the same edge drawn as a wireframe line round identically
//! wherever the edge is steep.

mod line;
mod scanline;
mod stepper;

pub use line::{draw_line, draw_segment, draw_triangle_outline};
pub use scanline::fill_triangle;
pub use stepper::ErrorStepper;

use crate::colors::Color;
use crate::math::point::Point2;

/// Destination for rasterized pixels.
///
/// The rasterizers only ever write. Implementors decide what to do with
/// coordinates outside their extent; the rasterizers emit them as computed.
pub trait PixelTarget {
    /// Overwrite the pixel at `(x, y)` with `color`.
    fn set_pixel(&mut self, x: i32, y: i32, color: Color);
}

impl<T: PixelTarget + ?Sized> PixelTarget for &mut T {
    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        (**self).set_pixel(x, y, color);
    }
}

/// A line segment between two pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
    pub color: Color,
}

impl Segment {
    pub fn new(start: Point2, end: Point2, color: Color) -> Self {
        Self { start, end, color }
    }
}

/// A triangle in screen space. Vertex order does not affect coverage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Triangle {
    pub points: [Point2; 3],
    pub color: Color,
}

impl Triangle {
    pub fn new(points: [Point2; 3], color: Color) -> Self {
        Self { points, color }
    }
}
