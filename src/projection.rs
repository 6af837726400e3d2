//! Viewport projection from normalized model space to pixels.
//!
//! Meshes are expected to live in `[-1, 1]^3`. The projection drops `z` and
//! maps `x` and `y` onto the framebuffer extent, with `-1` at pixel 0 and
//! `+1` at the buffer width (or height). The result is truncated toward zero,
//! so `+1` lands one past the last pixel and is rejected by the framebuffer.

use crate::math::point::Point2;
use crate::math::vec3::Vec3;

/// Screen extent used to project vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Half-extent scale factors `(width / 2, height / 2)`.
    pub fn scale(&self) -> (f32, f32) {
        (self.width as f32 / 2.0, self.height as f32 / 2.0)
    }

    /// Project a model-space vertex to an integer pixel coordinate.
    #[inline]
    pub fn project(&self, v: Vec3) -> Point2 {
        let (sx, sy) = self.scale();
        Point2::new(((v.x + 1.0) * sx) as i32, ((v.y + 1.0) * sy) as i32)
    }

    /// Project the three vertices of a face.
    pub fn project_face(&self, vertices: [Vec3; 3]) -> [Point2; 3] {
        vertices.map(|v| self.project(v))
    }
}
