//! A minimal integer software rasterizer.
//!
//! Lines are drawn with Bresenham stepping and triangles with a two-phase
//! scanline fill, both using integer arithmetic only. A small driver projects
//! an OBJ mesh onto a framebuffer and writes the result to an image file.
//!
//! # Quick Start
//!
//! ```no_run
//! use tinyrast::prelude::*;
//!
//! let mesh = Mesh::from_obj("obj/diamond.obj")?;
//! let mut engine = Engine::new(SceneConfig::default());
//! engine.render(&mesh);
//! engine.save("output.tga")?;
//! # Ok::<(), tinyrast::EngineError>(())
//! ```
//!
//! The rasterizers can also be used directly against any [`PixelTarget`]:
//!
//! ```
//! use tinyrast::prelude::*;
//!
//! let mut fb = FrameBuffer::new(16, 16);
//! draw_line(&mut fb, Point2::new(0, 0), Point2::new(15, 7), Color::WHITE);
//! fill_triangle(
//!     &mut fb,
//!     &Triangle::new([Point2::new(2, 2), Point2::new(12, 4), Point2::new(6, 13)], Color::RED),
//! );
//! assert_eq!(fb.get(0, 0), Some(Color::WHITE));
//! assert_eq!(fb.get(7, 7), Some(Color::RED));
//! ```

// Public API - exposed to library consumers
pub mod colors;
pub mod config;
pub mod engine;
pub mod math;
pub mod mesh;
pub mod projection;

// Internal modules - re-exported below
pub(crate) mod render;

// Re-export commonly needed types at crate root for convenience
pub use colors::Color;
pub use config::{RenderMode, SceneConfig};
pub use engine::{Engine, EngineError, RenderStats};
pub use mesh::{Face, LoadError, Mesh};
pub use projection::Viewport;
pub use render::{
    draw_line, draw_segment, draw_triangle_outline, fill_triangle, ErrorStepper, FrameBuffer,
    FrameBufferError, PixelTarget, Segment, Triangle,
};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use tinyrast::prelude::*;
/// ```
pub mod prelude {
    // Engine
    pub use crate::config::{RenderMode, SceneConfig};
    pub use crate::engine::{Engine, RenderStats};

    // Mesh
    pub use crate::mesh::{Face, Mesh};

    // Math
    pub use crate::math::point::Point2;
    pub use crate::math::vec3::Vec3;
    pub use crate::projection::Viewport;

    // Rendering
    pub use crate::colors::Color;
    pub use crate::render::{
        draw_line, draw_segment, draw_triangle_outline, fill_triangle, FrameBuffer, PixelTarget,
        Segment, Triangle,
    };
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::{draw_line, fill_triangle, ErrorStepper, FrameBuffer, Triangle};
}
