//! Rasterization core and the framebuffer it draws into.

pub(crate) mod framebuffer;
pub(crate) mod rasterizer;

pub use framebuffer::{FrameBuffer, FrameBufferError};
pub use rasterizer::{
    draw_line, draw_segment, draw_triangle_outline, fill_triangle, ErrorStepper, PixelTarget,
    Segment, Triangle,
};
