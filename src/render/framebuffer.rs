//! Owned color buffer with bounds-checked pixel access.
//!
//! Pixels are stored row-major as packed ARGB8888, row 0 first. Writes that
//! fall outside the buffer are rejected and counted rather than wrapped or
//! clamped, so rasterizers can emit whatever coordinates their geometry
//! produces.

use std::path::Path;

use log::info;
use thiserror::Error;

use super::rasterizer::PixelTarget;
use crate::colors::Color;

/// Failure to persist a [`FrameBuffer`].
#[derive(Debug, Error)]
pub enum FrameBufferError {
    #[error("failed to encode or write image")]
    Image(#[from] image::ImageError),
}

pub struct FrameBuffer {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
    rejected_writes: u64,
}

impl FrameBuffer {
    /// Create a buffer cleared to black.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_background(width, height, Color::BLACK)
    }

    pub fn with_background(width: u32, height: u32, background: Color) -> Self {
        let size = width as usize * height as usize;
        Self {
            color_buffer: vec![background.to_argb(); size],
            width,
            height,
            rejected_writes: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fill every pixel with `color` and reset the rejected write counter.
    pub fn clear(&mut self, color: Color) {
        self.color_buffer.fill(color.to_argb());
        self.rejected_writes = 0;
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Overwrite the pixel at (x, y).
    ///
    /// Returns `false` and leaves the buffer untouched when the coordinate is
    /// out of bounds.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: Color) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.color_buffer[idx] = color.to_argb();
                true
            }
            None => {
                self.rejected_writes += 1;
                false
            }
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y)
            .map(|idx| Color::from_argb(self.color_buffer[idx]))
    }

    /// Number of out-of-bounds writes since construction or the last clear.
    pub fn rejected_writes(&self) -> u64 {
        self.rejected_writes
    }

    /// Reverse the row order in place, so row 0 becomes the last row.
    pub fn flip_vertically(&mut self) {
        let row_len = self.width as usize;
        if row_len == 0 {
            return;
        }
        let rows = self.height as usize;
        for y in 0..rows / 2 {
            let (upper, lower) = self.color_buffer.split_at_mut((rows - 1 - y) * row_len);
            upper[y * row_len..(y + 1) * row_len].swap_with_slice(&mut lower[..row_len]);
        }
    }

    /// Packed ARGB8888 bytes in native endianness.
    pub fn as_bytes(&self) -> &[u8] {
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }

    /// Convert to an RGBA image, row 0 at the top.
    pub fn to_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            let argb = self.color_buffer[y as usize * self.width as usize + x as usize];
            image::Rgba(Color::from_argb(argb).to_rgba_bytes())
        })
    }

    /// Write the buffer to `path`. The format follows the file extension
    /// (`.tga`, `.png`, ...).
    pub fn write_file<P: AsRef<Path>>(&self, path: P) -> Result<(), FrameBufferError> {
        let path = path.as_ref();
        self.to_image().save(path)?;
        info!(
            "wrote {}x{} image to {}",
            self.width,
            self.height,
            path.display()
        );
        Ok(())
    }
}

impl PixelTarget for FrameBuffer {
    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.set(x, y, color);
    }
}
