//! Scene driver.
//!
//! The [`Engine`] owns the framebuffer and a [`SceneConfig`]. Each call to
//! [`Engine::render`] projects a borrowed [`Mesh`] into screen space and
//! hands every face to the line or triangle rasterizer.

use std::path::Path;

use log::{debug, warn};
use thiserror::Error;

use crate::config::SceneConfig;
use crate::mesh::{LoadError, Mesh};
use crate::projection::Viewport;
use crate::render::{draw_line, fill_triangle, FrameBuffer, FrameBufferError, Triangle};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Output(#[from] FrameBufferError),
}

/// Counters from a single [`Engine::render`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub faces: usize,
    pub lines: usize,
    pub triangles: usize,
    /// Pixel writes that fell outside the framebuffer.
    pub rejected_writes: u64,
}

pub struct Engine {
    config: SceneConfig,
    viewport: Viewport,
    framebuffer: FrameBuffer,
}

impl Engine {
    pub fn new(config: SceneConfig) -> Self {
        Self {
            viewport: Viewport::new(config.width, config.height),
            framebuffer: FrameBuffer::with_background(
                config.width,
                config.height,
                config.background,
            ),
            config,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.framebuffer
    }

    /// Clear the canvas and rasterize every face of `mesh`.
    pub fn render(&mut self, mesh: &Mesh) -> RenderStats {
        let config = self.config;
        self.framebuffer.clear(config.background);

        let mut stats = RenderStats::default();
        for face in mesh.faces() {
            // Indices are validated when the mesh is built.
            let Some(vertices) = mesh.face_vertices(face) else {
                continue;
            };
            let points = self.viewport.project_face(vertices);
            stats.faces += 1;

            if config.mode.draws_fill() {
                fill_triangle(
                    &mut self.framebuffer,
                    &Triangle::new(points, config.fill_color),
                );
                stats.triangles += 1;
            }

            if config.mode.draws_wireframe() {
                for j in 0..3 {
                    draw_line(
                        &mut self.framebuffer,
                        points[j],
                        points[(j + 1) % 3],
                        config.wireframe_color,
                    );
                }
                stats.lines += 3;
            }
        }

        stats.rejected_writes = self.framebuffer.rejected_writes();
        debug!("{} render of {} faces: {:?}", config.mode, mesh.face_count(), stats);
        if stats.rejected_writes > 0 {
            warn!(
                "{} pixel writes fell outside the {}x{} canvas",
                stats.rejected_writes, config.width, config.height
            );
        }
        stats
    }

    /// Write the current frame to `path`.
    ///
    /// When the config asks for it, rows are flipped first so the origin ends
    /// up in the bottom-left corner of the image. The flip is applied to the
    /// framebuffer itself.
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<(), EngineError> {
        if self.config.flip_vertically {
            self.framebuffer.flip_vertically();
        }
        self.framebuffer.write_file(path)?;
        Ok(())
    }
}
