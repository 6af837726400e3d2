//! Scene configuration.
//!
//! Everything the driver needs besides the mesh itself: canvas size, colors,
//! render mode and output orientation. Passed by value into [`crate::Engine`].

use std::fmt;

use crate::colors::Color;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 800;

/// Mesh rendered when no path is given on the command line.
pub const DEFAULT_MESH_PATH: &str = "obj/diamond.obj";
pub const DEFAULT_OUTPUT_PATH: &str = "output.tga";

/// What to rasterize for each face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Face edges drawn as lines.
    #[default]
    Wireframe,
    /// Faces filled with a solid color.
    Filled,
    /// Faces filled, then their edges drawn on top.
    FilledWireframe,
}

impl RenderMode {
    pub fn draws_fill(self) -> bool {
        matches!(self, RenderMode::Filled | RenderMode::FilledWireframe)
    }

    pub fn draws_wireframe(self) -> bool {
        matches!(self, RenderMode::Wireframe | RenderMode::FilledWireframe)
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderMode::Wireframe => write!(f, "Wireframe"),
            RenderMode::Filled => write!(f, "Filled"),
            RenderMode::FilledWireframe => write!(f, "FilledWireframe"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneConfig {
    pub width: u32,
    pub height: u32,
    pub background: Color,
    pub wireframe_color: Color,
    pub fill_color: Color,
    pub mode: RenderMode,
    /// Flip rows before saving so that y = 0 is the bottom of the image.
    pub flip_vertically: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            background: Color::BLACK,
            wireframe_color: Color::WHITE,
            fill_color: Color::RED,
            mode: RenderMode::default(),
            flip_vertically: true,
        }
    }
}

impl SceneConfig {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn with_wireframe_color(mut self, color: Color) -> Self {
        self.wireframe_color = color;
        self
    }

    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    pub fn with_flip_vertically(mut self, flip: bool) -> Self {
        self.flip_vertically = flip;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_scene() {
        let config = SceneConfig::default();
        assert_eq!((config.width, config.height), (800, 800));
        assert_eq!(config.wireframe_color, Color::WHITE);
        assert_eq!(config.fill_color, Color::RED);
        assert_eq!(config.mode, RenderMode::Wireframe);
        assert!(config.flip_vertically);
    }

    #[test]
    fn builder_overrides() {
        let config = SceneConfig::default()
            .with_size(64, 32)
            .with_mode(RenderMode::Filled)
            .with_fill_color(Color::GREEN)
            .with_flip_vertically(false);
        assert_eq!((config.width, config.height), (64, 32));
        assert_eq!(config.mode, RenderMode::Filled);
        assert_eq!(config.fill_color, Color::GREEN);
        assert!(!config.flip_vertically);
    }

    #[test]
    fn mode_flags() {
        assert!(RenderMode::Wireframe.draws_wireframe());
        assert!(!RenderMode::Wireframe.draws_fill());
        assert!(RenderMode::Filled.draws_fill());
        assert!(!RenderMode::Filled.draws_wireframe());
        assert!(RenderMode::FilledWireframe.draws_fill());
        assert!(RenderMode::FilledWireframe.draws_wireframe());
        assert_eq!(RenderMode::FilledWireframe.to_string(), "FilledWireframe");
    }
}
