use glam::{Mat4, Vec2};

use crate::color::Color;

/// Viewport configuration for a [`crate::Renderer`].
///
/// `width` and `height` are the framebuffer size in physical pixels. Drawing
/// happens in logical units, `scale` physical pixels each.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RendererConfig {
    pub width: u32,
    pub height: u32,
    pub scale: f32,
    pub clear_color: Color,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            scale: 1.0,
            clear_color: Color::BLACK,
        }
    }
}

impl RendererConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    /// Viewport size in logical units.
    pub fn logical_size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32) / self.scale
    }

    /// Orthographic projection with the origin at the top-left corner and y
    /// pointing down.
    pub fn projection(&self) -> Mat4 {
        let size = self.logical_size();
        Mat4::orthographic_rh(0.0, size.x, size.y, 0.0, -1.0, 1.0)
    }
}
