//! Backend-agnostic texture handles.

use glam::Vec2;
use rendery_core::geometry::Size;

pub use wgpu::TextureFormat;

/// The kind of backend a texture handle belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    Wgpu,
    OpenGl,
    /// Backends that record or discard draws without a GPU.
    Headless,
}

/// Parameters for [`crate::DrawDispatcher::create_texture`].
#[derive(Debug, Clone, PartialEq)]
pub struct TextureDesc<'a> {
    pub label: Option<&'a str>,
    pub size: Size<u32>,
    pub format: TextureFormat,
}

impl<'a> TextureDesc<'a> {
    /// Single-channel coverage texture used for glyph atlases.
    pub fn glyph_atlas(label: Option<&'a str>, side: u32) -> Self {
        Self {
            label,
            size: Size::new(side, side),
            format: TextureFormat::R8Unorm,
        }
    }

    /// RGBA texture used for sprites.
    pub fn rgba(label: Option<&'a str>, width: u32, height: u32) -> Self {
        Self {
            label,
            size: Size::new(width, height),
            format: TextureFormat::Rgba8UnormSrgb,
        }
    }
}

/// Opaque reference to a texture owned by a dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextureHandle {
    pub id: u64,
    pub backend: BackendKind,
    pub size: Size<u32>,
    pub format: TextureFormat,
}

impl TextureHandle {
    /// Texture size in pixels as a vector.
    pub fn size_f32(&self) -> Vec2 {
        Vec2::new(self.size.width as f32, self.size.height as f32)
    }
}

/// Normalized source rectangle inside a texture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl UvRect {
    /// The whole texture.
    pub const FULL: UvRect = UvRect {
        min: Vec2::ZERO,
        max: Vec2::ONE,
    };

    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Source rectangle given in pixels of `texture`.
    pub fn from_pixels(texture: &TextureHandle, position: Vec2, size: Vec2) -> Self {
        let extent = texture.size_f32();
        Self {
            min: position / extent,
            max: (position + size) / extent,
        }
    }

    /// Map a point of the unit square into this rectangle.
    pub fn lerp(&self, t: Vec2) -> Vec2 {
        self.min + (self.max - self.min) * t
    }
}

impl Default for UvRect {
    fn default() -> Self {
        Self::FULL
    }
}
