//! The contract between the renderer and a GPU backend.

use glam::Mat4;
use rendery_core::geometry::Rect;

use crate::color::Color;
use crate::error::{RenderError, RenderResult};
use crate::texture::{BackendKind, TextureDesc, TextureHandle};
use crate::vertex::{SolidVertex, TexturedVertex};

/// A backend that owns GPU resources and executes draw calls.
///
/// Methods take `&self`; implementations keep their mutable state behind
/// interior mutability so a dispatcher can be shared with resource loaders.
/// All vertex positions are in logical units and are transformed by the
/// projection last passed to [`DrawDispatcher::set_projection`].
pub trait DrawDispatcher {
    /// Which backend created this dispatcher's textures.
    fn backend(&self) -> BackendKind;

    fn create_texture(&self, desc: &TextureDesc<'_>) -> RenderResult<TextureHandle>;

    /// Replace the pixels of `region` inside `texture`. `pixels` holds the
    /// region's rows tightly packed.
    fn write_texture(
        &self,
        texture: &TextureHandle,
        region: Rect<u32>,
        pixels: &[u8],
    ) -> RenderResult<()>;

    fn set_projection(&self, projection: Mat4);

    fn clear(&self, color: Color);

    /// Draw a triangle list in a single color.
    fn draw_solid(&self, vertices: &[SolidVertex], color: Color) -> RenderResult<()>;

    /// Draw a textured triangle list, tinted by `color`.
    fn draw_textured(
        &self,
        texture: &TextureHandle,
        vertices: &[TexturedVertex],
        color: Color,
    ) -> RenderResult<()>;

    /// Fail with [`RenderError::InvalidTextureBinding`] unless `texture` was
    /// created by this backend.
    fn check_texture(&self, texture: &TextureHandle) -> RenderResult<()> {
        let expected = self.backend();
        if texture.backend != expected {
            return Err(RenderError::InvalidTextureBinding {
                expected,
                found: texture.backend,
            });
        }
        Ok(())
    }
}
