//! Mock implementation of DrawDispatcher for testing.
//!
//! Records every call without touching a GPU, and keeps a CPU copy of each
//! texture so tests can check what was uploaded.

use glam::Mat4;
use parking_lot::Mutex;
use rendery_core::alloc::HashMap;
use rendery_core::geometry::{Rect, Size};
use rendery_render::{
    BackendKind, Color, DrawDispatcher, RenderError, RenderResult, SolidVertex, TextureDesc,
    TextureFormat, TextureHandle, TexturedVertex,
};

/// Records a dispatcher call for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    CreateTexture {
        id: u64,
        label: Option<String>,
        size: Size<u32>,
        format: TextureFormat,
    },
    WriteTexture {
        texture_id: u64,
        region: Rect<u32>,
        bytes: usize,
    },
    SetProjection(Mat4),
    Clear(Color),
    DrawSolid {
        vertices: Vec<SolidVertex>,
        color: Color,
    },
    DrawTextured {
        texture_id: u64,
        vertices: Vec<TexturedVertex>,
        color: Color,
    },
}

#[derive(Debug, Clone)]
struct MockTexture {
    size: Size<u32>,
    bytes_per_pixel: usize,
    pixels: Vec<u8>,
}

/// Mock [`DrawDispatcher`] for testing.
///
/// Methods take `&self`, so calls and textures live behind
/// `parking_lot::Mutex`es.
///
/// # Example
///
/// ```rust
/// use rendery_render::{DrawDispatcher, TextureDesc};
/// use rendery_test_utils::MockDispatcher;
///
/// let mock = MockDispatcher::new();
/// let texture = mock.create_texture(&TextureDesc::glyph_atlas(None, 16)).unwrap();
///
/// assert_eq!(mock.count_texture_creates(), 1);
/// assert_eq!(mock.texture_pixels(&texture).unwrap().len(), 256);
/// ```
pub struct MockDispatcher {
    backend: BackendKind,
    calls: Mutex<Vec<DrawCall>>,
    textures: Mutex<HashMap<u64, MockTexture>>,
    next_texture_id: Mutex<u64>,
    fail_next_write: Mutex<bool>,
}

impl MockDispatcher {
    /// Create a mock dispatcher reporting [`BackendKind::Headless`].
    pub fn new() -> Self {
        Self::with_backend(BackendKind::Headless)
    }

    pub fn with_backend(backend: BackendKind) -> Self {
        Self {
            backend,
            calls: Mutex::new(Vec::new()),
            textures: Mutex::new(HashMap::new()),
            next_texture_id: Mutex::new(1),
            fail_next_write: Mutex::new(false),
        }
    }

    /// Make the next `write_texture` call fail with a backend error without
    /// touching the texture.
    pub fn fail_next_write(&self) {
        *self.fail_next_write.lock() = true;
    }

    /// Get a copy of all recorded calls (for test assertions).
    pub fn calls(&self) -> Vec<DrawCall> {
        self.calls.lock().clone()
    }

    /// Clear recorded calls (useful between test steps).
    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    fn count(&self, predicate: impl Fn(&DrawCall) -> bool) -> usize {
        self.calls.lock().iter().filter(|call| predicate(call)).count()
    }

    pub fn count_texture_creates(&self) -> usize {
        self.count(|call| matches!(call, DrawCall::CreateTexture { .. }))
    }

    pub fn count_texture_writes(&self) -> usize {
        self.count(|call| matches!(call, DrawCall::WriteTexture { .. }))
    }

    pub fn count_solid_draws(&self) -> usize {
        self.count(|call| matches!(call, DrawCall::DrawSolid { .. }))
    }

    pub fn count_textured_draws(&self) -> usize {
        self.count(|call| matches!(call, DrawCall::DrawTextured { .. }))
    }

    /// The most recent projection passed to `set_projection`.
    pub fn last_projection(&self) -> Option<Mat4> {
        self.calls.lock().iter().rev().find_map(|call| match call {
            DrawCall::SetProjection(projection) => Some(*projection),
            _ => None,
        })
    }

    /// Vertices of the most recent solid draw.
    pub fn last_solid_vertices(&self) -> Option<Vec<SolidVertex>> {
        self.calls.lock().iter().rev().find_map(|call| match call {
            DrawCall::DrawSolid { vertices, .. } => Some(vertices.clone()),
            _ => None,
        })
    }

    /// Vertices of the most recent textured draw.
    pub fn last_textured_vertices(&self) -> Option<Vec<TexturedVertex>> {
        self.calls.lock().iter().rev().find_map(|call| match call {
            DrawCall::DrawTextured { vertices, .. } => Some(vertices.clone()),
            _ => None,
        })
    }

    /// Current contents of a texture created by this dispatcher.
    pub fn texture_pixels(&self, texture: &TextureHandle) -> Option<Vec<u8>> {
        self.textures
            .lock()
            .get(&texture.id)
            .map(|texture| texture.pixels.clone())
    }

    fn record(&self, call: DrawCall) {
        self.calls.lock().push(call);
    }
}

impl Default for MockDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

fn bytes_per_pixel(format: TextureFormat) -> usize {
    format.block_copy_size(None).unwrap_or(4) as usize
}

impl DrawDispatcher for MockDispatcher {
    fn backend(&self) -> BackendKind {
        self.backend
    }

    fn create_texture(&self, desc: &TextureDesc<'_>) -> RenderResult<TextureHandle> {
        let id = {
            let mut next = self.next_texture_id.lock();
            let id = *next;
            *next += 1;
            id
        };
        let bytes_per_pixel = bytes_per_pixel(desc.format);
        let len = desc.size.width as usize * desc.size.height as usize * bytes_per_pixel;
        self.textures.lock().insert(
            id,
            MockTexture {
                size: desc.size,
                bytes_per_pixel,
                pixels: vec![0; len],
            },
        );
        self.record(DrawCall::CreateTexture {
            id,
            label: desc.label.map(str::to_owned),
            size: desc.size,
            format: desc.format,
        });
        Ok(TextureHandle {
            id,
            backend: self.backend,
            size: desc.size,
            format: desc.format,
        })
    }

    fn write_texture(
        &self,
        texture: &TextureHandle,
        region: Rect<u32>,
        pixels: &[u8],
    ) -> RenderResult<()> {
        self.check_texture(texture)?;
        if std::mem::take(&mut *self.fail_next_write.lock()) {
            return Err(RenderError::Backend("injected write failure".to_owned()));
        }
        let mut textures = self.textures.lock();
        let target = textures
            .get_mut(&texture.id)
            .ok_or_else(|| RenderError::Backend(format!("Unknown texture {}", texture.id)))?;

        if region.right() > target.size.width || region.bottom() > target.size.height {
            return Err(RenderError::Backend(format!(
                "Region {:?} is outside the {}x{} texture",
                region, target.size.width, target.size.height
            )));
        }
        let row = region.width as usize * target.bytes_per_pixel;
        if pixels.len() != row * region.height as usize {
            return Err(RenderError::Backend(format!(
                "Expected {} bytes for region {:?}, got {}",
                row * region.height as usize,
                region,
                pixels.len()
            )));
        }

        let stride = target.size.width as usize * target.bytes_per_pixel;
        for (y, src) in pixels.chunks_exact(row.max(1)).enumerate() {
            let start = (region.y as usize + y) * stride + region.x as usize * target.bytes_per_pixel;
            target.pixels[start..start + row].copy_from_slice(src);
        }
        drop(textures);

        self.record(DrawCall::WriteTexture {
            texture_id: texture.id,
            region,
            bytes: pixels.len(),
        });
        Ok(())
    }

    fn set_projection(&self, projection: Mat4) {
        self.record(DrawCall::SetProjection(projection));
    }

    fn clear(&self, color: Color) {
        self.record(DrawCall::Clear(color));
    }

    fn draw_solid(&self, vertices: &[SolidVertex], color: Color) -> RenderResult<()> {
        self.record(DrawCall::DrawSolid {
            vertices: vertices.to_vec(),
            color,
        });
        Ok(())
    }

    fn draw_textured(
        &self,
        texture: &TextureHandle,
        vertices: &[TexturedVertex],
        color: Color,
    ) -> RenderResult<()> {
        self.check_texture(texture)?;
        self.record(DrawCall::DrawTextured {
            texture_id: texture.id,
            vertices: vertices.to_vec(),
            color,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_texture_updates_pixels() {
        let mock = MockDispatcher::new();
        let texture = mock
            .create_texture(&TextureDesc::glyph_atlas(None, 4))
            .unwrap();
        mock.write_texture(&texture, Rect::new(1, 2, 2, 1), &[7, 9])
            .unwrap();

        let pixels = mock.texture_pixels(&texture).unwrap();
        assert_eq!(pixels[2 * 4 + 1], 7);
        assert_eq!(pixels[2 * 4 + 2], 9);
        assert_eq!(pixels.iter().filter(|&&p| p != 0).count(), 2);
        assert_eq!(mock.count_texture_writes(), 1);
    }

    #[test]
    fn test_fail_next_write_fails_once() {
        let mock = MockDispatcher::new();
        let texture = mock
            .create_texture(&TextureDesc::glyph_atlas(None, 4))
            .unwrap();
        mock.fail_next_write();
        assert!(mock.write_texture(&texture, Rect::new(0, 0, 1, 1), &[5]).is_err());
        assert_eq!(mock.texture_pixels(&texture).unwrap()[0], 0);
        mock.write_texture(&texture, Rect::new(0, 0, 1, 1), &[5])
            .unwrap();
        assert_eq!(mock.texture_pixels(&texture).unwrap()[0], 5);
        assert_eq!(mock.count_texture_writes(), 1);
    }

    #[test]
    fn test_write_texture_out_of_bounds() {
        let mock = MockDispatcher::new();
        let texture = mock
            .create_texture(&TextureDesc::glyph_atlas(None, 4))
            .unwrap();
        let err = mock
            .write_texture(&texture, Rect::new(3, 0, 2, 1), &[0, 0])
            .unwrap_err();
        assert!(matches!(err, RenderError::Backend(_)));
        assert_eq!(mock.count_texture_writes(), 0);
    }

    #[test]
    fn test_rejects_foreign_texture() {
        let mock = MockDispatcher::with_backend(BackendKind::Wgpu);
        let foreign = MockDispatcher::new()
            .create_texture(&TextureDesc::rgba(None, 2, 2))
            .unwrap();
        let err = mock
            .draw_textured(&foreign, &[], Color::WHITE)
            .unwrap_err();
        assert_eq!(
            err,
            RenderError::InvalidTextureBinding {
                expected: BackendKind::Wgpu,
                found: BackendKind::Headless,
            }
        );
    }
}
