//! Deferred sprite submission.

use glam::Vec2;

use crate::color::Color;
use crate::texture::TextureHandle;

/// A sprite waiting to be drawn by [`crate::Renderer::render_queue`].
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSprite {
    pub texture: TextureHandle,
    pub position: Vec2,
    /// Rotation in radians about the sprite's centre.
    pub rotation: f32,
    /// Multiplier applied to the texture's pixel size.
    pub scale: Vec2,
    pub color: Color,
}

impl RenderSprite {
    pub fn new(texture: TextureHandle, position: Vec2) -> Self {
        Self {
            texture,
            position,
            rotation: 0.0,
            scale: Vec2::ONE,
            color: Color::WHITE,
        }
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// Ordered list of sprites, drained once per frame.
#[derive(Debug, Clone, Default)]
pub struct RenderQueue {
    sprites: Vec<RenderSprite>,
}

impl RenderQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_sprite(&mut self, sprite: RenderSprite) {
        self.sprites.push(sprite);
    }

    pub fn clear(&mut self) {
        self.sprites.clear();
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    pub fn sprites(&self) -> &[RenderSprite] {
        &self.sprites
    }

    /// Take every queued sprite in submission order, leaving the queue empty.
    pub fn finish(&mut self) -> Vec<RenderSprite> {
        std::mem::take(&mut self.sprites)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::{BackendKind, TextureFormat};
    use rendery_core::geometry::Size;

    fn texture(id: u64) -> TextureHandle {
        TextureHandle {
            id,
            backend: BackendKind::Headless,
            size: Size::new(4, 4),
            format: TextureFormat::Rgba8UnormSrgb,
        }
    }

    #[test]
    fn test_finish_drains_in_order() {
        let mut queue = RenderQueue::new();
        queue.queue_sprite(RenderSprite::new(texture(1), Vec2::ZERO));
        queue.queue_sprite(RenderSprite::new(texture(2), Vec2::ONE).with_rotation(1.0));
        assert_eq!(queue.len(), 2);

        let sprites = queue.finish();
        assert!(queue.is_empty());
        assert_eq!(sprites[0].texture.id, 1);
        assert_eq!(sprites[1].texture.id, 2);
        assert_eq!(sprites[1].rotation, 1.0);
    }

    #[test]
    fn test_clear() {
        let mut queue = RenderQueue::new();
        queue.queue_sprite(RenderSprite::new(texture(1), Vec2::ZERO));
        queue.clear();
        assert!(queue.finish().is_empty());
    }
}
