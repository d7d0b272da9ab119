//! Vertex formats handed to the dispatcher.

use bytemuck::{Pod, Zeroable};
use glam::{Affine2, Vec2};
use rendery_geometry::UNIT_QUAD;

use crate::texture::UvRect;

/// Vertex for solid-colored triangle lists.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SolidVertex {
    pub position: [f32; 2],
}

impl SolidVertex {
    pub fn new(x: f32, y: f32) -> Self {
        Self { position: [x, y] }
    }

    /// Get the WGPU vertex buffer layout.
    pub fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x2,
            }],
        }
    }
}

impl From<Vec2> for SolidVertex {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

/// Vertex for textured triangle lists (sprites and glyphs).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct TexturedVertex {
    pub position: [f32; 2],
    pub tex_coords: [f32; 2],
}

impl TexturedVertex {
    pub fn new(position: Vec2, tex_coords: Vec2) -> Self {
        Self {
            position: position.to_array(),
            tex_coords: tex_coords.to_array(),
        }
    }

    /// Two triangles covering the unit quad mapped through `transform`, with
    /// texture coordinates spanning `uv`.
    pub fn quad(transform: Affine2, uv: UvRect) -> [TexturedVertex; 6] {
        UNIT_QUAD.map(|corner| Self::new(transform.transform_point2(corner), uv.lerp(corner)))
    }

    /// Axis-aligned quad at `position` with the given `size`.
    pub fn rect(position: Vec2, size: Vec2, uv: UvRect) -> [TexturedVertex; 6] {
        Self::quad(Affine2::from_scale_angle_translation(size, 0.0, position), uv)
    }

    /// Get the WGPU vertex buffer layout.
    pub fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: 8,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_sizes() {
        assert_eq!(std::mem::size_of::<SolidVertex>(), 8);
        assert_eq!(std::mem::size_of::<TexturedVertex>(), 16);
        assert_eq!(TexturedVertex::vertex_layout().array_stride, 16);
        assert_eq!(SolidVertex::vertex_layout().attributes.len(), 1);
    }

    #[test]
    fn test_rect_corners_match_uvs() {
        let uv = UvRect::new(Vec2::new(0.5, 0.0), Vec2::new(1.0, 0.25));
        let vertices = TexturedVertex::rect(Vec2::new(10.0, 20.0), Vec2::new(8.0, 4.0), uv);
        // Bottom-left corner of the quad samples the bottom-left of the UV rect.
        assert_eq!(vertices[0].position, [10.0, 24.0]);
        assert_eq!(vertices[0].tex_coords, [0.5, 0.25]);
        // Top-right.
        assert_eq!(vertices[1].position, [18.0, 20.0]);
        assert_eq!(vertices[1].tex_coords, [1.0, 0.0]);
    }
}
