//! Immediate-mode drawing on top of a [`DrawDispatcher`].

use glam::Vec2;
use rendery_core::profiling::profile_function;
use rendery_geometry::{
    GeometryResult, Shape, line, polyline_miter, rect, rect_transform, regular_polygon_outline,
    solid_regular_polygon, triangulate_convex, triangulate_unordered_convex,
};
use rendery_text::{Font, FontdueRasterizer, OutlineRasterizer};

use crate::color::Color;
use crate::config::RendererConfig;
use crate::dispatcher::DrawDispatcher;
use crate::error::{RenderError, RenderResult};
use crate::queue::RenderQueue;
use crate::texture::{TextureDesc, TextureHandle, UvRect};
use crate::vertex::{SolidVertex, TexturedVertex};

/// A font paired with the GPU texture mirroring its glyph atlas.
pub struct GpuFont<R: OutlineRasterizer = FontdueRasterizer> {
    font: Font<R>,
    texture: TextureHandle,
}

impl<R: OutlineRasterizer> std::fmt::Debug for GpuFont<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GpuFont")
            .field("font", &self.font)
            .field("texture", &self.texture)
            .finish()
    }
}

impl<R: OutlineRasterizer> GpuFont<R> {
    pub fn font(&self) -> &Font<R> {
        &self.font
    }

    pub fn font_mut(&mut self) -> &mut Font<R> {
        &mut self.font
    }

    pub fn texture(&self) -> &TextureHandle {
        &self.texture
    }

    /// Upload whatever part of the atlas changed since the last upload.
    fn flush_atlas<D: DrawDispatcher>(&mut self, dispatcher: &D) -> RenderResult<()> {
        let Some(region) = self.font.atlas_mut().take_dirty_region() else {
            return Ok(());
        };
        tracing::trace!(
            "Uploading atlas region {}x{} at ({}, {})",
            region.width,
            region.height,
            region.x,
            region.y
        );
        let pixels = self.font.atlas().region_pixels(region);
        let result = dispatcher.write_texture(&self.texture, region, &pixels);
        if result.is_err() {
            // Keep the region pending so the next flush retries it.
            self.font.atlas_mut().mark_dirty(region);
        }
        result
    }
}

/// Draws sprites, text and solid shapes through a backend dispatcher.
///
/// Positions are in logical units with the origin at the top-left corner of
/// the viewport. Text is rasterized at physical resolution (pixel size times
/// the scale factor) so glyphs stay sharp on high-DPI displays.
pub struct Renderer<D: DrawDispatcher> {
    dispatcher: D,
    config: RendererConfig,
    // Reused between draws.
    points: Vec<Vec2>,
    solid_vertices: Vec<SolidVertex>,
    textured_vertices: Vec<TexturedVertex>,
}

impl<D: DrawDispatcher> Renderer<D> {
    pub fn new(dispatcher: D, config: RendererConfig) -> Self {
        tracing::info!(
            "Creating {:?} renderer ({}x{} @ {}x)",
            dispatcher.backend(),
            config.width,
            config.height,
            config.scale
        );
        dispatcher.set_projection(config.projection());
        Self {
            dispatcher,
            config,
            points: Vec::new(),
            solid_vertices: Vec::new(),
            textured_vertices: Vec::new(),
        }
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    pub fn dispatcher_mut(&mut self) -> &mut D {
        &mut self.dispatcher
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Viewport size in logical units.
    pub fn size(&self) -> Vec2 {
        self.config.logical_size()
    }

    /// Change the framebuffer size and recompute the projection.
    pub fn resize(&mut self, width: u32, height: u32) {
        tracing::debug!("Resizing renderer to {}x{}", width, height);
        self.config.width = width;
        self.config.height = height;
        self.dispatcher.set_projection(self.config.projection());
    }

    /// Change the scale factor and recompute the projection.
    pub fn set_scale(&mut self, scale: f32) {
        tracing::debug!("Setting renderer scale to {}", scale);
        self.config.scale = scale;
        self.dispatcher.set_projection(self.config.projection());
    }

    pub fn set_clear_color(&mut self, color: Color) {
        self.config.clear_color = color;
    }

    /// Clear the frame with the configured clear color.
    pub fn clear(&mut self) {
        self.dispatcher.clear(self.config.clear_color);
    }

    pub fn clear_with(&mut self, color: Color) {
        self.dispatcher.clear(color);
    }

    /// Create the atlas texture for `font` and upload any glyphs it already
    /// holds.
    pub fn create_font<R: OutlineRasterizer>(&self, font: Font<R>) -> RenderResult<GpuFont<R>> {
        let side = font.atlas().size();
        let texture = self
            .dispatcher
            .create_texture(&TextureDesc::glyph_atlas(Some("Glyph Atlas"), side))?;
        tracing::debug!("Created {}x{} glyph atlas texture", side, side);
        let mut font = GpuFont { font, texture };
        font.flush_atlas(&self.dispatcher)?;
        Ok(font)
    }

    /// Size `text` would occupy at `pixel_size`, in logical units.
    pub fn measure_text<R: OutlineRasterizer>(
        &self,
        font: &GpuFont<R>,
        text: &str,
        pixel_size: f32,
    ) -> Vec2 {
        font.font.measure_text(text, pixel_size)
    }

    /// Draw a single line of text with its top-left corner at `position`.
    ///
    /// Returns the size of the drawn text in logical units.
    pub fn draw_text<R: OutlineRasterizer>(
        &mut self,
        font: &mut GpuFont<R>,
        text: &str,
        position: Vec2,
        pixel_size: f32,
        color: Color,
    ) -> RenderResult<Vec2> {
        profile_function!();
        self.dispatcher.check_texture(&font.texture)?;

        let scale = self.config.scale;
        let layout = font
            .font
            .layout_text(text, pixel_size * scale, position * scale);
        // Entries created before a failure are still uploaded.
        font.flush_atlas(&self.dispatcher)?;
        let layout = layout?;

        self.textured_vertices.clear();
        for quad in layout.quads.iter().filter(|quad| quad.size != Vec2::ZERO) {
            let uv = UvRect::new(quad.uv_min, quad.uv_max);
            self.textured_vertices.extend(TexturedVertex::rect(
                quad.position / scale,
                quad.size / scale,
                uv,
            ));
        }
        if !self.textured_vertices.is_empty() {
            self.dispatcher
                .draw_textured(&font.texture, &self.textured_vertices, color)?;
        }
        Ok(layout.size / scale)
    }

    /// Draw `texture` at its pixel size multiplied by `scale`.
    pub fn draw_sprite(
        &mut self,
        texture: &TextureHandle,
        position: Vec2,
        scale: Vec2,
        rotation: f32,
        color: Color,
    ) -> RenderResult<()> {
        let size = texture.size_f32() * scale;
        self.draw_texture_rect(texture, position, size, rotation, color)
    }

    /// Draw the whole of `texture` stretched over a rectangle.
    pub fn draw_texture_rect(
        &mut self,
        texture: &TextureHandle,
        position: Vec2,
        size: Vec2,
        rotation: f32,
        color: Color,
    ) -> RenderResult<()> {
        self.draw_texture_region(texture, UvRect::FULL, position, size, rotation, color)
    }

    /// Draw part of `texture` stretched over a rectangle.
    pub fn draw_texture_region(
        &mut self,
        texture: &TextureHandle,
        source: UvRect,
        position: Vec2,
        size: Vec2,
        rotation: f32,
        color: Color,
    ) -> RenderResult<()> {
        self.dispatcher.check_texture(texture)?;
        let vertices = TexturedVertex::quad(rect_transform(position, size, rotation), source);
        self.dispatcher.draw_textured(texture, &vertices, color)
    }

    pub fn draw_solid_rect(
        &mut self,
        position: Vec2,
        size: Vec2,
        rotation: f32,
        color: Color,
    ) -> RenderResult<()> {
        self.draw_tessellated(color, |out| {
            rect(position, size, rotation, out);
            Ok(())
        })
    }

    pub fn draw_solid_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
    ) -> RenderResult<()> {
        self.draw_tessellated(color, |out| {
            line(from, to, width, out);
            Ok(())
        })
    }

    /// Draw a mitered polyline, closed into a loop when `closed` is set.
    pub fn draw_solid_lines(
        &mut self,
        points: &[Vec2],
        closed: bool,
        width: f32,
        color: Color,
    ) -> RenderResult<()> {
        self.draw_tessellated(color, |out| polyline_miter(points, width, closed, out))
    }

    /// Fill a convex polygon whose points are in winding order.
    pub fn draw_solid_convex_poly(&mut self, points: &[Vec2], color: Color) -> RenderResult<()> {
        self.draw_tessellated(color, |out| triangulate_convex(points, out))
    }

    /// Fill the convex hull of points given in any order.
    pub fn draw_solid_unordered_convex_poly(
        &mut self,
        points: &[Vec2],
        color: Color,
    ) -> RenderResult<()> {
        self.draw_tessellated(color, |out| triangulate_unordered_convex(points, out))
    }

    pub fn draw_solid_regular_polygon(
        &mut self,
        center: Vec2,
        radius: f32,
        sides: usize,
        rotation: f32,
        color: Color,
    ) -> RenderResult<()> {
        self.draw_tessellated(color, |out| {
            solid_regular_polygon(center, radius, sides, rotation, out)
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn draw_regular_polygon_outline(
        &mut self,
        center: Vec2,
        radius: f32,
        sides: usize,
        rotation: f32,
        width: f32,
        color: Color,
    ) -> RenderResult<()> {
        self.draw_tessellated(color, |out| {
            regular_polygon_outline(center, radius, sides, rotation, width, out)
        })
    }

    pub fn draw_shape(&mut self, shape: &Shape, color: Color) -> RenderResult<()> {
        self.draw_tessellated(color, |out| shape.tessellate(out))
    }

    /// Draw a pre-tessellated triangle list.
    pub fn draw_solid_vertices(&mut self, vertices: &[Vec2], color: Color) -> RenderResult<()> {
        if vertices.is_empty() {
            return Ok(());
        }
        self.solid_vertices.clear();
        self.solid_vertices
            .extend(vertices.iter().copied().map(SolidVertex::from));
        self.dispatcher.draw_solid(&self.solid_vertices, color)
    }

    /// Draw every queued sprite in submission order, emptying the queue.
    ///
    /// Stops at the first sprite that fails to draw.
    pub fn render_queue(&mut self, queue: &mut RenderQueue) -> RenderResult<()> {
        profile_function!();
        for sprite in queue.finish() {
            self.draw_sprite(
                &sprite.texture,
                sprite.position,
                sprite.scale,
                sprite.rotation,
                sprite.color,
            )?;
        }
        Ok(())
    }

    fn draw_tessellated(
        &mut self,
        color: Color,
        tessellate: impl FnOnce(&mut Vec<Vec2>) -> GeometryResult<()>,
    ) -> RenderResult<()> {
        profile_function!();
        let mut points = std::mem::take(&mut self.points);
        points.clear();
        let result = tessellate(&mut points)
            .map_err(RenderError::from)
            .and_then(|()| self.draw_solid_vertices(&points, color));
        self.points = points;
        result
    }
}
