//! Single-line text layout.
//!
//! Glyphs are placed left to right on one baseline. The pen starts one ascent
//! below the origin and moves by each glyph's advance, with the kerning
//! against the following glyph folded into the current glyph's advance.

use glam::Vec2;
use rendery_core::profiling::profile_function;

use crate::atlas::AtlasEntry;
use crate::error::TextResult;
use crate::font::Font;
use crate::rasterizer::{GlyphId, OutlineRasterizer};

/// Scaled font-wide metrics at one pixel size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMetrics {
    pub scale: f32,
    pub ascent: f32,
    pub descent: f32,
    pub line_gap: f32,
}

impl LineMetrics {
    /// Height of a single line of text, `ascent - descent`.
    pub fn height(&self) -> f32 {
        self.ascent - self.descent
    }
}

/// One glyph placed on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphQuad {
    pub glyph: GlyphId,
    /// Top-left corner in screen space.
    pub position: Vec2,
    pub size: Vec2,
    pub uv_min: Vec2,
    pub uv_max: Vec2,
}

impl GlyphQuad {
    fn new(glyph: GlyphId, position: Vec2, entry: &AtlasEntry) -> Self {
        Self {
            glyph,
            position,
            size: entry.size,
            uv_min: entry.uv_min(),
            uv_max: entry.uv_max(),
        }
    }
}

/// Result of laying out a string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextLayout {
    /// One quad per code point, in input order.
    pub quads: Vec<GlyphQuad>,
    /// Sum of advances by `ascent - descent`.
    pub size: Vec2,
}

/// A glyph and its scaled horizontal metrics, kerning already applied.
#[derive(Debug, Clone, Copy)]
struct PlacedGlyph {
    glyph: GlyphId,
    advance: f32,
    left_side_bearing: f32,
}

impl<R: OutlineRasterizer> Font<R> {
    /// Vertical metrics scaled to `pixel_size`.
    pub fn line_metrics(&self, pixel_size: f32) -> LineMetrics {
        let rasterizer = self.rasterizer();
        let scale = rasterizer.pixel_scale_for_height(pixel_size);
        let vertical = rasterizer.vertical_metrics();
        LineMetrics {
            scale,
            ascent: vertical.ascent as f32 * scale,
            descent: vertical.descent as f32 * scale,
            line_gap: vertical.line_gap as f32 * scale,
        }
    }

    /// Size `text` would occupy at `pixel_size`, without touching the atlas.
    pub fn measure_text(&self, text: &str, pixel_size: f32) -> Vec2 {
        profile_function!();
        let metrics = self.line_metrics(pixel_size);
        let glyphs = self.glyph_indices(text);
        let width = self
            .placed_glyphs(&glyphs, metrics.scale)
            .map(|placed| placed.advance)
            .sum();
        Vec2::new(width, metrics.height())
    }

    /// Lay out `text` at `pixel_size` with its top-left corner at `origin`,
    /// creating atlas entries as needed.
    pub fn layout_text(
        &mut self,
        text: &str,
        pixel_size: f32,
        origin: Vec2,
    ) -> TextResult<TextLayout> {
        profile_function!();
        let metrics = self.line_metrics(pixel_size);
        let glyphs = self.glyph_indices(text);
        let placed: Vec<PlacedGlyph> = self.placed_glyphs(&glyphs, metrics.scale).collect();

        let mut pen = Vec2::new(origin.x, origin.y + metrics.ascent);
        let mut width = 0.0;
        let mut quads = Vec::with_capacity(placed.len());
        for glyph in placed {
            let entry = self.glyph_entry(glyph.glyph, pixel_size)?;
            let position = Vec2::new(pen.x + glyph.left_side_bearing, pen.y + entry.offset.y);
            quads.push(GlyphQuad::new(glyph.glyph, position, &entry));
            pen.x += glyph.advance;
            width += glyph.advance;
        }

        Ok(TextLayout {
            quads,
            size: Vec2::new(width, metrics.height()),
        })
    }

    fn glyph_indices(&self, text: &str) -> Vec<GlyphId> {
        text.chars().map(|c| self.glyph_index(c)).collect()
    }

    fn placed_glyphs<'a>(
        &'a self,
        glyphs: &'a [GlyphId],
        scale: f32,
    ) -> impl Iterator<Item = PlacedGlyph> + 'a {
        let rasterizer = self.rasterizer();
        glyphs.iter().enumerate().map(move |(i, &glyph)| {
            let hmetrics = rasterizer.horizontal_metrics(glyph);
            let mut advance = hmetrics.advance_width as f32 * scale;
            if let Some(&next) = glyphs.get(i + 1) {
                advance += rasterizer.kern_advance(glyph, next) as f32 * scale;
            }
            PlacedGlyph {
                glyph,
                advance,
                left_side_bearing: hmetrics.left_side_bearing as f32 * scale,
            }
        })
    }
}
