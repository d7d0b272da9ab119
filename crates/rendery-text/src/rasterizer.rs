//! The outline rasterizer contract.
//!
//! Everything the atlas and layout code needs from a font file goes through
//! [`OutlineRasterizer`]: glyph lookup, unscaled metrics and kerning, and
//! coverage bitmaps at a given scale. Metrics are in font units; multiply by
//! [`OutlineRasterizer::pixel_scale_for_height`] to get pixels.

/// Index of a glyph inside a font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct GlyphId(pub u16);

impl GlyphId {
    /// The glyph fonts use for unmapped code points.
    pub const MISSING: GlyphId = GlyphId(0);
}

/// Font-wide vertical metrics in font units.
///
/// `descent` is negative for fonts whose descenders go below the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VerticalMetrics {
    pub ascent: i32,
    pub descent: i32,
    pub line_gap: i32,
}

/// Per-glyph horizontal metrics in font units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HorizontalMetrics {
    pub advance_width: i32,
    pub left_side_bearing: i32,
}

/// Greyscale coverage bitmap for one glyph.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GlyphBitmap {
    pub width: u32,
    pub height: u32,
    /// Horizontal offset of the bitmap's left edge from the glyph origin.
    pub x_offset: i32,
    /// Vertical offset of the bitmap's top edge from the baseline, y down.
    pub y_offset: i32,
    /// Row-major coverage values, `width * height` bytes with no padding.
    pub pixels: Vec<u8>,
}

impl GlyphBitmap {
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Source of glyph outlines, metrics and coverage bitmaps.
pub trait OutlineRasterizer {
    /// Map a code point to a glyph. Unmapped code points return whatever the
    /// font uses for "no glyph", usually [`GlyphId::MISSING`].
    fn find_glyph_index(&self, codepoint: char) -> GlyphId;

    /// Font-wide ascent, descent and line gap.
    fn vertical_metrics(&self) -> VerticalMetrics;

    /// Advance width and left side bearing of a glyph.
    fn horizontal_metrics(&self, glyph: GlyphId) -> HorizontalMetrics;

    /// Extra advance to apply between `left` and `right` when adjacent.
    fn kern_advance(&self, left: GlyphId, right: GlyphId) -> i32;

    /// Rasterize a glyph at the given scale.
    fn rasterize_glyph(&self, glyph: GlyphId, scale_x: f32, scale_y: f32) -> GlyphBitmap;

    /// Scale factor turning font units into pixels such that
    /// `ascent - descent` spans `pixel_height` pixels.
    fn pixel_scale_for_height(&self, pixel_height: f32) -> f32;
}

impl<R: OutlineRasterizer + ?Sized> OutlineRasterizer for Box<R> {
    fn find_glyph_index(&self, codepoint: char) -> GlyphId {
        (**self).find_glyph_index(codepoint)
    }

    fn vertical_metrics(&self) -> VerticalMetrics {
        (**self).vertical_metrics()
    }

    fn horizontal_metrics(&self, glyph: GlyphId) -> HorizontalMetrics {
        (**self).horizontal_metrics(glyph)
    }

    fn kern_advance(&self, left: GlyphId, right: GlyphId) -> i32 {
        (**self).kern_advance(left, right)
    }

    fn rasterize_glyph(&self, glyph: GlyphId, scale_x: f32, scale_y: f32) -> GlyphBitmap {
        (**self).rasterize_glyph(glyph, scale_x, scale_y)
    }

    fn pixel_scale_for_height(&self, pixel_height: f32) -> f32 {
        (**self).pixel_scale_for_height(pixel_height)
    }
}
