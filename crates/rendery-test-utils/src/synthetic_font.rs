//! A rasterizer with hand-picked metrics for layout and atlas tests.

use parking_lot::Mutex;
use rendery_core::alloc::HashMap;
use rendery_text::{
    GlyphBitmap, GlyphId, HorizontalMetrics, OutlineRasterizer, VerticalMetrics,
};

/// Metrics and bitmap size of one synthetic glyph, in font units.
///
/// Bitmaps keep the configured size at every scale so that atlas packing is
/// easy to predict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyntheticGlyph {
    pub advance_width: i32,
    pub left_side_bearing: i32,
    pub bitmap_width: u32,
    pub bitmap_height: u32,
    pub x_offset: i32,
    pub y_offset: i32,
}

impl SyntheticGlyph {
    /// A glyph sitting on the baseline.
    pub fn new(advance_width: i32, bitmap_width: u32, bitmap_height: u32) -> Self {
        Self {
            advance_width,
            left_side_bearing: 0,
            bitmap_width,
            bitmap_height,
            x_offset: 0,
            y_offset: -(bitmap_height as i32),
        }
    }

    pub fn with_left_side_bearing(mut self, left_side_bearing: i32) -> Self {
        self.left_side_bearing = left_side_bearing;
        self
    }

    pub fn with_offset(mut self, x_offset: i32, y_offset: i32) -> Self {
        self.x_offset = x_offset;
        self.y_offset = y_offset;
        self
    }
}

/// A recorded [`OutlineRasterizer::rasterize_glyph`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterizeCall {
    pub glyph: GlyphId,
    pub scale_x: f32,
    pub scale_y: f32,
}

/// In-memory [`OutlineRasterizer`] for tests.
///
/// Code points map to glyphs through an explicit table; with
/// [`SyntheticRasterizer::monospace`] every code point maps to the glyph with
/// the same number instead. Bitmaps are filled with `glyph % 255 + 1`, so
/// every glyph leaves a distinct non-zero mark in the atlas.
///
/// The default vertical metrics are ascent 8, descent -2 and line gap 1, so
/// one font unit is one pixel at a pixel height of 10.
pub struct SyntheticRasterizer {
    vertical: VerticalMetrics,
    codepoints: HashMap<char, GlyphId>,
    glyphs: HashMap<GlyphId, SyntheticGlyph>,
    kerning: HashMap<(GlyphId, GlyphId), i32>,
    fallback: Option<SyntheticGlyph>,
    identity_mapping: bool,
    calls: Mutex<Vec<RasterizeCall>>,
}

impl SyntheticRasterizer {
    pub fn new() -> Self {
        Self {
            vertical: VerticalMetrics {
                ascent: 8,
                descent: -2,
                line_gap: 1,
            },
            codepoints: HashMap::new(),
            glyphs: HashMap::new(),
            kerning: HashMap::new(),
            fallback: None,
            identity_mapping: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every code point gets its own glyph, all sharing one advance and
    /// bitmap size.
    pub fn monospace(advance_width: i32, bitmap_width: u32, bitmap_height: u32) -> Self {
        Self {
            fallback: Some(SyntheticGlyph::new(
                advance_width,
                bitmap_width,
                bitmap_height,
            )),
            identity_mapping: true,
            ..Self::new()
        }
    }

    pub fn with_vertical_metrics(mut self, ascent: i32, descent: i32, line_gap: i32) -> Self {
        self.vertical = VerticalMetrics {
            ascent,
            descent,
            line_gap,
        };
        self
    }

    /// Map `codepoint` to `id` and give that glyph the metrics of `glyph`.
    pub fn with_glyph(mut self, codepoint: char, id: GlyphId, glyph: SyntheticGlyph) -> Self {
        self.codepoints.insert(codepoint, id);
        self.glyphs.insert(id, glyph);
        self
    }

    /// Metrics for glyphs that are not configured explicitly, including the
    /// missing glyph.
    pub fn with_fallback(mut self, glyph: SyntheticGlyph) -> Self {
        self.fallback = Some(glyph);
        self
    }

    pub fn with_kerning(mut self, left: GlyphId, right: GlyphId, amount: i32) -> Self {
        self.kerning.insert((left, right), amount);
        self
    }

    pub fn glyph(&self, id: GlyphId) -> SyntheticGlyph {
        self.glyphs
            .get(&id)
            .copied()
            .or(self.fallback)
            .unwrap_or_default()
    }

    /// Every rasterization so far, in call order.
    pub fn rasterize_calls(&self) -> Vec<RasterizeCall> {
        self.calls.lock().clone()
    }

    pub fn rasterize_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Number of times `glyph` was rasterized.
    pub fn rasterize_count_for(&self, glyph: GlyphId) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| call.glyph == glyph)
            .count()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }
}

impl Default for SyntheticRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SyntheticRasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyntheticRasterizer")
            .field("vertical", &self.vertical)
            .field("glyphs", &self.glyphs.len())
            .field("rasterize_calls", &self.rasterize_count())
            .finish()
    }
}

impl OutlineRasterizer for SyntheticRasterizer {
    fn find_glyph_index(&self, codepoint: char) -> GlyphId {
        if let Some(&id) = self.codepoints.get(&codepoint) {
            return id;
        }
        if self.identity_mapping {
            return u16::try_from(u32::from(codepoint))
                .map(GlyphId)
                .unwrap_or(GlyphId::MISSING);
        }
        GlyphId::MISSING
    }

    fn vertical_metrics(&self) -> VerticalMetrics {
        self.vertical
    }

    fn horizontal_metrics(&self, glyph: GlyphId) -> HorizontalMetrics {
        let glyph = self.glyph(glyph);
        HorizontalMetrics {
            advance_width: glyph.advance_width,
            left_side_bearing: glyph.left_side_bearing,
        }
    }

    fn kern_advance(&self, left: GlyphId, right: GlyphId) -> i32 {
        self.kerning.get(&(left, right)).copied().unwrap_or(0)
    }

    fn rasterize_glyph(&self, glyph: GlyphId, scale_x: f32, scale_y: f32) -> GlyphBitmap {
        self.calls.lock().push(RasterizeCall {
            glyph,
            scale_x,
            scale_y,
        });
        let metrics = self.glyph(glyph);
        let fill = (glyph.0 % 255 + 1) as u8;
        GlyphBitmap {
            width: metrics.bitmap_width,
            height: metrics.bitmap_height,
            x_offset: metrics.x_offset,
            y_offset: metrics.y_offset,
            pixels: vec![fill; (metrics.bitmap_width * metrics.bitmap_height) as usize],
        }
    }

    fn pixel_scale_for_height(&self, pixel_height: f32) -> f32 {
        pixel_height / (self.vertical.ascent - self.vertical.descent) as f32
    }
}
