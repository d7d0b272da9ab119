//! [`OutlineRasterizer`] backed by `fontdue`.

use std::path::Path;

use fontdue::{Font as FontdueFont, FontSettings};

use crate::error::{TextError, TextResult};
use crate::rasterizer::{GlyphBitmap, GlyphId, HorizontalMetrics, OutlineRasterizer, VerticalMetrics};

/// TrueType/OpenType rasterizer using `fontdue`.
///
/// fontdue works in pixels-per-em; querying it at `units_per_em` yields
/// values in font units, which is what the [`OutlineRasterizer`] contract
/// reports.
pub struct FontdueRasterizer {
    font: FontdueFont,
    units_per_em: f32,
    vertical: VerticalMetrics,
}

impl std::fmt::Debug for FontdueRasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontdueRasterizer")
            .field("name", &self.font.name())
            .field("units_per_em", &self.units_per_em)
            .field("vertical", &self.vertical)
            .finish()
    }
}

impl FontdueRasterizer {
    /// Parse a font from in-memory TTF/OTF data.
    pub fn from_bytes(data: &[u8]) -> TextResult<Self> {
        let font = FontdueFont::from_bytes(data, FontSettings::default())
            .map_err(|e| TextError::InvalidFontData(e.to_string()))?;
        let units_per_em = font.units_per_em();

        let vertical = font
            .horizontal_line_metrics(units_per_em)
            .map(|m| VerticalMetrics {
                ascent: m.ascent.round() as i32,
                descent: m.descent.round() as i32,
                line_gap: m.line_gap.round() as i32,
            })
            .unwrap_or(VerticalMetrics {
                ascent: units_per_em.round() as i32,
                descent: 0,
                line_gap: 0,
            });

        tracing::info!(
            name = font.name().unwrap_or("<unnamed>"),
            glyphs = font.glyph_count(),
            units_per_em,
            "Loaded font"
        );

        Ok(Self {
            font,
            units_per_em,
            vertical,
        })
    }

    /// Load a font from a .ttf or .otf file.
    pub fn from_file(path: impl AsRef<Path>) -> TextResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(TextError::FontFileNotFound(path.to_path_buf()));
        }
        let data = std::fs::read(path)?;
        Self::from_bytes(&data)
    }

    pub fn units_per_em(&self) -> f32 {
        self.units_per_em
    }
}

impl OutlineRasterizer for FontdueRasterizer {
    fn find_glyph_index(&self, codepoint: char) -> GlyphId {
        GlyphId(self.font.lookup_glyph_index(codepoint))
    }

    fn vertical_metrics(&self) -> VerticalMetrics {
        self.vertical
    }

    fn horizontal_metrics(&self, glyph: GlyphId) -> HorizontalMetrics {
        let metrics = self.font.metrics_indexed(glyph.0, self.units_per_em);
        HorizontalMetrics {
            advance_width: metrics.advance_width.round() as i32,
            left_side_bearing: metrics.bounds.xmin.round() as i32,
        }
    }

    fn kern_advance(&self, left: GlyphId, right: GlyphId) -> i32 {
        self.font
            .horizontal_kern_indexed(left.0, right.0, self.units_per_em)
            .map_or(0, |kern| kern.round() as i32)
    }

    /// fontdue scales uniformly, so only `scale_y` is used.
    fn rasterize_glyph(&self, glyph: GlyphId, _scale_x: f32, scale_y: f32) -> GlyphBitmap {
        let (metrics, pixels) = self.font.rasterize_indexed(glyph.0, scale_y * self.units_per_em);
        let height = metrics.height as i32;
        GlyphBitmap {
            width: metrics.width as u32,
            height: metrics.height as u32,
            x_offset: metrics.xmin,
            // fontdue measures ymin upwards from the baseline to the bitmap's bottom.
            y_offset: -(metrics.ymin + height),
            pixels,
        }
    }

    fn pixel_scale_for_height(&self, pixel_height: f32) -> f32 {
        let extent = (self.vertical.ascent - self.vertical.descent) as f32;
        pixel_height / extent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_garbage() {
        let err = FontdueRasterizer::from_bytes(&[0u8; 32]).unwrap_err();
        assert!(matches!(err, TextError::InvalidFontData(_)));
    }

    /// First of a few commonly installed fonts that exists on this machine.
    fn system_font() -> Option<&'static str> {
        [
            "/usr/share/fonts/truetype/dejavu/DejaVuSerif.ttf",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/System/Library/Fonts/Supplemental/Arial.ttf",
            "C:\\Windows\\Fonts\\arial.ttf",
        ]
        .into_iter()
        .find(|path| Path::new(path).exists())
    }

    #[test]
    fn test_layout_with_system_font() {
        let Some(path) = system_font() else {
            eprintln!("No system font found, skipping");
            return;
        };
        let mut font = crate::Font::from_file(path, crate::AtlasConfig::small()).unwrap();

        let vertical = font.rasterizer().vertical_metrics();
        assert!(vertical.ascent > 0 && vertical.descent < 0);
        let scale = font.rasterizer().pixel_scale_for_height(32.0);
        let extent = (vertical.ascent - vertical.descent) as f32 * scale;
        assert!((extent - 32.0).abs() < 1e-3);

        let layout = font.layout_text("Ag", 32.0, glam::Vec2::ZERO).unwrap();
        let baseline = font.line_metrics(32.0).ascent;
        let [a, g] = layout.quads.as_slice() else {
            panic!("expected two quads, got {:?}", layout.quads);
        };

        // 'A' sits on the baseline, 'g' hangs below it.
        let a_bottom = a.position.y + a.size.y;
        assert!((a_bottom - baseline).abs() <= 1.0, "{a_bottom} vs {baseline}");
        assert!(a.position.y < baseline - 10.0);
        let g_bottom = g.position.y + g.size.y;
        assert!(g_bottom > baseline + 2.0, "{g_bottom} vs {baseline}");
        assert!(g.position.x > a.position.x);

        assert!(layout.size.x > 0.0);
        assert_eq!(layout.size, font.measure_text("Ag", 32.0));
        assert_eq!(font.atlas().len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let err = FontdueRasterizer::from_file("/definitely/not/a/font.ttf").unwrap_err();
        assert!(matches!(err, TextError::FontFileNotFound(_)));
    }
}
