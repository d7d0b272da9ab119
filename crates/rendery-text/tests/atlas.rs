//! Integration tests for glyph atlas caching and packing.

use glam::Vec2;
use rendery_core::geometry::Rect;
use rendery_test_utils::{SyntheticGlyph, SyntheticRasterizer};
use rendery_text::{AtlasConfig, Font, GlyphId, TextError};

fn tiny_font() -> Font<SyntheticRasterizer> {
    rendery_core::logging::init();
    Font::new(
        SyntheticRasterizer::monospace(8, 8, 8),
        AtlasConfig::new().with_atlas_size(16),
    )
}

#[test]
fn test_glyph_rasterized_once_per_size() {
    let mut font = Font::new(SyntheticRasterizer::monospace(10, 4, 6), AtlasConfig::small());

    let layout = font.layout_text("aaa", 10.0, Vec2::ZERO).unwrap();
    assert_eq!(font.rasterizer().rasterize_count(), 1);
    assert_eq!(layout.quads[0].uv_min, layout.quads[2].uv_min);
    assert_eq!(layout.quads[0].uv_max, layout.quads[2].uv_max);

    let first = font.glyph_entry(GlyphId('a' as u16), 10.0).unwrap();
    let second = font.glyph_entry(GlyphId('a' as u16), 10.0).unwrap();
    assert_eq!(first, second);
    assert_eq!(font.rasterizer().rasterize_count(), 1);
    assert_eq!(font.atlas().len(), 1);

    // A different pixel size is a different entry.
    font.layout_text("a", 12.0, Vec2::ZERO).unwrap();
    assert_eq!(font.rasterizer().rasterize_count(), 2);
    assert_eq!(font.atlas().len(), 2);
}

#[test]
fn test_rasterizes_at_pixel_scale() {
    let mut font = Font::new(SyntheticRasterizer::monospace(10, 4, 6), AtlasConfig::small());
    font.glyph_entry(GlyphId(1), 20.0).unwrap();
    let calls = font.rasterizer().rasterize_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].scale_x, 2.0);
    assert_eq!(calls[0].scale_y, 2.0);
}

#[test]
fn test_atlas_full_on_fifth_glyph() {
    let mut font = tiny_font();

    font.layout_text("abcd", 10.0, Vec2::ZERO).unwrap();
    assert_eq!(font.atlas().len(), 4);

    let err = font.layout_text("e", 10.0, Vec2::ZERO).unwrap_err();
    assert_eq!(
        err,
        TextError::AtlasFull {
            requested_width: 8,
            requested_height: 8,
            atlas_width: 16,
            atlas_height: 16,
        }
    );
    assert_eq!(font.atlas().len(), 4);
    assert!(font.atlas().get(GlyphId('e' as u16), 10.0).is_none());

    // Cached glyphs keep working after a failure.
    let layout = font.layout_text("dcba", 10.0, Vec2::ZERO).unwrap();
    assert_eq!(layout.quads.len(), 4);
    assert_eq!(font.rasterizer().rasterize_count(), 5);
}

#[test]
fn test_atlas_full_mid_string() {
    let mut font = tiny_font();
    let err = font.layout_text("abcde", 10.0, Vec2::ZERO).unwrap_err();
    assert!(matches!(err, TextError::AtlasFull { .. }));
    // Glyphs placed before the failure stay cached.
    assert_eq!(font.atlas().len(), 4);
}

#[test]
fn test_oversized_glyph_is_rejected() {
    let mut font = Font::new(
        SyntheticRasterizer::monospace(8, 20, 4),
        AtlasConfig::new().with_atlas_size(16),
    );
    let err = font.glyph_entry(GlyphId(1), 10.0).unwrap_err();
    assert!(matches!(
        err,
        TextError::AtlasFull {
            requested_width: 20,
            ..
        }
    ));
    assert!(font.atlas().is_empty());
}

#[test]
fn test_dirty_region_tracks_new_glyphs() {
    let mut font = tiny_font();
    font.layout_text("ab", 10.0, Vec2::ZERO).unwrap();

    let region = font.atlas_mut().take_dirty_region().unwrap();
    assert_eq!(region, Rect::new(0, 0, 16, 8));
    assert!(font.atlas_mut().take_dirty_region().is_none());

    let pixels = font.atlas().region_pixels(region);
    assert_eq!(pixels.len(), 16 * 8);
    // Each glyph is filled with its id + 1.
    assert_eq!(pixels[0], b'a' + 1);
    assert_eq!(pixels[8], b'b' + 1);
    assert_eq!(pixels[16 * 7 + 15], b'b' + 1);

    // Cache hits do not dirty the atlas.
    font.layout_text("ba", 10.0, Vec2::ZERO).unwrap();
    assert!(font.atlas_mut().take_dirty_region().is_none());

    font.layout_text("c", 10.0, Vec2::ZERO).unwrap();
    assert_eq!(
        font.atlas_mut().take_dirty_region(),
        Some(Rect::new(0, 8, 8, 8))
    );
}

#[test]
fn test_empty_bitmap_takes_no_space() {
    let rasterizer = SyntheticRasterizer::new()
        .with_glyph(' ', GlyphId(1), SyntheticGlyph::new(4, 0, 0))
        .with_glyph('x', GlyphId(2), SyntheticGlyph::new(6, 5, 5));
    let mut font = Font::new(rasterizer, AtlasConfig::new().with_atlas_size(16));

    let layout = font.layout_text(" x", 10.0, Vec2::ZERO).unwrap();
    assert_eq!(layout.quads[0].size, Vec2::ZERO);
    assert_eq!(layout.quads[1].size, Vec2::new(5.0, 5.0));
    assert_eq!(font.atlas().packer().cursor(), (5, 0, 5));
    assert_eq!(
        font.atlas_mut().take_dirty_region(),
        Some(Rect::new(0, 0, 5, 5))
    );
}
