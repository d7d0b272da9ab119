use std::path::Path;

use crate::atlas::{AtlasEntry, GlyphAtlas};
use crate::config::AtlasConfig;
use crate::error::TextResult;
use crate::fontdue_backend::FontdueRasterizer;
use crate::rasterizer::{GlyphId, OutlineRasterizer};

/// A loaded font together with its glyph atlas.
///
/// The font exclusively owns the rasterizer (and through it the parsed font
/// data) as well as the atlas; both are released when the font is dropped.
/// Creating atlas entries requires `&mut self`, so sharing a font across
/// threads needs an external lock.
pub struct Font<R: OutlineRasterizer = FontdueRasterizer> {
    rasterizer: R,
    atlas: GlyphAtlas,
}

impl<R: OutlineRasterizer> std::fmt::Debug for Font<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Font").field("atlas", &self.atlas).finish_non_exhaustive()
    }
}

impl Font<FontdueRasterizer> {
    /// Load a font from TTF/OTF bytes with the default 2048x2048 atlas.
    pub fn from_bytes(data: &[u8]) -> TextResult<Self> {
        Self::from_bytes_with_config(data, AtlasConfig::default())
    }

    pub fn from_bytes_with_config(data: &[u8], config: AtlasConfig) -> TextResult<Self> {
        Ok(Self::new(FontdueRasterizer::from_bytes(data)?, config))
    }

    /// Load a font from a .ttf or .otf file.
    pub fn from_file(path: impl AsRef<Path>, config: AtlasConfig) -> TextResult<Self> {
        Ok(Self::new(FontdueRasterizer::from_file(path)?, config))
    }
}

impl<R: OutlineRasterizer> Font<R> {
    pub fn new(rasterizer: R, config: AtlasConfig) -> Self {
        Self {
            rasterizer,
            atlas: GlyphAtlas::new(&config),
        }
    }

    pub fn rasterizer(&self) -> &R {
        &self.rasterizer
    }

    pub fn atlas(&self) -> &GlyphAtlas {
        &self.atlas
    }

    /// Mutable access to the atlas, used to drain its dirty region for upload.
    pub fn atlas_mut(&mut self) -> &mut GlyphAtlas {
        &mut self.atlas
    }

    pub fn glyph_index(&self, codepoint: char) -> GlyphId {
        self.rasterizer.find_glyph_index(codepoint)
    }

    /// Atlas entry for `glyph` at `pixel_size`, rasterizing it on first use.
    pub fn glyph_entry(&mut self, glyph: GlyphId, pixel_size: f32) -> TextResult<AtlasEntry> {
        self.atlas
            .get_or_create_entry(&self.rasterizer, glyph, pixel_size)
    }
}
