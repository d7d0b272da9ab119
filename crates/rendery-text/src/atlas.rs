//! Glyph atlas: a fixed-size single-channel texture with a shelf packer.
//!
//! Bitmaps are placed left to right along a shelf; when the next one would
//! overflow the right edge a new shelf starts below the tallest bitmap of the
//! current one. Entries are never evicted, so an `(glyph, size)` pair keeps the
//! same placement for the lifetime of the atlas.

use glam::Vec2;
use rendery_core::alloc::HashMap;
use rendery_core::geometry::Rect;
use rendery_core::profiling::profile_function;

use crate::config::AtlasConfig;
use crate::error::{TextError, TextResult};
use crate::rasterizer::{GlyphBitmap, GlyphId, OutlineRasterizer};

/// Where a rasterized glyph lives in the atlas and how to place it relative to
/// the pen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtlasEntry {
    pub uv_top: f32,
    pub uv_left: f32,
    pub uv_bottom: f32,
    pub uv_right: f32,
    /// Bitmap size in pixels.
    pub size: Vec2,
    /// Bitmap offset from the glyph origin, y down.
    pub offset: Vec2,
}

impl AtlasEntry {
    fn new(slot: Rect<u32>, atlas_size: u32, x_offset: i32, y_offset: i32) -> Self {
        let atlas_size = atlas_size as f32;
        Self {
            uv_top: slot.y as f32 / atlas_size,
            uv_left: slot.x as f32 / atlas_size,
            uv_bottom: slot.bottom() as f32 / atlas_size,
            uv_right: slot.right() as f32 / atlas_size,
            size: Vec2::new(slot.width as f32, slot.height as f32),
            offset: Vec2::new(x_offset as f32, y_offset as f32),
        }
    }

    /// Top-left texture coordinate.
    pub fn uv_min(&self) -> Vec2 {
        Vec2::new(self.uv_left, self.uv_top)
    }

    /// Bottom-right texture coordinate.
    pub fn uv_max(&self) -> Vec2 {
        Vec2::new(self.uv_right, self.uv_bottom)
    }
}

/// Cache key: a glyph at a specific pixel size.
///
/// Sizes compare by bit pattern so that lookups are exact value matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlyphKey {
    pub glyph: GlyphId,
    size_bits: u32,
}

impl GlyphKey {
    pub fn new(glyph: GlyphId, pixel_size: f32) -> Self {
        Self {
            glyph,
            size_bits: pixel_size.to_bits(),
        }
    }
}

/// Simple row-based atlas packer.
#[derive(Debug, Clone)]
pub struct ShelfPacker {
    size: u32,
    current_x: u32,
    current_y: u32,
    row_height: u32,
}

impl ShelfPacker {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            current_x: 0,
            current_y: 0,
            row_height: 0,
        }
    }

    /// Reserve a `width` x `height` slot, or `None` when it no longer fits.
    pub fn pack(&mut self, width: u32, height: u32) -> Option<Rect<u32>> {
        if width > self.size {
            return None;
        }

        if self.current_x + width > self.size {
            self.current_x = 0;
            self.current_y += self.row_height;
            self.row_height = 0;
            tracing::debug!(y = self.current_y, "Glyph atlas starting new shelf");
        }

        if self.current_y + height > self.size {
            return None;
        }

        let slot = Rect::new(self.current_x, self.current_y, width, height);
        self.current_x += width;
        self.row_height = self.row_height.max(height);
        Some(slot)
    }

    /// Current `(x, y, row_height)` cursor.
    pub fn cursor(&self) -> (u32, u32, u32) {
        (self.current_x, self.current_y, self.row_height)
    }
}

/// Glyph cache backed by a single square coverage texture.
///
/// Pixels are kept on the CPU; the region touched since the last
/// [`GlyphAtlas::take_dirty_region`] call is what needs uploading.
pub struct GlyphAtlas {
    size: u32,
    pixels: Vec<u8>,
    entries: HashMap<GlyphKey, AtlasEntry>,
    packer: ShelfPacker,
    dirty: Option<Rect<u32>>,
}

impl std::fmt::Debug for GlyphAtlas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphAtlas")
            .field("size", &self.size)
            .field("entries", &self.entries.len())
            .field("packer", &self.packer)
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl GlyphAtlas {
    pub fn new(config: &AtlasConfig) -> Self {
        let size = config.atlas_size;
        Self {
            size,
            pixels: vec![0u8; config.memory_usage()],
            entries: HashMap::new(),
            packer: ShelfPacker::new(size),
            dirty: None,
        }
    }

    /// Side length of the atlas texture in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Row-major coverage pixels of the whole atlas.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn packer(&self) -> &ShelfPacker {
        &self.packer
    }

    /// Cached entry for `glyph` at `pixel_size`, if it was created before.
    pub fn get(&self, glyph: GlyphId, pixel_size: f32) -> Option<&AtlasEntry> {
        self.entries.get(&GlyphKey::new(glyph, pixel_size))
    }

    /// Return the entry for `glyph` at `pixel_size`, rasterizing and packing it
    /// on first use.
    pub fn get_or_create_entry<R: OutlineRasterizer + ?Sized>(
        &mut self,
        rasterizer: &R,
        glyph: GlyphId,
        pixel_size: f32,
    ) -> TextResult<AtlasEntry> {
        let key = GlyphKey::new(glyph, pixel_size);
        if let Some(entry) = self.entries.get(&key) {
            return Ok(*entry);
        }

        profile_function!();
        let scale = rasterizer.pixel_scale_for_height(pixel_size);
        let bitmap = rasterizer.rasterize_glyph(glyph, scale, scale);
        let entry = self.insert_bitmap(&bitmap)?;

        tracing::trace!(
            glyph = glyph.0,
            pixel_size,
            width = bitmap.width,
            height = bitmap.height,
            "Cached glyph in atlas"
        );
        self.entries.insert(key, entry);
        Ok(entry)
    }

    fn insert_bitmap(&mut self, bitmap: &GlyphBitmap) -> TextResult<AtlasEntry> {
        let Some(slot) = self.packer.pack(bitmap.width, bitmap.height) else {
            tracing::warn!(
                width = bitmap.width,
                height = bitmap.height,
                atlas_size = self.size,
                "Glyph atlas is full"
            );
            return Err(TextError::AtlasFull {
                requested_width: bitmap.width,
                requested_height: bitmap.height,
                atlas_width: self.size,
                atlas_height: self.size,
            });
        };

        if !slot.is_empty() {
            self.blit(slot, &bitmap.pixels);
            self.mark_dirty(slot);
        }

        Ok(AtlasEntry::new(slot, self.size, bitmap.x_offset, bitmap.y_offset))
    }

    fn blit(&mut self, slot: Rect<u32>, src: &[u8]) {
        let atlas = self.size as usize;
        let width = slot.width as usize;
        for (row, src_row) in src.chunks_exact(width).take(slot.height as usize).enumerate() {
            let start = (slot.y as usize + row) * atlas + slot.x as usize;
            self.pixels[start..start + width].copy_from_slice(src_row);
        }
    }

    /// Region written since the last call, clearing it.
    ///
    /// Hand the region back through [`GlyphAtlas::mark_dirty`] if uploading it
    /// fails.
    pub fn take_dirty_region(&mut self) -> Option<Rect<u32>> {
        self.dirty.take()
    }

    /// Pending region without clearing it.
    pub fn dirty_region(&self) -> Option<Rect<u32>> {
        self.dirty
    }

    /// Flag `rect` as needing upload, merged with any pending region.
    pub fn mark_dirty(&mut self, rect: Rect<u32>) {
        if rect.is_empty() {
            return;
        }
        self.dirty = Some(match self.dirty {
            Some(dirty) => dirty.union(&rect),
            None => rect,
        });
    }

    /// Tightly packed rows of `rect`, ready for a texture sub-region upload.
    pub fn region_pixels(&self, rect: Rect<u32>) -> Vec<u8> {
        let atlas = self.size as usize;
        let width = rect.width as usize;
        let mut out = Vec::with_capacity(width * rect.height as usize);
        for row in rect.y as usize..rect.bottom() as usize {
            let start = row * atlas + rect.x as usize;
            out.extend_from_slice(&self.pixels[start..start + width]);
        }
        out
    }
}
