/// Configuration for a font's glyph atlas.
///
/// The atlas is a square single-channel texture whose side is fixed when the
/// font is created. Glyphs are never evicted, so the size bounds how many
/// distinct `(glyph, pixel size)` pairs a font can hold.
///
/// | Preset | Atlas Size | Memory |
/// |--------|------------|--------|
/// | small() | 512x512 | 0.25 MB |
/// | medium() | 1024x1024 | 1 MB |
/// | large() | 2048x2048 | 4 MB |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AtlasConfig {
    /// Atlas texture side length in pixels.
    /// Default: 2048
    pub atlas_size: u32,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self { atlas_size: 2048 }
    }
}

impl AtlasConfig {
    /// Create default configuration (2048x2048 atlas).
    pub fn new() -> Self {
        Self::default()
    }

    /// Small config for memory-constrained environments (512x512).
    pub fn small() -> Self {
        Self { atlas_size: 512 }
    }

    /// Medium config (1024x1024).
    pub fn medium() -> Self {
        Self { atlas_size: 1024 }
    }

    /// Large config for text-heavy applications (2048x2048).
    pub fn large() -> Self {
        Self { atlas_size: 2048 }
    }

    /// Set a custom atlas size.
    pub fn with_atlas_size(mut self, size: u32) -> Self {
        self.atlas_size = size;
        self
    }

    /// Bytes used by the CPU-side atlas pixels.
    pub fn memory_usage(&self) -> usize {
        (self.atlas_size as usize) * (self.atlas_size as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(AtlasConfig::default().atlas_size, 2048);
        assert_eq!(AtlasConfig::small().atlas_size, 512);
        assert_eq!(AtlasConfig::medium().memory_usage(), 1024 * 1024);
        assert_eq!(AtlasConfig::new().with_atlas_size(16).atlas_size, 16);
    }
}
