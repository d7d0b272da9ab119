//! Rendery Text - glyph atlas and single-line text layout
//!
//! This crate provides:
//! - The [`OutlineRasterizer`] contract and a `fontdue`-backed implementation
//! - A [`GlyphAtlas`] that shelf-packs glyph bitmaps into one square texture
//!   and caches placements per `(glyph, pixel size)`
//! - Text layout producing one textured [`GlyphQuad`] per code point, and
//!   measurement that never touches the atlas
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rendery_text::{AtlasConfig, Font};
//! use glam::Vec2;
//!
//! let data = std::fs::read("DejaVuSans.ttf").unwrap();
//! let mut font = Font::from_bytes_with_config(&data, AtlasConfig::medium()).unwrap();
//!
//! let size = font.measure_text("Hello, World!", 24.0);
//! let layout = font.layout_text("Hello, World!", 24.0, Vec2::new(10.0, 10.0)).unwrap();
//! assert_eq!(layout.size, size);
//!
//! // Upload whatever the layout added to the atlas.
//! if let Some(region) = font.atlas_mut().take_dirty_region() {
//!     let pixels = font.atlas().region_pixels(region);
//!     // hand `region` and `pixels` to the GPU
//! }
//! ```
//!
//! Only left-to-right, single-line text is supported; there is no shaping,
//! bidi or fallback between fonts.

pub mod atlas;
pub mod config;
pub mod error;
pub mod font;
pub mod fontdue_backend;
pub mod layout;
pub mod rasterizer;

pub use atlas::{AtlasEntry, GlyphAtlas, GlyphKey, ShelfPacker};
pub use config::AtlasConfig;
pub use error::{TextError, TextResult};
pub use font::Font;
pub use fontdue_backend::FontdueRasterizer;
pub use layout::{GlyphQuad, LineMetrics, TextLayout};
pub use rasterizer::{GlyphBitmap, GlyphId, HorizontalMetrics, OutlineRasterizer, VerticalMetrics};

// Re-export math types from rendery-core
pub use rendery_core::math::Vec2;
