//! Test utilities for Rendery.
//!
//! - [`SyntheticRasterizer`] - an [`OutlineRasterizer`](rendery_text::OutlineRasterizer)
//!   with hand-picked metrics, kerning and bitmap sizes that records every
//!   rasterization
//! - [`MockDispatcher`] - a [`DrawDispatcher`](rendery_render::DrawDispatcher)
//!   that records calls and keeps CPU copies of its textures
//!
//! # Example
//!
//! ```rust
//! use rendery_test_utils::{MockDispatcher, SyntheticRasterizer};
//! use rendery_render::{Renderer, RendererConfig};
//! use rendery_text::{AtlasConfig, Font};
//!
//! let font = Font::new(SyntheticRasterizer::monospace(10, 4, 6), AtlasConfig::small());
//! let mut renderer = Renderer::new(MockDispatcher::new(), RendererConfig::new(100, 100));
//! let mut font = renderer.create_font(font).unwrap();
//!
//! renderer
//!     .draw_text(&mut font, "hi", glam::Vec2::ZERO, 10.0, rendery_render::Color::WHITE)
//!     .unwrap();
//! assert_eq!(renderer.dispatcher().count_textured_draws(), 1);
//! assert_eq!(font.font().rasterizer().rasterize_count(), 2);
//! ```

pub mod mock_dispatcher;
pub mod synthetic_font;

pub use mock_dispatcher::{DrawCall, MockDispatcher};
pub use synthetic_font::{RasterizeCall, SyntheticGlyph, SyntheticRasterizer};
