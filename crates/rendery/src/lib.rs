//! Rendery - a small 2D rendering toolkit
//!
//! Rendery turns sprites, text and simple shapes into triangle lists for a
//! GPU backend:
//!
//! - **Geometry**: lines, mitered polylines, convex polygons and regular
//!   N-gons tessellated into triangle lists
//! - **Text**: glyph atlas caching and single-line text layout on top of an
//!   outline rasterizer (`fontdue` by default)
//! - **Render**: the [`DrawDispatcher`](render::DrawDispatcher) backend
//!   contract and the [`Renderer`](render::Renderer) facade
//!
//! # Quick Start
//!
//! ```ignore
//! use rendery::prelude::*;
//!
//! rendery::core::logging::init();
//!
//! let mut renderer = Renderer::new(MyBackend::new(), RendererConfig::new(800, 600));
//! let mut font = renderer.create_font(Font::from_file("DejaVuSans.ttf", AtlasConfig::default())?)?;
//!
//! renderer.clear();
//! renderer.draw_solid_regular_polygon(Vec2::new(100.0, 100.0), 40.0, 6, 0.0, Color::RED)?;
//! renderer.draw_text(&mut font, "Hello", Vec2::new(10.0, 10.0), 24.0, Color::WHITE)?;
//! ```

// Re-export core types
pub use rendery_core as core;
pub use rendery_core::math;

// Re-export sub-crates based on features
#[cfg(feature = "geometry")]
pub use rendery_geometry as geometry;

#[cfg(feature = "text")]
pub use rendery_text as text;

#[cfg(feature = "render")]
pub use rendery_render as render;

/// Prelude module for convenient imports
pub mod prelude {
    // Core math types
    pub use rendery_core::math::{Mat4, Vec2};

    #[cfg(feature = "geometry")]
    pub use rendery_geometry::{GeometryError, Shape};

    #[cfg(feature = "text")]
    pub use rendery_text::{AtlasConfig, Font, OutlineRasterizer, TextError, TextLayout};

    #[cfg(feature = "render")]
    pub use rendery_render::{
        Color, DrawDispatcher, GpuFont, RenderError, RenderQueue, RenderSprite, Renderer,
        RendererConfig,
    };
}
