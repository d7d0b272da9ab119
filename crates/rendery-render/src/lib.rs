//! Rendery Render - draw dispatch and the renderer facade
//!
//! [`DrawDispatcher`] is the seam to a GPU backend: it creates and updates
//! textures and draws solid or textured triangle lists. [`Renderer`] sits on
//! top of it and turns high-level calls (sprites, text, shapes) into those
//! triangle lists, keeping glyph atlas textures in sync with their fonts.
//!
//! ```rust,ignore
//! let mut renderer = Renderer::new(dispatcher, RendererConfig::new(800, 600));
//! let mut font = renderer.create_font(Font::from_file("DejaVuSans.ttf", AtlasConfig::default())?)?;
//!
//! renderer.clear();
//! renderer.draw_solid_rect(Vec2::new(10.0, 10.0), Vec2::new(100.0, 50.0), 0.0, Color::RED)?;
//! renderer.draw_text(&mut font, "Hello", Vec2::new(10.0, 80.0), 24.0, Color::WHITE)?;
//! ```

pub mod color;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod queue;
pub mod renderer;
pub mod texture;
pub mod vertex;

pub use color::Color;
pub use config::RendererConfig;
pub use dispatcher::DrawDispatcher;
pub use error::{RenderError, RenderResult};
pub use queue::{RenderQueue, RenderSprite};
pub use renderer::{GpuFont, Renderer};
pub use texture::{BackendKind, TextureDesc, TextureFormat, TextureHandle, UvRect};
pub use vertex::{SolidVertex, TexturedVertex};
