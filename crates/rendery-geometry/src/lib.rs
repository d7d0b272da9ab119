//! Rendery Geometry - procedural 2D shape tessellation
//!
//! This crate turns abstract shapes into triangle lists:
//! - Width-ed line segments and polylines with mitered joints
//! - Convex polygons (fan triangulation), optionally sorted around their centroid
//! - Regular N-gons, solid or outlined
//!
//! Every tessellation function appends to a caller-owned `Vec<Vec2>` and has a
//! matching `*_vertex_count` function so buffers can be sized up front and
//! reused between frames.
//!
//! # Example
//!
//! ```
//! use rendery_geometry::{Shape, polyline_miter, polyline_miter_vertex_count};
//! use glam::Vec2;
//!
//! let points = [Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0)];
//! let mut vertices = Vec::with_capacity(polyline_miter_vertex_count(points.len(), false));
//! polyline_miter(&points, 2.0, false, &mut vertices).unwrap();
//! assert_eq!(vertices.len(), 12);
//!
//! let hexagon = Shape::regular_polygon(Vec2::ZERO, 5.0, 6, 0.0);
//! assert_eq!(hexagon.vertex_count(), 12);
//! ```

mod error;
mod line;
mod polygon;
mod regular;
mod shape;

pub use error::*;
pub use line::*;
pub use polygon::*;
pub use regular::*;
pub use shape::*;
