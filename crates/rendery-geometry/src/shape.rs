//! Shape descriptions and dispatch to the tessellation functions.

use glam::Vec2;

use crate::error::GeometryResult;
use crate::{
    line, line_vertex_count, polyline_miter, polyline_miter_vertex_count, rect, rect_vertex_count,
    regular_polygon_outline, regular_polygon_outline_vertex_count, solid_regular_polygon,
    solid_regular_polygon_vertex_count, triangulate_convex, triangulate_convex_vertex_count,
    triangulate_unordered_convex,
};

/// A solid shape to be tessellated into a triangle list.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Single segment of a given width.
    Line { from: Vec2, to: Vec2, width: f32 },
    /// Mitered polyline, optionally closed into a loop.
    Polyline {
        points: Vec<Vec2>,
        width: f32,
        closed: bool,
    },
    /// Convex polygon whose points are already in winding order.
    ConvexPolygon { points: Vec<Vec2> },
    /// Convex point set in arbitrary order.
    UnorderedConvexPolygon { points: Vec<Vec2> },
    /// Filled rectangle rotated about its centre.
    Rect {
        position: Vec2,
        size: Vec2,
        rotation: f32,
    },
    /// Filled regular polygon.
    RegularPolygon {
        center: Vec2,
        radius: f32,
        sides: usize,
        rotation: f32,
    },
    /// Outline of a regular polygon.
    RegularPolygonOutline {
        center: Vec2,
        radius: f32,
        sides: usize,
        rotation: f32,
        width: f32,
    },
}

impl Shape {
    pub fn line(from: Vec2, to: Vec2, width: f32) -> Self {
        Self::Line { from, to, width }
    }

    pub fn polyline(points: Vec<Vec2>, width: f32, closed: bool) -> Self {
        Self::Polyline {
            points,
            width,
            closed,
        }
    }

    pub fn convex_polygon(points: Vec<Vec2>) -> Self {
        Self::ConvexPolygon { points }
    }

    pub fn unordered_convex_polygon(points: Vec<Vec2>) -> Self {
        Self::UnorderedConvexPolygon { points }
    }

    pub fn rect(position: Vec2, size: Vec2) -> Self {
        Self::Rect {
            position,
            size,
            rotation: 0.0,
        }
    }

    pub fn regular_polygon(center: Vec2, radius: f32, sides: usize, rotation: f32) -> Self {
        Self::RegularPolygon {
            center,
            radius,
            sides,
            rotation,
        }
    }

    pub fn regular_polygon_outline(
        center: Vec2,
        radius: f32,
        sides: usize,
        rotation: f32,
        width: f32,
    ) -> Self {
        Self::RegularPolygonOutline {
            center,
            radius,
            sides,
            rotation,
            width,
        }
    }

    /// Set the rotation of shapes that support one; other shapes are returned
    /// unchanged.
    pub fn with_rotation(mut self, angle: f32) -> Self {
        match &mut self {
            Self::Rect { rotation, .. }
            | Self::RegularPolygon { rotation, .. }
            | Self::RegularPolygonOutline { rotation, .. } => *rotation = angle,
            _ => {}
        }
        self
    }

    /// Number of vertices [`Shape::tessellate`] will append.
    pub fn vertex_count(&self) -> usize {
        match self {
            Self::Line { .. } => line_vertex_count(),
            Self::Polyline { points, closed, .. } => {
                polyline_miter_vertex_count(points.len(), *closed)
            }
            Self::ConvexPolygon { points } | Self::UnorderedConvexPolygon { points } => {
                triangulate_convex_vertex_count(points.len())
            }
            Self::Rect { .. } => rect_vertex_count(),
            Self::RegularPolygon { sides, .. } => solid_regular_polygon_vertex_count(*sides),
            Self::RegularPolygonOutline { sides, .. } => {
                regular_polygon_outline_vertex_count(*sides)
            }
        }
    }

    /// Append the shape's triangle list to `out`.
    pub fn tessellate(&self, out: &mut Vec<Vec2>) -> GeometryResult<()> {
        match self {
            Self::Line { from, to, width } => {
                line(*from, *to, *width, out);
                Ok(())
            }
            Self::Polyline {
                points,
                width,
                closed,
            } => polyline_miter(points, *width, *closed, out),
            Self::ConvexPolygon { points } => triangulate_convex(points, out),
            Self::UnorderedConvexPolygon { points } => triangulate_unordered_convex(points, out),
            Self::Rect {
                position,
                size,
                rotation,
            } => {
                rect(*position, *size, *rotation, out);
                Ok(())
            }
            Self::RegularPolygon {
                center,
                radius,
                sides,
                rotation,
            } => solid_regular_polygon(*center, *radius, *sides, *rotation, out),
            Self::RegularPolygonOutline {
                center,
                radius,
                sides,
                rotation,
                width,
            } => regular_polygon_outline(*center, *radius, *sides, *rotation, *width, out),
        }
    }

    /// Tessellate into a fresh buffer sized by [`Shape::vertex_count`].
    pub fn to_vertices(&self) -> GeometryResult<Vec<Vec2>> {
        let mut out = Vec::with_capacity(self.vertex_count());
        self.tessellate(&mut out)?;
        Ok(out)
    }
}
