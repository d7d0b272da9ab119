//! Regular N-gon generation.

use std::f32::consts::TAU;

use glam::Vec2;
use rendery_core::math::normalize_angle;

use crate::error::{GeometryResult, require_points};
use crate::{polyline_miter, polyline_miter_vertex_count, triangulate_convex, triangulate_convex_vertex_count};

/// Append the `sides` corner points of a regular polygon to `out`.
///
/// Corner `i` sits at angle `rotation + i * 2π / sides` (wrapped into
/// `[-π, π]`) and distance `radius` from `center`.
pub fn regular_polygon_points(
    center: Vec2,
    radius: f32,
    sides: usize,
    rotation: f32,
    out: &mut Vec<Vec2>,
) {
    let step = TAU / sides as f32;
    out.reserve(sides);
    for i in 0..sides {
        let angle = normalize_angle(rotation + step * i as f32);
        let (sin, cos) = angle.sin_cos();
        out.push(center + Vec2::new(cos, sin) * radius);
    }
}

/// Number of vertices emitted by [`solid_regular_polygon`].
pub const fn solid_regular_polygon_vertex_count(sides: usize) -> usize {
    triangulate_convex_vertex_count(sides)
}

/// Tessellate a filled regular polygon as a triangle fan.
pub fn solid_regular_polygon(
    center: Vec2,
    radius: f32,
    sides: usize,
    rotation: f32,
    out: &mut Vec<Vec2>,
) -> GeometryResult<()> {
    require_points(sides, 3)?;
    let mut points = Vec::with_capacity(sides);
    regular_polygon_points(center, radius, sides, rotation, &mut points);
    triangulate_convex(&points, out)
}

/// Number of vertices emitted by [`regular_polygon_outline`].
pub const fn regular_polygon_outline_vertex_count(sides: usize) -> usize {
    polyline_miter_vertex_count(sides, true)
}

/// Tessellate the outline of a regular polygon as a closed mitered polyline.
pub fn regular_polygon_outline(
    center: Vec2,
    radius: f32,
    sides: usize,
    rotation: f32,
    width: f32,
    out: &mut Vec<Vec2>,
) -> GeometryResult<()> {
    require_points(sides, 3)?;
    let mut points = Vec::with_capacity(sides);
    regular_polygon_points(center, radius, sides, rotation, &mut points);
    polyline_miter(&points, width, true, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triangle_list_area;

    #[test]
    fn test_hexagon_points() {
        let mut points = Vec::new();
        regular_polygon_points(Vec2::new(3.0, -2.0), 5.0, 6, 0.3, &mut points);
        assert_eq!(points.len(), 6);
        for p in &points {
            assert!(((*p - Vec2::new(3.0, -2.0)).length() - 5.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_solid_polygon_area_approaches_circle() {
        let mut out = Vec::new();
        solid_regular_polygon(Vec2::ZERO, 1.0, 256, 0.0, &mut out).unwrap();
        assert_eq!(out.len(), solid_regular_polygon_vertex_count(256));
        assert!((triangle_list_area(&out) - std::f32::consts::PI).abs() < 1e-3);
    }

    #[test]
    fn test_outline_counts() {
        let mut out = Vec::new();
        regular_polygon_outline(Vec2::ZERO, 10.0, 5, 0.0, 1.0, &mut out).unwrap();
        assert_eq!(out.len(), regular_polygon_outline_vertex_count(5));
        assert_eq!(out.len(), 30);
    }

    #[test]
    fn test_degenerate_sides_rejected() {
        let mut out = Vec::new();
        assert!(solid_regular_polygon(Vec2::ZERO, 1.0, 2, 0.0, &mut out).is_err());
        assert!(regular_polygon_outline(Vec2::ZERO, 1.0, 0, 0.0, 1.0, &mut out).is_err());
        assert!(out.is_empty());
    }
}
