//! Convex polygon fan triangulation and rectangles.

use glam::{Affine2, Vec2};
use rendery_core::profiling::profile_function;

use crate::error::{GeometryResult, require_points};

/// Number of vertices emitted by [`triangulate_convex`] for `points` points.
pub const fn triangulate_convex_vertex_count(points: usize) -> usize {
    points.saturating_sub(2) * 3
}

/// Fan-triangulate a convex polygon from its first point.
///
/// Emits `(p0, p[i+1], p[i+2])` for every `i` in `0..n-2`. The points must
/// already be in winding order and describe a convex polygon; neither is
/// checked, and concave input silently yields overlapping triangles.
pub fn triangulate_convex(points: &[Vec2], out: &mut Vec<Vec2>) -> GeometryResult<()> {
    require_points(points.len(), 3)?;

    let first = points[0];
    out.reserve(triangulate_convex_vertex_count(points.len()));
    for pair in points[1..].windows(2) {
        out.extend_from_slice(&[first, pair[0], pair[1]]);
    }
    Ok(())
}

/// Fan-triangulate a convex point set whose order is unknown.
///
/// Points are sorted by angle around their centroid before triangulating.
/// The set is assumed to be convex; that is not verified.
pub fn triangulate_unordered_convex(points: &[Vec2], out: &mut Vec<Vec2>) -> GeometryResult<()> {
    profile_function!();
    require_points(points.len(), 3)?;

    let mut sorted = points.to_vec();
    sort_around_centroid(&mut sorted);
    triangulate_convex(&sorted, out)
}

/// Sort points counter-clockwise (in a y-up frame) by their angle around the
/// centroid.
pub fn sort_around_centroid(points: &mut [Vec2]) {
    if points.is_empty() {
        return;
    }
    let centroid = points.iter().copied().sum::<Vec2>() / points.len() as f32;
    points.sort_by(|a, b| {
        let angle_a = (a.y - centroid.y).atan2(a.x - centroid.x);
        let angle_b = (b.y - centroid.y).atan2(b.x - centroid.x);
        angle_a.total_cmp(&angle_b)
    });
}

/// Corners of the unit quad as two triangles, shared with textured quads so
/// texture coordinates line up with positions.
pub const UNIT_QUAD: [Vec2; 6] = [
    Vec2::new(0.0, 1.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(0.0, 0.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(1.0, 0.0),
];

/// Number of vertices emitted by [`rect`].
pub const fn rect_vertex_count() -> usize {
    UNIT_QUAD.len()
}

/// Transform placing the unit quad at `position` with the given `size`,
/// rotated by `rotation` radians around the rectangle's centre.
pub fn rect_transform(position: Vec2, size: Vec2, rotation: f32) -> Affine2 {
    if rotation == 0.0 {
        return Affine2::from_scale_angle_translation(size, 0.0, position);
    }
    let half = size * 0.5;
    Affine2::from_translation(position + half)
        * Affine2::from_angle(rotation)
        * Affine2::from_translation(-half)
        * Affine2::from_scale(size)
}

/// Tessellate an axis-aligned rectangle, optionally rotated about its centre.
pub fn rect(position: Vec2, size: Vec2, rotation: f32, out: &mut Vec<Vec2>) {
    let transform = rect_transform(position, size, rotation);
    out.extend(UNIT_QUAD.iter().map(|&corner| transform.transform_point2(corner)));
}

/// Signed area of a triangle list (positive for counter-clockwise in a y-up
/// frame).
pub fn triangle_list_area(vertices: &[Vec2]) -> f32 {
    vertices
        .chunks_exact(3)
        .map(|tri| (tri[1] - tri[0]).perp_dot(tri[2] - tri[0]) * 0.5)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeometryError;

    #[test]
    fn test_fan_counts() {
        assert_eq!(triangulate_convex_vertex_count(0), 0);
        assert_eq!(triangulate_convex_vertex_count(2), 0);
        assert_eq!(triangulate_convex_vertex_count(3), 3);
        assert_eq!(triangulate_convex_vertex_count(6), 12);
    }

    #[test]
    fn test_fan_order() {
        let square = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ];
        let mut out = Vec::new();
        triangulate_convex(&square, &mut out).unwrap();
        assert_eq!(out, vec![square[0], square[1], square[2], square[0], square[2], square[3]]);
    }

    #[test]
    fn test_fan_rejects_two_points() {
        let mut out = Vec::new();
        let err = triangulate_convex(&[Vec2::ZERO, Vec2::ONE], &mut out).unwrap_err();
        assert_eq!(
            err,
            GeometryError::InsufficientPoints {
                required: 3,
                provided: 2
            }
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_unordered_square_covers_area() {
        let shuffled = [
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, 0.0),
        ];
        let mut out = Vec::new();
        triangulate_unordered_convex(&shuffled, &mut out).unwrap();
        assert_eq!(out.len(), 6);
        assert!((triangle_list_area(&out) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_rect_unrotated() {
        let mut out = Vec::new();
        rect(Vec2::new(10.0, 20.0), Vec2::new(4.0, 2.0), 0.0, &mut out);
        assert_eq!(out.len(), rect_vertex_count());
        assert_eq!(out[0], Vec2::new(10.0, 22.0));
        assert_eq!(out[1], Vec2::new(14.0, 20.0));
        assert_eq!(out[4], Vec2::new(14.0, 22.0));
    }

    #[test]
    fn test_rect_rotation_keeps_centre() {
        let mut out = Vec::new();
        rect(Vec2::ZERO, Vec2::new(4.0, 2.0), std::f32::consts::FRAC_PI_2, &mut out);
        // Opposite corners (0,1)/(1,0) of the unit quad still average to the centre.
        let centre = (out[0] + out[1]) * 0.5;
        assert!((centre - Vec2::new(2.0, 1.0)).length() < 1e-5);
        assert!((triangle_list_area(&out).abs() - 8.0).abs() < 1e-4);
    }
}
