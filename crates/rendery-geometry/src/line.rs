//! Width-ed line segments and mitered polylines.

use glam::Vec2;
use rendery_core::math::perp;
use rendery_core::profiling::profile_function;

use crate::error::{GeometryResult, require_points};

/// Number of vertices emitted by [`line`].
pub const fn line_vertex_count() -> usize {
    6
}

/// Tessellate a single segment of the given width into two triangles.
///
/// The quad corners are `from ± n` and `to ± n` where `n` is the segment
/// normal scaled to half the width. Emits `(from+n, from-n, to+n)` followed by
/// `(to+n, to-n, from-n)`.
///
/// `from` and `to` must differ: a zero-length segment has no direction and
/// produces NaN vertices.
pub fn line(from: Vec2, to: Vec2, width: f32, out: &mut Vec<Vec2>) {
    let normal = perp((to - from).normalize()) * (width / 2.0);
    let from1 = from + normal;
    let from2 = from - normal;
    let to1 = to + normal;
    let to2 = to - normal;

    out.extend_from_slice(&[from1, from2, to1, to1, to2, from2]);
}

/// Number of vertices emitted by [`polyline_miter`] for `points` points.
///
/// Two points degrade to a single [`line`]; otherwise every edge contributes
/// six vertices. Returns 0 when there are too few points to draw anything.
pub const fn polyline_miter_vertex_count(points: usize, closed: bool) -> usize {
    if points < 2 {
        0
    } else if points == 2 {
        line_vertex_count()
    } else if closed {
        points * 6
    } else {
        (points - 1) * 6
    }
}

/// Tessellate a polyline with mitered joints.
///
/// When `closed` is set an extra edge joins the last point back to the first
/// and every joint is mitered; otherwise the first and last vertices get a
/// straight perpendicular cap.
///
/// Miter length is `half_width / dot(normal, miter)` and is not clamped, so
/// joints that fold back on themselves produce very long or NaN offsets.
pub fn polyline_miter(
    points: &[Vec2],
    width: f32,
    closed: bool,
    out: &mut Vec<Vec2>,
) -> GeometryResult<()> {
    profile_function!();
    require_points(points.len(), 2)?;

    if points.len() == 2 {
        line(points[0], points[1], width, out);
        return Ok(());
    }

    let n = points.len();
    let edges = if closed { n } else { n - 1 };
    let half_width = width / 2.0;
    out.reserve(edges * 6);

    for i in 0..edges {
        let from = points[i];
        let to = points[(i + 1) % n];
        let dir = (to - from).normalize();
        let normal = perp(dir);

        let from_offset = if !closed && i == 0 {
            normal * half_width
        } else {
            let prev = points[(i + n - 1) % n];
            miter_offset(from - prev, dir, normal, half_width)
        };

        let to_offset = if !closed && i >= n - 2 {
            normal * half_width
        } else {
            let next = points[(i + 2) % n];
            miter_offset(next - to, dir, normal, half_width)
        };

        out.extend_from_slice(&[
            from + from_offset,
            from - from_offset,
            to + to_offset,
            to + to_offset,
            to - to_offset,
            from - from_offset,
        ]);
    }

    Ok(())
}

/// Offset at a joint between `other` (the neighbouring edge vector) and the
/// current edge direction `dir`.
#[inline]
fn miter_offset(other: Vec2, dir: Vec2, normal: Vec2, half_width: f32) -> Vec2 {
    let miter = perp((other.normalize() + dir).normalize());
    miter * (half_width / normal.dot(miter))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_line_horizontal() {
        let mut out = Vec::new();
        line(Vec2::ZERO, Vec2::new(10.0, 0.0), 2.0, &mut out);
        assert_eq!(out.len(), line_vertex_count());
        assert!(approx(out[0], Vec2::new(0.0, 1.0)));
        assert!(approx(out[1], Vec2::new(0.0, -1.0)));
        assert!(approx(out[2], Vec2::new(10.0, 1.0)));
        assert!(approx(out[3], Vec2::new(10.0, 1.0)));
        assert!(approx(out[4], Vec2::new(10.0, -1.0)));
        assert!(approx(out[5], Vec2::new(0.0, -1.0)));
    }

    #[test]
    fn test_line_appends() {
        let mut out = vec![Vec2::splat(99.0)];
        line(Vec2::ZERO, Vec2::Y, 1.0, &mut out);
        assert_eq!(out.len(), 7);
        assert_eq!(out[0], Vec2::splat(99.0));
    }

    #[test]
    fn test_zero_length_line_is_nan() {
        let mut out = Vec::new();
        line(Vec2::ONE, Vec2::ONE, 1.0, &mut out);
        assert!(out.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_vertex_counts() {
        assert_eq!(polyline_miter_vertex_count(0, false), 0);
        assert_eq!(polyline_miter_vertex_count(1, true), 0);
        assert_eq!(polyline_miter_vertex_count(2, false), 6);
        assert_eq!(polyline_miter_vertex_count(2, true), 6);
        assert_eq!(polyline_miter_vertex_count(3, false), 12);
        assert_eq!(polyline_miter_vertex_count(3, true), 18);
        assert_eq!(polyline_miter_vertex_count(5, true), 30);
    }

    #[test]
    fn test_polyline_right_angle_miter() {
        // L-shape: (0,0) -> (10,0) -> (10,10), width 2.
        let points = [Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0)];
        let mut out = Vec::new();
        polyline_miter(&points, 2.0, false, &mut out).unwrap();
        assert_eq!(out.len(), 12);

        // First edge ends at the mitered corner, offset (-1, 1) from (10, 0).
        assert!(approx(out[2], Vec2::new(9.0, 1.0)));
        assert!(approx(out[4], Vec2::new(11.0, -1.0)));
        // Second edge starts at the same corner.
        assert!(approx(out[6], Vec2::new(9.0, 1.0)));
        assert!(approx(out[7], Vec2::new(11.0, -1.0)));
        // Open end gets a straight cap.
        assert!(approx(out[8], Vec2::new(9.0, 10.0)));
        assert!(approx(out[10], Vec2::new(11.0, 10.0)));
    }

    #[test]
    fn test_polyline_collinear_joint_is_straight() {
        let points = [Vec2::ZERO, Vec2::new(5.0, 0.0), Vec2::new(10.0, 0.0)];
        let mut out = Vec::new();
        polyline_miter(&points, 4.0, false, &mut out).unwrap();
        for v in &out {
            assert!((v.y.abs() - 2.0).abs() < 1e-5, "{v:?} off the stroke edge");
        }
    }
}
