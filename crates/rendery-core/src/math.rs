/// Fast mathematical operations using SIMD-accelerated `glam` types.
///
/// This module re-exports the [`glam`] crate. Rendery only needs the 2D subset
/// ([`Vec2`], [`Affine2`], [`Mat4`] for projections) but everything is available.
///
/// [`glam`]: https://docs.rs/glam
pub mod fast {
    pub use glam::*;
}

pub use fast::*;

use std::f32::consts::TAU;

/// Counter-clockwise perpendicular of `v`, i.e. `(-v.y, v.x)`.
#[inline]
pub fn perp(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// IEEE 754 remainder of `x / y`: `x - y * n` where `n` is `x / y` rounded to
/// the nearest integer, ties to even. The result lies in `[-y/2, y/2]`.
#[inline]
pub fn ieee_remainder(x: f32, y: f32) -> f32 {
    x - y * (x / y).round_ties_even()
}

/// Wrap an angle in radians into `[-π, π]`.
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    ieee_remainder(angle, TAU)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_perp_is_ccw() {
        assert_eq!(perp(Vec2::X), Vec2::Y);
        assert_eq!(perp(Vec2::Y), -Vec2::X);
    }

    #[test]
    fn test_normalize_angle() {
        assert!((normalize_angle(3.0 * PI / 2.0) + PI / 2.0).abs() < 1e-5);
        assert!((normalize_angle(PI / 2.0) - PI / 2.0).abs() < 1e-6);
        assert!(normalize_angle(TAU).abs() < 1e-6);
    }
}
