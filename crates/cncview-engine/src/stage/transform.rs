use glam::Vec4;

use super::{ClipVertex, TransformConfig, VertexAttributes, CLIP_W, CLIP_Z, POSITION_DIVISOR};

/// Maps one vertex into clip space.
///
/// Total over all inputs: NaN and infinities flow through the arithmetic
/// unchecked. Color is copied without being read.
#[inline]
pub fn transform(attrs: VertexAttributes, cfg: &TransformConfig) -> ClipVertex {
    let p = attrs.position;
    let clip_position = match *cfg {
        TransformConfig::Matrix(mvp) => {
            mvp * Vec4::new(p.x / POSITION_DIVISOR, p.y / POSITION_DIVISOR, CLIP_Z, CLIP_W)
        }
        TransformConfig::Scale(scale) => Vec4::new(scale * p.x, scale * p.y, CLIP_Z, CLIP_W),
    };

    ClipVertex {
        clip_position,
        color: attrs.color,
    }
}

#[cfg(test)]
mod tests {
    use glam::{Mat4, Vec2, Vec3};
    use proptest::prelude::*;

    use super::*;
    use crate::paint::Rgba;

    fn v(x: f32, y: f32, color: Rgba) -> VertexAttributes {
        VertexAttributes::new(Vec2::new(x, y), color)
    }

    fn close(a: f32, b: f32, magnitude: f32) -> bool {
        (a - b).abs() <= 1e-4 * magnitude.max(1.0)
    }

    /// Translation-free matrix: linear in position for the x/y outputs.
    fn linear_matrix(c: [f32; 8]) -> Mat4 {
        Mat4::from_cols(
            Vec4::new(c[0], c[1], c[2], c[3]),
            Vec4::new(c[4], c[5], c[6], c[7]),
            Vec4::Z,
            Vec4::W,
        )
    }

    // ── scenarios ─────────────────────────────────────────────────────────

    #[test]
    fn matrix_identity_divides_by_thousand() {
        let red = Rgba::new(1.0, 0.0, 0.0, 1.0);
        let out = transform(v(500.0, 0.0, red), &TransformConfig::matrix(Mat4::IDENTITY));
        assert_eq!(out.clip_position, Vec4::new(0.5, 0.0, 0.0, 1.0));
        assert_eq!(out.color, red);
    }

    #[test]
    fn matrix_origin_maps_to_w_column() {
        let linear = Mat4::from_rotation_z(0.7) * Mat4::from_scale(Vec3::new(3.0, -2.0, 1.0));
        let out = transform(v(0.0, 0.0, Rgba::white()), &TransformConfig::matrix(linear));
        assert!(out.clip_position.abs_diff_eq(Vec4::new(0.0, 0.0, 0.0, 1.0), 1e-6));

        let shifted = Mat4::from_translation(Vec3::new(0.25, -0.5, 0.0)) * linear;
        let out = transform(v(0.0, 0.0, Rgba::white()), &TransformConfig::matrix(shifted));
        assert!(out.clip_position.abs_diff_eq(shifted.w_axis, 1e-6));
    }

    #[test]
    fn matrix_is_applied_after_divisor() {
        let mvp = Mat4::from_scale(Vec3::new(2.0, 4.0, 1.0));
        let out = transform(v(250.0, -125.0, Rgba::black()), &TransformConfig::matrix(mvp));
        assert_eq!(out.clip_position, Vec4::new(0.5, -0.5, 0.0, 1.0));
    }

    #[test]
    fn scale_mode_scales_both_axes() {
        let green = Rgba::new(0.0, 1.0, 0.0, 1.0);
        let out = transform(v(0.5, -0.25, green), &TransformConfig::scale(2.0));
        assert_eq!(out.clip_position, Vec4::new(1.0, -0.5, 0.0, 1.0));
        assert_eq!(out.color, green);
    }

    #[test]
    fn zero_scale_collapses_to_origin() {
        for (x, y) in [(0.0, 0.0), (1234.5, -99.0), (-1.0e6, 3.0e5)] {
            let out = transform(v(x, y, Rgba::white()), &TransformConfig::scale(0.0));
            assert_eq!(out.clip_position, Vec4::new(0.0, 0.0, 0.0, 1.0));
        }
    }

    #[test]
    fn out_of_clip_volume_is_not_clamped() {
        let out = transform(v(5000.0, -3000.0, Rgba::white()), &TransformConfig::matrix(Mat4::IDENTITY));
        assert_eq!(out.clip_position, Vec4::new(5.0, -3.0, 0.0, 1.0));
    }

    // ── non-finite input ──────────────────────────────────────────────────

    #[test]
    fn nan_scale_propagates_to_xy_only() {
        let out = transform(v(1.0, 2.0, Rgba::white()), &TransformConfig::scale(f32::NAN));
        assert!(out.clip_position.x.is_nan());
        assert!(out.clip_position.y.is_nan());
        assert_eq!(out.clip_position.z, CLIP_Z);
        assert_eq!(out.clip_position.w, CLIP_W);
    }

    #[test]
    fn infinite_position_propagates_through_matrix() {
        let out = transform(
            v(f32::INFINITY, 0.0, Rgba::white()),
            &TransformConfig::matrix(Mat4::IDENTITY),
        );
        assert_eq!(out.clip_position.x, f32::INFINITY);
    }

    // ── properties ────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn identity_matrix_rule(x in -1.0e6f32..1.0e6, y in -1.0e6f32..1.0e6) {
            let out = transform(v(x, y, Rgba::white()), &TransformConfig::matrix(Mat4::IDENTITY));
            prop_assert_eq!(
                out.clip_position,
                Vec4::new(x / POSITION_DIVISOR, y / POSITION_DIVISOR, CLIP_Z, CLIP_W)
            );
        }

        #[test]
        fn scale_rule(x in -1.0e4f32..1.0e4, y in -1.0e4f32..1.0e4, s in -100.0f32..100.0) {
            let out = transform(v(x, y, Rgba::white()), &TransformConfig::scale(s));
            prop_assert_eq!(out.clip_position, Vec4::new(s * x, s * y, CLIP_Z, CLIP_W));
        }

        #[test]
        fn color_is_forwarded_bit_for_bit(
            c in prop::array::uniform4(proptest::num::f32::ANY),
            x in -1.0e3f32..1.0e3,
            s in -10.0f32..10.0,
        ) {
            let color = Rgba::from(c);
            for cfg in [TransformConfig::scale(s), TransformConfig::matrix(Mat4::IDENTITY)] {
                let out = transform(v(x, -x, color), &cfg);
                prop_assert_eq!(out.color.to_bits(), color.to_bits());
            }
        }

        #[test]
        fn scale_mode_is_linear(
            p1 in (-1.0e3f32..1.0e3, -1.0e3f32..1.0e3),
            p2 in (-1.0e3f32..1.0e3, -1.0e3f32..1.0e3),
            k in -10.0f32..10.0,
            s in -10.0f32..10.0,
        ) {
            let cfg = TransformConfig::scale(s);
            let (p1, p2) = (Vec2::new(p1.0, p1.1), Vec2::new(p2.0, p2.1));
            let lhs = transform(VertexAttributes::new(k * p1 + p2, Rgba::white()), &cfg).clip_position;
            let a = transform(VertexAttributes::new(p1, Rgba::white()), &cfg).clip_position;
            let b = transform(VertexAttributes::new(p2, Rgba::white()), &cfg).clip_position;
            let rhs = k * a + b;
            let mag = (k * a).abs().max((b).abs()).max(lhs.abs());
            prop_assert!(close(lhs.x, rhs.x, mag.x));
            prop_assert!(close(lhs.y, rhs.y, mag.y));
        }

        #[test]
        fn matrix_mode_is_linear(
            cols in prop::array::uniform8(-2.0f32..2.0),
            p1 in (-1.0e3f32..1.0e3, -1.0e3f32..1.0e3),
            p2 in (-1.0e3f32..1.0e3, -1.0e3f32..1.0e3),
            k in -10.0f32..10.0,
        ) {
            let cfg = TransformConfig::matrix(linear_matrix(cols));
            let (p1, p2) = (Vec2::new(p1.0, p1.1), Vec2::new(p2.0, p2.1));
            let lhs = transform(VertexAttributes::new(k * p1 + p2, Rgba::white()), &cfg).clip_position;
            let a = transform(VertexAttributes::new(p1, Rgba::white()), &cfg).clip_position;
            let b = transform(VertexAttributes::new(p2, Rgba::white()), &cfg).clip_position;
            let rhs = k * a + b;
            let mag = (k * a).abs().max(b.abs()).max(lhs.abs());
            prop_assert!(close(lhs.x, rhs.x, mag.x));
            prop_assert!(close(lhs.y, rhs.y, mag.y));
        }
    }
}
