//! Integration tests for vmath
//!
//! Property checks over the public API only, exercising whichever backend
//! tier the build selected. Tolerances are 1e-5 unless an exact (bit-level)
//! guarantee is part of the contract.

use approx::assert_abs_diff_eq;

use vmath::{EulerOrder, Matrix, Quaternion, Transform, Vector};

const TOL: f32 = 1e-5;

// ============================================================================
// Helpers
// ============================================================================

fn assert_quat_close(a: Quaternion, b: Quaternion) {
    assert_abs_diff_eq!(a.x, b.x, epsilon = TOL);
    assert_abs_diff_eq!(a.y, b.y, epsilon = TOL);
    assert_abs_diff_eq!(a.z, b.z, epsilon = TOL);
    assert_abs_diff_eq!(a.w, b.w, epsilon = TOL);
}

fn assert_vec_close(a: Vector, b: Vector) {
    assert_abs_diff_eq!(a.x, b.x, epsilon = TOL);
    assert_abs_diff_eq!(a.y, b.y, epsilon = TOL);
    assert_abs_diff_eq!(a.z, b.z, epsilon = TOL);
    assert_abs_diff_eq!(a.w, b.w, epsilon = TOL);
}

/// A spread of unit quaternions covering all axes and a few odd angles.
fn unit_samples() -> [Quaternion; 6] {
    [
        Quaternion::IDENTITY,
        Quaternion::from_axis_angle(Vector::UNIT_X, 0.3),
        Quaternion::from_axis_angle(Vector::UNIT_Y, -1.2),
        Quaternion::from_axis_angle(Vector::UNIT_Z, 2.8),
        Quaternion::from_axis_angle(Vector::new(1.0, 1.0, 1.0, 0.0), 0.9),
        Quaternion::from_axis_angle(Vector::new(-2.0, 0.5, 1.5, 0.0), -2.4),
    ]
}

// ============================================================================
// Algebraic identities
// ============================================================================

/// Conjugation is an exact involution, no tolerance needed.
#[test]
fn test_conjugate_involution_is_exact() {
    let samples = [
        Quaternion::new(0.1, -0.2, 0.3, -0.4),
        Quaternion::new(1e-20, 1e20, -0.0, 5.5),
        Quaternion::ZERO,
    ];
    for q in samples {
        assert_eq!(q.conjugate().conjugate(), q);
    }
}

#[test]
fn test_inverse_equals_conjugate_for_unit() {
    for q in unit_samples() {
        assert_quat_close(q.inverse(), q.conjugate());
    }
}

#[test]
fn test_general_inverse_identity() {
    // q⁻¹ = conjugate(q)/|q|² for arbitrary nonzero q, and q·q⁻¹ = 1.
    let q = Quaternion::new(2.0, -3.0, 1.5, 0.5);
    let s = 1.0 / q.length_sqr();
    let expected = Quaternion::new(-q.x * s, -q.y * s, -q.z * s, q.w * s);
    assert_quat_close(q.inverse(), expected);
    assert_quat_close(q * q.inverse(), Quaternion::IDENTITY);
}

#[test]
fn test_normalize_produces_unit_length() {
    let samples = [
        Quaternion::new(10.0, 0.0, 0.0, 0.0),
        Quaternion::new(0.001, -0.002, 0.003, 0.004),
        Quaternion::new(1.0, 1.0, 1.0, 1.0),
    ];
    for q in samples {
        assert_abs_diff_eq!(q.normalize().length(), 1.0, epsilon = TOL);
    }
}

#[test]
fn test_multiply_identity_neutral_both_sides() {
    for q in unit_samples() {
        assert_quat_close(Quaternion::IDENTITY * q, q);
        assert_quat_close(q * Quaternion::IDENTITY, q);
    }
}

#[test]
fn test_multiply_associative() {
    let qs = unit_samples();
    for window in qs.windows(3) {
        let (a, b, c) = (window[0], window[1], window[2]);
        assert_quat_close((a * b) * c, a * (b * c));
    }
}

// ============================================================================
// Interpolation
// ============================================================================

#[test]
fn test_slerp_endpoints_and_self() {
    let qs = unit_samples();
    for pair in qs.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert_quat_close(a.slerp(b, 0.0), a);
        assert_quat_close(a.slerp(b, 1.0), b);
    }
    for q in qs {
        for t in [0.0, 0.3, 0.5, 0.9, 1.0] {
            assert_quat_close(q.slerp(q, t), q);
        }
    }
}

#[test]
fn test_slerp_midpoint_is_half_rotation() {
    let goal = Quaternion::from_axis_angle(Vector::UNIT_Z, core::f32::consts::FRAC_PI_2);
    let mid = Quaternion::IDENTITY.slerp(goal, 0.5);
    let expected = Quaternion::from_axis_angle(Vector::UNIT_Z, core::f32::consts::FRAC_PI_4);
    assert_quat_close(mid, expected);

    // And the interpolated rotation behaves like a 45° turn.
    let v = mid.rotate(Vector::UNIT_X);
    let half_sqrt2 = 0.5f32.sqrt();
    assert_abs_diff_eq!(v.x, half_sqrt2, epsilon = TOL);
    assert_abs_diff_eq!(v.y, half_sqrt2, epsilon = TOL);
}

#[test]
fn test_slerp_stays_unit_length_along_the_arc() {
    let a = Quaternion::from_axis_angle(Vector::UNIT_X, 0.4);
    let b = Quaternion::from_axis_angle(Vector::new(0.0, 1.0, 1.0, 0.0), 2.0);
    for i in 0..=10 {
        let t = i as f32 / 10.0;
        assert_abs_diff_eq!(a.slerp(b, t).length(), 1.0, epsilon = TOL);
    }
}

// ============================================================================
// Rotation
// ============================================================================

#[test]
fn test_rotate_90_about_z_maps_x_to_y() {
    let q = Quaternion::from_axis_angle(Vector::UNIT_Z, core::f32::consts::FRAC_PI_2);
    let r = q.rotate(Vector::new(1.0, 0.0, 0.0, 0.0));
    assert_vec_close(r, Vector::new(0.0, 1.0, 0.0, 0.0));
    assert_eq!(r.w, 0.0);
}

#[test]
fn test_rotate_preserves_length_for_unit_quaternions() {
    let v = Vector::new(1.0, -2.0, 3.0, 0.0);
    for q in unit_samples() {
        assert_abs_diff_eq!(q.rotate(v).length(), v.length(), epsilon = 1e-4);
    }
}

#[test]
fn test_rotate_matches_full_quaternion_sandwich() {
    // The double-cross fast path must agree with q·(0,v)·q*.
    let v = Vector::new(0.5, 2.0, -1.0, 0.0);
    for q in unit_samples() {
        let pure = Quaternion::new(v.x, v.y, v.z, 0.0);
        let sandwich = q * pure * q.conjugate();
        let fast = q.rotate(v);
        assert_vec_close(fast, sandwich.to_vector());
    }
}

// ============================================================================
// Euler orders
// ============================================================================

#[test]
fn test_every_named_order_round_trips() {
    let orders = [
        EulerOrder::XYZS, EulerOrder::XYXS, EulerOrder::XZYS, EulerOrder::XZXS,
        EulerOrder::YZXS, EulerOrder::YZYS, EulerOrder::YXZS, EulerOrder::YXYS,
        EulerOrder::ZXYS, EulerOrder::ZXZS, EulerOrder::ZYXS, EulerOrder::ZYZS,
        EulerOrder::ZYXR, EulerOrder::XYXR, EulerOrder::YZXR, EulerOrder::XZXR,
        EulerOrder::XZYR, EulerOrder::YZYR, EulerOrder::ZXYR, EulerOrder::YXYR,
        EulerOrder::YXZR, EulerOrder::ZXZR, EulerOrder::XYZR, EulerOrder::ZYZR,
    ];
    for order in orders {
        let repacked = EulerOrder::pack(
            order.axis(),
            order.parity(),
            order.repetition(),
            order.frame(),
        );
        assert_eq!(repacked, order);
    }
}

// ============================================================================
// Layout
// ============================================================================

#[test]
fn test_matrix_views_agree_bit_for_bit() {
    let mut m = Matrix::ZERO;
    for r in 0..4 {
        for c in 0..4 {
            m.set(r, c, (r as f32) * 10.0 + c as f32 + 0.25);
        }
    }
    for r in 0..4 {
        for c in 0..4 {
            let through_2d = m.as_rows()[r][c];
            let through_flat = m.as_array()[r * 4 + c];
            let through_row = m.row(r).to_array()[c];
            assert_eq!(through_2d.to_bits(), through_flat.to_bits());
            assert_eq!(through_2d.to_bits(), through_row.to_bits());
        }
    }
}

#[test]
fn test_flat_buffer_interchange() {
    // Serializing to a flat f32 buffer is a cast, and field order is x,y,z,w
    // then row-major.
    let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let lanes: [f32; 4] = bytemuck::cast(q);
    assert_eq!(lanes, [1.0, 2.0, 3.0, 4.0]);

    let t = Transform::new(q, Vector::new(5.0, 6.0, 7.0, 0.0), 8.0);
    let lanes: [f32; 8] = bytemuck::cast(t);
    assert_eq!(lanes, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
}
