//! Rotation Abstraction Using Quaternions
//!
//! Same 16-byte layout as [`Vector`]: x, y, z carry the imaginary (vector)
//! part, w the real (scalar) part. Every operation compiles directly into
//! the backend tier selected at build time.
//!
//! Operations documented as requiring unit quaternions (`slerp`, `rotate`,
//! the inverse-equals-conjugate shortcut) do not verify the precondition;
//! feeding them non-unit inputs yields numerically wrong results, not a
//! detectable fault.

use core::ops::{Add, Mul, Neg, Sub};

use bytemuck::{Pod, Zeroable};
use static_assertions::const_assert_eq;

use crate::backend::{Active, Backend};
use crate::float;
use crate::vector::Vector;

/// Rotation value with the same lane layout as [`Vector`].
#[repr(C)]
#[cfg_attr(
    all(feature = "simd", any(target_arch = "x86_64", target_arch = "aarch64")),
    repr(align(16))
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

unsafe impl Zeroable for Quaternion {}
unsafe impl Pod for Quaternion {}

const_assert_eq!(core::mem::size_of::<Quaternion>(), 16);

impl Default for Quaternion {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    /// All lanes zero. Not a rotation; useful as an accumulator seed.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// The multiplicative identity, (0, 0, 0, 1).
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Reinterpret a vector's lanes as a quaternion. Free: the layouts are
    /// identical.
    #[inline]
    pub const fn from_vector(v: Vector) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }

    #[inline]
    pub const fn to_vector(self) -> Vector {
        Vector::new(self.x, self.y, self.z, self.w)
    }

    /// Load four contiguous floats (x, y, z, w) from a 16-byte-aligned
    /// address.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reading 16 bytes and 16-byte aligned when a
    /// hardware tier is active. Misalignment is undefined behavior; no check
    /// is performed.
    #[inline]
    pub unsafe fn load_aligned(ptr: *const f32) -> Self {
        Self::from_vector(Active::load_aligned(ptr))
    }

    /// Load four contiguous floats (x, y, z, w) from an address of any
    /// alignment.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reading 16 bytes.
    #[inline]
    pub unsafe fn load_unaligned(ptr: *const f32) -> Self {
        Self::from_vector(Active::load_unaligned(ptr))
    }

    /// Rotation of `angle` radians about `axis` (xyz lanes; need not be
    /// normalized, zero-length axes excepted).
    pub fn from_axis_angle(axis: Vector, angle: f32) -> Self {
        let half = angle * 0.5;
        let s = float::sin(half);
        let axis = Vector::new(axis.x, axis.y, axis.z, 0.0).normalize();
        Self::new(axis.x * s, axis.y * s, axis.z * s, float::cos(half))
    }

    /// (−x, −y, −z, w). Exact involution: `q.conjugate().conjugate() == q`.
    #[inline]
    pub fn conjugate(self) -> Self {
        Active::quat_conjugate(self)
    }

    /// General multiplicative inverse, `conjugate(q) / |q|²`. For a unit
    /// quaternion this equals the conjugate; the general formula is computed
    /// regardless.
    #[inline]
    pub fn inverse(self) -> Self {
        Active::quat_inverse(self)
    }

    #[inline]
    pub fn length_sqr(self) -> f32 {
        Active::length_sqr(self.to_vector())
    }

    #[inline]
    pub fn length(self) -> f32 {
        Active::length(self.to_vector())
    }

    /// Four-lane dot product with `rhs`.
    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        Active::dot(self.to_vector(), rhs.to_vector())
    }

    /// Scale to unit length. Precondition: `length() > 0`; a zero quaternion
    /// produces non-finite lanes, not an error.
    #[inline]
    pub fn normalize(self) -> Self {
        Active::quat_normalize(self)
    }

    /// Spherical linear interpolation from `self` (t = 0) to `rhs` (t = 1)
    /// along the shorter arc. Both inputs must be unit length. Near-parallel
    /// endpoints degrade to normalized linear interpolation instead of
    /// dividing by a vanishing sine.
    #[inline]
    pub fn slerp(self, rhs: Self, t: f32) -> Self {
        Active::quat_slerp(self, rhs, t)
    }

    /// Rotate directional vector `v` — treated as (x, y, z, 0) — by this
    /// unit quaternion. Returns a directional vector with w = 0. Uses the
    /// expanded double-cross form of `q·(0,v)·q*`.
    #[inline]
    pub fn rotate(self, v: Vector) -> Vector {
        Active::quat_rotate(self, v)
    }
}

impl Mul for Quaternion {
    type Output = Self;

    /// Hamilton product. For unit rotations, `a * b` applies `b` first and
    /// `a` second.
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Active::quat_mul(self, rhs)
    }
}

impl Add for Quaternion {
    type Output = Self;

    /// Component-wise sum. Not a rotation; interpolation machinery.
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_vector(Active::add(self.to_vector(), rhs.to_vector()))
    }
}

impl Sub for Quaternion {
    type Output = Self;

    /// Component-wise difference. Not a rotation; interpolation machinery.
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_vector(Active::sub(self.to_vector(), rhs.to_vector()))
    }
}

impl Neg for Quaternion {
    type Output = Self;

    /// Negate every lane. Distinct from `conjugate`; `-q` encodes the same
    /// rotation as `q`.
    #[inline]
    fn neg(self) -> Self {
        Self::from_vector(Active::neg(self.to_vector()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::FRAC_PI_2;

    const TOL: f32 = 1e-5;

    fn assert_close(a: Quaternion, b: Quaternion) {
        assert!((a.x - b.x).abs() < TOL, "x: {} vs {}", a.x, b.x);
        assert!((a.y - b.y).abs() < TOL, "y: {} vs {}", a.y, b.y);
        assert!((a.z - b.z).abs() < TOL, "z: {} vs {}", a.z, b.z);
        assert!((a.w - b.w).abs() < TOL, "w: {} vs {}", a.w, b.w);
    }

    #[test]
    fn test_identity_literal() {
        assert_eq!(Quaternion::IDENTITY, Quaternion::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Quaternion::ZERO, Quaternion::new(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_conjugate_involution_exact() {
        let q = Quaternion::new(0.25, -1.5, 3.75, -0.125);
        assert_eq!(q.conjugate().conjugate(), q);
    }

    #[test]
    fn test_conjugate_vs_neg() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q.conjugate(), Quaternion::new(-1.0, -2.0, -3.0, 4.0));
        assert_eq!(-q, Quaternion::new(-1.0, -2.0, -3.0, -4.0));
    }

    #[test]
    fn test_inverse_matches_conjugate_over_length_sqr() {
        // Non-unit on purpose: q⁻¹ must equal conjugate(q)/|q|².
        let q = Quaternion::new(1.0, -2.0, 3.0, 4.0);
        let s = 1.0 / q.length_sqr();
        let expected = Quaternion::new(-q.x * s, -q.y * s, -q.z * s, q.w * s);
        assert_close(q.inverse(), expected);
    }

    #[test]
    fn test_inverse_times_q_is_identity() {
        let q = Quaternion::new(0.5, -1.25, 2.0, 3.0);
        assert_close(q * q.inverse(), Quaternion::IDENTITY);
        assert_close(q.inverse() * q, Quaternion::IDENTITY);
    }

    #[test]
    fn test_inverse_of_unit_is_conjugate() {
        let q = Quaternion::from_axis_angle(Vector::new(1.0, 2.0, -0.5, 0.0), 0.8);
        assert_close(q.inverse(), q.conjugate());
    }

    #[test]
    fn test_normalize_unit_length() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0).normalize();
        assert!((q.length() - 1.0).abs() < TOL);
    }

    #[test]
    fn test_mul_identity_neutral() {
        let q = Quaternion::new(0.1, 0.2, 0.3, 0.9).normalize();
        assert_close(Quaternion::IDENTITY * q, q);
        assert_close(q * Quaternion::IDENTITY, q);
    }

    #[test]
    fn test_mul_associative() {
        let a = Quaternion::from_axis_angle(Vector::UNIT_X, 0.3);
        let b = Quaternion::from_axis_angle(Vector::UNIT_Y, 1.1);
        let c = Quaternion::from_axis_angle(Vector::UNIT_Z, -0.7);
        assert_close((a * b) * c, a * (b * c));
    }

    #[test]
    fn test_mul_composition_order() {
        // a * b applies b first, then a: the composite rotation must match
        // applying the two rotations step by step in that order.
        let a = Quaternion::from_axis_angle(Vector::UNIT_Y, FRAC_PI_2);
        let b = Quaternion::from_axis_angle(Vector::UNIT_Z, FRAC_PI_2);
        let composed = (a * b).rotate(Vector::UNIT_X);
        let stepwise = a.rotate(b.rotate(Vector::UNIT_X));
        assert!((composed.x - stepwise.x).abs() < TOL);
        assert!((composed.y - stepwise.y).abs() < TOL);
        assert!((composed.z - stepwise.z).abs() < TOL);
    }

    #[test]
    fn test_add_sub_componentwise() {
        let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let b = Quaternion::new(0.5, 0.5, 0.5, 0.5);
        assert_eq!(a + b, Quaternion::new(1.5, 2.5, 3.5, 4.5));
        assert_eq!(a - b, Quaternion::new(0.5, 1.5, 2.5, 3.5));
    }

    #[test]
    fn test_rotate_90_about_z() {
        let q = Quaternion::from_axis_angle(Vector::UNIT_Z, FRAC_PI_2);
        let r = q.rotate(Vector::new(1.0, 0.0, 0.0, 0.0));
        assert!((r.x).abs() < TOL);
        assert!((r.y - 1.0).abs() < TOL);
        assert!((r.z).abs() < TOL);
        assert_eq!(r.w, 0.0);
    }

    #[test]
    fn test_rotate_preserves_length() {
        let q = Quaternion::from_axis_angle(Vector::new(1.0, 1.0, 1.0, 0.0), 2.1);
        let v = Vector::new(3.0, -4.0, 12.0, 0.0);
        assert!((q.rotate(v).length() - v.length()).abs() < 1e-4);
    }

    #[test]
    fn test_slerp_endpoints() {
        let a = Quaternion::from_axis_angle(Vector::UNIT_X, 0.4);
        let b = Quaternion::from_axis_angle(Vector::UNIT_Y, 1.3);
        assert_close(a.slerp(b, 0.0), a);
        assert_close(a.slerp(b, 1.0), b);
    }

    #[test]
    fn test_slerp_same_input() {
        let q = Quaternion::from_axis_angle(Vector::UNIT_Z, 0.9);
        for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_close(q.slerp(q, t), q);
        }
    }

    #[test]
    fn test_slerp_halfway_is_half_angle() {
        let a = Quaternion::IDENTITY;
        let b = Quaternion::from_axis_angle(Vector::UNIT_Z, FRAC_PI_2);
        let half = a.slerp(b, 0.5);
        let expected = Quaternion::from_axis_angle(Vector::UNIT_Z, FRAC_PI_2 * 0.5);
        assert_close(half, expected);
    }

    #[test]
    fn test_slerp_takes_shorter_arc() {
        let a = Quaternion::from_axis_angle(Vector::UNIT_Z, 0.2);
        let b = -Quaternion::from_axis_angle(Vector::UNIT_Z, 0.4);
        // b is the far-side representation; slerp must flip it and land on
        // the 0.3 rad rotation at the midpoint.
        let mid = a.slerp(b, 0.5);
        let expected = Quaternion::from_axis_angle(Vector::UNIT_Z, 0.3);
        let aligned = if mid.dot(expected) < 0.0 { -mid } else { mid };
        assert_close(aligned, expected);
    }

    #[test]
    fn test_slerp_near_parallel_falls_back() {
        let a = Quaternion::from_axis_angle(Vector::UNIT_X, 1.0);
        let b = Quaternion::from_axis_angle(Vector::UNIT_X, 1.0 + 1e-6);
        let mid = a.slerp(b, 0.5);
        assert!((mid.length() - 1.0).abs() < TOL);
        assert_close(mid, a);
    }

    #[test]
    fn test_loads() {
        let data = [0.1f32, 0.2, 0.3, 0.4];
        let q = unsafe { Quaternion::load_unaligned(data.as_ptr()) };
        assert_eq!(q, Quaternion::new(0.1, 0.2, 0.3, 0.4));
    }
}
