//! Portable Scalar Tier
//!
//! Plain-field reference implementation of the backend contract. Always
//! available on every target; the hardware tiers are tolerance-checked
//! against this one.

use crate::float;
use crate::quaternion::Quaternion;
use crate::vector::Vector;

use super::Backend;

/// If the interpolation endpoints are closer than this in dot product,
/// the spherical formula's sine denominator is unusable and slerp falls
/// back to normalized linear interpolation.
const SLERP_PARALLEL_THRESHOLD: f32 = 1.0 - 1e-6;

pub(crate) struct Scalar;

impl Backend for Scalar {
    #[inline]
    unsafe fn load_aligned(ptr: *const f32) -> Vector {
        // The portable tier imposes no alignment beyond f32's own.
        Self::load_unaligned(ptr)
    }

    #[inline]
    unsafe fn load_unaligned(ptr: *const f32) -> Vector {
        Vector::new(
            ptr.read(),
            ptr.add(1).read(),
            ptr.add(2).read(),
            ptr.add(3).read(),
        )
    }

    #[inline]
    fn splat(s: f32) -> Vector {
        Vector::new(s, s, s, s)
    }

    #[inline]
    fn add(a: Vector, b: Vector) -> Vector {
        Vector::new(a.x + b.x, a.y + b.y, a.z + b.z, a.w + b.w)
    }

    #[inline]
    fn sub(a: Vector, b: Vector) -> Vector {
        Vector::new(a.x - b.x, a.y - b.y, a.z - b.z, a.w - b.w)
    }

    #[inline]
    fn mul(a: Vector, b: Vector) -> Vector {
        Vector::new(a.x * b.x, a.y * b.y, a.z * b.z, a.w * b.w)
    }

    #[inline]
    fn scale(a: Vector, s: f32) -> Vector {
        Vector::new(a.x * s, a.y * s, a.z * s, a.w * s)
    }

    #[inline]
    fn neg(a: Vector) -> Vector {
        Vector::new(-a.x, -a.y, -a.z, -a.w)
    }

    #[inline]
    fn dot(a: Vector, b: Vector) -> f32 {
        a.x * b.x + a.y * b.y + a.z * b.z + a.w * b.w
    }

    #[inline]
    fn dot3(a: Vector, b: Vector) -> f32 {
        a.x * b.x + a.y * b.y + a.z * b.z
    }

    #[inline]
    fn cross3(a: Vector, b: Vector) -> Vector {
        Vector::new(
            a.y * b.z - a.z * b.y,
            a.z * b.x - a.x * b.z,
            a.x * b.y - a.y * b.x,
            0.0,
        )
    }

    #[inline]
    fn length_sqr(a: Vector) -> f32 {
        Self::dot(a, a)
    }

    #[inline]
    fn length(a: Vector) -> f32 {
        float::sqrt(Self::length_sqr(a))
    }

    #[inline]
    fn normalize(a: Vector) -> Vector {
        Self::scale(a, 1.0 / Self::length(a))
    }

    #[inline]
    fn quat_conjugate(q: Quaternion) -> Quaternion {
        Quaternion::new(-q.x, -q.y, -q.z, q.w)
    }

    #[inline]
    fn quat_inverse(q: Quaternion) -> Quaternion {
        let s = 1.0 / Self::length_sqr(q.to_vector());
        Quaternion::new(-q.x * s, -q.y * s, -q.z * s, q.w * s)
    }

    #[inline]
    fn quat_normalize(q: Quaternion) -> Quaternion {
        Quaternion::from_vector(Self::normalize(q.to_vector()))
    }

    #[inline]
    fn quat_mul(a: Quaternion, b: Quaternion) -> Quaternion {
        Quaternion::new(
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        )
    }

    fn quat_slerp(a: Quaternion, b: Quaternion, t: f32) -> Quaternion {
        let mut cos_half = Self::dot(a.to_vector(), b.to_vector());

        // q and -q encode the same rotation; flip one endpoint so the
        // interpolation takes the shorter arc.
        let b = if cos_half < 0.0 {
            cos_half = -cos_half;
            Quaternion::new(-b.x, -b.y, -b.z, -b.w)
        } else {
            b
        };

        if cos_half > SLERP_PARALLEL_THRESHOLD {
            let lerped = Self::add(
                Self::scale(a.to_vector(), 1.0 - t),
                Self::scale(b.to_vector(), t),
            );
            return Quaternion::from_vector(Self::normalize(lerped));
        }

        let half_angle = float::acos(cos_half);
        let sin_half = float::sin(half_angle);
        let w0 = float::sin((1.0 - t) * half_angle) / sin_half;
        let w1 = float::sin(t * half_angle) / sin_half;

        Quaternion::from_vector(Self::add(
            Self::scale(a.to_vector(), w0),
            Self::scale(b.to_vector(), w1),
        ))
    }

    #[inline]
    fn quat_rotate(q: Quaternion, v: Vector) -> Vector {
        // v' = v + w·t + im(q) × t  with  t = 2·(im(q) × v),
        // the expanded form of q·(0,v)·q*.
        let im = Vector::new(q.x, q.y, q.z, 0.0);
        let v3 = Vector::new(v.x, v.y, v.z, 0.0);
        let t = Self::scale(Self::cross3(im, v3), 2.0);
        let r = Self::add(Self::add(v3, Self::scale(t, q.w)), Self::cross3(im, t));
        Vector::new(r.x, r.y, r.z, 0.0)
    }
}
