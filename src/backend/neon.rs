//! aarch64 NEON Tier
//!
//! NEON is mandatory on aarch64, so this tier has no sub-levels: one
//! implementation of the contract built on `core::arch::aarch64`.

use core::arch::aarch64::*;

use crate::float;
use crate::quaternion::Quaternion;
use crate::vector::Vector;

use super::Backend;

const SLERP_PARALLEL_THRESHOLD: f32 = 1.0 - 1e-6;

const SIGN: u32 = 0x8000_0000;

pub(crate) struct Neon;

#[inline(always)]
fn vec_reg(v: Vector) -> float32x4_t {
    unsafe { vld1q_f32((&v as *const Vector).cast()) }
}

#[inline(always)]
fn reg_vec(m: float32x4_t) -> Vector {
    let mut out = Vector::ZERO;
    unsafe { vst1q_f32((&mut out as *mut Vector).cast(), m) };
    out
}

#[inline(always)]
fn quat_reg(q: Quaternion) -> float32x4_t {
    unsafe { vld1q_f32((&q as *const Quaternion).cast()) }
}

#[inline(always)]
fn reg_quat(m: float32x4_t) -> Quaternion {
    let mut out = Quaternion::ZERO;
    unsafe { vst1q_f32((&mut out as *mut Quaternion).cast(), m) };
    out
}

/// Flip the signs of the lanes whose mask entry is the sign bit.
#[inline(always)]
unsafe fn flip_signs(v: float32x4_t, mask: [u32; 4]) -> float32x4_t {
    vreinterpretq_f32_u32(veorq_u32(vreinterpretq_u32_f32(v), vld1q_u32(mask.as_ptr())))
}

/// Rotate the xyz lanes left: [x y z w] -> [y z x w].
#[inline(always)]
unsafe fn yzx(v: float32x4_t) -> float32x4_t {
    let r = vextq_f32::<1>(v, v); // [y z w x]
    let r = vsetq_lane_f32::<2>(vgetq_lane_f32::<0>(v), r);
    vsetq_lane_f32::<3>(vgetq_lane_f32::<3>(v), r)
}

/// Three-lane cross product in-register; the w lane comes out zero.
#[inline(always)]
unsafe fn cross_reg(a: float32x4_t, b: float32x4_t) -> float32x4_t {
    let c = vsubq_f32(vmulq_f32(a, yzx(b)), vmulq_f32(yzx(a), b));
    yzx(c)
}

#[inline(always)]
unsafe fn dot_all(a: float32x4_t, b: float32x4_t) -> f32 {
    vaddvq_f32(vmulq_f32(a, b))
}

impl Backend for Neon {
    #[inline]
    unsafe fn load_aligned(ptr: *const f32) -> Vector {
        reg_vec(vld1q_f32(ptr))
    }

    #[inline]
    unsafe fn load_unaligned(ptr: *const f32) -> Vector {
        reg_vec(vld1q_f32(ptr))
    }

    #[inline]
    fn splat(s: f32) -> Vector {
        reg_vec(unsafe { vdupq_n_f32(s) })
    }

    #[inline]
    fn add(a: Vector, b: Vector) -> Vector {
        reg_vec(unsafe { vaddq_f32(vec_reg(a), vec_reg(b)) })
    }

    #[inline]
    fn sub(a: Vector, b: Vector) -> Vector {
        reg_vec(unsafe { vsubq_f32(vec_reg(a), vec_reg(b)) })
    }

    #[inline]
    fn mul(a: Vector, b: Vector) -> Vector {
        reg_vec(unsafe { vmulq_f32(vec_reg(a), vec_reg(b)) })
    }

    #[inline]
    fn scale(a: Vector, s: f32) -> Vector {
        reg_vec(unsafe { vmulq_n_f32(vec_reg(a), s) })
    }

    #[inline]
    fn neg(a: Vector) -> Vector {
        reg_vec(unsafe { vnegq_f32(vec_reg(a)) })
    }

    #[inline]
    fn dot(a: Vector, b: Vector) -> f32 {
        unsafe { dot_all(vec_reg(a), vec_reg(b)) }
    }

    #[inline]
    fn dot3(a: Vector, b: Vector) -> f32 {
        unsafe {
            let p = vmulq_f32(vec_reg(a), vec_reg(b));
            vaddvq_f32(vsetq_lane_f32::<3>(0.0, p))
        }
    }

    #[inline]
    fn cross3(a: Vector, b: Vector) -> Vector {
        reg_vec(unsafe { cross_reg(vec_reg(a), vec_reg(b)) })
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
        let r = vec_reg(a);
        reg_vec(unsafe { vdivq_f32(r, vsqrtq_f32(vdupq_n_f32(dot_all(r, r)))) })
    }

    #[inline]
    fn quat_conjugate(q: Quaternion) -> Quaternion {
        reg_quat(unsafe { flip_signs(quat_reg(q), [SIGN, SIGN, SIGN, 0]) })
    }

    #[inline]
    fn quat_inverse(q: Quaternion) -> Quaternion {
        let r = quat_reg(q);
        reg_quat(unsafe {
            let scaled = vdivq_f32(r, vdupq_n_f32(dot_all(r, r)));
            flip_signs(scaled, [SIGN, SIGN, SIGN, 0])
        })
    }

    #[inline]
    fn quat_normalize(q: Quaternion) -> Quaternion {
        let r = quat_reg(q);
        reg_quat(unsafe { vdivq_f32(r, vsqrtq_f32(vdupq_n_f32(dot_all(r, r)))) })
    }

    #[inline]
    fn quat_mul(a: Quaternion, b: Quaternion) -> Quaternion {
        let qa = quat_reg(a);
        let qb = quat_reg(b);
        reg_quat(unsafe {
            // Hamilton product as four sign-adjusted lane products:
            //   w·(x1 y1 z1 w1) ± x·(w1 z1 y1 x1) ± y·(z1 w1 x1 y1) ± z·(y1 x1 w1 z1)
            let t0 = vmulq_f32(vdupq_laneq_f32::<3>(qa), qb);

            let b_zwxy = vextq_f32::<2>(qb, qb);
            let b_wzyx = vrev64q_f32(b_zwxy);
            let b_yxwz = vrev64q_f32(qb);

            let t1 = vmulq_f32(vdupq_laneq_f32::<0>(qa), b_wzyx);
            let t1 = flip_signs(t1, [0, SIGN, 0, SIGN]);

            let t2 = vmulq_f32(vdupq_laneq_f32::<1>(qa), b_zwxy);
            let t2 = flip_signs(t2, [0, 0, SIGN, SIGN]);

            let t3 = vmulq_f32(vdupq_laneq_f32::<2>(qa), b_yxwz);
            let t3 = flip_signs(t3, [SIGN, 0, 0, SIGN]);

            vaddq_f32(vaddq_f32(t0, t1), vaddq_f32(t2, t3))
        })
    }

    fn quat_slerp(a: Quaternion, b: Quaternion, t: f32) -> Quaternion {
        let qa = quat_reg(a);
        let mut qb = quat_reg(b);

        let mut cos_half = unsafe { dot_all(qa, qb) };
        if cos_half < 0.0 {
            cos_half = -cos_half;
            qb = unsafe { vnegq_f32(qb) };
        }

        let (w0, w1) = if cos_half > SLERP_PARALLEL_THRESHOLD {
            (1.0 - t, t)
        } else {
            let half_angle = float::acos(cos_half);
            let sin_half = float::sin(half_angle);
            (
                float::sin((1.0 - t) * half_angle) / sin_half,
                float::sin(t * half_angle) / sin_half,
            )
        };

        reg_quat(unsafe {
            let blended = vaddq_f32(vmulq_n_f32(qa, w0), vmulq_n_f32(qb, w1));
            if cos_half > SLERP_PARALLEL_THRESHOLD {
                vdivq_f32(blended, vsqrtq_f32(vdupq_n_f32(dot_all(blended, blended))))
            } else {
                blended
            }
        })
    }

    #[inline]
    fn quat_rotate(q: Quaternion, v: Vector) -> Vector {
        let qr = quat_reg(q);
        let vr = vec_reg(v);
        reg_vec(unsafe {
            let im = vsetq_lane_f32::<3>(0.0, qr);
            let v3 = vsetq_lane_f32::<3>(0.0, vr);
            let t = vmulq_n_f32(cross_reg(im, v3), 2.0);
            let wt = vmulq_n_f32(t, vgetq_lane_f32::<3>(qr));
            vaddq_f32(vaddq_f32(v3, wt), cross_reg(im, t))
        })
    }
}
