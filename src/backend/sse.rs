//! x86_64 SSE Tier
//!
//! SSE2 is the baseline (always present on x86_64). Where the build enables
//! them, SSE3 horizontal adds and the SSE4.1 dot-product instruction replace
//! the SSE2 shuffle sequences; the selection happens at compile time through
//! `target_feature`, mirroring the tier order SSE4.1 > SSE3 > SSE2.

use core::arch::x86_64::*;

use crate::float;
use crate::quaternion::Quaternion;
use crate::vector::Vector;

use super::Backend;

const SLERP_PARALLEL_THRESHOLD: f32 = 1.0 - 1e-6;

const SIGN: i32 = i32::MIN;

pub(crate) struct Sse;

#[inline(always)]
fn vec_reg(v: Vector) -> __m128 {
    // Vector is 16-byte aligned whenever this tier is compiled in.
    unsafe { _mm_load_ps((&v as *const Vector).cast()) }
}

#[inline(always)]
fn reg_vec(m: __m128) -> Vector {
    let mut out = Vector::ZERO;
    unsafe { _mm_store_ps((&mut out as *mut Vector).cast(), m) };
    out
}

#[inline(always)]
fn quat_reg(q: Quaternion) -> __m128 {
    unsafe { _mm_load_ps((&q as *const Quaternion).cast()) }
}

#[inline(always)]
fn reg_quat(m: __m128) -> Quaternion {
    let mut out = Quaternion::ZERO;
    unsafe { _mm_store_ps((&mut out as *mut Quaternion).cast(), m) };
    out
}

/// Four-lane dot product, result splatted across all lanes.
#[inline(always)]
unsafe fn dot_splat(a: __m128, b: __m128) -> __m128 {
    #[cfg(target_feature = "sse4.1")]
    {
        _mm_dp_ps::<0xFF>(a, b)
    }
    #[cfg(all(target_feature = "sse3", not(target_feature = "sse4.1")))]
    {
        let p = _mm_mul_ps(a, b);
        let h = _mm_hadd_ps(p, p);
        _mm_hadd_ps(h, h)
    }
    #[cfg(not(target_feature = "sse3"))]
    {
        let p = _mm_mul_ps(a, b);
        // [x+z, y+w, _, _] then lane0 + lane1, splat back out.
        let folded = _mm_add_ps(p, _mm_movehl_ps(p, p));
        let sum = _mm_add_ss(folded, _mm_shuffle_ps::<{ _MM_SHUFFLE(1, 1, 1, 1) }>(folded, folded));
        _mm_shuffle_ps::<{ _MM_SHUFFLE(0, 0, 0, 0) }>(sum, sum)
    }
}

/// Clear the w lane.
#[inline(always)]
unsafe fn zero_w(a: __m128) -> __m128 {
    _mm_and_ps(a, _mm_castsi128_ps(_mm_set_epi32(0, -1, -1, -1)))
}

/// Three-lane cross product in-register; the w lane comes out zero.
#[inline(always)]
unsafe fn cross_reg(a: __m128, b: __m128) -> __m128 {
    let a_yzx = _mm_shuffle_ps::<{ _MM_SHUFFLE(3, 0, 2, 1) }>(a, a);
    let b_yzx = _mm_shuffle_ps::<{ _MM_SHUFFLE(3, 0, 2, 1) }>(b, b);
    let c = _mm_sub_ps(_mm_mul_ps(a, b_yzx), _mm_mul_ps(a_yzx, b));
    _mm_shuffle_ps::<{ _MM_SHUFFLE(3, 0, 2, 1) }>(c, c)
}

impl Backend for Sse {
    #[inline]
    unsafe fn load_aligned(ptr: *const f32) -> Vector {
        reg_vec(_mm_load_ps(ptr))
    }

    #[inline]
    unsafe fn load_unaligned(ptr: *const f32) -> Vector {
        reg_vec(_mm_loadu_ps(ptr))
    }

    #[inline]
    fn splat(s: f32) -> Vector {
        reg_vec(unsafe { _mm_set1_ps(s) })
    }

    #[inline]
    fn add(a: Vector, b: Vector) -> Vector {
        reg_vec(unsafe { _mm_add_ps(vec_reg(a), vec_reg(b)) })
    }

    #[inline]
    fn sub(a: Vector, b: Vector) -> Vector {
        reg_vec(unsafe { _mm_sub_ps(vec_reg(a), vec_reg(b)) })
    }

    #[inline]
    fn mul(a: Vector, b: Vector) -> Vector {
        reg_vec(unsafe { _mm_mul_ps(vec_reg(a), vec_reg(b)) })
    }

    #[inline]
    fn scale(a: Vector, s: f32) -> Vector {
        reg_vec(unsafe { _mm_mul_ps(vec_reg(a), _mm_set1_ps(s)) })
    }

    #[inline]
    fn neg(a: Vector) -> Vector {
        reg_vec(unsafe {
            _mm_xor_ps(
                vec_reg(a),
                _mm_castsi128_ps(_mm_set_epi32(SIGN, SIGN, SIGN, SIGN)),
            )
        })
    }

    #[inline]
    fn dot(a: Vector, b: Vector) -> f32 {
        unsafe { _mm_cvtss_f32(dot_splat(vec_reg(a), vec_reg(b))) }
    }

    #[inline]
    fn dot3(a: Vector, b: Vector) -> f32 {
        unsafe { _mm_cvtss_f32(dot_splat(zero_w(vec_reg(a)), vec_reg(b))) }
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
        let r = vec_reg(a);
        unsafe { _mm_cvtss_f32(_mm_sqrt_ss(dot_splat(r, r))) }
    }

    #[inline]
    fn normalize(a: Vector) -> Vector {
        let r = vec_reg(a);
        reg_vec(unsafe { _mm_div_ps(r, _mm_sqrt_ps(dot_splat(r, r))) })
    }

    #[inline]
    fn quat_conjugate(q: Quaternion) -> Quaternion {
        reg_quat(unsafe {
            _mm_xor_ps(
                quat_reg(q),
                _mm_castsi128_ps(_mm_set_epi32(0, SIGN, SIGN, SIGN)),
            )
        })
    }

    #[inline]
    fn quat_inverse(q: Quaternion) -> Quaternion {
        let r = quat_reg(q);
        reg_quat(unsafe {
            let scaled = _mm_div_ps(r, dot_splat(r, r));
            _mm_xor_ps(scaled, _mm_castsi128_ps(_mm_set_epi32(0, SIGN, SIGN, SIGN)))
        })
    }

    #[inline]
    fn quat_normalize(q: Quaternion) -> Quaternion {
        let r = quat_reg(q);
        reg_quat(unsafe { _mm_div_ps(r, _mm_sqrt_ps(dot_splat(r, r))) })
    }

    #[inline]
    fn quat_mul(a: Quaternion, b: Quaternion) -> Quaternion {
        let qa = quat_reg(a);
        let qb = quat_reg(b);
        reg_quat(unsafe {
            // Hamilton product as four sign-adjusted lane products:
            //   w·(x1 y1 z1 w1) ± x·(w1 z1 y1 x1) ± y·(z1 w1 x1 y1) ± z·(y1 x1 w1 z1)
            let t0 = _mm_mul_ps(_mm_shuffle_ps::<{ _MM_SHUFFLE(3, 3, 3, 3) }>(qa, qa), qb);

            let b_wzyx = _mm_shuffle_ps::<{ _MM_SHUFFLE(0, 1, 2, 3) }>(qb, qb);
            let t1 = _mm_mul_ps(_mm_shuffle_ps::<{ _MM_SHUFFLE(0, 0, 0, 0) }>(qa, qa), b_wzyx);
            let t1 = _mm_xor_ps(t1, _mm_castsi128_ps(_mm_set_epi32(SIGN, 0, SIGN, 0)));

            let b_zwxy = _mm_shuffle_ps::<{ _MM_SHUFFLE(1, 0, 3, 2) }>(qb, qb);
            let t2 = _mm_mul_ps(_mm_shuffle_ps::<{ _MM_SHUFFLE(1, 1, 1, 1) }>(qa, qa), b_zwxy);
            let t2 = _mm_xor_ps(t2, _mm_castsi128_ps(_mm_set_epi32(SIGN, SIGN, 0, 0)));

            let b_yxwz = _mm_shuffle_ps::<{ _MM_SHUFFLE(2, 3, 0, 1) }>(qb, qb);
            let t3 = _mm_mul_ps(_mm_shuffle_ps::<{ _MM_SHUFFLE(2, 2, 2, 2) }>(qa, qa), b_yxwz);
            let t3 = _mm_xor_ps(t3, _mm_castsi128_ps(_mm_set_epi32(SIGN, 0, 0, SIGN)));

            _mm_add_ps(_mm_add_ps(t0, t1), _mm_add_ps(t2, t3))
        })
    }

    fn quat_slerp(a: Quaternion, b: Quaternion, t: f32) -> Quaternion {
        let qa = quat_reg(a);
        let mut qb = quat_reg(b);

        let mut cos_half = unsafe { _mm_cvtss_f32(dot_splat(qa, qb)) };
        if cos_half < 0.0 {
            cos_half = -cos_half;
            qb = unsafe {
                _mm_xor_ps(qb, _mm_castsi128_ps(_mm_set_epi32(SIGN, SIGN, SIGN, SIGN)))
            };
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
            let blended = _mm_add_ps(
                _mm_mul_ps(qa, _mm_set1_ps(w0)),
                _mm_mul_ps(qb, _mm_set1_ps(w1)),
            );
            if cos_half > SLERP_PARALLEL_THRESHOLD {
                _mm_div_ps(blended, _mm_sqrt_ps(dot_splat(blended, blended)))
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
            let im = zero_w(qr);
            let v3 = zero_w(vr);
            let t = _mm_mul_ps(cross_reg(im, v3), _mm_set1_ps(2.0));
            let w = _mm_shuffle_ps::<{ _MM_SHUFFLE(3, 3, 3, 3) }>(qr, qr);
            _mm_add_ps(_mm_add_ps(v3, _mm_mul_ps(w, t)), cross_reg(im, t))
        })
    }
}
