//! Scalar Float Shim
//!
//! Routes the handful of transcendental/root operations the kernel needs to
//! inherent `f32` methods under `std`, or to `libm` for `no_std` builds.

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("vmath requires the `std` feature or the `libm` feature for float math");

#[inline(always)]
pub(crate) fn sqrt(x: f32) -> f32 {
    #[cfg(feature = "std")]
    {
        x.sqrt()
    }
    #[cfg(all(not(feature = "std"), feature = "libm"))]
    {
        libm::sqrtf(x)
    }
}

#[inline(always)]
pub(crate) fn sin(x: f32) -> f32 {
    #[cfg(feature = "std")]
    {
        x.sin()
    }
    #[cfg(all(not(feature = "std"), feature = "libm"))]
    {
        libm::sinf(x)
    }
}

#[inline(always)]
pub(crate) fn cos(x: f32) -> f32 {
    #[cfg(feature = "std")]
    {
        x.cos()
    }
    #[cfg(all(not(feature = "std"), feature = "libm"))]
    {
        libm::cosf(x)
    }
}

#[inline(always)]
pub(crate) fn acos(x: f32) -> f32 {
    #[cfg(feature = "std")]
    {
        x.acos()
    }
    #[cfg(all(not(feature = "std"), feature = "libm"))]
    {
        libm::acosf(x)
    }
}
