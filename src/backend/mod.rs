//! Backend Dispatch
//!
//! One concrete implementation of the vector/quaternion contract is selected
//! per build, with no runtime indirection: every public operation compiles
//! directly into the active tier's code.
//!
//! Tier preference, most capable first:
//!
//! 1. `Sse` — x86_64 with the `simd` feature. SSE2 baseline; SSE3 and SSE4.1
//!    refinements are picked up inside the module via `target_feature`.
//! 2. `Neon` — aarch64 with the `simd` feature.
//! 3. `Scalar` — portable tier, always available, and the correctness
//!    baseline the hardware tiers are cross-checked against in tests.
//!
//! Switching tiers is a recompilation, never a runtime flag.

use crate::quaternion::Quaternion;
use crate::vector::Vector;

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
mod sse;

#[cfg(all(feature = "simd", target_arch = "aarch64"))]
mod neon;

// Always compiled: it is the reference the hardware tiers are tested against.
#[cfg_attr(
    all(feature = "simd", any(target_arch = "x86_64", target_arch = "aarch64")),
    allow(dead_code)
)]
mod scalar;

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
pub(crate) use sse::Sse as Active;

#[cfg(all(feature = "simd", target_arch = "aarch64"))]
pub(crate) use neon::Neon as Active;

#[cfg(not(all(feature = "simd", any(target_arch = "x86_64", target_arch = "aarch64"))))]
pub(crate) use scalar::Scalar as Active;

/// The shared function contract every tier implements in full.
///
/// All functions are pure: by-value arguments in, new value out. Quaternion
/// inputs to `quat_slerp` and `quat_rotate` are assumed unit length by the
/// caller; the tiers do not verify this.
pub(crate) trait Backend {
    /// Load four contiguous floats from a 16-byte-aligned address.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reading 16 bytes and must satisfy the active
    /// tier's alignment requirement (16 bytes under a hardware tier).
    /// A misaligned address is undefined behavior, not a signaled error.
    unsafe fn load_aligned(ptr: *const f32) -> Vector;

    /// Load four contiguous floats from an address of any alignment.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reading 16 bytes.
    unsafe fn load_unaligned(ptr: *const f32) -> Vector;

    fn splat(s: f32) -> Vector;

    fn add(a: Vector, b: Vector) -> Vector;
    fn sub(a: Vector, b: Vector) -> Vector;
    fn mul(a: Vector, b: Vector) -> Vector;
    fn scale(a: Vector, s: f32) -> Vector;
    fn neg(a: Vector) -> Vector;

    /// Four-lane dot product.
    fn dot(a: Vector, b: Vector) -> f32;
    /// Three-lane dot product; the w lanes do not contribute.
    fn dot3(a: Vector, b: Vector) -> f32;
    /// Three-lane cross product; the result's w lane is zero.
    fn cross3(a: Vector, b: Vector) -> Vector;

    fn length_sqr(a: Vector) -> f32;
    fn length(a: Vector) -> f32;
    /// Precondition: `length(a) > 0`.
    fn normalize(a: Vector) -> Vector;

    fn quat_conjugate(q: Quaternion) -> Quaternion;
    /// General multiplicative inverse, `conjugate(q) / |q|²`.
    fn quat_inverse(q: Quaternion) -> Quaternion;
    /// Precondition: `q` has nonzero length.
    fn quat_normalize(q: Quaternion) -> Quaternion;
    /// Hamilton product. `quat_mul(a, b)` composes "b first, then a".
    fn quat_mul(a: Quaternion, b: Quaternion) -> Quaternion;
    /// Shortest-arc spherical interpolation between unit quaternions.
    fn quat_slerp(a: Quaternion, b: Quaternion, t: f32) -> Quaternion;
    /// Rotate directional vector `v` (w ignored) by unit quaternion `q`.
    /// The result's w lane is zero.
    fn quat_rotate(q: Quaternion, v: Vector) -> Vector;
}

// ============================================================================
// Cross-tier equivalence tests
// ============================================================================
