//! Four-Lane Vector Values
//!
//! `Vector` is the shared value type the rest of the crate is built on: four
//! f32 lanes (x, y, z, w), 16 bytes in every configuration, 16-byte aligned
//! whenever a hardware tier is compiled in. `IntVector` is its four-lane i32
//! counterpart with the same layout rule.
//!
//! All operations consume values and return new values; nothing is mutated
//! in place.

use core::ops::{Add, Div, Mul, Neg, Sub};

use bytemuck::{Pod, Zeroable};
use static_assertions::const_assert_eq;

use crate::backend::{Active, Backend};

/// Four 32-bit float lanes. The binary-interchange unit of the crate:
/// serializing one to a flat f32 buffer writes x, y, z, w in that order.
#[repr(C)]
#[cfg_attr(
    all(feature = "simd", any(target_arch = "x86_64", target_arch = "aarch64")),
    repr(align(16))
)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

// Plain f32 lanes, repr(C), no padding (the align attribute does not add any
// at 16 bytes), so any bit pattern is a valid value.
unsafe impl Zeroable for Vector {}
unsafe impl Pod for Vector {}

const_assert_eq!(core::mem::size_of::<Vector>(), 16);

impl Vector {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    pub const UNIT_W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// All four lanes set to `s`.
    #[inline]
    pub fn splat(s: f32) -> Self {
        Active::splat(s)
    }

    #[inline]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Load four contiguous floats from a 16-byte-aligned address.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reading 16 bytes and 16-byte aligned when a
    /// hardware tier is active. Misalignment is undefined behavior; no check
    /// is performed.
    #[inline]
    pub unsafe fn load_aligned(ptr: *const f32) -> Self {
        Active::load_aligned(ptr)
    }

    /// Load four contiguous floats from an address of any alignment.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reading 16 bytes.
    #[inline]
    pub unsafe fn load_unaligned(ptr: *const f32) -> Self {
        Active::load_unaligned(ptr)
    }

    /// Four-lane dot product.
    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        Active::dot(self, rhs)
    }

    /// Three-lane dot product; w lanes do not contribute.
    #[inline]
    pub fn dot3(self, rhs: Self) -> f32 {
        Active::dot3(self, rhs)
    }

    /// Three-lane cross product. The result's w lane is zero.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Active::cross3(self, rhs)
    }

    /// Squared four-lane length (no square root).
    #[inline]
    pub fn length_sqr(self) -> f32 {
        Active::length_sqr(self)
    }

    /// Four-lane length.
    #[inline]
    pub fn length(self) -> f32 {
        Active::length(self)
    }

    /// Scale to unit length. Precondition: `length() > 0`; a zero-length
    /// input produces non-finite lanes, not an error.
    #[inline]
    pub fn normalize(self) -> Self {
        Active::normalize(self)
    }

    /// Component-wise scale by a scalar.
    #[inline]
    pub fn scale(self, s: f32) -> Self {
        Active::scale(self, s)
    }
}

impl Add for Vector {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Active::add(self, rhs)
    }
}

impl Sub for Vector {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Active::sub(self, rhs)
    }
}

impl Mul for Vector {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Active::mul(self, rhs)
    }
}

impl Mul<f32> for Vector {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Active::scale(self, rhs)
    }
}

impl Div<f32> for Vector {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Active::scale(self, 1.0 / rhs)
    }
}

impl Neg for Vector {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Active::neg(self)
    }
}

/// Four 32-bit integer lanes, same layout rule as [`Vector`].
#[repr(C)]
#[cfg_attr(
    all(feature = "simd", any(target_arch = "x86_64", target_arch = "aarch64")),
    repr(align(16))
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IntVector {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub w: i32,
}

unsafe impl Zeroable for IntVector {}
unsafe impl Pod for IntVector {}

const_assert_eq!(core::mem::size_of::<IntVector>(), 16);

impl IntVector {
    pub const ZERO: Self = Self::new(0, 0, 0, 0);
    pub const ONE: Self = Self::new(1, 1, 1, 1);

    #[inline]
    pub const fn new(x: i32, y: i32, z: i32, w: i32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub const fn splat(s: i32) -> Self {
        Self::new(s, s, s, s)
    }

    #[inline]
    pub const fn from_array(a: [i32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    #[inline]
    pub const fn to_array(self) -> [i32; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl Add for IntVector {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.x.wrapping_add(rhs.x),
            self.y.wrapping_add(rhs.y),
            self.z.wrapping_add(rhs.z),
            self.w.wrapping_add(rhs.w),
        )
    }
}

impl Sub for IntVector {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.x.wrapping_sub(rhs.x),
            self.y.wrapping_sub(rhs.y),
            self.z.wrapping_sub(rhs.z),
            self.w.wrapping_sub(rhs.w),
        )
    }
}
