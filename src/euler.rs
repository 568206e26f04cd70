//! Euler Rotation Orders
//!
//! A rotation order is four independent choices — initial axis, axis parity,
//! axis repetition, and reference frame — packed into one small integer:
//!
//! ```text
//! order = (((axis << 1 | parity) << 1 | repeat) << 1 | frame)
//! ```
//!
//! Twenty-four named combinations exist. In the constant names the three
//! upper-case letters are the axes in application order and the trailing
//! letter is the reference frame: `S` for static (each rotation about the
//! original fixed axes) or `R` for rotating (each rotation about the axes as
//! already rotated by the previous steps).

use bytemuck::{Pod, Zeroable};
use static_assertions::const_assert_eq;

/// First rotation axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

/// Whether the axis sequence follows the even (X→Y→Z→X) or odd cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parity {
    Even = 0,
    Odd = 1,
}

/// Whether the first axis repeats as the third rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repetition {
    NonRepeating = 0,
    Repeating = 1,
}

/// Static or rotating frame of reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Frame {
    Static = 0,
    Rotating = 1,
}

/// Packed rotation-order descriptor.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EulerOrder(u32);

unsafe impl Zeroable for EulerOrder {}
unsafe impl Pod for EulerOrder {}

impl EulerOrder {
    pub const XYZS: Self = Self::pack(Axis::X, Parity::Even, Repetition::NonRepeating, Frame::Static);
    pub const XYXS: Self = Self::pack(Axis::X, Parity::Even, Repetition::Repeating, Frame::Static);
    pub const XZYS: Self = Self::pack(Axis::X, Parity::Odd, Repetition::NonRepeating, Frame::Static);
    pub const XZXS: Self = Self::pack(Axis::X, Parity::Odd, Repetition::Repeating, Frame::Static);
    pub const YZXS: Self = Self::pack(Axis::Y, Parity::Even, Repetition::NonRepeating, Frame::Static);
    pub const YZYS: Self = Self::pack(Axis::Y, Parity::Even, Repetition::Repeating, Frame::Static);
    pub const YXZS: Self = Self::pack(Axis::Y, Parity::Odd, Repetition::NonRepeating, Frame::Static);
    pub const YXYS: Self = Self::pack(Axis::Y, Parity::Odd, Repetition::Repeating, Frame::Static);
    pub const ZXYS: Self = Self::pack(Axis::Z, Parity::Even, Repetition::NonRepeating, Frame::Static);
    pub const ZXZS: Self = Self::pack(Axis::Z, Parity::Even, Repetition::Repeating, Frame::Static);
    pub const ZYXS: Self = Self::pack(Axis::Z, Parity::Odd, Repetition::NonRepeating, Frame::Static);
    pub const ZYZS: Self = Self::pack(Axis::Z, Parity::Odd, Repetition::Repeating, Frame::Static);

    pub const ZYXR: Self = Self::pack(Axis::X, Parity::Even, Repetition::NonRepeating, Frame::Rotating);
    pub const XYXR: Self = Self::pack(Axis::X, Parity::Even, Repetition::Repeating, Frame::Rotating);
    pub const YZXR: Self = Self::pack(Axis::X, Parity::Odd, Repetition::NonRepeating, Frame::Rotating);
    pub const XZXR: Self = Self::pack(Axis::X, Parity::Odd, Repetition::Repeating, Frame::Rotating);
    pub const XZYR: Self = Self::pack(Axis::Y, Parity::Even, Repetition::NonRepeating, Frame::Rotating);
    pub const YZYR: Self = Self::pack(Axis::Y, Parity::Even, Repetition::Repeating, Frame::Rotating);
    pub const ZXYR: Self = Self::pack(Axis::Y, Parity::Odd, Repetition::NonRepeating, Frame::Rotating);
    pub const YXYR: Self = Self::pack(Axis::Y, Parity::Odd, Repetition::Repeating, Frame::Rotating);
    pub const YXZR: Self = Self::pack(Axis::Z, Parity::Even, Repetition::NonRepeating, Frame::Rotating);
    pub const ZXZR: Self = Self::pack(Axis::Z, Parity::Even, Repetition::Repeating, Frame::Rotating);
    pub const XYZR: Self = Self::pack(Axis::Z, Parity::Odd, Repetition::NonRepeating, Frame::Rotating);
    pub const ZYZR: Self = Self::pack(Axis::Z, Parity::Odd, Repetition::Repeating, Frame::Rotating);

    /// XYZ applied in a static frame, even parity, non-repeating.
    pub const DEFAULT: Self = Self::XYZS;

    /// Pack the four choices into a descriptor.
    #[inline]
    pub const fn pack(axis: Axis, parity: Parity, repetition: Repetition, frame: Frame) -> Self {
        let bits = ((((axis as u32) << 1 | parity as u32) << 1 | repetition as u32) << 1)
            | frame as u32;
        Self(bits)
    }

    /// The raw packed value.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Rebuild a descriptor from a packed value. Only the low five bits are
    /// meaningful; out-of-range axis bits decode as Z.
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits & 0x1f)
    }

    #[inline]
    pub const fn axis(self) -> Axis {
        match (self.0 >> 3) & 0x3 {
            0 => Axis::X,
            1 => Axis::Y,
            _ => Axis::Z,
        }
    }

    #[inline]
    pub const fn parity(self) -> Parity {
        if (self.0 >> 2) & 1 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    #[inline]
    pub const fn repetition(self) -> Repetition {
        if (self.0 >> 1) & 1 == 0 {
            Repetition::NonRepeating
        } else {
            Repetition::Repeating
        }
    }

    #[inline]
    pub const fn frame(self) -> Frame {
        if self.0 & 1 == 0 {
            Frame::Static
        } else {
            Frame::Rotating
        }
    }
}

impl Default for EulerOrder {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Three rotation angles (radians) in the x, y, z lanes plus the packed
/// order descriptor in the fourth 32-bit lane. Same 16-byte footprint as
/// [`crate::Vector`]; the fourth lane holds an unsigned integer, not a float.
#[repr(C)]
#[cfg_attr(
    all(feature = "simd", any(target_arch = "x86_64", target_arch = "aarch64")),
    repr(align(16))
)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EulerAngles {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    order: EulerOrder,
}

unsafe impl Zeroable for EulerAngles {}
unsafe impl Pod for EulerAngles {}

const_assert_eq!(core::mem::size_of::<EulerAngles>(), 16);

impl EulerAngles {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, order: EulerOrder) -> Self {
        Self { x, y, z, order }
    }

    #[inline]
    pub const fn order(self) -> EulerOrder {
        self.order
    }
}
