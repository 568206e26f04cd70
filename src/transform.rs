//! Rigid-Transform Composites
//!
//! Two value types built from the quaternion and vector primitives:
//! [`Transform`] (rotation + translation with a uniform scale packed into
//! the translation's w lane) and [`DualQuaternion`] (rotation + translation
//! as a real/dual quaternion pair). Both are 32 bytes.

use bytemuck::{Pod, Zeroable};
use static_assertions::const_assert_eq;

use crate::quaternion::Quaternion;
use crate::vector::Vector;

/// Rotation, translation, and uniform scale. The scale factor lives in the
/// translation's w lane, keeping the whole value at eight 32-bit lanes.
#[repr(C)]
#[cfg_attr(
    all(feature = "simd", any(target_arch = "x86_64", target_arch = "aarch64")),
    repr(align(16))
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub rotation: Quaternion,
    /// Translation in x, y, z; uniform scale in w.
    pub translation: Vector,
}

unsafe impl Zeroable for Transform {}
unsafe impl Pod for Transform {}

const_assert_eq!(core::mem::size_of::<Transform>(), 32);

impl Transform {
    /// No rotation, no translation, scale 1.
    pub const IDENTITY: Self = Self {
        rotation: Quaternion::IDENTITY,
        translation: Vector::new(0.0, 0.0, 0.0, 1.0),
    };

    #[inline]
    pub const fn new(rotation: Quaternion, translation: Vector, scale: f32) -> Self {
        Self {
            rotation,
            translation: Vector::new(translation.x, translation.y, translation.z, scale),
        }
    }

    #[inline]
    pub const fn scale(self) -> f32 {
        self.translation.w
    }

    /// Apply scale, then rotation, then translation to the point in `p`'s
    /// x, y, z lanes. Returns a directional-style vector with w = 0.
    #[inline]
    pub fn apply(self, p: Vector) -> Vector {
        let scaled = Vector::new(p.x, p.y, p.z, 0.0) * self.scale();
        let rotated = self.rotation.rotate(scaled);
        rotated
            + Vector::new(
                self.translation.x,
                self.translation.y,
                self.translation.z,
                0.0,
            )
    }
}

impl Default for Transform {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// An ordered pair of quaternions encoding rotation (real part) and
/// translation (dual part).
#[repr(C)]
#[cfg_attr(
    all(feature = "simd", any(target_arch = "x86_64", target_arch = "aarch64")),
    repr(align(16))
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DualQuaternion {
    pub real: Quaternion,
    pub dual: Quaternion,
}

unsafe impl Zeroable for DualQuaternion {}
unsafe impl Pod for DualQuaternion {}

const_assert_eq!(core::mem::size_of::<DualQuaternion>(), 32);

impl DualQuaternion {
    pub const IDENTITY: Self = Self {
        real: Quaternion::IDENTITY,
        dual: Quaternion::ZERO,
    };

    #[inline]
    pub const fn new(real: Quaternion, dual: Quaternion) -> Self {
        Self { real, dual }
    }

    /// Encode a unit rotation and a translation: dual = ½·(0,t)·real.
    #[inline]
    pub fn from_rotation_translation(rotation: Quaternion, translation: Vector) -> Self {
        let t = Quaternion::new(translation.x, translation.y, translation.z, 0.0);
        let dual = Quaternion::from_vector((t * rotation).to_vector() * 0.5);
        Self::new(rotation, dual)
    }

    #[inline]
    pub const fn rotation(self) -> Quaternion {
        self.real
    }

    /// Recover the translation: t = 2·dual·conjugate(real).
    #[inline]
    pub fn translation(self) -> Vector {
        let t = (self.dual * self.real.conjugate()).to_vector() * 2.0;
        Vector::new(t.x, t.y, t.z, 0.0)
    }
}

impl Default for DualQuaternion {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}
