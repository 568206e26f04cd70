//! # vmath
//!
//! **Portable real-time vector/quaternion/matrix math**
//!
//! Value-type linear algebra for graphics and simulation workloads, with
//! interchangeable hardware-accelerated backends selected at build time.
//!
//! ## Backend tiers
//!
//! | Tier | Target | Selected when |
//! |------|--------|---------------|
//! | SSE | x86_64 (SSE2 baseline, SSE3/SSE4.1 refinements) | `simd` feature |
//! | NEON | aarch64 | `simd` feature |
//! | Scalar | any | always available; the correctness baseline |
//!
//! Exactly one tier is compiled in; every operation lowers directly to that
//! tier with no runtime branch or virtual dispatch. Switching tiers is a
//! recompilation.
//!
//! ## Design principles
//!
//! - **Value semantics**: every type is a fixed-size, stack-resident `Copy`
//!   value; every operation is a pure function from inputs to a new output.
//!   No heap allocation, no shared mutable state, trivially thread-safe.
//! - **Layout as interface**: a [`Vector`] is four f32 lanes in x, y, z, w
//!   order, 16 bytes in every configuration; a [`Matrix`] is 64 row-major
//!   bytes. All types are [`bytemuck::Pod`], so serializing to flat f32
//!   buffers for graphics or physics interchange is a cast, and the sizes
//!   are enforced at compile time.
//! - **No checked errors on the hot path**: preconditions (unit-length
//!   inputs, nonzero length for normalize, alignment for the aligned
//!   loaders) are caller obligations, documented per function.
//! - **no_std compatible**: enable the `libm` feature in place of `std`.
//!
//! ## Quick start
//!
//! ```rust
//! use vmath::{Quaternion, Vector};
//!
//! let yaw = Quaternion::from_axis_angle(Vector::UNIT_Z, core::f32::consts::FRAC_PI_2);
//! let spun = yaw.rotate(Vector::UNIT_X);
//! assert!((spun.y - 1.0).abs() < 1e-5);
//!
//! // Compose (right-hand side applies first), interpolate, normalize.
//! let pitch = Quaternion::from_axis_angle(Vector::UNIT_X, 0.3);
//! let pose = (yaw * pitch).normalize();
//! let halfway = Quaternion::IDENTITY.slerp(pose, 0.5);
//! assert!((halfway.length() - 1.0).abs() < 1e-5);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

mod backend;
mod euler;
mod float;
mod matrix;
mod quaternion;
mod transform;
mod vector;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::euler::{Axis, EulerAngles, EulerOrder, Frame, Parity, Repetition};
    pub use crate::matrix::Matrix;
    pub use crate::quaternion::Quaternion;
    pub use crate::transform::{DualQuaternion, Transform};
    pub use crate::vector::{IntVector, Vector};
}

// Re-export main types at crate root
pub use prelude::*;
