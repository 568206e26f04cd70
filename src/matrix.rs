//! Row-Major 4×4 Matrix
//!
//! One 64-byte value with four access paths that always agree bit-for-bit:
//!
//! - named components `m00..m33` (row-major field order, the canonical
//!   storage),
//! - a flat 16-element array ([`Matrix::as_array`]),
//! - a two-dimensional `[row][column]` array ([`Matrix::as_rows`]),
//! - per-row [`Vector`] values ([`Matrix::row`] / [`Matrix::set_row`]).
//!
//! The original multi-view union is expressed here as safe reinterpretations
//! of the one canonical struct, so a write through any path is visible
//! through every other path.

use core::ops::{Index, IndexMut};

use bytemuck::{Pod, Zeroable};
use static_assertions::const_assert_eq;

use crate::vector::Vector;

/// Row-major 4×4 matrix; elements of one row are contiguous in memory.
#[repr(C)]
#[cfg_attr(
    all(feature = "simd", any(target_arch = "x86_64", target_arch = "aarch64")),
    repr(align(16))
)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Matrix {
    pub m00: f32,
    pub m01: f32,
    pub m02: f32,
    pub m03: f32,
    pub m10: f32,
    pub m11: f32,
    pub m12: f32,
    pub m13: f32,
    pub m20: f32,
    pub m21: f32,
    pub m22: f32,
    pub m23: f32,
    pub m30: f32,
    pub m31: f32,
    pub m32: f32,
    pub m33: f32,
}

unsafe impl Zeroable for Matrix {}
unsafe impl Pod for Matrix {}

const_assert_eq!(core::mem::size_of::<Matrix>(), 64);

impl Matrix {
    pub const ZERO: Self = Self::from_array([0.0; 16]);

    pub const IDENTITY: Self = Self::from_array([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);

    /// Build from 16 elements in row-major order.
    #[inline]
    pub const fn from_array(a: [f32; 16]) -> Self {
        Self {
            m00: a[0],
            m01: a[1],
            m02: a[2],
            m03: a[3],
            m10: a[4],
            m11: a[5],
            m12: a[6],
            m13: a[7],
            m20: a[8],
            m21: a[9],
            m22: a[10],
            m23: a[11],
            m30: a[12],
            m31: a[13],
            m32: a[14],
            m33: a[15],
        }
    }

    /// Build from four row vectors.
    #[inline]
    pub const fn from_rows(rows: [Vector; 4]) -> Self {
        Self::from_array([
            rows[0].x, rows[0].y, rows[0].z, rows[0].w, //
            rows[1].x, rows[1].y, rows[1].z, rows[1].w, //
            rows[2].x, rows[2].y, rows[2].z, rows[2].w, //
            rows[3].x, rows[3].y, rows[3].z, rows[3].w,
        ])
    }

    /// Flat view of the 16 elements, row-major.
    #[inline]
    pub fn as_array(&self) -> &[f32; 16] {
        bytemuck::cast_ref(self)
    }

    /// Mutable flat view.
    #[inline]
    pub fn as_array_mut(&mut self) -> &mut [f32; 16] {
        bytemuck::cast_mut(self)
    }

    /// Two-dimensional view, indexed `[row][column]`.
    #[inline]
    pub fn as_rows(&self) -> &[[f32; 4]; 4] {
        bytemuck::cast_ref(self)
    }

    /// Mutable two-dimensional view.
    #[inline]
    pub fn as_rows_mut(&mut self) -> &mut [[f32; 4]; 4] {
        bytemuck::cast_mut(self)
    }

    /// Element at `(row, column)`. Panics if either index is out of range.
    #[inline]
    pub fn at(&self, row: usize, column: usize) -> f32 {
        self.as_rows()[row][column]
    }

    /// Set the element at `(row, column)`. Panics if either index is out of
    /// range.
    #[inline]
    pub fn set(&mut self, row: usize, column: usize, value: f32) {
        self.as_rows_mut()[row][column] = value;
    }

    /// Row `index` as a vector value. Panics if `index > 3`.
    #[inline]
    pub fn row(&self, index: usize) -> Vector {
        let r = self.as_rows()[index];
        Vector::new(r[0], r[1], r[2], r[3])
    }

    /// Replace row `index`. Panics if `index > 3`.
    #[inline]
    pub fn set_row(&mut self, index: usize, row: Vector) {
        self.as_rows_mut()[index] = row.to_array();
    }
}

/// Flat row-major indexing, `matrix[row * 4 + column]`.
impl Index<usize> for Matrix {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &f32 {
        &self.as_array()[index]
    }
}

impl IndexMut<usize> for Matrix {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.as_array_mut()[index]
    }
}

/// Two-dimensional indexing, `matrix[(row, column)]`.
impl Index<(usize, usize)> for Matrix {
    type Output = f32;

    #[inline]
    fn index(&self, (row, column): (usize, usize)) -> &f32 {
        &self.as_rows()[row][column]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut f32 {
        &mut self.as_rows_mut()[row][column]
    }
}
