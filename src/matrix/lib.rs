/* ************************************************************************ **
** This file is part of densemat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Fixed-dimension dense matrices.
//!
//! `Matrix<R, C, X>` stores its `R * C` elements inline in row-major order.
//! Shapes are part of the type, so `a + b` between differently-shaped
//! matrices, or `a * b` with mismatched inner dimensions, does not compile.
//! Shape information that only exists at runtime (slice lengths, indices)
//! is checked, and reported through [`MatrixError`].
//!
//! ```
//! use densemat_matrix::Matrix;
//!
//! let a = Matrix::from_array([
//!     [1.0, 2.0, 3.0],
//!     [4.0, 5.0, 6.0],
//! ]);
//! let b = a.transpose();
//! assert_eq!(&a * &b, Matrix::from_array([
//!     [14.0, 32.0],
//!     [32.0, 77.0],
//! ]));
//! ```

mod traits;
mod types;
mod methods;
mod iter;
mod ops;
mod conv;

pub use crate::traits::Field;
pub use crate::types::{Matrix, MatrixIndex, ColVec, RowVec};
pub use crate::iter::{IntRange, MatrixEntryArray, Entries};

/// Failures of matrix operations whose arguments are only known at runtime.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum MatrixError {
    #[error("expected {expected} elements, got {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("index {index:?} is out of bounds for a {}x{} matrix", .dims.0, .dims.1)]
    IndexOutOfRange { index: (usize, usize), dims: (usize, usize) },

    #[error("operation requires a square matrix, got {}x{}", .dims.0, .dims.1)]
    NotSquare { dims: (usize, usize) },
}

// ---------------------------------------------------------------------------
// free functions, for those who prefer them

/// Construct a matrix from an array of rows.
#[inline(always)]
pub fn from_array<const R: usize, const C: usize, X>(data: [[X; C]; R]) -> Matrix<R, C, X>
{ Matrix::from_array(data) }

/// Matrix product.
#[inline(always)]
pub fn multiply<const R: usize, const K: usize, const C: usize, X: Field>(
    a: &Matrix<R, K, X>,
    b: &Matrix<K, C, X>,
) -> Matrix<R, C, X>
{ a * b }

/// Matrix transpose.
#[inline(always)]
pub fn transpose<const R: usize, const C: usize, X: Copy>(m: &Matrix<R, C, X>) -> Matrix<C, R, X>
{ m.transpose() }

/// The largest possible rank of an `R x C` matrix.
#[inline(always)]
pub const fn max_rank<const R: usize, const C: usize>() -> usize
{ if R < C { R } else { C } }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_rank_is_min_dim() {
        assert_eq!(max_rank::<2, 3>(), 2);
        assert_eq!(max_rank::<4, 3>(), 3);
        assert_eq!(max_rank::<5, 5>(), 5);

        const N: usize = max_rank::<3, 7>();
        assert_eq!(N, 3);
    }

    #[test]
    fn free_functions() {
        let a = from_array([[1., 2.], [3., 4.], [5., 6.]]);
        assert_eq!(transpose(&transpose(&a)), a);
        assert_eq!(multiply(&a, &Matrix::eye()), a);
    }

    #[test]
    fn error_messages() {
        let e = MatrixError::IndexOutOfRange { index: (3, 0), dims: (2, 2) };
        assert_eq!(e.to_string(), "index (3, 0) is out of bounds for a 2x2 matrix");
        let e = MatrixError::NotSquare { dims: (2, 3) };
        assert_eq!(e.to_string(), "operation requires a square matrix, got 2x3");
        let e = MatrixError::DimensionMismatch { expected: 4, found: 3 };
        assert_eq!(e.to_string(), "expected 4 elements, got 3");
    }
}
