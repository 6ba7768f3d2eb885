/* ************************************************************************ **
** This file is part of densemat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::fmt;
use std::ops::{Index, IndexMut};

use slice_of_array::prelude::*;

// ---------------------------------------------------------------------------

/// A dense `R x C` matrix, stored inline in row-major order.
///
/// Both dimensions are part of the type, so shape errors in arithmetic
/// show up at compile time. A matrix is a plain value: copying one never
/// shares storage with the original.
///
/// `R` and `C` must both be at least 1; constructing a matrix with an empty
/// dimension fails to compile (once the constructor is instantiated).
#[derive(Copy, Clone, PartialEq)]
pub struct Matrix<const R: usize, const C: usize, X = f64> {
    // rows are contiguous
    pub(crate) data: [[X; C]; R],
}

/// A column vector.
pub type ColVec<const N: usize, X = f64> = Matrix<N, 1, X>;
/// A row vector.
pub type RowVec<const N: usize, X = f64> = Matrix<1, N, X>;

/// A `(row, column)` coordinate in a matrix.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MatrixIndex {
    pub row: usize,
    pub col: usize,
}

impl MatrixIndex {
    #[inline(always)]
    pub const fn new(row: usize, col: usize) -> Self
    { MatrixIndex { row, col } }

    /// Decompose a row-major linear index for a matrix with `cols` columns.
    #[inline(always)]
    pub const fn from_linear(index: usize, cols: usize) -> Self
    { MatrixIndex { row: index / cols, col: index % cols } }

    /// Row-major linear index for a matrix with `cols` columns.
    #[inline(always)]
    pub const fn to_linear(self, cols: usize) -> usize
    { self.row * cols + self.col }
}

impl From<(usize, usize)> for MatrixIndex {
    #[inline(always)]
    fn from((row, col): (usize, usize)) -> Self
    { MatrixIndex { row, col } }
}

impl From<MatrixIndex> for (usize, usize) {
    #[inline(always)]
    fn from(MatrixIndex { row, col }: MatrixIndex) -> Self
    { (row, col) }
}

// ---------------------------------------------------------------------------

impl<const R: usize, const C: usize, X> Matrix<R, C, X> {
    pub(crate) const NONEMPTY: () = assert!(R >= 1 && C >= 1, "a matrix must have at least one row and one column");

    /// Number of rows.
    pub const ROWS: usize = R;
    /// Number of columns.
    pub const COLS: usize = C;
    /// Number of stored elements.
    pub const ENTRY_COUNT: usize = R * C;
}

// Indexing panics on out-of-range indices, like slices do.
// The checked forms are `get`, `get_mut`, `get_linear` and friends.

impl<const R: usize, const C: usize, X> Index<(usize, usize)> for Matrix<R, C, X> {
    type Output = X;

    #[inline(always)]
    fn index(&self, (r, c): (usize, usize)) -> &X
    { &self.data[r][c] }
}

impl<const R: usize, const C: usize, X> IndexMut<(usize, usize)> for Matrix<R, C, X> {
    #[inline(always)]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut X
    { &mut self.data[r][c] }
}

impl<const R: usize, const C: usize, X> Index<MatrixIndex> for Matrix<R, C, X> {
    type Output = X;

    #[inline(always)]
    fn index(&self, MatrixIndex { row, col }: MatrixIndex) -> &X
    { &self.data[row][col] }
}

impl<const R: usize, const C: usize, X> IndexMut<MatrixIndex> for Matrix<R, C, X> {
    #[inline(always)]
    fn index_mut(&mut self, MatrixIndex { row, col }: MatrixIndex) -> &mut X
    { &mut self.data[row][col] }
}

/// Row-major linear indexing.
impl<const R: usize, const C: usize, X> Index<usize> for Matrix<R, C, X> {
    type Output = X;

    #[inline(always)]
    fn index(&self, index: usize) -> &X
    { &self.data[..].flat()[index] }
}

impl<const R: usize, const C: usize, X> IndexMut<usize> for Matrix<R, C, X> {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut X
    { &mut self.data[..].flat_mut()[index] }
}

// forward the debug impl without a surrounding "Matrix { data: ... }", so that
// the output reads as a nested list (valid JSON and Python for most inputs)
impl<const R: usize, const C: usize, X: fmt::Debug> fmt::Debug for Matrix<R, C, X> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Debug::fmt(&self.data, f) }
}
