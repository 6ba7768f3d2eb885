/* ************************************************************************ **
** This file is part of densemat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Inherent methods of `Matrix`.
//!
//! Matrices are understood to be containers of rows. Methods that take or
//! return a single row use `Matrix<1, C>`; those that take or return a
//! single column use `Matrix<R, 1>`.

use itertools::Itertools;
use slice_of_array::prelude::*;

use crate::{Field, Matrix, MatrixError, MatrixEntryArray};

// ---------------------------------------------------------------------------
// ------------------------------ construction -------------------------------

impl<const R: usize, const C: usize, X> Matrix<R, C, X> {
    /// Wrap an array of rows.
    #[inline(always)]
    pub fn from_array(data: [[X; C]; R]) -> Self {
        let () = Self::NONEMPTY;
        Matrix { data }
    }

    /// Construct a matrix from a function on `(row, col)` indices.
    #[inline]
    pub fn from_fn<F>(mut f: F) -> Self
    where F: FnMut(usize, usize) -> X,
    { Self::from_array(std::array::from_fn(|r| std::array::from_fn(|c| f(r, c)))) }

    /// Construct a matrix from exactly `R * C` values in row-major order.
    pub fn from_row_major(values: &[X]) -> Result<Self, MatrixError>
    where X: Copy,
    {
        if values.len() != R * C {
            return Err(MatrixError::DimensionMismatch { expected: R * C, found: values.len() });
        }
        Ok(Self::from_fn(|r, c| values[r * C + c]))
    }

    /// Cast into a plain `[[X; C]; R]`.
    #[inline(always)]
    pub fn into_array(self) -> [[X; C]; R]
    { self.data }

    /// Cast into a plain `&[[X; C]; R]`.
    #[inline(always)]
    pub fn as_array(&self) -> &[[X; C]; R]
    { &self.data }

    /// Cast into a plain `&mut [[X; C]; R]`.
    #[inline(always)]
    pub fn as_array_mut(&mut self) -> &mut [[X; C]; R]
    { &mut self.data }

    /// All elements in row-major order.
    #[inline(always)]
    pub fn as_row_major(&self) -> &[X]
    { self.data[..].flat() }

    #[inline(always)]
    pub fn as_row_major_mut(&mut self) -> &mut [X]
    { self.data[..].flat_mut() }

    /// Map each element.
    #[inline]
    pub fn map<B, F>(self, mut f: F) -> Matrix<R, C, B>
    where F: FnMut(X) -> B,
    { Matrix::from_array(self.data.map(|row| row.map(&mut f))) }
}

// ---------------------------------------------------------------------------
// -------------------------------- shape ------------------------------------

impl<const R: usize, const C: usize, X> Matrix<R, C, X> {
    #[inline(always)] pub const fn num_rows(&self) -> usize { R }
    #[inline(always)] pub const fn num_cols(&self) -> usize { C }
    #[inline(always)] pub const fn dims(&self) -> (usize, usize) { (R, C) }
    #[inline(always)] pub const fn is_square(&self) -> bool { R == C }

    /// The largest rank any `R x C` matrix can have, `min(R, C)`.
    #[inline(always)]
    pub const fn max_rank() -> usize
    { crate::max_rank::<R, C>() }

    /// View of all entries in row-major order, each paired with its index.
    #[inline(always)]
    pub fn entries(&self) -> MatrixEntryArray<'_, R, C, X>
    { MatrixEntryArray::new(self) }
}

// ---------------------------------------------------------------------------
// ---------------------------- checked access -------------------------------

impl<const R: usize, const C: usize, X> Matrix<R, C, X> {
    #[inline]
    pub(crate) fn check_index(r: usize, c: usize) -> Result<(), MatrixError> {
        match r < R && c < C {
            true => Ok(()),
            false => Err(MatrixError::IndexOutOfRange { index: (r, c), dims: (R, C) }),
        }
    }

    #[inline]
    fn check_linear(index: usize) -> Result<(usize, usize), MatrixError> {
        match index < R * C {
            true => Ok((index / C, index % C)),
            false => Err(MatrixError::IndexOutOfRange { index: (index / C, index % C), dims: (R, C) }),
        }
    }

    pub fn get(&self, r: usize, c: usize) -> Result<&X, MatrixError> {
        Self::check_index(r, c)?;
        Ok(&self.data[r][c])
    }

    pub fn get_mut(&mut self, r: usize, c: usize) -> Result<&mut X, MatrixError> {
        Self::check_index(r, c)?;
        Ok(&mut self.data[r][c])
    }

    pub fn set(&mut self, r: usize, c: usize, value: X) -> Result<(), MatrixError> {
        *self.get_mut(r, c)? = value;
        Ok(())
    }

    /// Access by row-major linear index.
    pub fn get_linear(&self, index: usize) -> Result<&X, MatrixError> {
        let (r, c) = Self::check_linear(index)?;
        Ok(&self.data[r][c])
    }

    pub fn get_linear_mut(&mut self, index: usize) -> Result<&mut X, MatrixError> {
        let (r, c) = Self::check_linear(index)?;
        Ok(&mut self.data[r][c])
    }

    pub fn set_linear(&mut self, index: usize, value: X) -> Result<(), MatrixError> {
        *self.get_linear_mut(index)? = value;
        Ok(())
    }

    /// Exchange two rows in place.  Exchanging a row with itself does nothing.
    pub fn row_exchange(&mut self, a: usize, b: usize) -> Result<(), MatrixError> {
        Self::check_index(a, 0)?;
        Self::check_index(b, 0)?;
        self.data.swap(a, b);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// ------------------------- rows, columns, slices ---------------------------

impl<const R: usize, const C: usize, X: Copy> Matrix<R, C, X> {
    pub fn row(&self, r: usize) -> Result<Matrix<1, C, X>, MatrixError> {
        Self::check_index(r, 0)?;
        Ok(Matrix::from_array([self.data[r]]))
    }

    pub fn set_row(&mut self, r: usize, row: &Matrix<1, C, X>) -> Result<(), MatrixError> {
        Self::check_index(r, 0)?;
        self.data[r] = row.data[0];
        Ok(())
    }

    pub fn column(&self, c: usize) -> Result<Matrix<R, 1, X>, MatrixError> {
        Self::check_index(0, c)?;
        Ok(Matrix::from_fn(|r, _| self.data[r][c]))
    }

    pub fn set_column(&mut self, c: usize, column: &Matrix<R, 1, X>) -> Result<(), MatrixError> {
        Self::check_index(0, c)?;
        for (row, &[value]) in self.data.iter_mut().zip(&column.data) {
            row[c] = value;
        }
        Ok(())
    }

    /// Matrix transpose.
    #[inline]
    pub fn transpose(&self) -> Matrix<C, R, X>
    { Matrix::from_fn(|r, c| self.data[c][r]) }

    /// Extract the `H x W` block whose top left corner is at `(row, col)`.
    pub fn slice<const H: usize, const W: usize>(&self, row: usize, col: usize) -> Result<Matrix<H, W, X>, MatrixError> {
        let () = Matrix::<H, W, X>::NONEMPTY;
        let row_end = row.checked_add(H).filter(|&end| end <= R);
        let col_end = col.checked_add(W).filter(|&end| end <= C);
        if row_end.is_none() || col_end.is_none() {
            return Err(MatrixError::IndexOutOfRange { index: (row, col), dims: (R, C) });
        }
        Ok(Matrix::from_fn(|r, c| self.data[row + r][col + c]))
    }
}

// ---------------------------------------------------------------------------
// ------------------------------ numerics -----------------------------------

impl<const R: usize, const C: usize, X: Field> Matrix<R, C, X> {
    /// Construct the zero matrix.
    #[inline(always)]
    pub fn zero() -> Self
    { Self::from_array([[X::zero(); C]; R]) }

    pub fn is_zero(&self) -> bool
    { self.as_row_major().iter().all(|x| x.is_zero()) }

    /// `true` iff any element is NaN.
    pub fn has_nans(&self) -> bool
    { self.as_row_major().iter().any(|x| x.is_nan()) }

    /// Largest absolute value of any element.  (NaNs are ignored)
    pub fn norm_max(&self) -> X
    { self.as_row_major().iter().fold(X::zero(), |acc, x| acc.max(x.abs())) }

    /// Square root of the sum of squares of all elements.
    ///
    /// For row and column vectors this is the Euclidean norm.
    pub fn frobenius_norm(&self) -> X
    { self.dot(self).sqrt() }

    /// Sum of the elementwise product.
    ///
    /// For row and column vectors this is the usual dot product.
    pub fn dot(&self, other: &Self) -> X {
        self.as_row_major().iter()
            .zip_eq(other.as_row_major())
            .map(|(&a, &b)| a * b)
            .sum()
    }
}

impl<const N: usize, X: Field> Matrix<N, N, X> {
    /// Construct the identity matrix.
    #[inline]
    pub fn eye() -> Self
    { Self::from_fn(|r, c| if r == c { X::one() } else { X::zero() }) }

    /// Overwrite with the identity matrix.
    #[inline]
    pub fn set_identity(&mut self)
    { *self = Self::eye(); }

    pub fn is_identity(&self) -> bool {
        self.entries().into_iter().all(|(index, x)| match index.row == index.col {
            true => x.is_one(),
            false => x.is_zero(),
        })
    }
}

impl<const R: usize, const C: usize, X: Field> Default for Matrix<R, C, X> {
    #[inline(always)]
    fn default() -> Self
    { Self::zero() }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MatrixIndex;

    #[test]
    fn test_zero_eye() {
        assert_eq!(Matrix::from_array([[0., 0.], [0., 0.]]), Matrix::zero());
        assert_eq!(Matrix::from_array([[1., 0.], [0., 1.]]), Matrix::eye());
        assert_eq!(Matrix::<3, 3>::default(), Matrix::zero());
        assert!(Matrix::<3, 3>::eye().is_identity());
        assert!(!Matrix::<3, 3>::zero().is_identity());
        assert!(Matrix::<2, 4>::zero().is_zero());
        assert!(!Matrix::from_array([[2., 0.], [0., 1.]]).is_identity());
        assert!(!Matrix::from_array([[1., -1.], [0., 1.]]).is_identity());
    }

    #[test]
    fn set_identity_overwrites() {
        let mut m = Matrix::from_array([[5., 6.], [7., 8.]]);
        m.set_identity();
        assert_eq!(m, Matrix::eye());
    }

    #[test]
    fn from_row_major_checks_count() {
        let m = Matrix::<2, 3>::from_row_major(&[1., 2., 3., 4., 5., 6.]).unwrap();
        assert_eq!(m, Matrix::from_array([[1., 2., 3.], [4., 5., 6.]]));

        assert_eq!(
            Matrix::<2, 3>::from_row_major(&[1., 2., 3., 4., 5.]),
            Err(MatrixError::DimensionMismatch { expected: 6, found: 5 }),
        );
        assert_eq!(
            Matrix::<2, 3>::from_row_major(&[0.; 7]),
            Err(MatrixError::DimensionMismatch { expected: 6, found: 7 }),
        );
    }

    #[test]
    fn checked_access() {
        let mut m = Matrix::<2, 3>::zero();
        m.set(1, 2, 4.0).unwrap();
        assert_eq!(m.get(1, 2), Ok(&4.0));
        assert_eq!(m.get_linear(5), Ok(&4.0));

        assert_eq!(m.get(2, 0), Err(MatrixError::IndexOutOfRange { index: (2, 0), dims: (2, 3) }));
        assert_eq!(m.get(0, 3), Err(MatrixError::IndexOutOfRange { index: (0, 3), dims: (2, 3) }));
        assert!(m.set(0, 3, 1.0).is_err());
        assert!(m.get_linear(6).is_err());
        assert!(m.set_linear(6, 1.0).is_err());

        m.set_linear(0, -1.0).unwrap();
        assert_eq!(m[(0, 0)], -1.0);
    }

    #[test]
    fn row_and_column_roundtrip() {
        let mut m = Matrix::<3, 2>::zero();
        for r in 0..3 {
            let row = Matrix::from_array([[r as f64, -(r as f64)]]);
            m.set_row(r, &row).unwrap();
            assert_eq!(m.row(r).unwrap(), row);
        }
        for c in 0..2 {
            let col = Matrix::from_array([[1.0 + c as f64], [2.0], [3.0]]);
            m.set_column(c, &col).unwrap();
            assert_eq!(m.column(c).unwrap(), col);
        }
        assert!(m.row(3).is_err());
        assert!(m.column(2).is_err());
        assert!(m.set_row(3, &Matrix::zero()).is_err());
        assert!(m.set_column(2, &Matrix::zero()).is_err());
    }

    #[test]
    fn row_exchange() {
        let mut m = Matrix::from_array([[1., 2.], [3., 4.], [5., 6.]]);
        m.row_exchange(0, 2).unwrap();
        assert_eq!(m, Matrix::from_array([[5., 6.], [3., 4.], [1., 2.]]));
        m.row_exchange(1, 1).unwrap();
        assert_eq!(m, Matrix::from_array([[5., 6.], [3., 4.], [1., 2.]]));
        assert!(m.row_exchange(0, 3).is_err());
    }

    #[test]
    fn transpose() {
        let m = Matrix::from_array([[1., 2., 3.], [4., 5., 6.]]);
        let t = m.transpose();
        assert_eq!(t, Matrix::from_array([[1., 4.], [2., 5.], [3., 6.]]));
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn slice() {
        let m = Matrix::<4, 4>::from_fn(|r, c| (10 * r + c) as f64);
        let s = m.slice::<2, 2>(1, 1).unwrap();
        assert_eq!(s, Matrix::from_array([[11., 12.], [21., 22.]]));

        let s = m.slice::<1, 4>(3, 0).unwrap();
        assert_eq!(s, m.row(3).unwrap());

        assert_eq!(
            m.slice::<2, 2>(3, 0),
            Err(MatrixError::IndexOutOfRange { index: (3, 0), dims: (4, 4) }),
        );
        assert!(m.slice::<2, 2>(0, 3).is_err());
        assert!(m.slice::<4, 4>(0, 0).is_ok());
        assert!(m.slice::<1, 1>(4, 0).is_err());
    }

    #[test]
    fn slice_offsets_near_overflow() {
        let m = Matrix::<4, 4>::eye();
        assert_eq!(
            m.slice::<2, 2>(usize::MAX, 0),
            Err(MatrixError::IndexOutOfRange { index: (usize::MAX, 0), dims: (4, 4) }),
        );
        assert!(m.slice::<2, 2>(0, usize::MAX).is_err());
        assert!(m.slice::<1, 1>(usize::MAX, usize::MAX).is_err());
        assert!(m.slice::<2, 2>(usize::MAX - 1, 0).is_err());
    }

    #[test]
    fn nans() {
        let mut m = Matrix::<2, 2>::eye();
        assert!(!m.has_nans());
        m[(1, 0)] = f64::NAN;
        assert!(m.has_nans());
        assert_ne!(m, m);
    }

    #[test]
    fn norms() {
        let v = Matrix::from_array([[3.], [-4.]]);
        assert_eq!(v.frobenius_norm(), 5.0);
        assert_eq!(v.norm_max(), 4.0);
        assert_eq!(v.dot(&v), 25.0);
    }

    #[test]
    fn shape_queries() {
        let m = Matrix::<2, 5>::zero();
        assert_eq!(m.dims(), (2, 5));
        assert_eq!((m.num_rows(), m.num_cols()), (2, 5));
        assert!(!m.is_square());
        assert_eq!(Matrix::<2, 5>::max_rank(), 2);
        assert_eq!(Matrix::<2, 5>::ENTRY_COUNT, 10);
    }

    #[test]
    fn map() {
        let m: Matrix<2, 2> = Matrix::from_array([[1., 2.], [3., 4.]]);
        assert_eq!(m.map(|x| x * 2.0), Matrix::from_array([[2., 4.], [6., 8.]]));
        assert_eq!(m.map(|x| x as f32), Matrix::from_array([[1f32, 2.], [3., 4.]]));
        assert_eq!(m.entries().into_iter().next(), Some((MatrixIndex::new(0, 0), &1.0)));
    }
}
