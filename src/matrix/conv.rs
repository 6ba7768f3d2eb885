/* ************************************************************************ **
** This file is part of densemat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use densemat_assert_close::{CheckClose, CheckCloseError, Tolerances};

use crate::Matrix;

impl<const R: usize, const C: usize, X> From<[[X; C]; R]> for Matrix<R, C, X> {
    #[inline(always)]
    fn from(data: [[X; C]; R]) -> Self
    { Matrix::from_array(data) }
}

impl<const R: usize, const C: usize, X> From<Matrix<R, C, X>> for [[X; C]; R] {
    #[inline(always)]
    fn from(matrix: Matrix<R, C, X>) -> Self
    { matrix.into_array() }
}

impl<const R: usize, const C: usize, X> AsRef<[[X; C]; R]> for Matrix<R, C, X> {
    #[inline(always)]
    fn as_ref(&self) -> &[[X; C]; R]
    { self.as_array() }
}

impl<const R: usize, const C: usize, X> AsMut<[[X; C]; R]> for Matrix<R, C, X> {
    #[inline(always)]
    fn as_mut(&mut self) -> &mut [[X; C]; R]
    { self.as_array_mut() }
}

impl<const R: usize, const C: usize, X: CheckClose> CheckClose for Matrix<R, C, X> {
    type Scalar = X::Scalar;

    // through the nested arrays, so that failures are reported at `[row, col]`
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>
    { self.as_array().check_close(other.as_array(), tol) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use densemat_assert_close::assert_close;

    #[test]
    fn array_conversions() {
        let arr = [[1., 2.], [3., 4.]];
        let m: Matrix<2, 2> = arr.into();
        assert_eq!(m.as_ref(), &arr);
        assert_eq!(<[[f64; 2]; 2]>::from(m), arr);
    }

    #[test]
    fn matrices_check_close() {
        let a: Matrix<2, 2> = Matrix::from_array([[1.0, 2.0], [3.0, 4.0]]);
        let b: Matrix<2, 2> = Matrix::from_array([[1.0, 2.0], [3.0, 4.0 + 1e-13]]);
        assert_close!(abs=1e-12, a, b);
        let err = a.check_close(&(b * 2.0), Tolerances { abs: 1e-12, rel: 1e-12 }).unwrap_err();
        assert_eq!(err.index(), &[0, 0]);

        let c: Matrix<2, 2> = Matrix::from_array([[1.0, 2.0], [3.5, 4.0]]);
        assert_eq!(a.check_close(&c, Tolerances::default()).unwrap_err().index(), &[1, 0]);
    }
}
