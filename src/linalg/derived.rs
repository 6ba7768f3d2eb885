/* ************************************************************************ **
** This file is part of densemat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use densemat_matrix::{Field, Matrix};

use crate::{LinalgError, Tolerance};
use crate::elimination::{self, Form};

/// Number of linearly independent rows (equivalently, columns).
pub fn rank<const R: usize, const C: usize, X: Field>(matrix: &Matrix<R, C, X>) -> usize
{ rank_with(matrix, Tolerance::for_field::<X>()) }

pub fn rank_with<const R: usize, const C: usize, X: Field>(matrix: &Matrix<R, C, X>, tol: Tolerance) -> usize
{ elimination::row_echelon_form_with(matrix, tol).rank() }

/// The largest rank an `R x C` matrix could have.
pub fn max_rank<const R: usize, const C: usize, X>(_: &Matrix<R, C, X>) -> usize
{ densemat_matrix::max_rank::<R, C>() }

/// Determinant, from the pivots recorded during elimination.
///
/// A matrix with a column lacking a pivot has a determinant of exactly zero.
pub fn determinant<const N: usize, X: Field>(matrix: &Matrix<N, N, X>) -> X
{ determinant_with(matrix, Tolerance::for_field::<X>()) }

pub fn determinant_with<const N: usize, X: Field>(matrix: &Matrix<N, N, X>, tol: Tolerance) -> X
{ elimination::row_echelon_form_with(matrix, tol).square_determinant() }

/// Matrix inverse, by Gauss-Jordan elimination alongside the identity.
pub fn inverse<const N: usize, X: Field>(matrix: &Matrix<N, N, X>) -> Result<Matrix<N, N, X>, LinalgError>
{ inverse_with(matrix, Tolerance::for_field::<X>()) }

pub fn inverse_with<const N: usize, X: Field>(matrix: &Matrix<N, N, X>, tol: Tolerance) -> Result<Matrix<N, N, X>, LinalgError>
{ solve_with(matrix, &Matrix::eye(), tol) }

/// Solve `A X = B` for `X`, where `A` is square and nonsingular.
pub fn solve<const N: usize, const M: usize, X: Field>(
    a: &Matrix<N, N, X>,
    b: &Matrix<N, M, X>,
) -> Result<Matrix<N, M, X>, LinalgError>
{ solve_with(a, b, Tolerance::for_field::<X>()) }

pub fn solve_with<const N: usize, const M: usize, X: Field>(
    a: &Matrix<N, N, X>,
    b: &Matrix<N, M, X>,
    tol: Tolerance,
) -> Result<Matrix<N, M, X>, LinalgError> {
    let mut out = *b;
    let rref = elimination::eliminate(a, Form::ReducedRowEchelon, &mut out, tol);
    if rref.rank() < N {
        debug!(
            "singular {}x{} matrix (rank {}, first free column {:?})",
            N, N, rref.rank(), rref.free_columns().next(),
        );
        return Err(LinalgError::SingularMatrix);
    }
    Ok(out)
}
