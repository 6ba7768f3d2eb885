/* ************************************************************************ **
** This file is part of densemat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use densemat_matrix::{Field, Matrix};

use crate::{LinalgError, Tolerance};
use crate::derived::inverse_with;
use crate::elimination::row_echelon_form_with;

/// Scale to unit (Frobenius) norm.
///
/// For a row or column vector, this is the usual Euclidean normalization.
pub fn normalize<const R: usize, const C: usize, X: Field>(v: &Matrix<R, C, X>) -> Result<Matrix<R, C, X>, LinalgError>
{ normalize_with(v, Tolerance::for_field::<X>()) }

pub fn normalize_with<const R: usize, const C: usize, X: Field>(v: &Matrix<R, C, X>, tol: Tolerance) -> Result<Matrix<R, C, X>, LinalgError> {
    let norm = v.frobenius_norm();
    if Tolerance::is_negligible(norm, tol.threshold(v)) {
        debug!("cannot normalize vector of norm {:?}", norm);
        return Err(LinalgError::ZeroVector);
    }
    Ok(v / norm)
}

/// Orthonormalize the columns by classical Gram-Schmidt.
///
/// Fails if any column is linearly dependent on the columns before it,
/// naming the first such column.  In particular this always fails when
/// there are more columns than rows.
pub fn orthonormalize<const R: usize, const C: usize, X: Field>(m: &Matrix<R, C, X>) -> Result<Matrix<R, C, X>, LinalgError>
{ orthonormalize_with(m, Tolerance::for_field::<X>()) }

pub fn orthonormalize_with<const R: usize, const C: usize, X: Field>(m: &Matrix<R, C, X>, tol: Tolerance) -> Result<Matrix<R, C, X>, LinalgError> {
    let mut out = *m;
    for i in 0..C {
        let original = m.column(i)?;

        let mut residual = original;
        for j in 0..i {
            let q = out.column(j)?;
            residual -= &q * q.dot(&original);
        }

        let norm = residual.frobenius_norm();
        if Tolerance::is_negligible(norm, tol.epsilon(original.frobenius_norm())) {
            debug!("column {} has residual norm {:?} after projecting out {} columns", i, norm, i);
            return Err(LinalgError::RankDeficientInput { column: i });
        }
        out.set_column(i, &(residual / norm))?;
    }
    Ok(out)
}

/// The matrix `A (AᵀA)⁻¹ Aᵀ` that projects onto the column space of `A`.
pub fn projection_matrix<const R: usize, const K: usize, X: Field>(a: &Matrix<R, K, X>) -> Result<Matrix<R, R, X>, LinalgError>
{ projection_matrix_with(a, Tolerance::for_field::<X>()) }

pub fn projection_matrix_with<const R: usize, const K: usize, X: Field>(a: &Matrix<R, K, X>, tol: Tolerance) -> Result<Matrix<R, R, X>, LinalgError> {
    let at = a.transpose();
    let gram = &at * a;
    let gram_inv = inverse_with(&gram, tol).map_err(|e| match e {
        // AᵀA shares its null space with A, so its free columns are A's dependent columns
        LinalgError::SingularMatrix => {
            let column = row_echelon_form_with(&gram, tol).free_columns().next().unwrap_or(0);
            LinalgError::RankDeficientInput { column }
        },
        e => e,
    })?;
    Ok(&(a * &gram_inv) * &at)
}

/// Project each column of `v` onto the column space of `a`.
pub fn projection<const R: usize, const K: usize, const M: usize, X: Field>(
    a: &Matrix<R, K, X>,
    v: &Matrix<R, M, X>,
) -> Result<Matrix<R, M, X>, LinalgError>
{ projection_with(a, v, Tolerance::for_field::<X>()) }

pub fn projection_with<const R: usize, const K: usize, const M: usize, X: Field>(
    a: &Matrix<R, K, X>,
    v: &Matrix<R, M, X>,
    tol: Tolerance,
) -> Result<Matrix<R, M, X>, LinalgError>
{ Ok(&projection_matrix_with(a, tol)? * v) }
