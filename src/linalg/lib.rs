/* ************************************************************************ **
** This file is part of densemat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Elimination-based linear algebra on `densemat_matrix::Matrix`.
//!
//! Everything that must decide whether a number is zero does so through a
//! [`Tolerance`].  Each such function comes in two forms: `foo(..)` uses the
//! default tolerance for the element type, and `foo_with(.., tol)` takes one
//! explicitly.
//!
//! ```
//! use densemat_linalg::{determinant, inverse};
//! use densemat_matrix::Matrix;
//!
//! let m = Matrix::from_array([[4.0_f64, 7.0], [2.0, 6.0]]);
//! assert!((determinant(&m) - 10.0).abs() < 1e-12);
//!
//! let inv = inverse(&m).unwrap();
//! let product = &m * &inv;
//! assert!((product - Matrix::eye()).norm_max() < 1e-12);
//! ```

#[macro_use] extern crate log;

pub use crate::settings::Tolerance;
mod settings;

pub mod elimination;
pub use crate::elimination::{
    Elimination, ColumnType, Form, RowOperations,
    row_echelon_form, row_echelon_form_with,
    reduced_row_echelon_form, reduced_row_echelon_form_with,
};

pub use crate::derived::*;
mod derived;

pub use crate::geometric::*;
mod geometric;

use densemat_matrix::MatrixError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum LinalgError {
    #[error("matrix is singular to within tolerance")]
    SingularMatrix,

    #[error("column {column} is linearly dependent on the columns before it")]
    RankDeficientInput { column: usize },

    #[error("cannot normalize a vector of zero length")]
    ZeroVector,

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_errors_convert() {
        let err: LinalgError = MatrixError::NotSquare { dims: (2, 3) }.into();
        assert_eq!(err, LinalgError::Matrix(MatrixError::NotSquare { dims: (2, 3) }));
        assert_eq!(err.to_string(), "operation requires a square matrix, got 2x3");
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            LinalgError::RankDeficientInput { column: 2 }.to_string(),
            "column 2 is linearly dependent on the columns before it",
        );
    }
}
