/* ************************************************************************ **
** This file is part of densemat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Small dense linear algebra, with matrix dimensions in the type.
//!
//! The work is split across a few crates, re-exported here:
//!
//! * [`densemat_matrix`] has the `Matrix` type, its operators and
//!   its structural operations (rows, columns, slices, transposes).
//! * [`densemat_linalg`] has everything built on Gaussian elimination:
//!   rank, determinants, inverses, Gram-Schmidt and projections.
//!
//! ```
//! use densemat::prelude::*;
//!
//! let a = Matrix::from_array([
//!     [1.0, 1.0],
//!     [0.0, 1.0],
//!     [0.0, 0.0],
//! ]);
//! let v = Matrix::from_array([[2.0], [3.0], [4.0]]);
//!
//! let projected = projection(&a, &v)?;
//! assert!((projected - Matrix::from_array([[2.0], [3.0], [0.0]])).norm_max() < 1e-12);
//! assert_eq!(rank(&a), 2);
//! # Ok::<(), densemat::LinalgError>(())
//! ```

pub use densemat_matrix;
pub use densemat_linalg;

pub use densemat_matrix::{
    Matrix, MatrixIndex, MatrixError, MatrixEntryArray, Entries, IntRange,
    ColVec, RowVec, Field,
    from_array, multiply, transpose,
};
pub use densemat_linalg::*;

pub mod prelude {
    pub use densemat_matrix::{Matrix, MatrixIndex, Field};
    pub use densemat_linalg::{
        Tolerance,
        rank, determinant, inverse, solve,
        row_echelon_form, reduced_row_echelon_form,
        normalize, orthonormalize, projection, projection_matrix,
    };
}
