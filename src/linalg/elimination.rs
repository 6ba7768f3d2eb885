/* ************************************************************************ **
** This file is part of densemat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Gaussian elimination, shared by everything that needs a rank or a pivot.
//!
//! Conventions:
//!
//! * Columns are scanned left to right, and the pivot in each column is the
//!   topmost row (at or below the current pivot row) whose magnitude exceeds
//!   the tolerance.  There is no partial pivoting by magnitude, so the choice
//!   of pivots only depends on which entries are numerically zero.
//! * Entries that are eliminated are set to exactly zero, as are the
//!   negligible entries of columns without a pivot.  Only the matrix being
//!   reduced gets this treatment; a companion just sees the row operations.

use densemat_matrix::{Field, IntRange, Matrix, MatrixError};

use crate::Tolerance;

/// Which form `eliminate` should stop at.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Form {
    /// Zeros below each pivot.
    RowEchelon,
    /// Pivots of 1, with zeros above and below them.
    ReducedRowEchelon,
}

/// Whether elimination found a pivot in a column.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Pivot,
    Free,
}

/// Result of Gaussian elimination, with the metadata gathered along the way.
#[derive(Debug, Clone)]
pub struct Elimination<const R: usize, const C: usize, X = f64> {
    matrix: Matrix<R, C, X>,
    rank: usize,
    // only the first `rank` are meaningful
    pivot_columns: [usize; C],
    column_types: [ColumnType; C],
    row_exchanges: usize,
    // product of the pivots at the moment they were chosen, before any scaling
    pivot_product: X,
    form: Form,
}

impl<const R: usize, const C: usize, X: Field> Elimination<R, C, X> {
    /// The row echelon or reduced row echelon matrix.
    pub fn matrix(&self) -> &Matrix<R, C, X>
    { &self.matrix }

    pub fn into_matrix(self) -> Matrix<R, C, X>
    { self.matrix }

    /// Number of pivots found.
    pub fn rank(&self) -> usize
    { self.rank }

    /// Columns containing a pivot, in increasing order.
    pub fn pivot_columns(&self) -> &[usize]
    { &self.pivot_columns[..self.rank] }

    /// Columns without a pivot, in increasing order.
    pub fn free_columns(&self) -> impl Iterator<Item=usize> + '_ {
        self.column_types.iter().enumerate()
            .filter(|&(_, &ty)| ty == ColumnType::Free)
            .map(|(c, _)| c)
    }

    pub fn column_types(&self) -> &[ColumnType; C]
    { &self.column_types }

    pub fn row_exchanges(&self) -> usize
    { self.row_exchanges }

    /// `-1` for an odd number of row exchanges, else `1`.
    pub fn sign(&self) -> X {
        match self.row_exchanges % 2 {
            0 => X::one(),
            _ => -X::one(),
        }
    }

    pub fn form(&self) -> Form
    { self.form }

    /// `true` if the rank is `min(R, C)`.
    pub fn is_full_rank(&self) -> bool
    { self.rank == densemat_matrix::max_rank::<R, C>() }

    /// Determinant of the original matrix.
    ///
    /// This is zero whenever a column had no pivot.
    pub fn determinant(&self) -> Result<X, MatrixError> {
        if R != C {
            return Err(MatrixError::NotSquare { dims: (R, C) });
        }
        Ok(self.square_determinant())
    }

    // caller guarantees R == C
    pub(crate) fn square_determinant(&self) -> X {
        match self.rank == R {
            true => self.sign() * self.pivot_product,
            false => X::zero(),
        }
    }
}

// ---------------------------------------------------------------------------

/// Elementary row operations.
///
/// Elimination replays each operation it performs onto a companion,
/// which is how the same routine computes inverses and solutions.
/// `()` is the companion for when nobody is listening.
pub trait RowOperations<const R: usize, X> {
    /// Swap rows `a` and `b`.
    fn exchange_rows(&mut self, a: usize, b: usize);

    /// `row[dest] += scale * row[src]`
    fn add_scaled_row(&mut self, dest: usize, src: usize, scale: X);

    /// `row[row] *= scale`
    fn scale_row(&mut self, row: usize, scale: X);
}

impl<const R: usize, X> RowOperations<R, X> for () {
    fn exchange_rows(&mut self, _: usize, _: usize) {}
    fn add_scaled_row(&mut self, _: usize, _: usize, _: X) {}
    fn scale_row(&mut self, _: usize, _: X) {}
}

impl<const R: usize, const K: usize, X: Field> RowOperations<R, X> for Matrix<R, K, X> {
    fn exchange_rows(&mut self, a: usize, b: usize)
    { self.as_array_mut().swap(a, b) }

    fn add_scaled_row(&mut self, dest: usize, src: usize, scale: X) {
        let rows = self.as_array_mut();
        let src_row = rows[src];
        for (d, s) in rows[dest].iter_mut().zip(src_row.iter()) {
            *d += scale * *s;
        }
    }

    fn scale_row(&mut self, row: usize, scale: X) {
        for x in &mut self.as_array_mut()[row] {
            *x *= scale;
        }
    }
}

// ---------------------------------------------------------------------------

/// Row echelon form, using the default tolerance for `X`.
pub fn row_echelon_form<const R: usize, const C: usize, X: Field>(matrix: &Matrix<R, C, X>) -> Elimination<R, C, X>
{ row_echelon_form_with(matrix, Tolerance::for_field::<X>()) }

pub fn row_echelon_form_with<const R: usize, const C: usize, X: Field>(matrix: &Matrix<R, C, X>, tol: Tolerance) -> Elimination<R, C, X>
{ eliminate(matrix, Form::RowEchelon, &mut (), tol) }

/// Reduced row echelon form, using the default tolerance for `X`.
pub fn reduced_row_echelon_form<const R: usize, const C: usize, X: Field>(matrix: &Matrix<R, C, X>) -> Elimination<R, C, X>
{ reduced_row_echelon_form_with(matrix, Tolerance::for_field::<X>()) }

pub fn reduced_row_echelon_form_with<const R: usize, const C: usize, X: Field>(matrix: &Matrix<R, C, X>, tol: Tolerance) -> Elimination<R, C, X>
{ eliminate(matrix, Form::ReducedRowEchelon, &mut (), tol) }

/// Gaussian elimination on a copy of `matrix`, replaying every row
/// operation onto `companion`.
pub fn eliminate<const R: usize, const C: usize, X, T>(
    matrix: &Matrix<R, C, X>,
    form: Form,
    companion: &mut T,
    tol: Tolerance,
) -> Elimination<R, C, X>
where
    X: Field,
    T: RowOperations<R, X> + ?Sized,
{
    let epsilon = tol.threshold(matrix);
    let mut m = *matrix;

    let mut pivot_row = 0;
    let mut rank = 0;
    let mut pivot_columns = [0; C];
    let mut column_types = [ColumnType::Free; C];
    let mut row_exchanges = 0;
    let mut pivot_product = X::one();

    for col in 0..C {
        if pivot_row == R {
            // out of rows; the rest are free
            break;
        }

        let found = (pivot_row..R).find(|&r| Tolerance::is_nonzero(m[(r, col)], epsilon));
        let source_row = match found {
            Some(r) => r,
            None => {
                trace!("column {} is free", col);
                for r in pivot_row..R {
                    m[(r, col)] = X::zero();
                }
                continue;
            },
        };

        if source_row != pivot_row {
            trace!("exchanging rows {} and {}", pivot_row, source_row);
            m.exchange_rows(pivot_row, source_row);
            companion.exchange_rows(pivot_row, source_row);
            row_exchanges += 1;
        }

        let pivot = m[(pivot_row, col)];
        trace!("pivot {:?} at ({}, {})", pivot, pivot_row, col);
        pivot_product *= pivot;

        for r in pivot_row + 1..R {
            let factor = m[(r, col)] / pivot;
            if factor != X::zero() {
                m.add_scaled_row(r, pivot_row, -factor);
                companion.add_scaled_row(r, pivot_row, -factor);
            }
            m[(r, col)] = X::zero();
        }

        if form == Form::ReducedRowEchelon {
            let recip = pivot.recip();
            m.scale_row(pivot_row, recip);
            companion.scale_row(pivot_row, recip);
            m[(pivot_row, col)] = X::one();

            for r in IntRange::rev_indices(pivot_row) {
                let factor = m[(r, col)];
                if factor != X::zero() {
                    m.add_scaled_row(r, pivot_row, -factor);
                    companion.add_scaled_row(r, pivot_row, -factor);
                }
                m[(r, col)] = X::zero();
            }
        }

        pivot_columns[rank] = col;
        column_types[col] = ColumnType::Pivot;
        rank += 1;
        pivot_row += 1;
    }

    Elimination {
        matrix: m,
        rank,
        pivot_columns,
        column_types,
        row_exchanges,
        pivot_product,
        form,
    }
}

// ---------------------------------------------------------------------------
