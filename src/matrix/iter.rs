/* ************************************************************************ **
** This file is part of densemat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::iter::FusedIterator;

use crate::{Matrix, MatrixIndex};

// ---------------------------------------------------------------------------

/// A half-open range of integers that may count in either direction.
///
/// `IntRange::new(begin, end)` yields `begin` first and stops before `end`.
/// It counts up when `begin < end`, and down otherwise.
///
/// ```
/// use densemat_matrix::IntRange;
///
/// assert_eq!(IntRange::new(0, 3).collect::<Vec<_>>(), vec![0, 1, 2]);
/// assert_eq!(IntRange::new(3, 0).collect::<Vec<_>>(), vec![3, 2, 1]);
/// assert_eq!(IntRange::new(2, 2).count(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntRange {
    front: isize,
    // exclusive
    back: isize,
    step: isize,
}

impl IntRange {
    #[inline]
    pub fn new(begin: isize, end: isize) -> Self {
        let step = if begin < end { 1 } else { -1 };
        IntRange { front: begin, back: end, step }
    }

    /// Indices `0..n` in descending order, as `usize`.
    ///
    /// This is the common case of walking back up the rows of a matrix.
    #[inline]
    pub fn rev_indices(n: usize) -> impl Iterator<Item=usize> + ExactSizeIterator + DoubleEndedIterator {
        IntRange::new(n as isize - 1, -1).map(|i| i as usize)
    }

    /// `true` if the range counts downward.
    #[inline]
    pub fn is_descending(&self) -> bool
    { self.step < 0 }
}

impl Iterator for IntRange {
    type Item = isize;

    #[inline]
    fn next(&mut self) -> Option<isize> {
        if self.front == self.back {
            return None;
        }
        let out = self.front;
        self.front += self.step;
        Some(out)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back.abs_diff(self.front);
        (len, Some(len))
    }
}

impl DoubleEndedIterator for IntRange {
    #[inline]
    fn next_back(&mut self) -> Option<isize> {
        if self.front == self.back {
            return None;
        }
        self.back -= self.step;
        Some(self.back)
    }
}

impl ExactSizeIterator for IntRange {}
impl FusedIterator for IntRange {}

// ---------------------------------------------------------------------------

/// A read-only view of a matrix's entries, in row-major order.
///
/// The view is `Copy`, and each iteration starts from the first entry,
/// independently of any other iterator obtained from the same view.
#[derive(Debug)]
pub struct MatrixEntryArray<'a, const R: usize, const C: usize, X> {
    matrix: &'a Matrix<R, C, X>,
}

// (manual impls because the derives would require X: Copy)
impl<'a, const R: usize, const C: usize, X> Clone for MatrixEntryArray<'a, R, C, X> {
    #[inline(always)]
    fn clone(&self) -> Self { *self }
}

impl<'a, const R: usize, const C: usize, X> Copy for MatrixEntryArray<'a, R, C, X> {}

impl<'a, const R: usize, const C: usize, X> MatrixEntryArray<'a, R, C, X> {
    #[inline(always)]
    pub fn new(matrix: &'a Matrix<R, C, X>) -> Self
    { MatrixEntryArray { matrix } }

    #[inline(always)]
    pub fn len(&self) -> usize
    { R * C }

    #[inline(always)]
    pub fn is_empty(&self) -> bool
    { self.len() == 0 }

    #[inline(always)]
    pub fn iter(&self) -> Entries<'a, R, C, X>
    { Entries { matrix: self.matrix, front: 0, back: R * C } }
}

impl<'a, const R: usize, const C: usize, X> IntoIterator for MatrixEntryArray<'a, R, C, X> {
    type Item = (MatrixIndex, &'a X);
    type IntoIter = Entries<'a, R, C, X>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { self.iter() }
}

impl<'a, 'b, const R: usize, const C: usize, X> IntoIterator for &'b MatrixEntryArray<'a, R, C, X> {
    type Item = (MatrixIndex, &'a X);
    type IntoIter = Entries<'a, R, C, X>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { self.iter() }
}

/// Iterator over `(MatrixIndex, &X)` pairs of a matrix.
#[derive(Debug)]
pub struct Entries<'a, const R: usize, const C: usize, X> {
    matrix: &'a Matrix<R, C, X>,
    // linear indices; [front, back) is left to visit
    front: usize,
    back: usize,
}

impl<'a, const R: usize, const C: usize, X> Clone for Entries<'a, R, C, X> {
    #[inline(always)]
    fn clone(&self) -> Self
    { Entries { matrix: self.matrix, front: self.front, back: self.back } }
}

impl<'a, const R: usize, const C: usize, X> Entries<'a, R, C, X> {
    #[inline(always)]
    fn entry(&self, linear: usize) -> (MatrixIndex, &'a X) {
        let index = MatrixIndex::from_linear(linear, C);
        let matrix: &'a Matrix<R, C, X> = self.matrix;
        (index, &matrix.data[index.row][index.col])
    }
}

impl<'a, const R: usize, const C: usize, X> Iterator for Entries<'a, R, C, X> {
    type Item = (MatrixIndex, &'a X);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let out = self.entry(self.front);
        self.front += 1;
        Some(out)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<'a, const R: usize, const C: usize, X> DoubleEndedIterator for Entries<'a, R, C, X> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.entry(self.back))
    }
}

impl<'a, const R: usize, const C: usize, X> ExactSizeIterator for Entries<'a, R, C, X> {}
impl<'a, const R: usize, const C: usize, X> FusedIterator for Entries<'a, R, C, X> {}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_range_directions() {
        assert_eq!(IntRange::new(-2, 2).collect::<Vec<_>>(), vec![-2, -1, 0, 1]);
        assert_eq!(IntRange::new(2, -2).collect::<Vec<_>>(), vec![2, 1, 0, -1]);
        assert_eq!(IntRange::new(5, 5).next(), None);
        assert!(IntRange::new(5, 0).is_descending());
        assert!(!IntRange::new(0, 5).is_descending());
    }

    #[test]
    fn int_range_double_ended() {
        let mut range = IntRange::new(0, 5);
        assert_eq!(range.len(), 5);
        assert_eq!(range.next_back(), Some(4));
        assert_eq!(range.next(), Some(0));
        assert_eq!(range.len(), 3);
        assert_eq!(range.rev().collect::<Vec<_>>(), vec![3, 2, 1]);

        let mut range = IntRange::new(3, 0);
        assert_eq!(range.next_back(), Some(1));
        assert_eq!(range.collect::<Vec<_>>(), vec![3, 2]);
    }

    #[test]
    fn int_range_clone_restarts() {
        let range = IntRange::new(0, 3);
        let first: Vec<_> = range.clone().collect();
        let second: Vec<_> = range.clone().collect();
        assert_eq!(first, second);
        assert_eq!(range.sum::<isize>(), 3);
    }

    #[test]
    fn int_range_extreme_bounds() {
        let range = IntRange::new(isize::MIN, isize::MAX);
        assert_eq!(range.len(), usize::MAX);
        let range = IntRange::new(isize::MAX, isize::MIN);
        assert_eq!(range.size_hint(), (usize::MAX, Some(usize::MAX)));

        let mut range = IntRange::new(isize::MAX, isize::MIN);
        assert_eq!(range.next(), Some(isize::MAX));
        assert_eq!(range.next_back(), Some(isize::MIN + 1));
        assert_eq!(range.len(), usize::MAX - 2);
    }

    #[test]
    fn rev_indices() {
        assert_eq!(IntRange::rev_indices(3).collect::<Vec<_>>(), vec![2, 1, 0]);
        assert_eq!(IntRange::rev_indices(0).count(), 0);
    }

    #[test]
    fn entries_in_row_major_order() {
        let m = Matrix::from_array([[1., 2., 3.], [4., 5., 6.]]);
        let entries: Vec<_> = m.entries().into_iter().collect();
        assert_eq!(entries.len(), 6);
        for (k, &(index, &value)) in entries.iter().enumerate() {
            assert_eq!(index, MatrixIndex::from_linear(k, 3));
            assert_eq!(value, (k + 1) as f64);
        }
    }

    #[test]
    fn entries_are_restartable() {
        let m = Matrix::from_array([[1., 2.], [3., 4.]]);
        let view = m.entries();
        let copy = view;

        let mut it = view.iter();
        it.next();
        it.next();

        // a partially consumed iterator doesn't affect fresh ones
        assert_eq!(copy.into_iter().count(), 4);
        assert_eq!((&view).into_iter().count(), 4);
        assert_eq!(it.len(), 2);
        assert_eq!(view.len(), Matrix::<2, 2>::ENTRY_COUNT);
    }

    #[test]
    fn entries_reverse() {
        let m = Matrix::from_array([[1., 2.], [3., 4.]]);
        let last = m.entries().into_iter().next_back();
        assert_eq!(last, Some((MatrixIndex::new(1, 1), &4.0)));
        let values: Vec<f64> = m.entries().into_iter().rev().map(|(_, &x)| x).collect();
        assert_eq!(values, vec![4., 3., 2., 1.]);
    }
}
