/* ************************************************************************ **
** This file is part of densemat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::fmt;
use std::ops::{Add, Sub, Neg, Mul, Div};
use std::ops::{AddAssign, SubAssign, MulAssign, DivAssign};

use crate::{Field, Matrix};

// Each `each_ref!` invocation instantiates the body once for the owned
// receiver and once for a borrowed one.
macro_rules! each_ref {
    ($([ ($($lt:tt)*) ($($r:tt)*) ])* => $mac:ident) => {
        $( $mac!{ ($($lt)*) ($($r)*) } )*
    };
}

// ---------------------------------------------------------------------------
// matrix-matrix ops

// NOTE: Operator impls are between same-typed matrices.
//       Shape mismatches are therefore type errors rather than runtime errors.
macro_rules! impl_add_sub {
    (($($lt_a:tt)*) ($($ref_a:tt)*)) => {
        impl_add_sub!{@rhs ($($lt_a)*) ($($ref_a)*) () ()}
        impl_add_sub!{@rhs ($($lt_a)*) ($($ref_a)*) ('b,) (&'b)}
    };
    (@rhs ($($lt_a:tt)*) ($($ref_a:tt)*) ($($lt_b:tt)*) ($($ref_b:tt)*)) => {
        // matrix + matrix
        impl<$($lt_a)* $($lt_b)* X: Field, const R: usize, const C: usize>
            Add<$($ref_b)* Matrix<R, C, X>> for $($ref_a)* Matrix<R, C, X>
        {
            type Output = Matrix<R, C, X>;

            #[inline]
            fn add(self, other: $($ref_b)* Matrix<R, C, X>) -> Self::Output
            { Matrix::from_fn(|r, c| self.data[r][c] + other.data[r][c]) }
        }

        // matrix - matrix
        impl<$($lt_a)* $($lt_b)* X: Field, const R: usize, const C: usize>
            Sub<$($ref_b)* Matrix<R, C, X>> for $($ref_a)* Matrix<R, C, X>
        {
            type Output = Matrix<R, C, X>;

            #[inline]
            fn sub(self, other: $($ref_b)* Matrix<R, C, X>) -> Self::Output
            { Matrix::from_fn(|r, c| self.data[r][c] - other.data[r][c]) }
        }

        // matrix * matrix
        impl<$($lt_a)* $($lt_b)* X: Field, const R: usize, const K: usize, const C: usize>
            Mul<$($ref_b)* Matrix<K, C, X>> for $($ref_a)* Matrix<R, K, X>
        {
            type Output = Matrix<R, C, X>;

            #[inline]
            fn mul(self, other: $($ref_b)* Matrix<K, C, X>) -> Self::Output
            { Matrix::from_fn(|r, c| (0..K).map(|i| self.data[r][i] * other.data[i][c]).sum()) }
        }
    };
}

each_ref!{ [() ()] [('a,) (&'a)] => impl_add_sub }

// ---------------------------------------------------------------------------
// unary ops

macro_rules! impl_unops {
    (($($lt_a:tt)*) ($($ref_a:tt)*)) => {
        // -matrix
        impl<$($lt_a)* X: Field, const R: usize, const C: usize> Neg for $($ref_a)* Matrix<R, C, X> {
            type Output = Matrix<R, C, X>;

            #[inline]
            fn neg(self) -> Self::Output
            { Matrix::from_fn(|r, c| -self.data[r][c]) }
        }
    };
}

each_ref!{ [() ()] [('a,) (&'a)] => impl_unops }

// ---------------------------------------------------------------------------
// matrix-scalar ops

// matrix `op` scalar
macro_rules! impl_scalar_rhs {
    (($($lt_a:tt)*) ($($ref_a:tt)*)) => {
        // matrix * scalar
        impl<$($lt_a)* X: Field, const R: usize, const C: usize> Mul<X> for $($ref_a)* Matrix<R, C, X> {
            type Output = Matrix<R, C, X>;

            #[inline]
            fn mul(self, scalar: X) -> Self::Output
            { Matrix::from_fn(|r, c| self.data[r][c] * scalar) }
        }

        // matrix / scalar
        //
        // Division by zero follows IEEE semantics, giving infinities or NaN.
        impl<$($lt_a)* X: Field, const R: usize, const C: usize> Div<X> for $($ref_a)* Matrix<R, C, X> {
            type Output = Matrix<R, C, X>;

            #[inline]
            fn div(self, scalar: X) -> Self::Output
            { Matrix::from_fn(|r, c| self.data[r][c] / scalar) }
        }
    };
}

each_ref!{ [() ()] [('a,) (&'a)] => impl_scalar_rhs }

// scalar * matrix
//
// NOTE: the orphan rules prevent us from impl-ing this "for X" so
//       we must generate a separate impl for each Field type rather than
//       being generic over X: Field
macro_rules! impl_scalar_lhs {
    (@ref $X:ty, ($($lt_a:tt)*) ($($ref_a:tt)*)) => {
        impl<$($lt_a)* const R: usize, const C: usize> Mul<$($ref_a)* Matrix<R, C, $X>> for $X {
            type Output = Matrix<R, C, $X>;

            #[inline(always)]
            fn mul(self, matrix: $($ref_a)* Matrix<R, C, $X>) -> Self::Output
            { matrix * self }
        }
    };
    ($X:ty) => {
        impl_scalar_lhs!{@ref $X, () ()}
        impl_scalar_lhs!{@ref $X, ('a,) (&'a)}
    };
}

impl_scalar_lhs!{f32}
impl_scalar_lhs!{f64}

// ---------------------------------------------------------------------------
// assign ops (general)

// matrix += matrix;
impl<X, B, const R: usize, const C: usize> AddAssign<B> for Matrix<R, C, X>
where for<'a> &'a Self: Add<B, Output=Self>,
{
    #[inline(always)]
    fn add_assign(&mut self, rhs: B)
    { *self = &*self + rhs; }
}

// matrix -= matrix;
impl<X, B, const R: usize, const C: usize> SubAssign<B> for Matrix<R, C, X>
where for<'a> &'a Self: Sub<B, Output=Self>,
{
    #[inline(always)]
    fn sub_assign(&mut self, rhs: B)
    { *self = &*self - rhs; }
}

// matrix *= scalar;
// matrix *= square matrix;
impl<X, B, const R: usize, const C: usize> MulAssign<B> for Matrix<R, C, X>
where for<'a> &'a Self: Mul<B, Output=Self>,
{
    #[inline(always)]
    fn mul_assign(&mut self, rhs: B)
    { *self = &*self * rhs; }
}

// matrix /= scalar;
impl<X, B, const R: usize, const C: usize> DivAssign<B> for Matrix<R, C, X>
where for<'a> &'a Self: Div<B, Output=Self>,
{
    #[inline(always)]
    fn div_assign(&mut self, rhs: B)
    { *self = &*self / rhs; }
}

// ---------------------------------------------------------------------------

// fmt traits apply the format to each element for convenience,
// so that e.g. `{:.3}` gives `[[1.000, 0.333], [0.000, 1.000]]`.
macro_rules! impl_fmt {
    ($($Format:ident)*) => {$(
        impl<X: fmt::$Format, const R: usize, const C: usize> fmt::$Format for Matrix<R, C, X> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (r, row) in self.data.iter().enumerate() {
                    if r > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "[")?;
                    for (c, x) in row.iter().enumerate() {
                        if c > 0 {
                            write!(f, ", ")?;
                        }
                        fmt::$Format::fmt(x, f)?;
                    }
                    write!(f, "]")?;
                }
                write!(f, "]")
            }
        }
    )*};
}

impl_fmt!{ Display LowerExp UpperExp }

// ---------------------------------------------------------------------------
