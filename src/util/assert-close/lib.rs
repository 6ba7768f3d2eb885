/* ************************************************************************ **
** This file is part of densemat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Approximate equality assertions for floating point data.
//!
//! ```
//! use densemat_assert_close::assert_close;
//!
//! assert_close!(0.1 + 0.2, 0.3);
//! assert_close!(abs=1e-12, [1.0, 2.0], [1.0, 2.0 + 1e-14]);
//! assert_close!(rel=1e-3, abs=0.0, 1000.0, 1000.5, "{} is not {}", 1000.0, 1000.5);
//! ```
//!
//! When containers differ, the error names the index path of the first
//! differing element, so a failure in `[[f64; 3]; 3]` reads like `at [2, 0]`.

use std::fmt;

/// Relative tolerance used by `assert_close!` when none is given.
pub const DEFAULT_NONZERO_TOL: f64 = 1e-9;

/// Assert that two values are approximately equal.
///
/// Accepts optional leading `rel=` and `abs=` tolerances (in any order),
/// and an optional trailing format message.
#[macro_export]
macro_rules! assert_close {
    (@tol [$tol:expr] rel=$x:expr, $($rest:tt)*) => {
        $crate::assert_close!{@tol [$tol.with_rel($x)] $($rest)*}
    };
    (@tol [$tol:expr] abs=$x:expr, $($rest:tt)*) => {
        $crate::assert_close!{@tol [$tol.with_abs($x)] $($rest)*}
    };
    (@tol [$tol:expr] $a:expr, $b:expr $(,)?) => {
        $crate::check_or_panic(&$a, &$b, $tol, format_args!("not nearly equal!"))
    };
    (@tol [$tol:expr] $a:expr, $b:expr, $($fmt:tt)+) => {
        $crate::check_or_panic(&$a, &$b, $tol, format_args!($($fmt)+))
    };
    ($($t:tt)*) => {
        $crate::assert_close!{@tol [$crate::Tolerances::default()] $($t)*}
    };
}

/// `assert_close!` in debug builds, nothing in release builds.
#[macro_export]
macro_rules! debug_assert_close {
    ($($t:tt)*) => {{
        #[cfg(debug_assertions)] {
            $crate::assert_close!{$($t)*}
        }
    }};
}

#[doc(hidden)]
#[track_caller]
pub fn check_or_panic<A, B>(a: &A, b: &B, tol: Tolerances, message: fmt::Arguments<'_>)
where
    A: ?Sized + CheckClose<B> + fmt::Debug,
    B: ?Sized + fmt::Debug,
{
    if let Err(e) = a.check_close(b, tol) {
        panic!("{} ({})\n left: {:?}\nright: {:?}\n{}", message, tol, a, b, e);
    }
}

/// Test two scalars for approximate equality.
///
/// The allowed difference is the larger of `tol.abs` and `tol.rel` times the
/// larger magnitude.  Infinities are only close to themselves, and NaN is not
/// close to anything.
pub fn is_close(a: f64, b: f64, tol: Tolerances) -> bool {
    debug_assert!(tol.abs >= 0.0 && tol.rel >= 0.0, "negative tolerance: {}", tol);

    if a == b {
        return true;
    }
    match (a.is_finite(), b.is_finite()) {
        (true, true) => {
            let bound = f64::max(tol.abs, tol.rel * f64::max(a.abs(), b.abs()));
            (a - b).abs() <= bound
        },
        _ => false,
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

impl Default for Tolerances {
    fn default() -> Self
    { Tolerances { abs: 0.0, rel: DEFAULT_NONZERO_TOL } }
}

impl Tolerances {
    pub fn with_abs(self, abs: f64) -> Self
    { Tolerances { abs, ..self } }

    pub fn with_rel(self, rel: f64) -> Self
    { Tolerances { rel, ..self } }
}

impl fmt::Display for Tolerances {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { write!(f, "tolerances: rel={}, abs={}", self.rel, self.abs) }
}

/// The first difference found between two values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CheckCloseError<T: fmt::Debug = f64> {
    #[error("failed at {index:?}:\n  left: {left:?}\n right: {right:?}\n  ({tol})")]
    NotClose {
        /// Index path into nested containers.  Empty for scalars.
        index: Vec<usize>,
        left: T,
        right: T,
        tol: Tolerances,
    },

    #[error("length mismatch at {index:?}: {left} vs {right}")]
    LengthMismatch {
        index: Vec<usize>,
        left: usize,
        right: usize,
    },
}

impl<T: fmt::Debug> CheckCloseError<T> {
    pub fn index(&self) -> &[usize] {
        match self {
            CheckCloseError::NotClose { index, .. } => index,
            CheckCloseError::LengthMismatch { index, .. } => index,
        }
    }

    /// Record that this error occurred inside element `i` of a container.
    pub fn within(mut self, i: usize) -> Self {
        match &mut self {
            CheckCloseError::NotClose { index, .. } => index.insert(0, i),
            CheckCloseError::LengthMismatch { index, .. } => index.insert(0, i),
        }
        self
    }
}

pub trait CheckClose<Rhs: ?Sized = Self> {
    type Scalar: fmt::Debug;

    /// Test that all values of self and other are close.
    fn check_close(&self, other: &Rhs, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>;
}

impl CheckClose for f64 {
    type Scalar = f64;

    #[inline]
    fn check_close(&self, other: &f64, tol: Tolerances) -> Result<(), CheckCloseError<f64>> {
        match is_close(*self, *other, tol) {
            true => Ok(()),
            false => Err(CheckCloseError::NotClose { index: vec![], left: *self, right: *other, tol }),
        }
    }
}

// compared in double precision
impl CheckClose for f32 {
    type Scalar = f64;

    #[inline]
    fn check_close(&self, other: &f32, tol: Tolerances) -> Result<(), CheckCloseError<f64>>
    { f64::from(*self).check_close(&f64::from(*other), tol) }
}

impl<'a, T: ?Sized + CheckClose> CheckClose for &'a T {
    type Scalar = T::Scalar;

    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>
    { T::check_close(*self, *other, tol) }
}

impl<T: CheckClose> CheckClose for [T] {
    type Scalar = T::Scalar;

    fn check_close(&self, other: &[T], tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>> {
        if self.len() != other.len() {
            return Err(CheckCloseError::LengthMismatch { index: vec![], left: self.len(), right: other.len() });
        }
        for (i, (a, b)) in self.iter().zip(other).enumerate() {
            a.check_close(b, tol).map_err(|e| e.within(i))?;
        }
        Ok(())
    }
}

impl<T: CheckClose, const N: usize> CheckClose for [T; N] {
    type Scalar = T::Scalar;

    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>
    { self[..].check_close(&other[..], tol) }
}

impl<T: CheckClose> CheckClose for Vec<T> {
    type Scalar = T::Scalar;

    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>
    { self[..].check_close(&other[..], tol) }
}
