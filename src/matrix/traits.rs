/* ************************************************************************ **
** This file is part of densemat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::fmt;
use std::iter::{Sum, Product};
use std::ops::{AddAssign, SubAssign, MulAssign, DivAssign};

use densemat_assert_close::CheckClose;
use num_traits::Float;

/// Trait for matrix element types.
///
/// This trait is sealed to avoid accidental commitments.
/// It's currently just primitive, real floating point types;
/// integers can't be divided and complex numbers can't be ordered by
/// magnitude in the way that pivot selection needs.
pub trait Field
    : Float + Default + fmt::Debug
    + Sum + Product
    + AddAssign + SubAssign + MulAssign + DivAssign
    + CheckClose<Scalar = f64>
    + Send + Sync + 'static
    + private::Sealed
{
    /// Default relative tolerance below which values are treated as zero
    /// by elimination-based algorithms.
    const DEFAULT_REL_TOL: f64;

    /// Convert from `f64`, rounding if necessary.
    fn lossy_from(x: f64) -> Self;

    /// Convert to `f64` without loss.
    fn widen(self) -> f64;
}

pub(crate) mod private {
    pub trait Sealed { }
}

impl private::Sealed for f64 { }
impl Field for f64 {
    const DEFAULT_REL_TOL: f64 = 1e-9;

    #[inline(always)] fn lossy_from(x: f64) -> f64 { x }
    #[inline(always)] fn widen(self) -> f64 { self }
}

impl private::Sealed for f32 { }
impl Field for f32 {
    const DEFAULT_REL_TOL: f64 = 1e-5;

    #[inline(always)] fn lossy_from(x: f64) -> f32 { x as f32 }
    #[inline(always)] fn widen(self) -> f64 { f64::from(self) }
}
