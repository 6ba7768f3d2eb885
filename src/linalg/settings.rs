/* ************************************************************************ **
** This file is part of densemat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use densemat_matrix::{Field, Matrix};
use serde::{Serialize, Deserialize};

/// Numerical zero tolerance for elimination-based algorithms.
///
/// A value `a` is treated as zero when `|a| <= rel * scale`, where `scale`
/// is the largest magnitude in the input matrix (or the norm of the vector
/// being tested, for the geometric operations).  The threshold never drops
/// below the smallest positive normal value, so exact zeros stay zero even
/// when the scale is zero.
///
/// This is deserializable, so it can be embedded in a larger config:
///
/// ```
/// # use densemat_linalg::Tolerance;
/// let tol: Tolerance = serde_json::from_str(r#"{ "rel": 1e-6 }"#).unwrap();
/// assert_eq!(tol, Tolerance::new(1e-6));
/// ```
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Tolerance {
    /// Relative tolerance.  Negative values are treated as zero.
    #[serde(default = "tolerance__rel")] pub rel: f64,
}

#[allow(non_snake_case)]
fn tolerance__rel() -> f64 { f64::DEFAULT_REL_TOL }

impl Default for Tolerance {
    fn default() -> Self { Tolerance { rel: tolerance__rel() } }
}

impl Tolerance {
    pub fn new(rel: f64) -> Self { Tolerance { rel } }

    /// The default tolerance for an element type.
    pub fn for_field<X: Field>() -> Self { Tolerance { rel: X::DEFAULT_REL_TOL } }

    /// The zero threshold for values whose natural magnitude is `scale`.
    pub fn epsilon<X: Field>(&self, scale: X) -> X {
        let rel = X::lossy_from(self.rel.max(0.0));
        // (`max` discards a NaN scale)
        (rel * scale.abs()).max(X::min_positive_value())
    }

    /// The zero threshold for a matrix, scaled by its largest element.
    pub fn threshold<const R: usize, const C: usize, X: Field>(&self, matrix: &Matrix<R, C, X>) -> X
    { self.epsilon(matrix.norm_max()) }

    /// `true` if `value` is distinguishable from zero.  NaN never is.
    #[inline]
    pub(crate) fn is_nonzero<X: Field>(value: X, epsilon: X) -> bool
    { value.abs() > epsilon }

    /// `true` if `value` is within tolerance of zero.  NaN never is, so that
    /// it propagates instead of being reported as a degenerate input.
    #[inline]
    pub(crate) fn is_negligible<X: Field>(value: X, epsilon: X) -> bool
    { value.abs() <= epsilon }
}

#[cfg(test)]
mod tests {
    use super::*;
    use densemat_assert_close::assert_close;

    #[test]
    fn defaults() {
        assert_eq!(Tolerance::default(), Tolerance::for_field::<f64>());
        assert_eq!(Tolerance::for_field::<f64>().rel, 1e-9);
        assert_eq!(Tolerance::for_field::<f32>().rel, 1e-5);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let tol: Tolerance = serde_json::from_str("{}").unwrap();
        assert_eq!(tol, Tolerance::default());

        let tol: Tolerance = serde_json::from_value(serde_json::json!({"rel": 0.25})).unwrap();
        assert_eq!(tol.rel, 0.25);

        assert!(serde_json::from_str::<Tolerance>(r#"{"rel": "big"}"#).is_err());
    }

    #[test]
    fn serializes_back() {
        let json = serde_json::to_value(Tolerance::new(0.5)).unwrap();
        assert_eq!(json, serde_json::json!({"rel": 0.5}));
    }

    #[test]
    fn threshold_scales_with_max_entry() {
        let tol = Tolerance::new(1e-3);
        let small = Matrix::from_array([[0.5, -0.25]]);
        let big = Matrix::from_array([[10.0, -2000.0]]);
        assert_eq!(tol.threshold(&small), 5e-4);
        assert_eq!(tol.threshold(&big), 2.0);
        assert_eq!(Tolerance::new(-1.0).epsilon(5.0), f64::MIN_POSITIVE);
    }

    #[test]
    fn threshold_follows_small_scales() {
        let tol = Tolerance::new(1e-9);
        let tiny = Matrix::from_array([[1e-10, 0.0], [0.0, -3e-10]]);
        assert_close!(rel=1e-12, tol.threshold(&tiny), 3e-19);
        assert_eq!(tol.threshold(&Matrix::<2, 2>::zero()), f64::MIN_POSITIVE);
        assert_eq!(tol.epsilon(f64::NAN), f64::MIN_POSITIVE);
        assert_eq!(Tolerance::for_field::<f32>().epsilon(0f32), f32::MIN_POSITIVE);
    }

    #[test]
    fn nan_is_never_nonzero() {
        assert!(!Tolerance::is_nonzero(0.0, 1e-9));
        assert!(!Tolerance::is_nonzero(-1e-10, 1e-9));
        assert!(Tolerance::is_nonzero(-1e-8, 1e-9));
        assert!(!Tolerance::is_nonzero(f64::NAN, 1e-9));
        assert!(!Tolerance::is_negligible(f64::NAN, 1e-9));
        assert!(Tolerance::is_negligible(-1e-10, 1e-9));
        assert!(Tolerance::is_negligible(0.0, f64::MIN_POSITIVE));
    }
}
