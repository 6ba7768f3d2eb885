/* ************************************************************************ **
** This file is part of densemat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// Not every test binary uses every helper.
#![allow(dead_code)]

use densemat::Matrix;
use rand::Rng;

/// Uniform random entries in `[-1, 1)`.
pub fn random_matrix<const R: usize, const C: usize>() -> Matrix<R, C> {
    let mut rng = rand::thread_rng();
    Matrix::from_fn(|_, _| 1.0 - 2.0 * rng.gen::<f64>())
}

/// Random small integers, for when arithmetic should be exact.
pub fn random_int_matrix<const R: usize, const C: usize>(max: i32) -> Matrix<R, C> {
    let mut rng = rand::thread_rng();
    Matrix::from_fn(|_, _| rng.gen_range(-max..=max) as f64)
}

/// A random matrix of rank at most `K`, as a product of random factors.
pub fn random_low_rank<const R: usize, const K: usize, const C: usize>() -> Matrix<R, C> {
    let a: Matrix<R, K> = random_int_matrix(3);
    let b: Matrix<K, C> = random_int_matrix(3);
    &a * &b
}

/// Number of trials for randomized tests.
pub const TRIALS: usize = 50;
