//! Scalar implementations for the primitive float types and `rust_decimal`,
//! plus `MatVec` for faer dense matrices.
//!
//! The faer implementation lets the residual helpers and `SolverContext`
//! statistics be checked against matrices produced by faer itself.
//!
//! # References
//! - [faer crate documentation](https://docs.rs/faer)
//! - [num-traits crate documentation](https://docs.rs/num-traits)

use crate::core::traits::{MatVec, Scalar};
use faer::Mat;

impl Scalar for f64 {
    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }
}

impl Scalar for f32 {
    fn sqrt(self) -> Self {
        f32::sqrt(self)
    }
}

/// Fixed-point decimal scalar. Division by zero panics inside `rust_decimal`
/// instead of producing an infinity.
#[cfg(feature = "decimal")]
impl Scalar for rust_decimal::Decimal {
    fn sqrt(self) -> Self {
        rust_decimal::MathematicalOps::sqrt(&self).unwrap_or(rust_decimal::Decimal::ZERO)
    }
}

/// Implements matrix-vector multiplication for `faer::Mat<f64>`.
impl MatVec<f64> for Mat<f64> {
    fn dims(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    fn matvec(&self, x: &[f64], y: &mut [f64]) {
        assert_eq!(self.nrows(), y.len(), "Output vector y has incorrect length");
        assert_eq!(self.ncols(), x.len(), "Input vector x has incorrect length");
        for i in 0..self.nrows() {
            y[i] = 0.0;
            for j in 0..self.ncols() {
                y[i] = y[i] + self[(i, j)] * x[j];
            }
        }
    }
}
