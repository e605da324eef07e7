//! Forward and backward substitution for triangular systems.
//!
//! Both solvers check that the matrix is square and exactly triangular
//! before touching the numbers. A zero on the diagonal is not guarded: with
//! floating-point scalars it propagates as an infinity or NaN.

use crate::core::traits::Scalar;
use crate::error::KernelError;
use crate::matrix::{Matrix, Vector};
use crate::solver::LinearSolver;

/// Solves `L·x = b` for lower-triangular `L`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardSubstitution;

/// Solves `U·x = b` for upper-triangular `U`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BackwardSubstitution;

impl<T: Scalar> LinearSolver<T> for ForwardSubstitution {
    fn solve(&self, a: &Matrix<T>, b: &Vector<T>) -> Result<Vector<T>, KernelError> {
        solve_forward(a, b)
    }
}

impl<T: Scalar> LinearSolver<T> for BackwardSubstitution {
    fn solve(&self, a: &Matrix<T>, b: &Vector<T>) -> Result<Vector<T>, KernelError> {
        solve_backward(a, b)
    }
}

/// Forward substitution, rows `0 → n-1`.
pub fn solve_forward<T: Scalar>(a: &Matrix<T>, b: &Vector<T>) -> Result<Vector<T>, KernelError> {
    let n = a.require_square("forward substitution")?;
    if !a.is_lower_triangular() {
        return Err(KernelError::ShapeError(
            "forward substitution expects a lower triangular system".into(),
        ));
    }
    if b.len() != n {
        return Err(KernelError::mismatch("forward substitution", n, b.len()));
    }
    let mut x = Vector::zeros(n);
    for i in 0..n {
        let mut sum = b[i];
        for j in 0..i {
            sum = sum - a[(i, j)] * x[j];
        }
        x[i] = sum / a[(i, i)];
    }
    Ok(x)
}

/// Backward substitution, rows `n-1 → 0`.
pub fn solve_backward<T: Scalar>(a: &Matrix<T>, b: &Vector<T>) -> Result<Vector<T>, KernelError> {
    let n = a.require_square("backward substitution")?;
    if !a.is_upper_triangular() {
        return Err(KernelError::ShapeError(
            "backward substitution expects an upper triangular system".into(),
        ));
    }
    if b.len() != n {
        return Err(KernelError::mismatch("backward substitution", n, b.len()));
    }
    let mut x = Vector::zeros(n);
    for i in (0..n).rev() {
        let mut sum = b[i];
        for j in (i + 1)..n {
            sum = sum - a[(i, j)] * x[j];
        }
        x[i] = sum / a[(i, i)];
    }
    Ok(x)
}
