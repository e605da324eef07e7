//! Gaussian elimination with zero-avoidance pivot search.
//!
//! Each sub-diagonal entry `A[r][c]` is eliminated with the nearest row above
//! `r` that has a nonzero in column `c`. The search only avoids dividing by
//! zero; it does not pick the largest pivot, so ill-conditioned inputs such
//! as Hilbert matrices lose accuracy quickly. The reduced system is handed to
//! backward substitution.
//!
//! If the pivot `A[c][c]` has become zero and the nearest usable row lies
//! above row `c` (or there is none), subtracting it would refill columns
//! left of `c`. Elimination stops there with `ZeroPivot(c)`, even when the
//! input is nonsingular.

use crate::core::traits::Scalar;
use crate::error::KernelError;
use crate::matrix::{Matrix, Vector};
use crate::solver::LinearSolver;
use crate::solver::triangular::solve_backward;

/// Solves square systems by elimination followed by backward substitution.
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussianElimination;

impl<T: Scalar> LinearSolver<T> for GaussianElimination {
    fn solve(&self, a: &Matrix<T>, b: &Vector<T>) -> Result<Vector<T>, KernelError> {
        solve_gaussian(a, b)
    }
}

/// Solve `A·x = b`. Neither `a` nor `b` is modified.
pub fn solve_gaussian<T: Scalar>(a: &Matrix<T>, b: &Vector<T>) -> Result<Vector<T>, KernelError> {
    let n = a.require_square("Gaussian elimination")?;
    if b.len() != n {
        return Err(KernelError::mismatch("Gaussian elimination", n, b.len()));
    }
    let mut a = a.clone();
    let mut b = b.clone();

    for r in 1..n {
        for c in 0..r {
            if a[(r, c)].is_zero() {
                continue;
            }
            // nearest row above with a usable entry in this column
            let p = match (0..r).rev().find(|&p| !a[(p, c)].is_zero()) {
                Some(p) if p >= c => p,
                _ => return Err(KernelError::ZeroPivot(c)),
            };
            let multiplier = a[(r, c)] / a[(p, c)];
            for j in 0..n {
                a[(r, j)] = a[(r, j)] - multiplier * a[(p, j)];
            }
            a[(r, c)] = T::zero();
            b[r] = b[r] - multiplier * b[p];
        }
    }
    log::trace!("Gaussian elimination reduced a {n}x{n} system");

    solve_backward(&a, &b)
}
