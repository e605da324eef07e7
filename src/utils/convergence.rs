//! Convergence tracking & tolerance checks for iterative kernels.

use crate::error::KernelError;

/// Stopping criteria.
#[derive(Debug, Clone, Copy)]
pub struct Convergence<T> {
    pub tol: T,
    /// `None` means iterate until the tolerance is met.
    pub max_iters: Option<usize>,
}

#[derive(Clone, Debug)]
pub struct SolveStats<T> {
    pub iterations: usize,
    pub final_residual: T,
    pub converged: bool,
}

impl<T: crate::core::traits::Scalar> Convergence<T> {
    /// True when `delta` is strictly inside the tolerance.
    pub fn within(&self, delta: T) -> bool {
        delta.abs() < self.tol
    }

    /// Errors with `NotConverged` once iteration `i` exceeds the cap.
    pub fn guard(&self, i: usize) -> Result<(), KernelError> {
        match self.max_iters {
            Some(max) if i > max => Err(KernelError::NotConverged(max)),
            _ => Ok(()),
        }
    }
}

/// Fails with `NumericalFailure` when an iterate has left the finite range.
///
/// A NaN iterate can never satisfy a tolerance, so the loops stop here
/// instead of spinning forever.
pub fn ensure_finite<T: crate::core::traits::Scalar>(values: &[T], what: &str) -> Result<(), KernelError> {
    if values.iter().all(|v| v.to_f64().is_some_and(f64::is_finite)) {
        Ok(())
    } else {
        Err(KernelError::NumericalFailure(format!("{what} is no longer finite")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn within_is_strict() {
        let conv = Convergence { tol: 1e-3, max_iters: None };
        assert!(conv.within(-5e-4));
        assert!(!conv.within(1e-3));
    }

    #[test]
    fn guard_only_fires_with_a_cap() {
        let uncapped = Convergence { tol: 1e-3, max_iters: None };
        assert!(uncapped.guard(1_000_000).is_ok());
        let capped = Convergence { tol: 1e-3, max_iters: Some(3) };
        assert!(capped.guard(3).is_ok());
        assert_eq!(capped.guard(4), Err(KernelError::NotConverged(3)));
    }

    #[test]
    fn nan_is_not_finite() {
        assert!(ensure_finite(&[1.0, -2.0], "x").is_ok());
        assert!(matches!(ensure_finite(&[1.0, f64::NAN], "x"), Err(KernelError::NumericalFailure(_))));
    }
}
