//! Rayleigh quotient iteration.
//!
//! Each step takes the Rayleigh quotient `σ = xᵗAx / xᵗx` as a shift, applies
//! the full Gauss-Jordan inverse of `A - σI` to `x` and rescales the result.
//! The iteration stops when the current shift agrees with the shift from two
//! iterations earlier, which leaves one extra step of lag compared to the
//! usual successive-shift test.

use crate::config::{KernelOptions, Normalization};
use crate::core::traits::Scalar;
use crate::error::KernelError;
use crate::matrix::{Matrix, Vector};
use crate::solver::gauss_jordan::invert;
use crate::utils::convergence::ensure_finite;
use crate::utils::monitor::RayleighStep;

#[derive(Debug, Clone, PartialEq)]
pub struct RayleighResult<T> {
    /// Last shift
    pub eigenvalue: T,
    /// Last renormalized iterate
    pub eigenvector: Vector<T>,
    pub iterations: usize,
}

/// Converge from `x0` to an eigenpair of `a`.
pub fn rayleigh_converge<T: Scalar>(
    a: &Matrix<T>,
    x0: &Vector<T>,
    opts: &KernelOptions<T>,
) -> Result<RayleighResult<T>, KernelError> {
    rayleigh_converge_with(a, x0, opts, &mut |_| {})
}

/// As [`rayleigh_converge`], calling `monitor` after every step.
///
/// If `A - σI` is exactly singular the shift is itself an eigenvalue and the
/// iteration returns it with the current iterate.
pub fn rayleigh_converge_with<T: Scalar>(
    a: &Matrix<T>,
    x0: &Vector<T>,
    opts: &KernelOptions<T>,
    monitor: &mut dyn FnMut(&RayleighStep<'_, T>),
) -> Result<RayleighResult<T>, KernelError> {
    let n = a.require_square("Rayleigh quotient iteration")?;
    if x0.len() != n {
        return Err(KernelError::mismatch("Rayleigh quotient iteration", n, x0.len()));
    }
    if x0.iter().all(|v| v.is_zero()) {
        return Err(KernelError::NumericalFailure("starting vector must be nonzero".into()));
    }
    let conv = opts.convergence();
    let identity = Matrix::identity(n);
    let mut x = x0.clone();
    let mut shifts: Vec<T> = Vec::new();
    let mut iteration = 0;
    loop {
        iteration += 1;
        conv.guard(iteration)?;
        let shift = x.dot(&a.apply(&x)?)? / x.dot(&x)?;
        let shifted = a.subtract(&identity.scale(shift))?;
        let inverse = match invert(&shifted) {
            Ok(inverse) => inverse,
            Err(KernelError::ZeroPivot(_)) => {
                log::debug!("Rayleigh shift {shift} is an exact eigenvalue after {iteration} iterations");
                return Ok(RayleighResult { eigenvalue: shift, eigenvector: x, iterations: iteration });
            }
            Err(e) => return Err(e),
        };
        let y = inverse.apply(&x)?;
        let divisor = match opts.normalization {
            Normalization::SignedMax => y.max(),
            Normalization::MaxMagnitude => y.max_magnitude(),
        }
        .ok_or_else(|| KernelError::NumericalFailure("empty iterate".into()))?;
        x = y.divide(divisor);
        ensure_finite(x.as_slice(), "Rayleigh iterate")?;
        log::trace!("Rayleigh iteration {iteration}: shift {shift}");
        monitor(&RayleighStep { iteration, shift, x: &x });

        // compare against the shift two iterations back
        if iteration >= 3 && conv.within(shift - shifts[iteration - 3]) {
            log::debug!("Rayleigh iteration converged in {iteration} iterations");
            return Ok(RayleighResult { eigenvalue: shift, eigenvector: x, iterations: iteration });
        }
        shifts.push(shift);
    }
}
