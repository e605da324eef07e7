//! Unshifted QR eigenvalue iteration.
//!
//! Every step factors the current iterate `A = Q·R` with Householder
//! reflections and continues with `A' = R·Q`, which is similar to `A`. For
//! matrices with eigenvalues of distinct magnitude the iterates approach
//! upper-triangular form and the diagonal converges to the eigenvalues.
//! Convergence speed depends on the ratios `|λ_{i+1} / λ_i|`; equal
//! magnitudes (complex pairs, `±λ`) oscillate and never settle, which is why
//! an iteration cap is available in `KernelOptions`.

use crate::config::KernelOptions;
use crate::core::traits::Scalar;
use crate::error::KernelError;
use crate::matrix::{Matrix, Vector};
use crate::solver::householder::{Householder, QrFactors};
use crate::utils::convergence::ensure_finite;
use crate::utils::monitor::QrStep;

#[derive(Debug, Clone, PartialEq)]
pub struct EigenResult<T> {
    /// Diagonal of the last iterate
    pub eigenvalues: Vector<T>,
    /// Number of `A' = R·Q` steps performed
    pub iterations: usize,
}

/// Eigenvalue estimates of a square matrix.
pub fn solve_eigenvalues_qr<T: Scalar>(a: &Matrix<T>, opts: &KernelOptions<T>) -> Result<EigenResult<T>, KernelError> {
    solve_eigenvalues_qr_with(a, opts, &mut |_| {})
}

/// As [`solve_eigenvalues_qr`], calling `monitor` after every step.
///
/// Stops once every diagonal entry moved by less than `opts.tol` since the
/// previous step.
pub fn solve_eigenvalues_qr_with<T: Scalar>(
    a: &Matrix<T>,
    opts: &KernelOptions<T>,
    monitor: &mut dyn FnMut(&QrStep<'_, T>),
) -> Result<EigenResult<T>, KernelError> {
    a.require_square("QR eigenvalue iteration")?;
    let householder = Householder::new(opts.reflector);
    let conv = opts.convergence();
    let mut iterate = a.clone();
    let mut previous: Option<Vector<T>> = None;
    let mut iteration = 0;
    loop {
        iteration += 1;
        conv.guard(iteration)?;
        let QrFactors { q, r } = householder.factor(&iterate)?;
        iterate = r.multiply(&q)?;
        let estimate = iterate.diagonal();
        ensure_finite(estimate.as_slice(), "QR eigenvalue estimate")?;
        log::trace!("QR iteration {iteration}: {:?}", estimate.as_slice());
        monitor(&QrStep { iteration, iterate: &iterate, estimate: &estimate });

        if let Some(prev) = &previous {
            if estimate.iter().zip(prev.iter()).all(|(&e, &p)| conv.within(e - p)) {
                log::debug!("QR iteration converged in {iteration} iterations");
                return Ok(EigenResult { eigenvalues: estimate, iterations: iteration });
            }
        }
        previous = Some(estimate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn diagonal_matrix_converges_immediately() {
        let a = Matrix::<f64>::from_rows(&[[3.0, 0.0], [0.0, 1.0]]).unwrap();
        let res = solve_eigenvalues_qr(&a, &KernelOptions::default()).unwrap();
        assert_eq!(res.iterations, 2);
        assert_abs_diff_eq!(res.eigenvalues[0], 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(res.eigenvalues[1], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn symmetric_two_by_two() {
        // eigenvalues 3 and 1
        let a = Matrix::<f64>::from_rows(&[[2.0, 1.0], [1.0, 2.0]]).unwrap();
        let res = solve_eigenvalues_qr(&a, &KernelOptions::new(1e-10)).unwrap();
        assert_abs_diff_eq!(res.eigenvalues[0], 3.0, epsilon = 1e-8);
        assert_abs_diff_eq!(res.eigenvalues[1], 1.0, epsilon = 1e-8);
    }

    #[test]
    fn oscillating_matrix_hits_the_cap() {
        // complex pair 1 ± i√2: the real iterate never settles
        let a = Matrix::<f64>::from_rows(&[[1.0, -2.0], [1.0, 1.0]]).unwrap();
        let opts = KernelOptions::default().with_max_iters(25);
        assert_eq!(solve_eigenvalues_qr(&a, &opts), Err(KernelError::NotConverged(25)));
    }

    #[test]
    fn rejects_rectangular_input() {
        let a = Matrix::<f64>::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        assert!(matches!(
            solve_eigenvalues_qr(&a, &KernelOptions::default()),
            Err(KernelError::ShapeError(_))
        ));
    }
}
