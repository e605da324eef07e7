//! Direct solver interfaces: triangular substitution, Gaussian elimination,
//! Gauss-Jordan inversion and Householder QR.

use crate::core::traits::Scalar;
use crate::error::KernelError;
use crate::matrix::{Matrix, Vector};

/// Common interface for the direct solvers.
pub trait LinearSolver<T: Scalar> {
    /// Solve A·x = b, returning a fresh `x`. Neither input is modified.
    fn solve(&self, a: &Matrix<T>, b: &Vector<T>) -> Result<Vector<T>, KernelError>;
}

pub mod triangular;
pub use triangular::{BackwardSubstitution, ForwardSubstitution, solve_backward, solve_forward};

pub mod gauss;
pub use gauss::{GaussianElimination, solve_gaussian};

pub mod gauss_jordan;
pub use gauss_jordan::invert;

pub mod householder;
pub use householder::{Householder, QrFactors, qr_transform, solve_least_squares};
