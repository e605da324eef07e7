//! Factory for the direct linear solvers.
//!
//! `SolverContext` holds a `SolverKind` and dispatches `A·x = b` to the
//! matching solver, reporting the infinity-norm residual of the answer in a
//! `SolveStats`. Kinds can be parsed from their short names, which is how a
//! command line or a configuration file would select them.
//!
//! # Supported Solvers
//! - forward substitution (`forward`), backward substitution (`backward`)
//! - Gaussian elimination (`gauss`)
//! - Householder least squares (`householder`)

use crate::core::traits::Scalar;
use crate::error::KernelError;
use crate::matrix::{Matrix, Vector};
use crate::solver::{BackwardSubstitution, ForwardSubstitution, GaussianElimination, Householder, LinearSolver};
use crate::utils::convergence::SolveStats;
use crate::utils::residual::residual_norm_inf;
use std::fmt;
use std::str::FromStr;

/// Enum representing the available direct solver types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverKind {
    /// Forward substitution (lower-triangular systems)
    Forward,
    /// Backward substitution (upper-triangular systems)
    Backward,
    /// Gaussian elimination with zero-avoidance pivoting
    Gaussian,
    /// Householder QR least squares (square or overdetermined)
    Householder,
}

impl SolverKind {
    pub fn name(self) -> &'static str {
        match self {
            SolverKind::Forward => "forward",
            SolverKind::Backward => "backward",
            SolverKind::Gaussian => "gauss",
            SolverKind::Householder => "householder",
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SolverKind {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "forward" => Ok(SolverKind::Forward),
            "backward" => Ok(SolverKind::Backward),
            "gauss" | "gaussian" => Ok(SolverKind::Gaussian),
            "householder" | "qr" => Ok(SolverKind::Householder),
            other => Err(KernelError::ShapeError(format!("unknown solver kind '{other}'"))),
        }
    }
}

/// Context and configuration for a direct solve.
#[derive(Debug, Clone, Copy)]
pub struct SolverContext {
    /// The type of solver to use
    pub kind: SolverKind,
    /// Reflector sign used by the Householder solver
    pub householder: Householder,
}

impl SolverContext {
    pub fn new(kind: SolverKind) -> Self {
        Self { kind, householder: Householder::default() }
    }

    pub fn with_householder(mut self, householder: Householder) -> Self {
        self.householder = householder;
        self
    }

    /// Solve the linear system `Ax = b` using the configured solver.
    ///
    /// # Returns
    /// * `Ok((x, stats))` where `stats.final_residual` is ‖b - A·x‖∞
    /// * `Err(KernelError)` on a shape or dimension error
    pub fn solve<T: Scalar>(&self, a: &Matrix<T>, b: &Vector<T>) -> Result<(Vector<T>, SolveStats<T>), KernelError> {
        let x = match self.kind {
            SolverKind::Forward => ForwardSubstitution.solve(a, b)?,
            SolverKind::Backward => BackwardSubstitution.solve(a, b)?,
            SolverKind::Gaussian => GaussianElimination.solve(a, b)?,
            SolverKind::Householder => self.householder.solve(a, b)?,
        };
        let final_residual = residual_norm_inf(a, x.as_slice(), b.as_slice())?;
        // overdetermined systems keep a nonzero residual by construction
        let converged = x.iter().all(|v| v.to_f64().is_some_and(f64::is_finite));
        log::debug!("{} solve finished with residual {}", self.kind, final_residual);
        Ok((x, SolveStats { iterations: 1, final_residual, converged }))
    }
}
