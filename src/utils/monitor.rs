//! Per-iteration state handed to monitor callbacks.
//!
//! The kernels never print. Callers that want a trace pass a closure to the
//! `*_with` variant of a kernel; it is invoked once per iteration with one of
//! the borrowed snapshots below.

use crate::matrix::{Matrix, Vector};

/// One Householder reflection of a QR transform.
#[derive(Debug)]
pub struct HouseholderStep<'a, T> {
    /// Column that was just reduced
    pub column: usize,
    /// Partially reduced `R`
    pub r: &'a Matrix<T>,
}

/// One `A' = R·Q` step of the QR eigenvalue iteration.
#[derive(Debug)]
pub struct QrStep<'a, T> {
    pub iteration: usize,
    pub iterate: &'a Matrix<T>,
    /// Diagonal of `iterate`
    pub estimate: &'a Vector<T>,
}

/// One Rayleigh quotient iteration.
#[derive(Debug)]
pub struct RayleighStep<'a, T> {
    pub iteration: usize,
    pub shift: T,
    /// Renormalized iterate
    pub x: &'a Vector<T>,
}

/// One scalar Newton step: `x_next = x - fx / dfx`.
#[derive(Debug, Clone, Copy)]
pub struct NewtonStep<T> {
    pub iteration: usize,
    pub x: T,
    pub fx: T,
    pub dfx: T,
    pub step: T,
}

/// One multivariate Newton step: `J(x)·step = -F(x)`.
#[derive(Debug)]
pub struct NewtonSystemStep<'a, T> {
    pub iteration: usize,
    pub x: &'a Vector<T>,
    pub fx: &'a Vector<T>,
    pub jacobian: &'a Matrix<T>,
    pub step: &'a Vector<T>,
}
