//! lakern: dense linear-algebra kernels
//!
//! This crate provides small, dependable dense kernels: triangular and Gaussian solves,
//! Gauss-Jordan inversion, Householder QR (factorization and least squares), unshifted QR
//! eigenvalue iteration, Rayleigh quotient iteration and Newton-Raphson root finding.
//! Every kernel is generic over the [`Scalar`] type and works on private copies of its inputs.

pub mod config;
pub mod context;
pub mod core;
pub mod eigen;
pub mod error;
pub mod matrix;
pub mod nonlinear;
pub mod solver;
pub mod utils;

// Re-exports for convenience
pub use config::*;
pub use context::*;
pub use crate::core::*;
pub use eigen::*;
pub use error::*;
pub use matrix::*;
pub use nonlinear::*;
pub use solver::*;
pub use utils::*;
