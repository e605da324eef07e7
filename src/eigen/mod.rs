//! Eigenvalue iterations: unshifted QR and Rayleigh quotient iteration.

pub mod qr_iteration;
pub mod rayleigh;

pub use qr_iteration::{EigenResult, solve_eigenvalues_qr, solve_eigenvalues_qr_with};
pub use rayleigh::{RayleighResult, rayleigh_converge, rayleigh_converge_with};
