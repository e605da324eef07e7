//! Convergence checks, residuals and monitor snapshots.

pub mod convergence;
pub mod monitor;
pub mod residual;

pub use convergence::{Convergence, SolveStats, ensure_finite};
pub use monitor::{HouseholderStep, NewtonStep, NewtonSystemStep, QrStep, RayleighStep};
pub use residual::{residual, residual_norm_inf};
