//! Configuration for the iterative kernels.

pub mod options;

pub use options::{DEFAULT_TOL, KernelOptions, NEWTON_TOL, Normalization, ReflectorSign, StopRule};
