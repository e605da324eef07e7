//! Nonlinear root finding.

pub mod newton;

pub use newton::{find_root, find_root_system, find_root_system_with, find_root_trace, find_root_with};
