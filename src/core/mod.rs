//! Scalar and operator traits shared by every kernel.

pub mod traits;
pub mod wrappers;

pub use traits::{MatVec, Scalar};
