//! Matrix module: dense matrix and vector types, equation systems and generators.

pub mod dense;
pub mod generator;
pub mod system;
pub mod vector;

pub use dense::Matrix;
pub use generator::hilbert;
pub use system::{SystemOfEquations, Term, term};
pub use vector::Vector;
