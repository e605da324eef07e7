//! Context module: selecting and running a direct solver by kind.
//!
//! # Example
//! ```rust
//! use lakern::context::{SolverContext, SolverKind};
//! use lakern::matrix::{Matrix, Vector};
//! let a: Matrix<f64> = Matrix::from_rows(&[[2.0, 1.0], [1.0, 3.0]]).unwrap();
//! let b = Vector::new(vec![3.0, 5.0]);
//! let kind: SolverKind = "gauss".parse().unwrap();
//! let (x, stats) = SolverContext::new(kind).solve(&a, &b).unwrap();
//! assert!(stats.final_residual < 1e-12);
//! assert!((x[0] - 0.8).abs() < 1e-12);
//! ```

pub mod solver_context;
pub use solver_context::{SolverContext, SolverKind};
