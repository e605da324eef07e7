//! Systems of scalar equations for the multivariate Newton solver.
//!
//! Each equation is a row of sub-terms `f(x) -> T`. The value of an equation
//! is the sum of its terms; a Jacobian system stores one partial derivative
//! per term, so evaluating the terms individually yields the Jacobian matrix.

use crate::core::traits::Scalar;
use crate::error::KernelError;
use crate::matrix::dense::Matrix;
use crate::matrix::vector::Vector;

/// One scalar sub-term of an equation, evaluated at the current point.
pub type Term<T> = Box<dyn Fn(&[T]) -> T + Send + Sync>;

/// Box a closure as a [`Term`].
pub fn term<T, F>(f: F) -> Term<T>
where
    F: Fn(&[T]) -> T + Send + Sync + 'static,
{
    Box::new(f)
}

pub struct SystemOfEquations<T> {
    equations: Vec<Vec<Term<T>>>,
}

impl<T: Scalar> SystemOfEquations<T> {
    /// Fails with `ShapeError` when there are no equations or an equation has no terms.
    pub fn new(equations: Vec<Vec<Term<T>>>) -> Result<Self, KernelError> {
        if equations.is_empty() {
            return Err(KernelError::ShapeError("system has no equations".into()));
        }
        if let Some(i) = equations.iter().position(|row| row.is_empty()) {
            return Err(KernelError::ShapeError(format!("equation {i} has no terms")));
        }
        Ok(Self { equations })
    }

    pub fn len(&self) -> usize {
        self.equations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.equations.is_empty()
    }

    /// Sum of each equation's terms at `x`.
    pub fn evaluate(&self, x: &Vector<T>) -> Vector<T> {
        self.equations
            .iter()
            .map(|row| row.iter().fold(T::zero(), |acc, f| acc + f(x.as_slice())))
            .collect()
    }

    /// Every term evaluated at `x`, one matrix row per equation.
    ///
    /// All equations must have the same number of terms.
    pub fn evaluate_terms(&self, x: &Vector<T>) -> Result<Matrix<T>, KernelError> {
        let ncols = self.equations[0].len();
        if let Some(row) = self.equations.iter().find(|row| row.len() != ncols) {
            return Err(KernelError::mismatch("SystemOfEquations::evaluate_terms", ncols, row.len()));
        }
        let data = self
            .equations
            .iter()
            .flat_map(|row| row.iter().map(|f| f(x.as_slice())))
            .collect();
        Matrix::new(self.equations.len(), ncols, data)
    }
}

impl<T> std::fmt::Debug for SystemOfEquations<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let terms: Vec<usize> = self.equations.iter().map(Vec::len).collect();
        f.debug_struct("SystemOfEquations").field("terms", &terms).finish()
    }
}
