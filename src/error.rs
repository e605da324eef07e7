use thiserror::Error;

// Unified error type for lakern

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    #[error("dimension mismatch in {context}: expected {expected}, found {found}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("shape error: {0}")]
    ShapeError(String),
    #[error("numerical failure: {0}")]
    NumericalFailure(String),
    #[error("zero pivot in column {0}")]
    ZeroPivot(usize),
    #[error("no convergence after {0} iterations")]
    NotConverged(usize),
}

impl KernelError {
    /// True for failures caused by the numbers rather than the shapes.
    pub fn is_numerical(&self) -> bool {
        matches!(
            self,
            KernelError::NumericalFailure(_) | KernelError::ZeroPivot(_) | KernelError::NotConverged(_)
        )
    }

    pub(crate) fn mismatch(context: &'static str, expected: usize, found: usize) -> Self {
        KernelError::DimensionMismatch { context, expected, found }
    }
}
