//! Residuals `r = b - A·x` for any `MatVec` operator.

use crate::core::traits::{MatVec, Scalar};
use crate::error::KernelError;
use crate::matrix::Vector;

/// Residual `b - A·x`.
pub fn residual<T, M>(a: &M, x: &[T], b: &[T]) -> Result<Vector<T>, KernelError>
where
    T: Scalar,
    M: MatVec<T> + ?Sized,
{
    let (nrows, ncols) = a.dims();
    if x.len() != ncols {
        return Err(KernelError::mismatch("residual (x)", ncols, x.len()));
    }
    if b.len() != nrows {
        return Err(KernelError::mismatch("residual (b)", nrows, b.len()));
    }
    let mut ax = vec![T::zero(); nrows];
    a.matvec(x, &mut ax);
    Ok(b.iter().zip(&ax).map(|(&bi, &axi)| bi - axi).collect())
}

/// ‖b - A·x‖∞.
pub fn residual_norm_inf<T, M>(a: &M, x: &[T], b: &[T]) -> Result<T, KernelError>
where
    T: Scalar,
    M: MatVec<T> + ?Sized,
{
    residual(a, x, b).map(|r| r.norm_inf())
}
