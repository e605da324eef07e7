//! Test-case generators.

use crate::core::traits::Scalar;
use crate::error::KernelError;
use crate::matrix::dense::Matrix;
use crate::matrix::vector::Vector;

/// Hilbert matrix `H[i][j] = 1 / (i + j + 1)` with a right-hand side of ones.
///
/// Hilbert matrices are notoriously ill-conditioned, which makes them a good
/// probe for the zero-avoidance pivoting of the Gaussian solver.
pub fn hilbert<T: Scalar>(n: usize) -> Result<(Matrix<T>, Vector<T>), KernelError> {
    if n == 0 {
        return Err(KernelError::ShapeError("Hilbert size must be greater than 0".into()));
    }
    let h = Matrix::from_fn(n, n, |i, j| T::one() / T::cast((i + j + 1) as f64));
    Ok((h, Vector::new(vec![T::one(); n])))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hilbert_entries_and_condition_growth() {
        let (h, ones) = hilbert::<f64>(3).unwrap();
        assert_eq!(h[(0, 0)], 1.0);
        assert_eq!(h[(1, 2)], 0.25);
        assert_eq!(ones.as_slice(), &[1.0; 3]);
        let (h6, _) = hilbert::<f64>(6).unwrap();
        assert!(h6.norm_inf() > h.norm_inf());
        assert!(hilbert::<f64>(0).is_err());
    }
}
