//! Gauss-Jordan inversion: reduce `[A | I]` to `[I | A⁻¹]`.
//!
//! A zero pivot is replaced by swapping in the first lower row with a nonzero
//! entry in the pivot column. When no such row exists the matrix is singular
//! and `ZeroPivot` is returned instead of dividing by zero. Near-singular
//! matrices are not detected.

use crate::core::traits::Scalar;
use crate::error::KernelError;
use crate::matrix::Matrix;

/// Diagonal entries this close to one are left unscaled.
const UNIT_DIAGONAL_TOL: f64 = 1e-8;

/// Inverse of a square matrix. `a` is not modified.
pub fn invert<T: Scalar>(a: &Matrix<T>) -> Result<Matrix<T>, KernelError> {
    let n = a.require_square("Gauss-Jordan inversion")?;
    let mut a = a.clone();
    let mut inv = Matrix::identity(n);

    for c in 0..n {
        if a[(c, c)].is_zero() {
            let r = ((c + 1)..n)
                .find(|&r| !a[(r, c)].is_zero())
                .ok_or(KernelError::ZeroPivot(c))?;
            a.swap_rows(r, c);
            inv.swap_rows(r, c);
        }
        for r in (0..n).filter(|&r| r != c) {
            let multiplier = a[(r, c)] / a[(c, c)];
            if multiplier.is_zero() {
                continue;
            }
            eliminate(&mut a, &mut inv, c, r, multiplier);
            a[(r, c)] = T::zero();
        }
    }

    let unit_tol = T::cast(UNIT_DIAGONAL_TOL);
    for i in 0..n {
        let d = a[(i, i)];
        if (d - T::one()).abs() > unit_tol {
            for j in 0..n {
                a[(i, j)] = a[(i, j)] / d;
                inv[(i, j)] = inv[(i, j)] / d;
            }
        }
    }
    Ok(inv)
}

/// row `target` -= multiplier · row `source`, in both halves.
fn eliminate<T: Scalar>(a: &mut Matrix<T>, inv: &mut Matrix<T>, source: usize, target: usize, multiplier: T) {
    for j in 0..a.ncols() {
        a[(target, j)] = a[(target, j)] - multiplier * a[(source, j)];
        inv[(target, j)] = inv[(target, j)] - multiplier * inv[(source, j)];
    }
}
