//! Householder QR transform and least-squares solver.
//!
//! Column `k` is reduced with the reflection `H = I - 2·w·wᵗ/(wᵗw)` where
//! `w = v - alpha·e_k` and `v` is column `k` restricted to rows `k..m`.
//! Reflections are applied column by column to `R` and accumulated as
//! `Q = H_0·H_1·…`, so that `A = Q·R` with `Q` orthogonal (m×m) and `R`
//! upper triangular (m×n).
//!
//! The default sign convention takes `alpha = -‖v‖₂` whatever the sign of
//! `v_k`. When `v_k` is negative and dominates, `w_k` suffers cancellation;
//! `ReflectorSign::Stable` picks `alpha = -sign(v_k)·‖v‖₂` instead.
//!
//! # References
//! - Golub & Van Loan, Matrix Computations, §5.1

use crate::config::ReflectorSign;
use crate::core::traits::Scalar;
use crate::error::KernelError;
use crate::matrix::{Matrix, Vector};
use crate::solver::LinearSolver;
use crate::solver::triangular::solve_backward;
use crate::utils::monitor::HouseholderStep;

/// Orthogonal-triangular factors with `A = Q·R`.
#[derive(Debug, Clone, PartialEq)]
pub struct QrFactors<T> {
    /// Orthogonal, m×m
    pub q: Matrix<T>,
    /// Upper triangular, m×n
    pub r: Matrix<T>,
}

/// Householder QR with a configurable reflector sign.
#[derive(Debug, Clone, Copy, Default)]
pub struct Householder {
    pub sign: ReflectorSign,
}

impl Householder {
    pub fn new(sign: ReflectorSign) -> Self {
        Self { sign }
    }

    /// Factor `a` into `Q·R`.
    pub fn factor<T: Scalar>(&self, a: &Matrix<T>) -> Result<QrFactors<T>, KernelError> {
        self.factor_with(a, &mut |_| {})
    }

    /// Factor `a`, reporting the partially reduced `R` after every column.
    pub fn factor_with<T: Scalar>(
        &self,
        a: &Matrix<T>,
        monitor: &mut dyn FnMut(&HouseholderStep<'_, T>),
    ) -> Result<QrFactors<T>, KernelError> {
        let m = a.nrows();
        let mut q = Matrix::identity(m);
        let r = self.triangularize(
            a,
            |w, ww| {
                // Q ← Q·H
                for i in 0..m {
                    let s = (0..m).fold(T::zero(), |acc, l| acc + q[(i, l)] * w[l]);
                    let factor = (s + s) / ww;
                    for l in 0..m {
                        q[(i, l)] = q[(i, l)] - factor * w[l];
                    }
                }
            },
            monitor,
        );
        Ok(QrFactors { q, r })
    }

    /// Least-squares solution of `A·x ≈ b` for `m >= n`.
    ///
    /// The reflections are applied to `b` as they are built; the leading
    /// n×n block of `R` is then solved by backward substitution. Rows beyond
    /// `n` are residual equations and do not enter the solution.
    pub fn solve_least_squares<T: Scalar>(&self, a: &Matrix<T>, b: &Vector<T>) -> Result<Vector<T>, KernelError> {
        let (m, n) = (a.nrows(), a.ncols());
        if m < n {
            return Err(KernelError::ShapeError(format!(
                "least squares needs at least as many equations as unknowns, got {m}x{n}"
            )));
        }
        if b.len() != m {
            return Err(KernelError::mismatch("Householder least squares", m, b.len()));
        }
        let mut rhs = b.clone();
        let r = self.triangularize(
            a,
            |w, ww| {
                let s = w.iter().zip(rhs.iter()).fold(T::zero(), |acc, (&wi, &bi)| acc + wi * bi);
                let factor = (s + s) / ww;
                for i in 0..m {
                    rhs[i] = rhs[i] - factor * w[i];
                }
            },
            &mut |_| {},
        );
        let square = Matrix::from_fn(n, n, |i, j| r[(i, j)]);
        let top: Vector<T> = rhs.iter().take(n).copied().collect();
        solve_backward(&square, &top)
    }

    /// Reduce a copy of `a` to upper-triangular form. `on_reflect` receives
    /// every nontrivial Householder vector `w` together with `wᵗw`.
    fn triangularize<T: Scalar>(
        &self,
        a: &Matrix<T>,
        mut on_reflect: impl FnMut(&Vector<T>, T),
        monitor: &mut dyn FnMut(&HouseholderStep<'_, T>),
    ) -> Matrix<T> {
        let (m, n) = (a.nrows(), a.ncols());
        let mut r = a.clone();
        for k in 0..m.min(n) {
            if let Some((w, ww)) = self.reflector(&r, k) {
                for j in k..n {
                    let s = (k..m).fold(T::zero(), |acc, i| acc + w[i] * r[(i, j)]);
                    let factor = (s + s) / ww;
                    for i in k..m {
                        r[(i, j)] = r[(i, j)] - factor * w[i];
                    }
                }
                on_reflect(&w, ww);
            }
            for i in (k + 1)..m {
                r[(i, k)] = T::zero();
            }
            log::trace!("Householder column {k} reduced");
            monitor(&HouseholderStep { column: k, r: &r });
        }
        r
    }

    /// Householder vector for column `k`, or `None` when the column is already reduced.
    fn reflector<T: Scalar>(&self, r: &Matrix<T>, k: usize) -> Option<(Vector<T>, T)> {
        let m = r.nrows();
        let mut v = Vector::zeros(m);
        for i in k..m {
            v[i] = r[(i, k)];
        }
        let norm = v.norm2();
        let alpha = match self.sign {
            ReflectorSign::Negated => -norm,
            ReflectorSign::Stable if v[k] < T::zero() => norm,
            ReflectorSign::Stable => -norm,
        };
        v[k] = v[k] - alpha;
        let ww = v.iter().fold(T::zero(), |acc, &wi| acc + wi * wi);
        if ww.is_zero() { None } else { Some((v, ww)) }
    }
}

impl<T: Scalar> LinearSolver<T> for Householder {
    fn solve(&self, a: &Matrix<T>, b: &Vector<T>) -> Result<Vector<T>, KernelError> {
        self.solve_least_squares(a, b)
    }
}

/// `A = Q·R` with the default reflector sign.
pub fn qr_transform<T: Scalar>(a: &Matrix<T>) -> Result<QrFactors<T>, KernelError> {
    Householder::default().factor(a)
}

/// Least-squares solve with the default reflector sign.
pub fn solve_least_squares<T: Scalar>(a: &Matrix<T>, b: &Vector<T>) -> Result<Vector<T>, KernelError> {
    Householder::default().solve_least_squares(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_close(a: &Matrix<f64>, b: &Matrix<f64>, tol: f64) {
        assert_eq!((a.nrows(), a.ncols()), (b.nrows(), b.ncols()));
        for (x, y) in a.as_slice().iter().zip(b.as_slice()) {
            assert_abs_diff_eq!(*x, *y, epsilon = tol);
        }
    }

    fn tall() -> Matrix<f64> {
        Matrix::<f64>::from_rows(&[
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
            [-1.0, 1.0, 0.0],
            [-1.0, 0.0, 1.0],
            [0.0, -1.0, 1.0],
        ])
        .unwrap()
    }

    #[test]
    fn factors_reproduce_input() {
        for sign in [ReflectorSign::Negated, ReflectorSign::Stable] {
            let a = tall();
            let QrFactors { q, r } = Householder::new(sign).factor(&a).unwrap();
            assert_eq!((q.nrows(), q.ncols()), (6, 6));
            assert!(r.is_upper_triangular());
            assert_close(&q.multiply(&r).unwrap(), &a, 1e-12);
            assert_close(&q.transpose().multiply(&q).unwrap(), &Matrix::identity(6), 1e-12);
        }
    }

    #[test]
    fn least_squares_on_overdetermined_survey() {
        let b = Vector::new(vec![1237.0, 1941.0, 2417.0, 711.0, 1177.0, 475.0]);
        let x = solve_least_squares(&tall(), &b).unwrap();
        // normal equations: (AᵗA) x = Aᵗb
        let expected = [1236.0, 1943.0, 2416.0];
        for (xi, ei) in x.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(*xi, *ei, epsilon = 1e-9);
        }
    }

    #[test]
    fn square_system_is_solved_exactly() {
        let a = Matrix::<f64>::from_rows(&[[2.0, 1.0], [1.0, 3.0]]).unwrap();
        let x = Householder::default().solve(&a, &Vector::new(vec![3.0, 5.0])).unwrap();
        assert_abs_diff_eq!(x[0], 0.8, epsilon = 1e-12);
        assert_abs_diff_eq!(x[1], 1.4, epsilon = 1e-12);
    }

    #[test]
    fn wide_matrix_factors_but_does_not_solve() {
        let a = Matrix::<f64>::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        let QrFactors { q, r } = qr_transform(&a).unwrap();
        assert_close(&q.multiply(&r).unwrap(), &a, 1e-12);
        assert!(matches!(
            solve_least_squares(&a, &Vector::new(vec![1.0, 2.0])),
            Err(KernelError::ShapeError(_))
        ));
    }

    #[test]
    fn monitor_sees_every_column() {
        let mut columns = Vec::new();
        Householder::default()
            .factor_with(&tall(), &mut |step| columns.push(step.column))
            .unwrap();
        assert_eq!(columns, vec![0, 1, 2]);
    }

    #[test]
    fn reduced_column_is_skipped() {
        // negative diagonal with nothing below it gives w = 0 under the default sign
        let a = Matrix::<f64>::from_rows(&[[2.0, 1.0], [0.0, -3.0]]).unwrap();
        let QrFactors { q, r } = qr_transform(&a).unwrap();
        assert!(q.as_slice().iter().all(|v| v.is_finite()));
        assert_close(&q.multiply(&r).unwrap(), &a, 1e-12);
    }
}
