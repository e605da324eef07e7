//! Dense row-major matrix used by every kernel.
//!
//! `Matrix<T>` is a plain value type: every arithmetic operation returns a new
//! matrix and the kernels clone before they eliminate or reflect. Shape is
//! checked at runtime, so square-only operations call [`Matrix::require_square`]
//! at their boundary instead of relying on a separate square type.
//!
//! Entries are addressed as `m[(row, col)]`, the same convention as `faer`.

use crate::core::traits::{MatVec, Scalar};
use crate::error::KernelError;
use crate::matrix::vector::Vector;
use faer::Mat;
use std::ops::{Index, IndexMut};

#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    nrows: usize,
    ncols: usize,
    data: Vec<T>,
}

impl<T: Scalar> Matrix<T> {
    /// Construct from row-major storage.
    ///
    /// Fails with `ShapeError` when a dimension is zero and with
    /// `DimensionMismatch` when `data.len() != nrows * ncols`.
    pub fn new(nrows: usize, ncols: usize, data: Vec<T>) -> Result<Self, KernelError> {
        if nrows == 0 || ncols == 0 {
            return Err(KernelError::ShapeError(format!(
                "matrix must have at least one row and one column, got {nrows}x{ncols}"
            )));
        }
        if data.len() != nrows * ncols {
            return Err(KernelError::mismatch("Matrix::new", nrows * ncols, data.len()));
        }
        Ok(Self { nrows, ncols, data })
    }

    /// Construct from a list of rows. Every row must have the same length.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, KernelError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(nrows * ncols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != ncols {
                return Err(KernelError::ShapeError(format!(
                    "row {i} has {} entries, expected {ncols}",
                    row.len()
                )));
            }
            data.extend_from_slice(row);
        }
        Self::new(nrows, ncols, data)
    }

    /// Build an `nrows x ncols` matrix from `f(row, col)`.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn from_fn(nrows: usize, ncols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        assert!(nrows > 0 && ncols > 0, "matrix dimensions must be non-zero");
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self { nrows, ncols, data }
    }

    /// # Panics
    /// Panics if either dimension is zero.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self::from_fn(nrows, ncols, |_, _| T::zero())
    }

    /// # Panics
    /// Panics if `n == 0`.
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { T::one() } else { T::zero() })
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Returns the size `n` of a square matrix, or `ShapeError` naming `op`.
    pub fn require_square(&self, op: &str) -> Result<usize, KernelError> {
        if self.is_square() {
            Ok(self.nrows)
        } else {
            Err(KernelError::ShapeError(format!(
                "{op} requires a square matrix, got {}x{}",
                self.nrows, self.ncols
            )))
        }
    }

    /// Row-major view of the entries.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        &mut self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    pub fn column(&self, j: usize) -> Vector<T> {
        (0..self.nrows).map(|i| self[(i, j)]).collect()
    }

    /// Leading diagonal, `min(nrows, ncols)` entries long.
    pub fn diagonal(&self) -> Vector<T> {
        (0..self.nrows.min(self.ncols)).map(|i| self[(i, i)]).collect()
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for j in 0..self.ncols {
            self.data.swap(a * self.ncols + j, b * self.ncols + j);
        }
    }

    pub fn transpose(&self) -> Self {
        Self::from_fn(self.ncols, self.nrows, |i, j| self[(j, i)])
    }

    pub fn add(&self, other: &Self) -> Result<Self, KernelError> {
        self.zip_with(other, "Matrix::add", |a, b| a + b)
    }

    pub fn subtract(&self, other: &Self) -> Result<Self, KernelError> {
        self.zip_with(other, "Matrix::subtract", |a, b| a - b)
    }

    pub fn scale(&self, factor: T) -> Self {
        Self {
            nrows: self.nrows,
            ncols: self.ncols,
            data: self.data.iter().map(|&v| v * factor).collect(),
        }
    }

    /// Matrix product `self · other`.
    pub fn multiply(&self, other: &Self) -> Result<Self, KernelError> {
        if self.ncols != other.nrows {
            return Err(KernelError::mismatch("Matrix::multiply", self.ncols, other.nrows));
        }
        Ok(Self::from_fn(self.nrows, other.ncols, |i, j| {
            (0..self.ncols).fold(T::zero(), |acc, k| acc + self[(i, k)] * other[(k, j)])
        }))
    }

    /// Matrix-vector product `self · x`.
    pub fn apply(&self, x: &Vector<T>) -> Result<Vector<T>, KernelError> {
        if x.len() != self.ncols {
            return Err(KernelError::mismatch("Matrix::apply", self.ncols, x.len()));
        }
        let mut y = vec![T::zero(); self.nrows];
        self.matvec(x.as_slice(), &mut y);
        Ok(Vector::new(y))
    }

    /// Maximum absolute row sum, ‖A‖∞.
    pub fn norm_inf(&self) -> T {
        (0..self.nrows)
            .map(|i| self.row(i).iter().fold(T::zero(), |acc, v| acc + v.abs()))
            .fold(T::zero(), |acc, s| if s > acc { s } else { acc })
    }

    /// True when every entry strictly below the diagonal is exactly zero.
    pub fn is_upper_triangular(&self) -> bool {
        (1..self.nrows).all(|i| (0..i.min(self.ncols)).all(|j| self[(i, j)].is_zero()))
    }

    /// True when every entry strictly above the diagonal is exactly zero.
    pub fn is_lower_triangular(&self) -> bool {
        (0..self.nrows).all(|i| ((i + 1)..self.ncols).all(|j| self[(i, j)].is_zero()))
    }

    fn zip_with(
        &self,
        other: &Self,
        context: &'static str,
        f: impl Fn(T, T) -> T,
    ) -> Result<Self, KernelError> {
        if self.nrows != other.nrows {
            return Err(KernelError::mismatch(context, self.nrows, other.nrows));
        }
        if self.ncols != other.ncols {
            return Err(KernelError::mismatch(context, self.ncols, other.ncols));
        }
        Ok(Self {
            nrows: self.nrows,
            ncols: self.ncols,
            data: self.data.iter().zip(&other.data).map(|(&a, &b)| f(a, b)).collect(),
        })
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(i < self.nrows && j < self.ncols, "index ({i}, {j}) out of bounds");
        &self.data[i * self.ncols + j]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        assert!(i < self.nrows && j < self.ncols, "index ({i}, {j}) out of bounds");
        &mut self.data[i * self.ncols + j]
    }
}

impl<T: Scalar> MatVec<T> for Matrix<T> {
    fn dims(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    fn matvec(&self, x: &[T], y: &mut [T]) {
        assert_eq!(self.nrows, y.len(), "Output vector y has incorrect length");
        assert_eq!(self.ncols, x.len(), "Input vector x has incorrect length");
        for (i, yi) in y.iter_mut().enumerate() {
            *yi = self.row(i).iter().zip(x).fold(T::zero(), |acc, (&a, &b)| acc + a * b);
        }
    }
}

impl Matrix<f64> {
    /// Copy into a faer matrix.
    pub fn to_faer(&self) -> Mat<f64> {
        Mat::from_fn(self.nrows, self.ncols, |i, j| self[(i, j)])
    }

    /// Copy out of a faer matrix.
    pub fn from_faer(m: &Mat<f64>) -> Result<Self, KernelError> {
        let (nrows, ncols) = (m.nrows(), m.ncols());
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(m[(i, j)]);
            }
        }
        Self::new(nrows, ncols, data)
    }
}
