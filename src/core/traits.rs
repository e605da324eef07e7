//! Core traits for lakern: the scalar abstraction and matrix-vector products.

use num_traits::{FromPrimitive, Num, Signed, ToPrimitive};
use std::fmt;

/// Real scalar the kernels are generic over.
///
/// Implemented for `f64`, `f32` and, with the `decimal` feature, for
/// `rust_decimal::Decimal`. The kernels never mix two scalar types inside
/// one computation.
pub trait Scalar:
    Num + Signed + Copy + PartialOrd + FromPrimitive + ToPrimitive + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Principal square root.
    fn sqrt(self) -> Self;

    /// Convert an `f64` constant, falling back to zero when it is not representable.
    fn cast(value: f64) -> Self {
        Self::from_f64(value).unwrap_or_else(Self::zero)
    }
}

/// Matrix–vector product: y ← A x.
pub trait MatVec<T> {
    /// Number of rows and columns of the operator.
    fn dims(&self) -> (usize, usize);
    /// Compute y = A · x.
    fn matvec(&self, x: &[T], y: &mut [T]);
}
