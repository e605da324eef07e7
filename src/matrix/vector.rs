//! Fixed-length dense vector with named arithmetic.

use crate::core::traits::Scalar;
use crate::error::KernelError;
use std::ops::{Index, IndexMut};

#[derive(Clone, Debug, PartialEq)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T> Vector<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: Scalar> Vector<T> {
    pub fn from_slice(values: &[T]) -> Self {
        Self::new(values.to_vec())
    }

    pub fn zeros(len: usize) -> Self {
        Self::new(vec![T::zero(); len])
    }

    /// Unit vector `e_index` of the given length.
    pub fn unit(len: usize, index: usize) -> Self {
        let mut v = Self::zeros(len);
        v[index] = T::one();
        v
    }

    pub fn dot(&self, other: &Self) -> Result<T, KernelError> {
        self.check_len(other, "Vector::dot")?;
        Ok(self.data.iter().zip(&other.data).fold(T::zero(), |acc, (&a, &b)| acc + a * b))
    }

    pub fn add(&self, other: &Self) -> Result<Self, KernelError> {
        self.check_len(other, "Vector::add")?;
        Ok(self.data.iter().zip(&other.data).map(|(&a, &b)| a + b).collect())
    }

    pub fn subtract(&self, other: &Self) -> Result<Self, KernelError> {
        self.check_len(other, "Vector::subtract")?;
        Ok(self.data.iter().zip(&other.data).map(|(&a, &b)| a - b).collect())
    }

    pub fn scale(&self, factor: T) -> Self {
        self.data.iter().map(|&v| v * factor).collect()
    }

    /// Divide every component by `divisor`. A zero divisor is not guarded.
    pub fn divide(&self, divisor: T) -> Self {
        self.data.iter().map(|&v| v / divisor).collect()
    }

    pub fn negate(&self) -> Self {
        self.data.iter().map(|&v| -v).collect()
    }

    /// Euclidean norm ‖x‖₂.
    pub fn norm2(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &v| acc + v * v).sqrt()
    }

    /// Largest magnitude, ‖x‖∞.
    pub fn norm_inf(&self) -> T {
        self.data
            .iter()
            .map(|v| v.abs())
            .fold(T::zero(), |acc, v| if v > acc { v } else { acc })
    }

    /// Largest signed component, `None` for an empty vector.
    pub fn max(&self) -> Option<T> {
        self.data
            .iter()
            .copied()
            .reduce(|acc, v| if v > acc { v } else { acc })
    }

    /// Component of largest magnitude with its sign kept.
    pub fn max_magnitude(&self) -> Option<T> {
        self.data
            .iter()
            .copied()
            .reduce(|acc, v| if v.abs() > acc.abs() { v } else { acc })
    }

    fn check_len(&self, other: &Self, context: &'static str) -> Result<(), KernelError> {
        if self.len() == other.len() {
            Ok(())
        } else {
            Err(KernelError::mismatch(context, self.len(), other.len()))
        }
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        Self::new(data)
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_and_norms() {
        let x = Vector::new(vec![1.0, 2.0, -3.0]);
        let y = Vector::new(vec![4.0, -5.0, 6.0]);
        assert_eq!(x.dot(&y).unwrap(), 4.0 - 10.0 - 18.0);
        assert_eq!(x.norm2(), 14.0f64.sqrt());
        assert_eq!(x.norm_inf(), 3.0);
        assert_eq!(x.max(), Some(2.0));
        assert_eq!(x.max_magnitude(), Some(-3.0));
    }

    #[test]
    fn length_mismatch_is_reported() {
        let x = Vector::new(vec![1.0, 2.0]);
        let y = Vector::new(vec![1.0]);
        assert!(matches!(
            x.add(&y),
            Err(KernelError::DimensionMismatch { expected: 2, found: 1, .. })
        ));
    }

    #[test]
    fn unit_and_scaling() {
        let e1 = Vector::<f64>::unit(3, 1);
        assert_eq!(e1.as_slice(), &[0.0, 1.0, 0.0]);
        assert_eq!(e1.scale(4.0).divide(2.0).as_slice(), &[0.0, 2.0, 0.0]);
        assert_eq!(e1.negate()[1], -1.0);
        assert_eq!(Vector::<f64>::new(vec![]).max(), None);
    }
}
