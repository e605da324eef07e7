//! Tests for core dense operations: matrix-vector products, named arithmetic and norms.
//!
//! These tests check the `MatVec` implementations for `Matrix` and `faer::Mat`
//! against manual computations on random and fixed data.

use approx::assert_abs_diff_eq;
use faer::Mat;
use lakern::core::traits::MatVec;
use lakern::matrix::{Matrix, Vector};
use rand::Rng;

/// Matrix-vector product of a random 5x5 matrix against a manual sum.
#[test]
fn matvec_random_small() {
    let n = 5;
    let mut rng = rand::thread_rng();
    let vals: Vec<f64> = (0..n * n).map(|_| rng.r#gen()).collect();
    let a = Matrix::new(n, n, vals.clone()).unwrap();
    let x: Vec<f64> = (0..n).map(|_| rng.r#gen()).collect();
    let mut y = vec![0.0; n];
    a.matvec(&x, &mut y);

    // row-major storage: A[i,j] = vals[i*n + j]
    for i in 0..n {
        let expected = (0..n).map(|j| vals[i * n + j] * x[j]).sum::<f64>();
        assert_abs_diff_eq!(y[i], expected, epsilon = 1e-12);
    }
}

/// `Matrix` and its faer copy produce the same product.
#[test]
fn matvec_agrees_with_faer() {
    let n = 6;
    let mut rng = rand::thread_rng();
    let a = Matrix::<f64>::from_fn(n, n, |_, _| rng.gen_range(-1.0..1.0));
    let fa: Mat<f64> = a.to_faer();
    let x: Vec<f64> = (0..n).map(|i| i as f64 - 2.5).collect();
    let mut y = vec![0.0; n];
    let mut y_faer = vec![0.0; n];
    a.matvec(&x, &mut y);
    fa.matvec(&x, &mut y_faer);
    for i in 0..n {
        assert_abs_diff_eq!(y[i], y_faer[i], epsilon = 1e-12);
    }
}

/// Dot product and Euclidean norm for small vectors.
#[test]
fn dot_and_norm() {
    let x = Vector::new(vec![1.0, 2.0, 3.0]);
    let y = Vector::new(vec![4.0, -5.0, 6.0]);
    let dot = x.dot(&y).unwrap();
    assert_abs_diff_eq!(dot, 1.0 * 4.0 + 2.0 * (-5.0) + 3.0 * 6.0, epsilon = 1e-12);
    let expected_norm = ((1.0f64).powi(2) + 2.0f64.powi(2) + 3.0f64.powi(2)).sqrt();
    assert_abs_diff_eq!(x.norm2(), expected_norm, epsilon = 1e-12);
}

/// Named arithmetic returns new values and leaves operands untouched.
#[test]
fn named_operations_do_not_mutate() {
    let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    let b = Matrix::<f64>::identity(2);
    let sum = a.add(&b).unwrap();
    let diff = a.subtract(&b).unwrap();
    assert_eq!(sum.as_slice(), &[2.0, 2.0, 3.0, 5.0]);
    assert_eq!(diff.as_slice(), &[0.0, 2.0, 3.0, 3.0]);
    assert_eq!(a.scale(2.0).multiply(&b).unwrap(), a.add(&a).unwrap());
    assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
}
