//! Kernels instantiated with `rust_decimal::Decimal`.
#![cfg(feature = "decimal")]

use lakern::matrix::{Matrix, Vector};
use lakern::solver::{invert, solve_forward, solve_gaussian};
use rust_decimal::Decimal;

fn d(v: i64) -> Decimal {
    Decimal::from(v)
}

fn close(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() < Decimal::new(1, 18)
}

#[test]
fn gaussian_elimination_in_decimal() {
    let a = Matrix::from_rows(&[
        [d(1), d(2), d(1), d(-1)],
        [d(3), d(2), d(4), d(4)],
        [d(4), d(4), d(3), d(4)],
        [d(2), d(0), d(1), d(5)],
    ])
    .unwrap();
    let b = Vector::new(vec![d(5), d(16), d(22), d(15)]);
    let x = solve_gaussian(&a, &b).unwrap();
    for (xi, ei) in x.iter().zip([d(16), d(-6), d(-2), d(-3)]) {
        assert!(close(*xi, ei), "{xi} != {ei}");
    }
}

#[test]
fn forward_substitution_is_exact_in_decimal() {
    let l = Matrix::from_rows(&[[d(4), d(0), d(0)], [d(2), d(-2), d(0)], [d(1), d(3), d(4)]]).unwrap();
    let x = solve_forward(&l, &Vector::new(vec![d(1), d(-2), d(19)])).unwrap();
    assert_eq!(x.as_slice(), &[Decimal::new(25, 2), Decimal::new(125, 2), Decimal::new(375, 2)]);
}

#[test]
fn inverse_in_decimal() {
    let a = Matrix::from_rows(&[[Decimal::new(-6, 1), d(1)], [d(1), Decimal::new(-6, 1)]]).unwrap();
    let inv = invert(&a).unwrap();
    let expected = [Decimal::new(9375, 4), Decimal::new(15625, 4)];
    assert!(close(inv[(0, 0)], expected[0]));
    assert!(close(inv[(0, 1)], expected[1]));
    assert!(close(inv[(1, 1)], expected[0]));
}
