//! Integration tests for the Newton solvers.

use approx::assert_abs_diff_eq;
use lakern::config::{KernelOptions, StopRule};
use lakern::error::KernelError;
use lakern::matrix::{SystemOfEquations, Vector, term};
use lakern::nonlinear::{find_root, find_root_system, find_root_system_with, find_root_trace};

#[test]
fn scalar_square_root_of_two() {
    let opts = KernelOptions::new(1e-12);
    let root = find_root(|x: f64| x * x - 2.0, |x| 2.0 * x, 1.0, &opts).unwrap();
    assert_abs_diff_eq!(root, 2.0f64.sqrt(), epsilon = 1e-12);
}

/// The trace starts at `x0`, ends at the root, and its last step is below tol.
#[test]
fn scalar_trace_shape() {
    let opts = KernelOptions::new(1e-6);
    let trace = find_root_trace(|x: f64| x * x - 4.0, |x| 2.0 * x, 0.5, &opts).unwrap();
    assert_eq!(trace[0], 0.5);
    assert_eq!(trace[1], 4.25);
    let n = trace.len();
    assert!(n > 2);
    assert!((trace[n - 1] - trace[n - 2]).abs() < 1e-6);
    assert_abs_diff_eq!(trace[n - 1], 2.0, epsilon = 1e-9);
}

/// `x² + 1` has no real root; the cap turns the endless iteration into an error.
#[test]
fn scalar_cap_reports_not_converged() {
    let opts = KernelOptions::new(1e-8).with_max_iters(50);
    let err = find_root(|x: f64| x * x + 1.0, |x| 2.0 * x, 0.5, &opts).unwrap_err();
    assert_eq!(err, KernelError::NotConverged(50));
}

/// Circle `x² + y² = 4` meets the line `x = y` at `(√2, √2)`.
#[test]
fn system_circle_and_line() {
    let system = SystemOfEquations::new(vec![
        vec![term(|x: &[f64]| x[0] * x[0]), term(|x: &[f64]| x[1] * x[1]), term(|_: &[f64]| -4.0)],
        vec![term(|x: &[f64]| x[0]), term(|x: &[f64]| -x[1])],
    ])
    .unwrap();
    let jacobian = SystemOfEquations::new(vec![
        vec![term(|x: &[f64]| 2.0 * x[0]), term(|x: &[f64]| 2.0 * x[1])],
        vec![term(|_: &[f64]| 1.0), term(|_: &[f64]| -1.0)],
    ])
    .unwrap();
    let opts = KernelOptions::new(1e-10).with_stop_rule(StopRule::AllCoordinates);
    let mut steps = 0;
    let root = find_root_system_with(&system, &jacobian, &Vector::new(vec![1.0, 2.0]), &opts, &mut |s| {
        steps += 1;
        assert_eq!(s.jacobian.nrows(), 2);
    })
    .unwrap();
    assert!(steps > 1);
    assert_abs_diff_eq!(root[0], 2.0f64.sqrt(), epsilon = 1e-9);
    assert_abs_diff_eq!(root[1], 2.0f64.sqrt(), epsilon = 1e-9);
    assert!(system.evaluate(&root).norm_inf() < 1e-9);

    let loose = find_root_system(&system, &jacobian, &Vector::new(vec![1.0, 2.0]), &KernelOptions::default()).unwrap();
    assert_abs_diff_eq!(loose[0], 2.0f64.sqrt(), epsilon = 1e-3);
}
