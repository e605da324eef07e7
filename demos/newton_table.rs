//! Prints the Newton iteration table for `f(x) = x² - 4` and the root of a
//! small nonlinear system.
//!
//! Run with `RUST_LOG=debug cargo run --example newton_table` to see the
//! convergence messages as well.

use lakern::config::KernelOptions;
use lakern::error::KernelError;
use lakern::matrix::{SystemOfEquations, Vector, term};
use lakern::nonlinear::{find_root_system, find_root_with};

fn main() -> Result<(), KernelError> {
    env_logger::init();

    let opts = KernelOptions::new(1e-8);
    println!("{:>3} {:>14} {:>14} {:>14} {:>14}", "k", "x", "f(x)", "f'(x)", "h");
    let trace = find_root_with(|x: f64| x * x - 4.0, |x| 2.0 * x, 0.5, &opts, &mut |s| {
        println!("{:>3} {:>14.8} {:>14.8} {:>14.8} {:>14.8}", s.iteration, s.x, s.fx, s.dfx, s.step);
    })?;
    if let Some(root) = trace.last() {
        println!("root: {root}");
    }

    let system = SystemOfEquations::new(vec![
        vec![term(|x: &[f64]| x[0]), term(|x: &[f64]| 2.0 * x[1]), term(|_: &[f64]| -2.0)],
        vec![term(|x: &[f64]| x[0] * x[0]), term(|x: &[f64]| 4.0 * x[1] * x[1]), term(|_: &[f64]| -4.0)],
    ])?;
    let jacobian = SystemOfEquations::new(vec![
        vec![term(|_: &[f64]| 1.0), term(|_: &[f64]| 2.0)],
        vec![term(|x: &[f64]| 2.0 * x[0]), term(|x: &[f64]| 8.0 * x[1])],
    ])?;
    let root = find_root_system(&system, &jacobian, &Vector::new(vec![1.0, 2.0]), &opts)?;
    println!("system root: {:?}", root.as_slice());
    Ok(())
}
