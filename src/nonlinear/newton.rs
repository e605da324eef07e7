//! Newton-Raphson root finding.
//!
//! The scalar form iterates `x ← x - f(x)/f'(x)`. The multivariate form
//! solves `J(x)·s = -F(x)` with Gaussian elimination at every step, so each
//! iteration costs one dense elimination.
//!
//! The multivariate stopping rule defaults to "any coordinate of the step is
//! below the tolerance", which can stop while other coordinates are still
//! moving; `StopRule::AllCoordinates` waits for every coordinate.

use crate::config::{KernelOptions, StopRule};
use crate::core::traits::Scalar;
use crate::error::KernelError;
use crate::matrix::{SystemOfEquations, Vector};
use crate::solver::gauss::solve_gaussian;
use crate::utils::convergence::ensure_finite;
use crate::utils::monitor::{NewtonStep, NewtonSystemStep};

/// Root of `f` starting from `x0`.
///
/// `KernelOptions::default()` stops at `1e-4`, the eigenvalue tolerance;
/// pass `KernelOptions::newton()` for the customary `1e-5` or set `tol` explicitly.
pub fn find_root<T, F, D>(f: F, df: D, x0: T, opts: &KernelOptions<T>) -> Result<T, KernelError>
where
    T: Scalar,
    F: Fn(T) -> T,
    D: Fn(T) -> T,
{
    let trace = find_root_trace(f, df, x0, opts)?;
    Ok(trace.last().copied().unwrap_or(x0))
}

/// Every iterate `x_0, x_1, …`, ending with the accepted root.
pub fn find_root_trace<T, F, D>(f: F, df: D, x0: T, opts: &KernelOptions<T>) -> Result<Vec<T>, KernelError>
where
    T: Scalar,
    F: Fn(T) -> T,
    D: Fn(T) -> T,
{
    find_root_with(f, df, x0, opts, &mut |_| {})
}

/// As [`find_root_trace`], calling `monitor` after every step.
pub fn find_root_with<T, F, D>(
    f: F,
    df: D,
    x0: T,
    opts: &KernelOptions<T>,
    monitor: &mut dyn FnMut(&NewtonStep<T>),
) -> Result<Vec<T>, KernelError>
where
    T: Scalar,
    F: Fn(T) -> T,
    D: Fn(T) -> T,
{
    let conv = opts.convergence();
    let mut trace = vec![x0];
    let mut x = x0;
    let mut iteration = 0;
    loop {
        iteration += 1;
        conv.guard(iteration)?;
        let fx = f(x);
        let dfx = df(x);
        let step = -(fx / dfx);
        let next = x + step;
        ensure_finite(&[next], "Newton iterate")?;
        monitor(&NewtonStep { iteration, x, fx, dfx, step });
        trace.push(next);
        if conv.within(next - x) {
            log::debug!("Newton converged in {iteration} iterations");
            return Ok(trace);
        }
        x = next;
    }
}

/// Root of the system `F(x) = 0` given its Jacobian system `J`.
///
/// `system` and `jacobian` must have one equation per unknown, and every
/// Jacobian equation must hold one partial derivative per unknown.
pub fn find_root_system<T: Scalar>(
    system: &SystemOfEquations<T>,
    jacobian: &SystemOfEquations<T>,
    x0: &Vector<T>,
    opts: &KernelOptions<T>,
) -> Result<Vector<T>, KernelError> {
    find_root_system_with(system, jacobian, x0, opts, &mut |_| {})
}

/// As [`find_root_system`], calling `monitor` after every step.
pub fn find_root_system_with<T: Scalar>(
    system: &SystemOfEquations<T>,
    jacobian: &SystemOfEquations<T>,
    x0: &Vector<T>,
    opts: &KernelOptions<T>,
    monitor: &mut dyn FnMut(&NewtonSystemStep<'_, T>),
) -> Result<Vector<T>, KernelError> {
    if system.len() != x0.len() {
        return Err(KernelError::mismatch("Newton system", x0.len(), system.len()));
    }
    if jacobian.len() != x0.len() {
        return Err(KernelError::mismatch("Newton Jacobian", x0.len(), jacobian.len()));
    }
    let conv = opts.convergence();
    let mut x = x0.clone();
    let mut iteration = 0;
    loop {
        iteration += 1;
        conv.guard(iteration)?;
        let fx = system.evaluate(&x);
        let jac = jacobian.evaluate_terms(&x)?;
        let step = solve_gaussian(&jac, &fx.negate())?;
        let next = x.add(&step)?;
        ensure_finite(next.as_slice(), "Newton iterate")?;
        monitor(&NewtonSystemStep { iteration, x: &x, fx: &fx, jacobian: &jac, step: &step });

        let delta = next.subtract(&x)?;
        let done = match opts.stop_rule {
            StopRule::AnyCoordinate => delta.iter().any(|&d| conv.within(d)),
            StopRule::AllCoordinates => delta.iter().all(|&d| conv.within(d)),
        };
        x = next;
        if done {
            log::debug!("Newton system converged in {iteration} iterations");
            return Ok(x);
        }
    }
}
