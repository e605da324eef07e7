//! Solves `H·x = b` for Hilbert matrices of growing size and reports how the
//! residual and the infinity norm behave as the matrix degrades.

use lakern::error::KernelError;
use lakern::matrix::hilbert;
use lakern::solver::solve_gaussian;
use lakern::utils::residual_norm_inf;

fn main() -> Result<(), KernelError> {
    env_logger::init();

    println!("{:>3} {:>12} {:>14} {:>14}", "n", "‖H‖∞", "‖b - Hx‖∞", "x[0]");
    for n in 2..=12 {
        let (h, b) = hilbert::<f64>(n)?;
        let x = solve_gaussian(&h, &b)?;
        let res = residual_norm_inf(&h, x.as_slice(), b.as_slice())?;
        println!("{n:>3} {:>12.6} {res:>14.3e} {:>14.6e}", h.norm_inf(), x[0]);
    }
    Ok(())
}
