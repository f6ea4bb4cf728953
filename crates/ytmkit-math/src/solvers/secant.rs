//! Secant root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult, MIN_DENOMINATOR};

/// Secant root-finding algorithm.
///
/// Similar to Newton-Raphson but approximates the derivative from the
/// previous two iterates. Does not require an analytical derivative or a
/// bracketing interval.
///
/// Convergence rate is superlinear (order ~1.618, the golden ratio).
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `x0` - First initial guess
/// * `x1` - Second initial guess (should be different from x0)
/// * `config` - Solver configuration
///
/// # Errors
///
/// - [`MathError::NonFinite`] if `f` returns NaN or infinity
/// - [`MathError::DivisionByZero`] if the secant line is flat
/// - [`MathError::ConvergenceFailed`] if `|f(x)|` never drops below the tolerance
///
/// # Example
///
/// ```rust
/// use ytmkit_math::solvers::{secant, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
///
/// let result = secant(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn secant<F>(f: F, x0: f64, x1: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    config.validate()?;

    let mut x_prev = x0;
    let mut f_prev = f(x_prev);
    if !f_prev.is_finite() {
        return Err(MathError::non_finite(x_prev, 0));
    }
    if f_prev.abs() < config.tolerance {
        return Ok(SolverResult {
            root: x_prev,
            iterations: 0,
            residual: f_prev,
        });
    }

    let mut x_curr = x1;
    let mut f_curr = f(x_curr);

    for iteration in 0..config.max_iterations {
        if !f_curr.is_finite() {
            return Err(MathError::non_finite(x_curr, iteration));
        }

        if f_curr.abs() < config.tolerance {
            return Ok(SolverResult {
                root: x_curr,
                iterations: iteration,
                residual: f_curr,
            });
        }

        let denom = f_curr - f_prev;
        if denom.abs() < MIN_DENOMINATOR {
            return Err(MathError::division_by_zero(denom, iteration));
        }

        let x_next = x_curr - f_curr * (x_curr - x_prev) / denom;
        log::trace!("secant iteration {}: x = {:.12}, f = {:.3e}", iteration + 1, x_next, f_curr);

        x_prev = x_curr;
        f_prev = f_curr;
        x_curr = x_next;
        f_curr = f(x_curr);
    }

    if f_curr.is_finite() && f_curr.abs() < config.tolerance {
        return Ok(SolverResult {
            root: x_curr,
            iterations: config.max_iterations,
            residual: f_curr,
        });
    }
    if !f_curr.is_finite() {
        return Err(MathError::non_finite(x_curr, config.max_iterations));
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        f_curr.abs(),
    ))
}
