//! Newton-Raphson root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult, MIN_DENOMINATOR};

/// Step size for the central-difference derivative.
const DERIVATIVE_STEP: f64 = 1e-8;

/// Newton-Raphson root-finding algorithm.
///
/// Uses the iteration:
/// `x_{n+1} = x_n - f(x_n) / f'(x_n)`
///
/// This method has quadratic convergence near the root but requires
/// the derivative of the function.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `df` - The derivative of the function
/// * `initial_guess` - Starting point for the iteration
/// * `config` - Solver configuration
///
/// # Errors
///
/// - [`MathError::NonFinite`] if `f` or `df` returns NaN or infinity
/// - [`MathError::DivisionByZero`] if the derivative vanishes
/// - [`MathError::ConvergenceFailed`] if `|f(x)|` never drops below the tolerance
///
/// # Example
///
/// ```rust
/// use ytmkit_math::solvers::{newton_raphson, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let result = newton_raphson(f, df, 1.5, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn newton_raphson<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    config.validate()?;
    let mut x = initial_guess;

    for iteration in 0..config.max_iterations {
        let fx = f(x);
        if !fx.is_finite() {
            return Err(MathError::non_finite(x, iteration));
        }

        if fx.abs() < config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
            });
        }

        let dfx = df(x);
        if !dfx.is_finite() {
            return Err(MathError::non_finite(x, iteration));
        }
        if dfx.abs() < MIN_DENOMINATOR {
            return Err(MathError::division_by_zero(dfx, iteration));
        }

        x -= fx / dfx;
        log::trace!("newton iteration {}: x = {:.12}, f = {:.3e}", iteration + 1, x, fx);
    }

    // The last step has not been checked yet.
    let fx = f(x);
    if !fx.is_finite() {
        return Err(MathError::non_finite(x, config.max_iterations));
    }
    if fx.abs() < config.tolerance {
        return Ok(SolverResult {
            root: x,
            iterations: config.max_iterations,
            residual: fx,
        });
    }

    Err(MathError::convergence_failed(config.max_iterations, fx.abs()))
}

/// Newton-Raphson with numerical derivative estimation.
///
/// Uses a central finite difference to estimate the derivative when
/// an analytical derivative is not available.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `initial_guess` - Starting point for the iteration
/// * `config` - Solver configuration
pub fn newton_raphson_numerical<F>(
    f: F,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let df = |x: f64| {
        let f1 = f(x + DERIVATIVE_STEP);
        let f2 = f(x - DERIVATIVE_STEP);
        (f1 - f2) / (2.0 * DERIVATIVE_STEP)
    };

    newton_raphson(&f, df, initial_guess, config)
}
