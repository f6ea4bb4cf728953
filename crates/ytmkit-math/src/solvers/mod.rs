//! Root-finding algorithms.
//!
//! - [`newton_raphson`]: Quadratic convergence when a derivative is available
//! - [`newton_raphson_numerical`]: Newton-Raphson with a central-difference derivative
//! - [`secant`]: Derivative-free iteration from two starting points
//!
//! All solvers stop on the residual: a root is accepted only once
//! `|f(x)| < tolerance`. Running out of iterations, a vanishing
//! denominator, or a non-finite function value is an error.
//!
//! # Example: YTM Calculation
//!
//! ```rust
//! use ytmkit_math::solvers::{secant, SolverConfig};
//!
//! // Bond: 5% annual coupon, 5 years, price 95
//! let price_fn = |y: f64| {
//!     let mut pv = 0.0;
//!     for t in 1..=5 {
//!         pv += 5.0 / (1.0 + y).powi(t);
//!     }
//!     pv += 100.0 / (1.0 + y).powi(5);
//!     pv - 95.0
//! };
//!
//! let result = secant(price_fn, 0.05, 0.051, &SolverConfig::default()).unwrap();
//! assert!(result.root > 0.05); // YTM > coupon rate for discount bond
//! ```

mod newton;
mod secant;

pub use newton::{newton_raphson, newton_raphson_numerical};
pub use secant::secant;

use crate::error::{MathError, MathResult};

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Smallest denominator magnitude accepted by the iteration updates.
pub(crate) const MIN_DENOMINATOR: f64 = 1e-15;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Absolute tolerance on the residual `|f(x)|`.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Checks that the tolerance is positive and finite and that at least
    /// one iteration is allowed.
    pub fn validate(&self) -> MathResult<()> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(MathError::invalid_input(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(MathError::invalid_input("max_iterations must be at least 1"));
        }
        Ok(())
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_solver_config() {
        let config = SolverConfig::default()
            .with_tolerance(1e-8)
            .with_max_iterations(50);

        assert!((config.tolerance - 1e-8).abs() < f64::EPSILON);
        assert_eq!(config.max_iterations, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_solver_config_validation() {
        assert!(SolverConfig::new(0.0, 10).validate().is_err());
        assert!(SolverConfig::new(f64::NAN, 10).validate().is_err());
        assert!(SolverConfig::new(1e-8, 0).validate().is_err());
    }

    // ============ YTM-like Financial Tests ============

    /// Annual-pay bond price at a flat yield.
    fn bond_price(yield_rate: f64, coupon: f64, face: f64, years: i32) -> f64 {
        let mut pv = 0.0;
        for t in 1..=years {
            pv += coupon / (1.0 + yield_rate).powi(t);
        }
        pv + face / (1.0 + yield_rate).powi(years)
    }

    fn bond_price_derivative(yield_rate: f64, coupon: f64, face: f64, years: i32) -> f64 {
        let mut dpv = 0.0;
        for t in 1..=years {
            dpv -= f64::from(t) * coupon / (1.0 + yield_rate).powi(t + 1);
        }
        dpv - f64::from(years) * face / (1.0 + yield_rate).powi(years + 1)
    }

    #[test]
    fn test_ytm_par_bond() {
        // A bond trading at par has YTM = coupon rate
        let f = |y: f64| bond_price(y, 50.0, 1000.0, 10) - 1000.0;
        let df = |y: f64| bond_price_derivative(y, 50.0, 1000.0, 10);

        let result = newton_raphson(f, df, 0.03, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 0.05, epsilon = 1e-10);
    }

    #[test]
    fn test_ytm_all_solvers_agree() {
        let f = |y: f64| bond_price(y, 60.0, 1000.0, 7) - 980.0;
        let df = |y: f64| bond_price_derivative(y, 60.0, 1000.0, 7);
        let config = SolverConfig::new(1e-8, 100);

        let analytic = newton_raphson(f, df, 0.05, &config).unwrap();
        let numerical = newton_raphson_numerical(f, 0.05, &config).unwrap();
        let sec = secant(f, 0.05, 0.05001, &config).unwrap();

        assert_relative_eq!(analytic.root, numerical.root, epsilon = 1e-9);
        assert_relative_eq!(analytic.root, sec.root, epsilon = 1e-9);
        assert!(analytic.root > 0.06);
    }

    #[test]
    fn test_zero_coupon_bond() {
        // 100 / 1.10^5 = 62.0921...
        let f = |y: f64| 100.0 / (1.0 + y).powi(5) - 62.0921;

        let result = newton_raphson_numerical(f, 0.08, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 0.10, epsilon = 0.001);
    }
}
