//! Error types for mathematical operations.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during root finding.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Root-finding algorithm failed to converge.
    #[error("Convergence failed after {iterations} iterations (residual: {residual:.2e})")]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// Final residual value.
        residual: f64,
    },

    /// Division by zero or near-zero value.
    #[error("Division by zero or near-zero value: {value:.2e} after {iterations} iterations")]
    DivisionByZero {
        /// The near-zero value.
        value: f64,
        /// Iterations completed before the failure.
        iterations: u32,
    },

    /// The function or its derivative produced NaN or infinity.
    #[error("Non-finite value at x = {x} after {iterations} iterations")]
    NonFinite {
        /// The point where evaluation failed.
        x: f64,
        /// Iterations completed before the failure.
        iterations: u32,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates a convergence failed error.
    #[must_use]
    pub fn convergence_failed(iterations: u32, residual: f64) -> Self {
        Self::ConvergenceFailed {
            iterations,
            residual,
        }
    }

    /// Creates a division by zero error.
    #[must_use]
    pub fn division_by_zero(value: f64, iterations: u32) -> Self {
        Self::DivisionByZero { value, iterations }
    }

    /// Creates a non-finite evaluation error.
    #[must_use]
    pub fn non_finite(x: f64, iterations: u32) -> Self {
        Self::NonFinite { x, iterations }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
