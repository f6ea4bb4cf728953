//! Error types for bond operations.

use thiserror::Error;

use ytmkit_core::CoreError;
use ytmkit_math::MathError;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur during bond operations.
///
/// Each failure surfaces as its own variant; callers match on the variant
/// to decide whether to retry with different solver settings.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BondError {
    /// Malformed bond parameters: non-positive face value, negative coupon,
    /// or maturity not after issue.
    #[error("Invalid schedule: {reason}")]
    InvalidSchedule {
        /// Description of what's invalid.
        reason: String,
    },

    /// Malformed valuation inputs: non-positive price, empty or unordered
    /// cash flows, or unusable solver settings.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of what's invalid.
        reason: String,
    },

    /// Present value evaluated outside its domain (`rate <= -1`).
    #[error("Rate {rate} is outside the discounting domain (rate must exceed -1)")]
    Domain {
        /// The offending rate.
        rate: f64,
    },

    /// Yield iteration did not converge or left the valid domain.
    #[error("Yield calculation failed to converge after {iterations} iterations: {reason}")]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// What stopped the iteration.
        reason: String,
    },

    /// Missing required field.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The missing field name.
        field: String,
    },

    /// Core library error.
    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}

impl BondError {
    /// Creates an invalid schedule error.
    #[must_use]
    pub fn invalid_schedule(reason: impl Into<String>) -> Self {
        Self::InvalidSchedule {
            reason: reason.into(),
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Maps a root-finder failure onto the bond error taxonomy.
    ///
    /// Configuration problems are input errors; everything else means the
    /// iteration did not produce a root.
    #[must_use]
    pub fn from_solver(err: MathError) -> Self {
        match err {
            MathError::InvalidInput { reason } => Self::InvalidInput { reason },
            MathError::ConvergenceFailed {
                iterations,
                residual,
            } => Self::ConvergenceFailed {
                iterations,
                reason: format!("residual {residual:.3e} above tolerance"),
            },
            MathError::NonFinite { x, iterations } => Self::ConvergenceFailed {
                iterations,
                reason: format!("iterate {x} left the domain rate > -1"),
            },
            MathError::DivisionByZero { value, iterations } => Self::ConvergenceFailed {
                iterations,
                reason: format!("slope estimate vanished ({value:.2e})"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BondError::invalid_schedule("face value must be positive");
        assert_eq!(err.to_string(), "Invalid schedule: face value must be positive");

        let err = BondError::Domain { rate: -1.0 };
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn test_solver_error_mapping() {
        let err = BondError::from_solver(MathError::convergence_failed(100, 1e-3));
        assert!(matches!(
            err,
            BondError::ConvergenceFailed { iterations: 100, .. }
        ));

        let err = BondError::from_solver(MathError::non_finite(-3.0, 2));
        assert!(matches!(err, BondError::ConvergenceFailed { iterations: 2, .. }));

        let err = BondError::from_solver(MathError::invalid_input("tolerance"));
        assert!(matches!(err, BondError::InvalidInput { .. }));
    }

    #[test]
    fn test_flat_slope_keeps_iteration_count() {
        let err = BondError::from_solver(MathError::division_by_zero(0.0, 1));

        match err {
            BondError::ConvergenceFailed { iterations, reason } => {
                assert_eq!(iterations, 1);
                assert!(reason.contains("slope estimate vanished"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_core_error_conversion() {
        let err: BondError = CoreError::invalid_date("2025-13-01").into();
        assert!(matches!(err, BondError::Core(_)));
    }
}
