//! Yield-to-maturity solver.
//!
//! Finds the flat annual rate `y` at which the ACT/365F present value of a
//! cash flow sequence equals a price, by driving
//! `f(y) = PV(y) - price` to zero from an initial guess.
//!
//! # Example
//!
//! ```rust
//! use ytmkit_bonds::cashflows::CashFlowGenerator;
//! use ytmkit_bonds::pricing::{SolverMethod, YieldSolver};
//! use ytmkit_core::types::Date;
//! use rust_decimal_macros::dec;
//!
//! let schedule = CashFlowGenerator::generate(
//!     dec!(1000),
//!     Date::from_ymd(2023, 1, 1).unwrap(),
//!     Date::from_ymd(2027, 1, 1).unwrap(),
//!     dec!(0.05),
//! )
//! .unwrap();
//!
//! let solver = YieldSolver::new().with_method(SolverMethod::Newton);
//! let result = solver.solve(dec!(950), schedule.as_slice()).unwrap();
//! assert!(result.yield_value > 0.05);
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ytmkit_core::types::{validate_cash_flows, CashFlow, Date};
use ytmkit_math::solvers::{newton_raphson_numerical, secant, SolverConfig};

use super::discount::DiscountedFlows;
use crate::error::{BondError, BondResult};

/// Default starting yield (5%).
pub const DEFAULT_INITIAL_GUESS: f64 = 0.05;

/// Default absolute tolerance on `|PV(y) - price|`.
///
/// For large notionals the solver raises it to the f64 rounding noise of
/// the present value; see [`residual_tolerance`].
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// Rounding noise allowance, in units of `f64::EPSILON` times the notional.
const RESIDUAL_ULPS: f64 = 64.0;

/// Default iteration budget.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Relative offset of the secant's second starting point.
const SECANT_OFFSET: f64 = 1e-4;

/// Root-finding iteration used by [`YieldSolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolverMethod {
    /// Secant iteration from the initial guess and a point just beside it.
    #[default]
    Secant,
    /// Newton-Raphson with a central-difference derivative.
    Newton,
}

impl std::fmt::Display for SolverMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverMethod::Secant => write!(f, "secant"),
            SolverMethod::Newton => write!(f, "newton"),
        }
    }
}

/// Settings for [`YieldSolver`].
///
/// Deserializes with defaults for any missing field, so a configuration
/// file only needs the values it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct YieldSolverConfig {
    /// Starting yield for the iteration.
    pub initial_guess: f64,
    /// Absolute tolerance on the price residual.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
    /// Iteration scheme.
    pub method: SolverMethod,
}

impl Default for YieldSolverConfig {
    fn default() -> Self {
        Self {
            initial_guess: DEFAULT_INITIAL_GUESS,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            method: SolverMethod::Secant,
        }
    }
}

impl YieldSolverConfig {
    /// Checks that the settings can drive an iteration.
    ///
    /// # Errors
    ///
    /// Returns `BondError::InvalidInput` for an initial guess at or below
    /// `-1`, a non-positive tolerance, or a zero iteration budget.
    pub fn validate(&self) -> BondResult<()> {
        if !(self.initial_guess.is_finite() && self.initial_guess > -1.0) {
            return Err(BondError::invalid_input(format!(
                "initial guess must exceed -1, got {}",
                self.initial_guess
            )));
        }
        self.solver_config()
            .validate()
            .map_err(BondError::from_solver)
    }

    fn solver_config(&self) -> SolverConfig {
        SolverConfig::new(self.tolerance, self.max_iterations)
    }
}

/// Result of a yield calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YieldResult {
    /// The calculated yield (as a decimal, e.g., 0.05 for 5%).
    pub yield_value: f64,
    /// Number of iterations to converge.
    pub iterations: u32,
    /// Final residual `PV(yield) - price`.
    pub residual: f64,
}

/// Yield-to-maturity solver.
#[derive(Debug, Clone, Default)]
pub struct YieldSolver {
    config: YieldSolverConfig,
}

impl YieldSolver {
    /// Creates a solver with the default settings: secant iteration from
    /// 5%, tolerance `1e-8`, at most 100 iterations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solver from explicit settings.
    #[must_use]
    pub fn from_config(config: YieldSolverConfig) -> Self {
        Self { config }
    }

    /// Sets the starting yield.
    #[must_use]
    pub fn with_initial_guess(mut self, initial_guess: f64) -> Self {
        self.config.initial_guess = initial_guess;
        self
    }

    /// Sets the residual tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config.max_iterations = max_iterations;
        self
    }

    /// Sets the iteration scheme.
    #[must_use]
    pub fn with_method(mut self, method: SolverMethod) -> Self {
        self.config.method = method;
        self
    }

    /// Returns the solver settings.
    #[must_use]
    pub fn config(&self) -> &YieldSolverConfig {
        &self.config
    }

    /// Solves for the yield that prices `cash_flows` at `price`, discounting
    /// to the date of the first cash flow.
    ///
    /// # Errors
    ///
    /// - `BondError::InvalidInput` for a non-positive price, an empty or
    ///   malformed cash flow sequence, or unusable solver settings
    /// - `BondError::ConvergenceFailed` if the iteration exhausts its budget
    ///   or steps to a rate at or below `-1`
    pub fn solve(&self, price: Decimal, cash_flows: &[CashFlow]) -> BondResult<YieldResult> {
        let anchor = cash_flows
            .first()
            .ok_or_else(|| BondError::invalid_input("cash flow sequence is empty"))?
            .date();
        self.solve_at(price, cash_flows, anchor)
    }

    /// Solves for the yield with an explicit valuation date.
    ///
    /// # Errors
    ///
    /// Same as [`solve`](Self::solve).
    pub fn solve_at(
        &self,
        price: Decimal,
        cash_flows: &[CashFlow],
        valuation_date: Date,
    ) -> BondResult<YieldResult> {
        if price <= Decimal::ZERO {
            return Err(BondError::invalid_input(format!(
                "price must be positive, got {price}"
            )));
        }
        if cash_flows.is_empty() {
            return Err(BondError::invalid_input("cash flow sequence is empty"));
        }
        validate_cash_flows(cash_flows).map_err(|e| BondError::invalid_input(e.to_string()))?;
        self.config.validate()?;

        let target = price
            .to_f64()
            .ok_or_else(|| BondError::invalid_input(format!("price {price} is not representable")))?;
        let flows = DiscountedFlows::new(cash_flows, valuation_date)?;
        if flows.total() <= 0.0 {
            return Err(BondError::invalid_input("cash flows carry no positive amount"));
        }

        let objective = |y: f64| {
            if y <= -1.0 {
                f64::NAN
            } else {
                flows.present_value(y) - target
            }
        };

        let x0 = self.config.initial_guess;
        let tolerance = residual_tolerance(self.config.tolerance, flows.total().max(target));
        let solver_config = SolverConfig::new(tolerance, self.config.max_iterations);
        log::debug!(
            "solving yield: price={}, flows={}, method={}, guess={}, tolerance={:.2e}",
            price,
            cash_flows.len(),
            self.config.method,
            x0,
            tolerance
        );

        let outcome = match self.config.method {
            SolverMethod::Secant => secant(objective, x0, secant_second_point(x0), &solver_config),
            SolverMethod::Newton => newton_raphson_numerical(objective, x0, &solver_config),
        };

        let result = outcome.map_err(|e| {
            let err = BondError::from_solver(e);
            log::warn!("yield solve failed for price {}: {}", price, err);
            err
        })?;

        log::debug!(
            "yield converged to {:.10} in {} iterations (residual {:.2e})",
            result.root,
            result.iterations,
            result.residual
        );

        Ok(YieldResult {
            yield_value: result.root,
            iterations: result.iterations,
            residual: result.residual,
        })
    }
}

/// Residual tolerance for a valuation of magnitude `scale`.
///
/// The present value of a large notional cannot be computed more finely
/// than a few ulps of `scale`, so the requested tolerance is floored there.
/// At ordinary notionals the floor sits far below the requested value.
fn residual_tolerance(requested: f64, scale: f64) -> f64 {
    requested.max(scale * f64::EPSILON * RESIDUAL_ULPS)
}

/// Second secant point: a small relative step away from the first, plus
/// an absolute step so a zero guess still moves.
fn secant_second_point(x0: f64) -> f64 {
    let shift = if x0 >= 0.0 { SECANT_OFFSET } else { -SECANT_OFFSET };
    x0 * (1.0 + SECANT_OFFSET) + shift
}

/// Solves for yield-to-maturity with the default solver settings.
///
/// Returns the yield as a decimal fraction (`0.0523` for 5.23%).
///
/// # Errors
///
/// See [`YieldSolver::solve`].
pub fn solve_ytm(price: Decimal, cash_flows: &[CashFlow]) -> BondResult<f64> {
    YieldSolver::new()
        .solve(price, cash_flows)
        .map(|result| result.yield_value)
}

/// Calculates current yield.
///
/// Current yield = Annual Coupon / Price
///
/// This is a simple measure that ignores time value of money
/// and capital gains/losses.
///
/// # Errors
///
/// Returns `BondError::InvalidInput` for a non-positive price or when the
/// ratio overflows `Decimal`.
pub fn current_yield(coupon_rate: Decimal, face_value: Decimal, price: Decimal) -> BondResult<f64> {
    if price <= Decimal::ZERO {
        return Err(BondError::invalid_input(format!(
            "price must be positive, got {price}"
        )));
    }
    coupon_rate
        .checked_mul(face_value)
        .and_then(|coupon| coupon.checked_div(price))
        .and_then(|ratio| ratio.to_f64())
        .ok_or_else(|| BondError::invalid_input("current yield is not representable"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::present_value;
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;
    use ytmkit_core::types::CashFlowSchedule;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    /// 50 annual coupons from 2023 to 2027 with 1000 principal at the end.
    fn scenario_flows() -> CashFlowSchedule {
        let mut flows: CashFlowSchedule = (2023..2027)
            .map(|y| CashFlow::coupon(date(y, 1, 1), dec!(50)))
            .collect();
        flows.push(CashFlow::final_payment(date(2027, 1, 1), dec!(50), dec!(1000)));
        flows
    }

    #[test]
    fn test_scenario_discount_bond() {
        // Independent bisection reference
        let reference = 0.080_147_527_699_761_97;

        let ytm = solve_ytm(dec!(950), scenario_flows().as_slice()).unwrap();

        assert_relative_eq!(ytm, reference, epsilon = 1e-6);
        assert!(ytm > 0.05);
    }

    #[test]
    fn test_methods_agree() {
        let flows = scenario_flows();
        let secant_result = YieldSolver::new().solve(dec!(950), flows.as_slice()).unwrap();
        let newton_result = YieldSolver::new()
            .with_method(SolverMethod::Newton)
            .solve(dec!(950), flows.as_slice())
            .unwrap();

        assert_relative_eq!(
            secant_result.yield_value,
            newton_result.yield_value,
            epsilon = 1e-9
        );
        assert!(secant_result.residual.abs() < DEFAULT_TOLERANCE);
        assert!(newton_result.residual.abs() < DEFAULT_TOLERANCE);
    }

    /// Ten annual 5% coupons from 2020, principal `face` at the end.
    fn ten_year_flows(face: Decimal) -> CashFlowSchedule {
        let coupon = face * dec!(0.05);
        let mut flows: CashFlowSchedule = (2020..2030)
            .map(|y| CashFlow::coupon(date(y, 1, 1), coupon))
            .collect();
        flows.push(CashFlow::final_payment(date(2030, 1, 1), coupon, face));
        flows
    }

    #[test]
    fn test_large_notionals_converge() {
        let reference = solve_ytm(dec!(950), ten_year_flows(dec!(1000)).as_slice()).unwrap();

        for face in [dec!(100000000), dec!(10000000000)] {
            let flows = ten_year_flows(face);
            let price = face * dec!(0.95);
            let notional = face.to_f64().unwrap();

            for method in [SolverMethod::Secant, SolverMethod::Newton] {
                let result = YieldSolver::new()
                    .with_method(method)
                    .solve(price, flows.as_slice())
                    .unwrap();

                assert_relative_eq!(result.yield_value, reference, epsilon = 1e-9);
                assert!(result.residual.abs() / notional < 1e-12);
            }
        }
    }

    #[test]
    fn test_tolerance_floor_only_binds_at_scale() {
        assert_eq!(residual_tolerance(DEFAULT_TOLERANCE, 1500.0), DEFAULT_TOLERANCE);
        assert!(residual_tolerance(DEFAULT_TOLERANCE, 1.5e10) > DEFAULT_TOLERANCE);
        assert!(residual_tolerance(DEFAULT_TOLERANCE, 1.5e10) < 1e-3);
    }

    #[test]
    fn test_price_equal_to_undiscounted_sum() {
        let flows = [
            CashFlow::coupon(date(2023, 1, 1), dec!(0)),
            CashFlow::coupon(date(2024, 1, 1), dec!(100)),
            CashFlow::coupon(date(2025, 1, 1), dec!(100)),
            CashFlow::principal(date(2026, 1, 1), dec!(800)),
        ];

        let ytm = solve_ytm(dec!(1000), &flows).unwrap();

        assert!(ytm.abs() < 1e-6);
    }

    #[test]
    fn test_round_trip() {
        let flows = scenario_flows();
        let price = present_value(0.0625, flows.as_slice()).unwrap();
        let price = Decimal::from_f64_retain(price).unwrap();

        let ytm = solve_ytm(price, flows.as_slice()).unwrap();

        assert_relative_eq!(ytm, 0.0625, epsilon = 1e-6);
    }

    #[test]
    fn test_negative_yield() {
        let flows = scenario_flows();
        let price = present_value(-0.02, flows.as_slice()).unwrap();
        let price = Decimal::from_f64_retain(price).unwrap();

        let ytm = solve_ytm(price, flows.as_slice()).unwrap();

        assert_relative_eq!(ytm, -0.02, epsilon = 1e-6);
    }

    #[test]
    fn test_explicit_valuation_date() {
        let flows = [CashFlow::principal(date(2026, 1, 1), dec!(110))];

        let result = YieldSolver::new()
            .solve_at(dec!(100), &flows, date(2025, 1, 1))
            .unwrap();

        assert_relative_eq!(result.yield_value, 0.10, epsilon = 1e-9);
    }

    #[test]
    fn test_non_positive_price() {
        let flows = scenario_flows();

        for price in [dec!(-10), dec!(0)] {
            let result = solve_ytm(price, flows.as_slice());
            assert!(matches!(result, Err(BondError::InvalidInput { .. })));
        }
    }

    #[test]
    fn test_empty_cash_flows() {
        let result = solve_ytm(dec!(950), &[]);
        assert!(matches!(result, Err(BondError::InvalidInput { .. })));
    }

    #[test]
    fn test_unordered_cash_flows() {
        let flows = [
            CashFlow::coupon(date(2025, 1, 1), dec!(50)),
            CashFlow::coupon(date(2024, 1, 1), dec!(1050)),
        ];

        let result = solve_ytm(dec!(950), &flows);
        assert!(matches!(result, Err(BondError::InvalidInput { .. })));
    }

    #[test]
    fn test_all_zero_cash_flows() {
        let flows = [
            CashFlow::coupon(date(2025, 1, 1), dec!(0)),
            CashFlow::coupon(date(2026, 1, 1), dec!(0)),
        ];

        let result = solve_ytm(dec!(950), &flows);
        assert!(matches!(result, Err(BondError::InvalidInput { .. })));
    }

    #[test]
    fn test_iteration_budget_exhausted() {
        let result = YieldSolver::new()
            .with_max_iterations(1)
            .solve(dec!(950), scenario_flows().as_slice());

        assert!(matches!(
            result,
            Err(BondError::ConvergenceFailed { iterations: 1, .. })
        ));
    }

    #[test]
    fn test_divergence_below_minus_one() {
        // Root sits just above -1; the first step overshoots past it.
        let flows = [
            CashFlow::coupon(date(2025, 1, 1), dec!(0)),
            CashFlow::principal(date(2026, 1, 1), dec!(100)),
        ];

        for method in [SolverMethod::Secant, SolverMethod::Newton] {
            let result = YieldSolver::new()
                .with_method(method)
                .solve(dec!(1000000), &flows);
            assert!(matches!(result, Err(BondError::ConvergenceFailed { .. })));
        }
    }

    #[test]
    fn test_invalid_settings() {
        let flows = scenario_flows();

        let result = YieldSolver::new()
            .with_initial_guess(-1.0)
            .solve(dec!(950), flows.as_slice());
        assert!(matches!(result, Err(BondError::InvalidInput { .. })));

        let result = YieldSolver::new()
            .with_tolerance(0.0)
            .solve(dec!(950), flows.as_slice());
        assert!(matches!(result, Err(BondError::InvalidInput { .. })));

        let result = YieldSolver::new()
            .with_max_iterations(0)
            .solve(dec!(950), flows.as_slice());
        assert!(matches!(result, Err(BondError::InvalidInput { .. })));
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: YieldSolverConfig =
            serde_json::from_str(r#"{"tolerance": 1e-10, "method": "newton"}"#).unwrap();

        assert_eq!(config.method, SolverMethod::Newton);
        assert_eq!(config.max_iterations, DEFAULT_MAX_ITERATIONS);
        assert_relative_eq!(config.initial_guess, DEFAULT_INITIAL_GUESS);
        assert!(serde_json::from_str::<YieldSolverConfig>(r#"{"tol": 1.0}"#).is_err());
    }

    #[test]
    fn test_secant_second_point() {
        assert_relative_eq!(secant_second_point(0.05), 0.050105, epsilon = 1e-15);
        assert_relative_eq!(secant_second_point(0.0), 1e-4);
        assert!(secant_second_point(-0.2) < -0.2);
    }

    #[test]
    fn test_current_yield() {
        let cy = current_yield(dec!(0.05), dec!(1000), dec!(950)).unwrap();
        assert_relative_eq!(cy, 50.0 / 950.0, epsilon = 1e-12);

        assert!(current_yield(dec!(0.05), dec!(1000), dec!(0)).is_err());
    }

    #[test]
    fn test_current_yield_overflow() {
        let result = current_yield(dec!(2), Decimal::MAX, dec!(950));
        assert!(matches!(result, Err(BondError::InvalidInput { .. })));

        let result = current_yield(dec!(0.05), Decimal::MAX, dec!(0.0000001));
        assert!(matches!(result, Err(BondError::InvalidInput { .. })));
    }
}
