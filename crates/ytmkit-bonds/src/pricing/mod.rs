//! Bond pricing calculations.
//!
//! This module provides:
//! - [`present_value`]: ACT/365F discounting of a cash flow sequence at a flat yield
//! - [`YieldSolver`]: Yield-to-maturity solver (secant or Newton-Raphson)
//! - [`solve_ytm`]: One-shot yield solve with default settings
//! - [`current_yield`]: Current yield calculation

mod discount;
mod yield_solver;

pub use discount::{present_value, present_value_at};
pub use yield_solver::{
    current_yield, solve_ytm, SolverMethod, YieldResult, YieldSolver, YieldSolverConfig,
    DEFAULT_INITIAL_GUESS, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE,
};
