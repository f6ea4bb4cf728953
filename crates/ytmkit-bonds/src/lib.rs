//! # ytmkit Bonds
//!
//! Annual-pay bond schedules and yield-to-maturity solving.
//!
//! This crate provides:
//!
//! - **Cash Flows**: Annual coupon schedule generation by calendar-year stepping
//! - **Pricing**: ACT/365F present value at a flat yield, and its inverse
//! - **Instruments**: A validated [`Bond`](instruments::Bond) value with a builder
//!
//! ## Example
//!
//! ```rust
//! use ytmkit_bonds::prelude::*;
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
//! let ytm = solve_ytm(dec!(950), schedule.as_slice()).unwrap();
//! assert!((ytm - 0.0801475).abs() < 1e-6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::float_cmp)]

pub mod cashflows;
pub mod error;
pub mod instruments;
pub mod pricing;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    // Cash flows
    pub use crate::cashflows::CashFlowGenerator;

    // Errors
    pub use crate::error::{BondError, BondResult};

    // Instruments
    pub use crate::instruments::{Bond, BondBuilder};

    // Pricing
    pub use crate::pricing::{
        current_yield, present_value, present_value_at, solve_ytm, SolverMethod, YieldResult,
        YieldSolver, YieldSolverConfig,
    };

    // Types
    pub use crate::types::Isin;
}

pub use error::{BondError, BondResult};
pub use instruments::{Bond, BondBuilder};
pub use pricing::{present_value, solve_ytm, YieldSolver};
