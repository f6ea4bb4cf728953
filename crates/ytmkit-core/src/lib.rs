//! # ytmkit Core
//!
//! Core types shared by the ytmkit bond yield crates.
//!
//! - **Types**: [`Date`], [`CashFlow`](types::CashFlow) and
//!   [`CashFlowSchedule`](types::CashFlowSchedule)
//! - **Day Count Conventions**: Actual/365 Fixed year fractions
//!
//! ## Example
//!
//! ```rust
//! use ytmkit_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let issue = Date::from_ymd(2023, 1, 1).unwrap();
//! let cf = CashFlow::coupon(issue.add_years(1).unwrap(), dec!(50));
//! assert_eq!(Act365Fixed.year_fraction(issue, cf.date()), 1.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{Act365Fixed, DayCount};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{CashFlow, CashFlowSchedule, CashFlowType, Date};
}

pub use error::{CoreError, CoreResult};
pub use types::Date;
