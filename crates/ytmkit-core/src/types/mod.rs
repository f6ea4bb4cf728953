//! Domain types for bond valuation.
//!
//! - [`Date`]: Calendar date with year arithmetic
//! - [`CashFlow`]: Dated cash flow amount
//! - [`CashFlowSchedule`]: Ordered sequence of cash flows

mod cashflow;
mod date;

pub use cashflow::{validate_cash_flows, CashFlow, CashFlowSchedule, CashFlowType};
pub use date::Date;
