//! Cash flow types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;
use crate::error::{CoreError, CoreResult};

/// Type of cash flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CashFlowType {
    /// Regular coupon payment
    Coupon,
    /// Principal repayment at maturity
    Principal,
    /// Combined coupon and principal (final payment)
    CouponAndPrincipal,
}

impl fmt::Display for CashFlowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CashFlowType::Coupon => "Coupon",
            CashFlowType::Principal => "Principal",
            CashFlowType::CouponAndPrincipal => "Coupon+Principal",
        };
        write!(f, "{name}")
    }
}

/// A dated cash flow.
///
/// # Example
///
/// ```rust
/// use ytmkit_core::types::{CashFlow, CashFlowType, Date};
/// use rust_decimal_macros::dec;
///
/// let cf = CashFlow::new(
///     Date::from_ymd(2025, 1, 1).unwrap(),
///     dec!(50),
///     CashFlowType::Coupon,
/// );
/// assert_eq!(cf.amount(), dec!(50));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Payment date
    date: Date,
    /// Cash flow amount in currency units of the face value
    amount: Decimal,
    /// Type of cash flow
    cf_type: CashFlowType,
}

impl CashFlow {
    /// Creates a new cash flow.
    #[must_use]
    pub fn new(date: Date, amount: Decimal, cf_type: CashFlowType) -> Self {
        Self {
            date,
            amount,
            cf_type,
        }
    }

    /// Creates a coupon cash flow.
    #[must_use]
    pub fn coupon(date: Date, amount: Decimal) -> Self {
        Self::new(date, amount, CashFlowType::Coupon)
    }

    /// Creates a principal cash flow.
    #[must_use]
    pub fn principal(date: Date, amount: Decimal) -> Self {
        Self::new(date, amount, CashFlowType::Principal)
    }

    /// Creates a final cash flow (coupon + principal).
    ///
    /// # Panics
    ///
    /// Panics if the sum overflows `Decimal`. Use [`CashFlow::new`] with a
    /// checked sum for untrusted amounts.
    #[must_use]
    pub fn final_payment(date: Date, coupon: Decimal, principal: Decimal) -> Self {
        Self::new(date, coupon + principal, CashFlowType::CouponAndPrincipal)
    }

    /// Returns the payment date.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// Returns the cash flow amount.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the cash flow type.
    #[must_use]
    pub fn cf_type(&self) -> CashFlowType {
        self.cf_type
    }

    /// Returns true if this includes principal repayment.
    #[must_use]
    pub fn is_principal(&self) -> bool {
        matches!(
            self.cf_type,
            CashFlowType::Principal | CashFlowType::CouponAndPrincipal
        )
    }
}

impl fmt::Display for CashFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.date, self.amount, self.cf_type)
    }
}

/// An ordered schedule of cash flows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CashFlowSchedule {
    cash_flows: Vec<CashFlow>,
}

impl CashFlowSchedule {
    /// Creates a new empty cash flow schedule.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cash_flows: Vec::new(),
        }
    }

    /// Creates a schedule with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cash_flows: Vec::with_capacity(capacity),
        }
    }

    /// Adds a cash flow to the end of the schedule.
    pub fn push(&mut self, cf: CashFlow) {
        self.cash_flows.push(cf);
    }

    /// Returns the cash flows as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[CashFlow] {
        &self.cash_flows
    }

    /// Returns the number of cash flows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cash_flows.len()
    }

    /// Returns true if there are no cash flows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cash_flows.is_empty()
    }

    /// Returns the first cash flow, if any.
    #[must_use]
    pub fn first(&self) -> Option<&CashFlow> {
        self.cash_flows.first()
    }

    /// Returns the last cash flow, if any.
    #[must_use]
    pub fn last(&self) -> Option<&CashFlow> {
        self.cash_flows.last()
    }

    /// Returns an iterator over the cash flows.
    pub fn iter(&self) -> impl Iterator<Item = &CashFlow> {
        self.cash_flows.iter()
    }

    /// Returns the undiscounted total of all cash flows.
    ///
    /// # Panics
    ///
    /// Panics if the sum overflows `Decimal`; see [`checked_total`](Self::checked_total).
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.cash_flows.iter().map(|cf| cf.amount).sum()
    }

    /// Returns the undiscounted total, or `None` if it overflows.
    #[must_use]
    pub fn checked_total(&self) -> Option<Decimal> {
        self.cash_flows
            .iter()
            .try_fold(Decimal::ZERO, |acc, cf| acc.checked_add(cf.amount))
    }

    /// Checks that dates strictly increase and no amount is negative.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidCashFlow` naming the first offending flow.
    pub fn validate(&self) -> CoreResult<()> {
        validate_cash_flows(&self.cash_flows)
    }
}

/// Checks that dates strictly increase and no amount is negative.
///
/// # Errors
///
/// Returns `CoreError::InvalidCashFlow` naming the first offending flow.
pub fn validate_cash_flows(cash_flows: &[CashFlow]) -> CoreResult<()> {
    if let Some(cf) = cash_flows.iter().find(|cf| cf.amount < Decimal::ZERO) {
        return Err(CoreError::invalid_cash_flow(format!(
            "negative amount {} on {}",
            cf.amount, cf.date
        )));
    }

    if let Some(pair) = cash_flows.windows(2).find(|w| w[1].date <= w[0].date) {
        return Err(CoreError::invalid_cash_flow(format!(
            "dates must strictly increase: {} follows {}",
            pair[1].date, pair[0].date
        )));
    }

    Ok(())
}

impl IntoIterator for CashFlowSchedule {
    type Item = CashFlow;
    type IntoIter = std::vec::IntoIter<CashFlow>;

    fn into_iter(self) -> Self::IntoIter {
        self.cash_flows.into_iter()
    }
}

impl<'a> IntoIterator for &'a CashFlowSchedule {
    type Item = &'a CashFlow;
    type IntoIter = std::slice::Iter<'a, CashFlow>;

    fn into_iter(self) -> Self::IntoIter {
        self.cash_flows.iter()
    }
}

impl FromIterator<CashFlow> for CashFlowSchedule {
    fn from_iter<I: IntoIterator<Item = CashFlow>>(iter: I) -> Self {
        Self {
            cash_flows: iter.into_iter().collect(),
        }
    }
}

impl AsRef<[CashFlow]> for CashFlowSchedule {
    fn as_ref(&self) -> &[CashFlow] {
        &self.cash_flows
    }
}
