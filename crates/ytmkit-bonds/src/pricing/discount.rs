//! Present value of a cash flow sequence at a flat annual yield.

use rust_decimal::prelude::ToPrimitive;

use ytmkit_core::daycounts::{Act365Fixed, DayCount};
use ytmkit_core::types::{CashFlow, Date};

use crate::error::{BondError, BondResult};

/// Discounts cash flows to their first date.
///
/// Equivalent to [`present_value_at`] with the valuation date set to the
/// date of the first cash flow.
///
/// # Errors
///
/// - `BondError::InvalidInput` if `cash_flows` is empty
/// - `BondError::Domain` if `rate <= -1` or the result is not finite
///
/// # Example
///
/// ```rust
/// use ytmkit_bonds::pricing::present_value;
/// use ytmkit_core::types::{CashFlow, Date};
/// use rust_decimal_macros::dec;
///
/// let flows = [
///     CashFlow::coupon(Date::from_ymd(2025, 1, 1).unwrap(), dec!(0)),
///     CashFlow::principal(Date::from_ymd(2026, 1, 1).unwrap(), dec!(110)),
/// ];
/// let pv = present_value(0.10, &flows).unwrap();
/// assert!((pv - 100.0).abs() < 1e-12);
/// ```
pub fn present_value(rate: f64, cash_flows: &[CashFlow]) -> BondResult<f64> {
    let anchor = cash_flows
        .first()
        .ok_or_else(|| BondError::invalid_input("cash flow sequence is empty"))?
        .date();
    present_value_at(rate, cash_flows, anchor)
}

/// Discounts cash flows to `valuation_date`.
///
/// Computes `sum(amount_i / (1 + rate)^t_i)` where `t_i` is the ACT/365F
/// year fraction from `valuation_date` to the payment date. The exponent is
/// fractional; flows dated before `valuation_date` are compounded forward.
///
/// # Errors
///
/// Returns `BondError::Domain` if `rate <= -1`, `rate` is not finite, or
/// the discounted sum overflows.
pub fn present_value_at(rate: f64, cash_flows: &[CashFlow], valuation_date: Date) -> BondResult<f64> {
    check_domain(rate)?;

    let pv = DiscountedFlows::new(cash_flows, valuation_date)?.present_value(rate);
    if !pv.is_finite() {
        return Err(BondError::Domain { rate });
    }
    Ok(pv)
}

/// Rejects rates at or below `-1`, where `(1 + rate)^t` stops being a
/// positive discount base.
pub(crate) fn check_domain(rate: f64) -> BondResult<()> {
    if rate.is_finite() && rate > -1.0 {
        Ok(())
    } else {
        Err(BondError::Domain { rate })
    }
}

/// Cash flows reduced to `(year fraction, amount)` pairs for repeated
/// evaluation inside the yield iteration.
#[derive(Debug, Clone)]
pub(crate) struct DiscountedFlows {
    flows: Vec<(f64, f64)>,
}

impl DiscountedFlows {
    pub(crate) fn new(cash_flows: &[CashFlow], valuation_date: Date) -> BondResult<Self> {
        let flows = cash_flows
            .iter()
            .map(|cf| {
                let years = Act365Fixed.year_fraction(valuation_date, cf.date());
                let amount = cf.amount().to_f64().ok_or_else(|| {
                    BondError::invalid_input(format!("amount {} is not representable", cf.amount()))
                })?;
                Ok((years, amount))
            })
            .collect::<BondResult<Vec<_>>>()?;

        Ok(Self { flows })
    }

    /// Present value at `rate`; NaN or infinite outside `rate > -1`.
    pub(crate) fn present_value(&self, rate: f64) -> f64 {
        let base = 1.0 + rate;
        self.flows
            .iter()
            .map(|(years, amount)| amount / base.powf(*years))
            .sum()
    }

    /// Sum of the undiscounted amounts.
    pub(crate) fn total(&self) -> f64 {
        self.flows.iter().map(|(_, amount)| amount).sum()
    }
}
