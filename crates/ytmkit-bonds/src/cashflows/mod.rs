//! Cash flow generation for bonds.
//!
//! Schedules are annual: one flow per calendar year from the issue date,
//! stepped with calendar arithmetic so leap days never shift later dates.

use rust_decimal::Decimal;

use ytmkit_core::types::{CashFlow, CashFlowSchedule, CashFlowType, Date};

use crate::error::{BondError, BondResult};

/// Generates annual cash flow schedules.
pub struct CashFlowGenerator;

impl CashFlowGenerator {
    /// Generates the cash flow schedule of an annual-pay fixed coupon bond.
    ///
    /// The schedule holds [`periods`](Self::periods) flows. Flow `k` (for
    /// all but the last) is paid `k` calendar years after `issue_date`;
    /// the last is paid on `maturity_date` and adds the face value.
    ///
    /// When `maturity_date` is not a whole number of years after
    /// `issue_date` the whole-year count is kept as is: the final period is
    /// simply shorter or longer than a year.
    ///
    /// # Arguments
    ///
    /// * `face_value` - Principal repaid at maturity (must be positive)
    /// * `issue_date` - Date of the first flow
    /// * `maturity_date` - Date of the final flow (must be after `issue_date`)
    /// * `coupon_rate` - Annual coupon as a decimal fraction (must be non-negative)
    ///
    /// # Errors
    ///
    /// Returns `BondError::InvalidSchedule` for a non-positive face value, a
    /// negative coupon rate, or a maturity on or before the issue date.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ytmkit_bonds::cashflows::CashFlowGenerator;
    /// use ytmkit_core::types::Date;
    /// use rust_decimal_macros::dec;
    ///
    /// let schedule = CashFlowGenerator::generate(
    ///     dec!(1000),
    ///     Date::from_ymd(2022, 1, 1).unwrap(),
    ///     Date::from_ymd(2027, 1, 1).unwrap(),
    ///     dec!(0.05),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(schedule.len(), 6);
    /// assert_eq!(schedule.last().unwrap().amount(), dec!(1050));
    /// ```
    pub fn generate(
        face_value: Decimal,
        issue_date: Date,
        maturity_date: Date,
        coupon_rate: Decimal,
    ) -> BondResult<CashFlowSchedule> {
        validate_terms(face_value, issue_date, maturity_date, coupon_rate)?;

        let periods = Self::periods(issue_date, maturity_date);
        let coupon = coupon_rate.checked_mul(face_value).ok_or_else(|| {
            BondError::invalid_schedule(format!(
                "coupon amount overflows: {coupon_rate} x {face_value}"
            ))
        })?;

        let anniversary = issue_date.add_years(periods as i32 - 1)?;
        if anniversary != maturity_date {
            log::debug!(
                "maturity {} is not a whole number of years after issue {}; keeping {} annual periods",
                maturity_date,
                issue_date,
                periods
            );
        }

        let final_amount = coupon.checked_add(face_value).ok_or_else(|| {
            BondError::invalid_schedule(format!(
                "final payment overflows: {coupon} + {face_value}"
            ))
        })?;

        let mut schedule = CashFlowSchedule::with_capacity(periods as usize);
        for k in 0..periods - 1 {
            schedule.push(CashFlow::coupon(issue_date.add_years(k as i32)?, coupon));
        }
        schedule.push(CashFlow::new(
            maturity_date,
            final_amount,
            CashFlowType::CouponAndPrincipal,
        ));

        if schedule.checked_total().is_none() {
            return Err(BondError::invalid_schedule(format!(
                "schedule total overflows for face value {face_value}"
            )));
        }

        Ok(schedule)
    }

    /// Number of annual flows between two dates, both ends inclusive.
    ///
    /// Counts calendar years only: `maturity.year - issue.year + 1`.
    #[must_use]
    pub fn periods(issue_date: Date, maturity_date: Date) -> u32 {
        (maturity_date.year() - issue_date.year() + 1).max(1) as u32
    }
}

fn validate_terms(
    face_value: Decimal,
    issue_date: Date,
    maturity_date: Date,
    coupon_rate: Decimal,
) -> BondResult<()> {
    if face_value <= Decimal::ZERO {
        return Err(BondError::invalid_schedule(format!(
            "face value must be positive, got {face_value}"
        )));
    }
    if coupon_rate < Decimal::ZERO {
        return Err(BondError::invalid_schedule(format!(
            "coupon rate must be non-negative, got {coupon_rate}"
        )));
    }
    if maturity_date <= issue_date {
        return Err(BondError::invalid_schedule(format!(
            "maturity {maturity_date} must be after issue {issue_date}"
        )));
    }
    Ok(())
}
