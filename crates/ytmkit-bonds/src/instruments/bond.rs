//! Annual-pay fixed coupon bond.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ytmkit_core::types::{CashFlowSchedule, Date};

use crate::cashflows::CashFlowGenerator;
use crate::error::{BondError, BondResult};
use crate::pricing::{present_value, YieldResult, YieldSolver};
use crate::types::Isin;

/// An annual-pay bond.
///
/// Carries the terms that fix its schedule (face value, issue and maturity
/// dates) plus an optional observed market price and computed yield. The
/// coupon rate is supplied per call, so one bond value can be evaluated
/// under several coupon assumptions.
///
/// # Example
///
/// ```rust
/// use ytmkit_bonds::instruments::BondBuilder;
/// use ytmkit_core::types::Date;
/// use rust_decimal_macros::dec;
///
/// let bond = BondBuilder::new()
///     .isin("XS0000000001")
///     .face_value(dec!(1000))
///     .issue_date(Date::from_ymd(2023, 1, 1).unwrap())
///     .maturity_date(Date::from_ymd(2027, 1, 1).unwrap())
///     .build()
///     .unwrap();
///
/// let result = bond.yield_to_maturity(dec!(0.05), dec!(950)).unwrap();
/// assert!(result.yield_value > 0.05);
/// ```
///
/// Deserialization goes through [`BondBuilder::build`], so JSON or TOML
/// input is held to the same checks as builder input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BondRecord")]
pub struct Bond {
    /// ISIN or identifier.
    isin: Isin,

    /// Principal repaid at maturity.
    face_value: Decimal,

    /// Issue date; also the date of the first flow.
    issue_date: Date,

    /// Maturity date; the date of the final flow.
    maturity_date: Date,

    /// Observed market price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    market_price: Option<Decimal>,

    /// Previously computed yield.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    yield_value: Option<f64>,
}

impl Bond {
    /// Returns the ISIN.
    #[must_use]
    pub fn isin(&self) -> &Isin {
        &self.isin
    }

    /// Returns the face value.
    #[must_use]
    pub fn face_value(&self) -> Decimal {
        self.face_value
    }

    /// Returns the issue date.
    #[must_use]
    pub fn issue_date(&self) -> Date {
        self.issue_date
    }

    /// Returns the maturity date.
    #[must_use]
    pub fn maturity_date(&self) -> Date {
        self.maturity_date
    }

    /// Returns the observed market price, if any.
    #[must_use]
    pub fn market_price(&self) -> Option<Decimal> {
        self.market_price
    }

    /// Returns the stored yield, if any.
    #[must_use]
    pub fn yield_value(&self) -> Option<f64> {
        self.yield_value
    }

    /// Returns a copy carrying `price` as its market price.
    ///
    /// # Errors
    ///
    /// Returns `BondError::InvalidInput` for a non-positive price.
    pub fn with_market_price(&self, price: Decimal) -> BondResult<Self> {
        check_price(price)?;
        Ok(Self {
            market_price: Some(price),
            ..self.clone()
        })
    }

    /// Returns a copy carrying `yield_value` as its yield.
    #[must_use]
    pub fn with_yield(&self, yield_value: f64) -> Self {
        Self {
            yield_value: Some(yield_value),
            ..self.clone()
        }
    }

    /// Generates the annual cash flow schedule at `coupon_rate`.
    pub fn cash_flows(&self, coupon_rate: Decimal) -> BondResult<CashFlowSchedule> {
        CashFlowGenerator::generate(
            self.face_value,
            self.issue_date,
            self.maturity_date,
            coupon_rate,
        )
    }

    /// Present value of the schedule at `yield_value`, discounted to the
    /// issue date.
    pub fn price_from_yield(&self, coupon_rate: Decimal, yield_value: f64) -> BondResult<f64> {
        let schedule = self.cash_flows(coupon_rate)?;
        present_value(yield_value, schedule.as_slice())
    }

    /// Yield at which the schedule prices to `price`, with default solver
    /// settings.
    pub fn yield_to_maturity(&self, coupon_rate: Decimal, price: Decimal) -> BondResult<YieldResult> {
        self.yield_to_maturity_with(&YieldSolver::new(), coupon_rate, price)
    }

    /// Yield at which the schedule prices to `price`, with a caller-supplied
    /// solver.
    pub fn yield_to_maturity_with(
        &self,
        solver: &YieldSolver,
        coupon_rate: Decimal,
        price: Decimal,
    ) -> BondResult<YieldResult> {
        let schedule = self.cash_flows(coupon_rate)?;
        solver.solve(price, schedule.as_slice())
    }

    /// Yield implied by the stored market price.
    ///
    /// # Errors
    ///
    /// Returns `BondError::MissingField` if no market price is set.
    pub fn yield_from_market_price(&self, coupon_rate: Decimal) -> BondResult<YieldResult> {
        let price = self
            .market_price
            .ok_or_else(|| BondError::missing_field("market_price"))?;
        self.yield_to_maturity(coupon_rate, price)
    }
}

/// Builder for [`Bond`].
#[derive(Debug, Clone, Default)]
pub struct BondBuilder {
    isin: Option<String>,
    face_value: Option<Decimal>,
    issue_date: Option<Date>,
    maturity_date: Option<Date>,
    market_price: Option<Decimal>,
    yield_value: Option<f64>,
}

impl BondBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ISIN.
    #[must_use]
    pub fn isin(mut self, isin: impl Into<String>) -> Self {
        self.isin = Some(isin.into());
        self
    }

    /// Sets the face value.
    #[must_use]
    pub fn face_value(mut self, value: Decimal) -> Self {
        self.face_value = Some(value);
        self
    }

    /// Sets the issue date.
    #[must_use]
    pub fn issue_date(mut self, date: Date) -> Self {
        self.issue_date = Some(date);
        self
    }

    /// Sets the maturity date.
    #[must_use]
    pub fn maturity_date(mut self, date: Date) -> Self {
        self.maturity_date = Some(date);
        self
    }

    /// Sets the observed market price.
    #[must_use]
    pub fn market_price(mut self, price: Decimal) -> Self {
        self.market_price = Some(price);
        self
    }

    /// Sets a previously computed yield.
    #[must_use]
    pub fn yield_value(mut self, yield_value: f64) -> Self {
        self.yield_value = Some(yield_value);
        self
    }

    /// Builds the bond.
    ///
    /// # Errors
    ///
    /// - `BondError::MissingField` if the ISIN, face value, issue date or
    ///   maturity date is absent (or the ISIN is blank)
    /// - `BondError::InvalidSchedule` for a non-positive face value or a
    ///   maturity on or before the issue date
    /// - `BondError::InvalidInput` for a non-positive market price
    pub fn build(self) -> BondResult<Bond> {
        let isin = self.isin.ok_or_else(|| BondError::missing_field("isin"))?;
        let isin = Isin::new(&isin)?;
        let face_value = self
            .face_value
            .ok_or_else(|| BondError::missing_field("face_value"))?;
        let issue_date = self
            .issue_date
            .ok_or_else(|| BondError::missing_field("issue_date"))?;
        let maturity_date = self
            .maturity_date
            .ok_or_else(|| BondError::missing_field("maturity_date"))?;

        if face_value <= Decimal::ZERO {
            return Err(BondError::invalid_schedule(format!(
                "face value must be positive, got {face_value}"
            )));
        }
        if maturity_date <= issue_date {
            return Err(BondError::invalid_schedule(format!(
                "maturity {maturity_date} must be after issue {issue_date}"
            )));
        }
        if let Some(price) = self.market_price {
            check_price(price)?;
        }

        Ok(Bond {
            isin,
            face_value,
            issue_date,
            maturity_date,
            market_price: self.market_price,
            yield_value: self.yield_value,
        })
    }
}

/// Unvalidated wire form of a [`Bond`].
#[derive(Deserialize)]
struct BondRecord {
    isin: String,
    face_value: Decimal,
    issue_date: Date,
    maturity_date: Date,
    #[serde(default)]
    market_price: Option<Decimal>,
    #[serde(default)]
    yield_value: Option<f64>,
}

impl TryFrom<BondRecord> for Bond {
    type Error = BondError;

    fn try_from(record: BondRecord) -> Result<Self, Self::Error> {
        let mut builder = BondBuilder::new()
            .isin(record.isin)
            .face_value(record.face_value)
            .issue_date(record.issue_date)
            .maturity_date(record.maturity_date);
        if let Some(price) = record.market_price {
            builder = builder.market_price(price);
        }
        if let Some(yield_value) = record.yield_value {
            builder = builder.yield_value(yield_value);
        }
        builder.build()
    }
}

fn check_price(price: Decimal) -> BondResult<()> {
    if price <= Decimal::ZERO {
        return Err(BondError::invalid_input(format!(
            "market price must be positive, got {price}"
        )));
    }
    Ok(())
}
