//! CLI command implementations.

pub mod price;
pub mod schedule;
pub mod ytm;

pub use price::PriceArgs;
pub use schedule::ScheduleArgs;
pub use ytm::YieldArgs;

use clap::{Args, ValueEnum};
use rust_decimal::Decimal;

use ytmkit_bonds::pricing::{SolverMethod, YieldSolverConfig};
use ytmkit_bonds::{Bond, BondBuilder};
use ytmkit_core::types::Date;

use crate::error::CliResult;
use crate::output::KeyValue;

/// Bond terms shared by every command.
#[derive(Args, Debug, Clone)]
pub struct BondArgs {
    /// Face value repaid at maturity
    #[arg(long, allow_negative_numbers = true)]
    pub face: Decimal,

    /// Issue date, also the first flow (YYYY-MM-DD)
    #[arg(long)]
    pub issue: Date,

    /// Maturity date, the final flow (YYYY-MM-DD)
    #[arg(long)]
    pub maturity: Date,

    /// Annual coupon rate as a decimal fraction (0.05 for 5%)
    #[arg(long, allow_negative_numbers = true)]
    pub coupon: Decimal,

    /// Bond identifier
    #[arg(long, default_value = "UNSPECIFIED")]
    pub isin: String,
}

impl BondArgs {
    /// Builds the bond value; schedule problems surface as `InvalidSchedule`.
    pub fn build(&self) -> CliResult<Bond> {
        let bond = BondBuilder::new()
            .isin(self.isin.as_str())
            .face_value(self.face)
            .issue_date(self.issue)
            .maturity_date(self.maturity)
            .build()?;
        Ok(bond)
    }

    /// Table rows describing the bond terms.
    pub fn describe(&self) -> Vec<KeyValue> {
        vec![
            KeyValue::new("ISIN", self.isin.as_str()),
            KeyValue::new("Face Value", self.face.to_string()),
            KeyValue::new("Issue Date", self.issue.to_string()),
            KeyValue::new("Maturity Date", self.maturity.to_string()),
            KeyValue::new("Coupon Rate", format!("{}", self.coupon)),
        ]
    }
}

/// Solver method names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    /// Secant iteration
    Secant,
    /// Newton-Raphson with a numerical derivative
    Newton,
}

impl From<MethodArg> for SolverMethod {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Secant => SolverMethod::Secant,
            MethodArg::Newton => SolverMethod::Newton,
        }
    }
}

/// Solver overrides; each one replaces the configuration file value.
#[derive(Args, Debug, Clone, Default)]
pub struct SolverArgs {
    /// Root-finding method
    #[arg(long, value_enum)]
    pub method: Option<MethodArg>,

    /// Absolute tolerance on the price residual
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Maximum solver iterations
    #[arg(long)]
    pub max_iterations: Option<u32>,

    /// Starting yield as a decimal fraction
    #[arg(long, allow_negative_numbers = true)]
    pub initial_guess: Option<f64>,
}

impl SolverArgs {
    /// Applies the overrides on top of `base`.
    pub fn apply(&self, base: YieldSolverConfig) -> YieldSolverConfig {
        YieldSolverConfig {
            initial_guess: self.initial_guess.unwrap_or(base.initial_guess),
            tolerance: self.tolerance.unwrap_or(base.tolerance),
            max_iterations: self.max_iterations.unwrap_or(base.max_iterations),
            method: self.method.map_or(base.method, SolverMethod::from),
        }
    }
}
