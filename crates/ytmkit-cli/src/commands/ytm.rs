//! Yield command implementation.
//!
//! Solves yield-to-maturity from a price.

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;

use ytmkit_bonds::pricing::{current_yield, SolverMethod, YieldSolver};
use ytmkit_core::types::Date;

use crate::cli::OutputFormat;
use crate::commands::{BondArgs, SolverArgs};
use crate::config::CliConfig;
use crate::output::{format_percent, print_header, print_record, print_rows, KeyValue};

/// Arguments for the yield command.
#[derive(Args, Debug)]
pub struct YieldArgs {
    #[command(flatten)]
    pub bond: BondArgs,

    /// Price in the currency units of the face value
    #[arg(long, allow_negative_numbers = true)]
    pub price: Decimal,

    #[command(flatten)]
    pub solver: SolverArgs,
}

/// Yield calculation report.
#[derive(Debug, Serialize)]
pub struct YieldReport {
    pub isin: String,
    pub face_value: Decimal,
    pub issue_date: Date,
    pub maturity_date: Date,
    pub coupon_rate: Decimal,
    pub price: Decimal,
    pub yield_to_maturity: f64,
    pub current_yield: f64,
    pub method: SolverMethod,
    pub iterations: u32,
    pub residual: f64,
}

/// Execute the yield command.
pub fn execute(args: YieldArgs, config: &CliConfig, format: OutputFormat) -> Result<()> {
    let solver_config = args.solver.apply(config.solver);
    let solver = YieldSolver::from_config(solver_config);

    let bond = args.bond.build()?.with_market_price(args.price)?;
    let result = bond.yield_to_maturity_with(&solver, args.bond.coupon, args.price)?;
    let current = current_yield(args.bond.coupon, bond.face_value(), args.price)?;
    tracing::info!(
        ytm = result.yield_value,
        iterations = result.iterations,
        "solved yield"
    );

    let report = YieldReport {
        isin: bond.isin().to_string(),
        face_value: bond.face_value(),
        issue_date: bond.issue_date(),
        maturity_date: bond.maturity_date(),
        coupon_rate: args.bond.coupon,
        price: args.price,
        yield_to_maturity: result.yield_value,
        current_yield: current,
        method: solver_config.method,
        iterations: result.iterations,
        residual: result.residual,
    };

    match format {
        OutputFormat::Table => {
            let mut rows = args.bond.describe();
            rows.push(KeyValue::new("Price", report.price.to_string()));
            rows.push(KeyValue::new("", ""));
            rows.push(KeyValue::new("Yield to Maturity", format_percent(report.yield_to_maturity)));
            rows.push(KeyValue::new("Current Yield", format_percent(report.current_yield)));
            rows.push(KeyValue::new("Method", report.method.to_string()));
            rows.push(KeyValue::new("Iterations", report.iterations.to_string()));
            rows.push(KeyValue::new("Residual", format!("{:.3e}", report.residual)));

            print_header("Yield to Maturity");
            print_rows(&rows, format)?;
        }
        OutputFormat::Json | OutputFormat::Csv => print_record(&report, format)?,
        OutputFormat::Minimal => println!("{:.10}", report.yield_to_maturity),
    }

    Ok(())
}
