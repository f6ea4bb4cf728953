//! Price command implementation.
//!
//! Discounts a bond's schedule at a given yield.

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;

use ytmkit_core::types::Date;

use crate::cli::OutputFormat;
use crate::commands::BondArgs;
use crate::output::{format_percent, print_header, print_record, print_rows, KeyValue};

/// Arguments for the price command.
#[derive(Args, Debug)]
pub struct PriceArgs {
    #[command(flatten)]
    pub bond: BondArgs,

    /// Yield as a decimal fraction (0.06 for 6%)
    #[arg(long = "yield", allow_negative_numbers = true)]
    pub yield_value: f64,
}

/// Price calculation report.
#[derive(Debug, Serialize)]
pub struct PriceReport {
    pub isin: String,
    pub face_value: Decimal,
    pub issue_date: Date,
    pub maturity_date: Date,
    pub coupon_rate: Decimal,
    pub yield_value: f64,
    pub present_value: f64,
    pub undiscounted_total: Decimal,
}

/// Execute the price command.
pub fn execute(args: PriceArgs, format: OutputFormat) -> Result<()> {
    let bond = args.bond.build()?.with_yield(args.yield_value);
    let pv = bond.price_from_yield(args.bond.coupon, args.yield_value)?;
    let total = bond.cash_flows(args.bond.coupon)?.total();

    let report = PriceReport {
        isin: bond.isin().to_string(),
        face_value: bond.face_value(),
        issue_date: bond.issue_date(),
        maturity_date: bond.maturity_date(),
        coupon_rate: args.bond.coupon,
        yield_value: args.yield_value,
        present_value: pv,
        undiscounted_total: total,
    };

    match format {
        OutputFormat::Table => {
            let mut rows = args.bond.describe();
            rows.push(KeyValue::new("Yield", format_percent(report.yield_value)));
            rows.push(KeyValue::new("", ""));
            rows.push(KeyValue::new("Present Value", format!("{:.6}", report.present_value)));
            rows.push(KeyValue::new("Undiscounted Total", format!("{:.2}", report.undiscounted_total)));

            print_header("Bond Pricing Results");
            print_rows(&rows, format)?;
        }
        OutputFormat::Json | OutputFormat::Csv => print_record(&report, format)?,
        OutputFormat::Minimal => println!("{:.6}", report.present_value),
    }

    Ok(())
}
