//! Schedule command implementation.
//!
//! Prints the annual cash flows of a bond.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use ytmkit_core::types::CashFlow;

use crate::cli::OutputFormat;
use crate::commands::BondArgs;
use crate::output::{print_header, print_json, print_rows};

/// Arguments for the schedule command.
#[derive(Args, Debug)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub bond: BondArgs,
}

/// One schedule line.
#[derive(Debug, Serialize, Tabled)]
pub struct ScheduleRow {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Amount")]
    pub amount: String,
    #[tabled(rename = "Type")]
    pub kind: String,
}

impl ScheduleRow {
    fn new(index: usize, cf: &CashFlow) -> Self {
        Self {
            index,
            date: cf.date().to_string(),
            amount: format!("{:.2}", cf.amount()),
            kind: cf.cf_type().to_string(),
        }
    }
}

/// Execute the schedule command.
pub fn execute(args: ScheduleArgs, format: OutputFormat) -> Result<()> {
    let bond = args.bond.build()?;
    let schedule = bond.cash_flows(args.bond.coupon)?;
    tracing::debug!(flows = schedule.len(), "generated schedule");

    let rows: Vec<ScheduleRow> = schedule
        .iter()
        .enumerate()
        .map(|(i, cf)| ScheduleRow::new(i + 1, cf))
        .collect();

    match format {
        OutputFormat::Table => {
            print_header("Cash Flow Schedule");
            print_rows(&rows, format)?;
            println!("Total: {:.2}", schedule.total());
        }
        OutputFormat::Json => print_json(&schedule)?,
        OutputFormat::Csv => print_rows(&rows, format)?,
        OutputFormat::Minimal => {
            for row in &rows {
                println!("{} {}", row.date, row.amount);
            }
        }
    }

    Ok(())
}
