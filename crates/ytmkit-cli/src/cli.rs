//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{PriceArgs, ScheduleArgs, YieldArgs};

/// ytmkit - Annual-pay bond schedules and yield-to-maturity
#[derive(Parser)]
#[command(name = "ytmkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// TOML configuration file with a [solver] table
    #[arg(long, env = "YTMKIT_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Print the annual cash flow schedule of a bond
    Schedule(ScheduleArgs),

    /// Solve yield-to-maturity from a price
    Yield(YieldArgs),

    /// Discount the schedule at a yield
    Price(PriceArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}
