//! ytmkit CLI - Command-line interface for bond yield calculations.
//!
//! # Usage
//!
//! ```bash
//! # Print the annual cash flow schedule
//! ytmkit schedule --face 1000 --issue 2023-01-01 --maturity 2027-01-01 --coupon 0.05
//!
//! # Solve yield-to-maturity from a price
//! ytmkit yield --face 1000 --issue 2023-01-01 --maturity 2027-01-01 --coupon 0.05 --price 950
//!
//! # Present value at a yield
//! ytmkit price --face 1000 --issue 2023-01-01 --maturity 2027-01-01 --coupon 0.05 --yield 0.06
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};
use config::CliConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.quiet);

    let config = CliConfig::load(cli.config.as_deref())?;
    let format = cli.format;

    match cli.command {
        Commands::Schedule(args) => commands::schedule::execute(args, format)?,
        Commands::Yield(args) => commands::ytm::execute(args, &config, format)?,
        Commands::Price(args) => commands::price::execute(args, format)?,
    }

    Ok(())
}

/// Installs the stderr subscriber. `RUST_LOG` wins over the default level;
/// library `log` records are forwarded into it.
fn init_tracing(quiet: bool) {
    let default_level = if quiet { "error" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
