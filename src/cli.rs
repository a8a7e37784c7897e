use clap::{Parser, Subcommand};
use std::path::PathBuf;

use oasis_calc::analysis::OutputFormat;
use oasis_calc::model::Currency;

/// Liquidity return calculator for single-sided HTR pools, plus the
/// presale price clock.
#[derive(Parser)]
#[command(name = "oasis-calc", version, about)]
pub struct Cli {
    /// Print debug diagnostics to stderr (overridden by OASIS_CALC_LOG)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute the outcome of a single HTR price move
    Scenario {
        /// Path to the calculator config JSON (default: built-in example)
        file: Option<PathBuf>,

        /// HTR price change in percent (e.g. -90, 0, 150)
        #[arg(long, allow_hyphen_values = true)]
        change: f64,

        /// Override the deposit amount from the config
        #[arg(long)]
        amount: Option<f64>,

        /// Override the deposit currency (BTC, ETH, USDC, USDT)
        #[arg(long)]
        currency: Option<Currency>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Sweep a range of HTR price moves
    Analysis {
        /// Path to the calculator config JSON (default: built-in example)
        file: Option<PathBuf>,

        /// Lowest HTR price change in percent (must be above -100)
        #[arg(long, default_value = "-90", allow_hyphen_values = true)]
        min: f64,

        /// Highest HTR price change in percent
        #[arg(long, default_value = "200", allow_hyphen_values = true)]
        max: f64,

        /// Step between scenarios in percentage points
        #[arg(long, default_value = "10")]
        step: f64,

        /// Override the deposit amount from the config
        #[arg(long)]
        amount: Option<f64>,

        /// Override the deposit currency (BTC, ETH, USDC, USDT)
        #[arg(long)]
        currency: Option<Currency>,

        /// Output format: table (default), json, or csv
        #[arg(long, default_value = "table")]
        format: OutputFormat,

        /// Write json/csv output to this file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Show the current presale price and countdown to the next step
    Presale {
        /// Evaluate at this instant (RFC 3339) instead of now
        #[arg(long)]
        at: Option<String>,

        /// Presale window JSON (default: built-in schedule)
        #[arg(long)]
        window: Option<PathBuf>,

        /// Print the price point as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a calculator config JSON file
    Validate {
        /// Path to the calculator config JSON
        file: PathBuf,
    },

    /// Output the JSON schema for calculator configs
    Schema,

    /// Output an example calculator config JSON to stdout
    Example,
}
