//! Captable CLI - Command Line Operations for the cap table engine
//!
//! This is the operational entry point for the captable distribution
//! library.
//!
//! # Commands
//!
//! - `captable waterfall --holders <file> --exit-value <cents>` - Distribute one exit
//! - `captable scenarios --holders <file> --exit-values <list>` - Evaluate an exit grid
//! - `captable break-points --holders <file> --max-value <cents>` - Find payout breaks
//! - `captable vesting --units <n> --start <date>` - Vested units and timelines
//!
//! # Architecture
//!
//! As the service layer of the workspace, this crate orchestrates the
//! foundation, model, and engine layers behind a unified command-line
//! interface. Holder files are JSON arrays of security holder records.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Cap table distribution engine CLI
#[derive(Parser)]
#[command(name = "captable")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Distribute a single exit value across a holder file
    Waterfall {
        /// Path to the holders file (JSON array)
        #[arg(long)]
        holders: String,

        /// Exit value in cents
        #[arg(short, long)]
        exit_value: i64,

        /// Treat every holder as converted to common
        #[arg(long)]
        convert_to_common: bool,

        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Evaluate the waterfall across a grid of exit values
    Scenarios {
        /// Path to the holders file (JSON array)
        #[arg(long)]
        holders: String,

        /// Comma-separated exit values in cents
        #[arg(long, value_delimiter = ',')]
        exit_values: Vec<i64>,

        /// Upper bound for an evenly spaced grid (alternative to --exit-values)
        #[arg(long)]
        max_value: Option<i64>,

        /// Number of grid samples when --max-value is given
        #[arg(long, default_value = "20")]
        steps: usize,

        /// Treat every holder as converted to common
        #[arg(long)]
        convert_to_common: bool,

        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Discover exit values where the set of paid holders changes
    BreakPoints {
        /// Path to the holders file (JSON array)
        #[arg(long)]
        holders: String,

        /// Upper bound of the search range, in cents
        #[arg(long)]
        max_value: i64,

        /// Number of samples across the range
        #[arg(long, default_value = "100")]
        steps: usize,
    },

    /// Compute vested units or the vesting timeline for a grant
    Vesting {
        /// Total units in the grant
        #[arg(short, long)]
        units: u64,

        /// Vesting commencement date (YYYY-MM-DD)
        #[arg(short, long)]
        start: String,

        /// Cliff length in months
        #[arg(long, default_value = "12")]
        cliff_months: u32,

        /// Schedule duration in months
        #[arg(long, default_value = "48")]
        duration_months: u32,

        /// Vesting frequency (monthly, quarterly, annually)
        #[arg(short, long, default_value = "monthly")]
        frequency: String,

        /// Valuation date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        as_of: Option<String>,

        /// Print the full vesting event timeline
        #[arg(long)]
        timeline: bool,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Waterfall {
            holders,
            exit_value,
            convert_to_common,
            format,
        } => commands::waterfall::run(&holders, exit_value, convert_to_common, &format),
        Commands::Scenarios {
            holders,
            exit_values,
            max_value,
            steps,
            convert_to_common,
            format,
        } => commands::scenarios::run(
            &holders,
            &exit_values,
            max_value,
            steps,
            convert_to_common,
            &format,
        ),
        Commands::BreakPoints {
            holders,
            max_value,
            steps,
        } => commands::break_points::run(&holders, max_value, steps),
        Commands::Vesting {
            units,
            start,
            cliff_months,
            duration_months,
            frequency,
            as_of,
            timeline,
        } => commands::vesting::run(
            units,
            &start,
            cliff_months,
            duration_months,
            &frequency,
            as_of.as_deref(),
            timeline,
        ),
    }
}
