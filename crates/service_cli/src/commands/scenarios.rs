//! Scenarios command implementation.
//!
//! Evaluates the waterfall across an explicit list of exit values or an
//! evenly spaced grid.

use captable_scenarios::{calculate_waterfall_scenarios, exit_grid};
use tracing::info;

use super::{fmt_cents, load_holders};
use crate::{CliError, Result};

/// Run the scenarios command
pub fn run(
    holders_path: &str,
    exit_values: &[i64],
    max_value: Option<i64>,
    steps: usize,
    convert_to_common: bool,
    format: &str,
) -> Result<()> {
    let exits: Vec<i64> = match (exit_values.is_empty(), max_value) {
        (false, None) => exit_values.to_vec(),
        (true, Some(max)) => exit_grid(max, steps),
        (false, Some(_)) => {
            return Err(CliError::InvalidArgument(
                "Pass either --exit-values or --max-value, not both".to_string(),
            ));
        }
        (true, None) => {
            return Err(CliError::InvalidArgument(
                "One of --exit-values or --max-value is required".to_string(),
            ));
        }
    };

    info!("Evaluating {} exit scenarios...", exits.len());
    info!("  Holders: {}", holders_path);

    let holders = load_holders(holders_path)?;
    let results = calculate_waterfall_scenarios(&holders, &exits, convert_to_common)?;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        "table" => {
            println!();
            println!("┌────────────────────┬────────────────────┬──────────────────────┐");
            println!("│ Exit Value         │ Distributed        │ Largest Payout       │");
            println!("├────────────────────┼────────────────────┼──────────────────────┤");
            for result in &results {
                let top = result
                    .distributions
                    .first()
                    .map(|d| d.holder_name.as_str())
                    .unwrap_or("-");
                println!(
                    "│ {:>18} │ {:>18} │ {:<20} │",
                    fmt_cents(result.exit_value),
                    fmt_cents(result.summary.total_distributed),
                    top,
                );
            }
            println!("└────────────────────┴────────────────────┴──────────────────────┘");
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, table",
                other
            )));
        }
    }

    info!("Scenario evaluation complete");
    Ok(())
}
