//! Waterfall command implementation.
//!
//! Distributes a single exit value across a holder file and prints the
//! per-holder payout.

use captable_waterfall::{calculate_waterfall, WaterfallResult};
use tracing::info;

use super::{fmt_cents, load_holders};
use crate::{CliError, Result};

/// Run the waterfall command
pub fn run(holders_path: &str, exit_value: i64, convert_to_common: bool, format: &str) -> Result<()> {
    info!("Calculating waterfall...");
    info!("  Holders: {}", holders_path);
    info!("  Exit value: {}", fmt_cents(exit_value));
    info!("  Convert to common: {}", convert_to_common);

    let holders = load_holders(holders_path)?;
    let result = calculate_waterfall(&holders, exit_value, convert_to_common)?;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        "table" => {
            print_table(&result);
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, table",
                other
            )));
        }
    }

    info!("Waterfall complete");
    Ok(())
}

fn print_table(result: &WaterfallResult) {
    println!();
    println!("Exit value: {}", fmt_cents(result.exit_value));
    println!("┌──────────────────────┬────────────────────┬────────────────────┬────────────────────┬────────────────────┬──────────┐");
    println!("│ Holder               │ Liquidation Pref   │ Participation      │ Common             │ Total              │ Share    │");
    println!("├──────────────────────┼────────────────────┼────────────────────┼────────────────────┼────────────────────┼──────────┤");
    for d in &result.distributions {
        println!(
            "│ {:<20} │ {:>18} │ {:>18} │ {:>18} │ {:>18} │ {:>7}% │",
            truncate(&d.holder_name, 20),
            fmt_cents(d.liquidation_pref),
            fmt_cents(d.participation),
            fmt_cents(d.common),
            fmt_cents(d.total),
            d.percentage.round_dp(2),
        );
    }
    println!("├──────────────────────┼────────────────────┼────────────────────┼────────────────────┼────────────────────┼──────────┤");
    println!(
        "│ {:<20} │ {:>18} │ {:>18} │ {:>18} │ {:>18} │ {:>8} │",
        "Total",
        fmt_cents(result.summary.total_liquidation_preference),
        fmt_cents(result.summary.total_participation),
        fmt_cents(result.summary.total_common),
        fmt_cents(result.summary.total_distributed),
        "",
    );
    println!("└──────────────────────┴────────────────────┴────────────────────┴────────────────────┴────────────────────┴──────────┘");

    let undistributed = result.undistributed();
    if undistributed > 0 {
        println!("Undistributed (no common pool): {}", fmt_cents(undistributed));
    }
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let cut: String = s.chars().take(width - 1).collect();
        format!("{}…", cut)
    }
}
