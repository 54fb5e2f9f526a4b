//! Break-points command implementation.
//!
//! Samples the waterfall across an exit range and reports the values where
//! the set of paid holders changes.

use captable_scenarios::find_break_points;
use tracing::info;

use super::{fmt_cents, load_holders};
use crate::Result;

/// Run the break-points command
pub fn run(holders_path: &str, max_value: i64, steps: usize) -> Result<()> {
    info!("Searching for break points...");
    info!("  Holders: {}", holders_path);
    info!("  Range: 0 to {}", fmt_cents(max_value));
    info!("  Samples: {}", steps);

    let holders = load_holders(holders_path)?;
    let points = find_break_points(&holders, max_value, steps)?;

    if points.is_empty() {
        println!("No break points found below {}", fmt_cents(max_value));
    } else {
        println!("Break points (grid resolution {}):", fmt_cents(max_value / steps.max(1) as i64));
        for point in &points {
            println!("  {}", fmt_cents(*point));
        }
    }

    info!("Break-point search complete");
    Ok(())
}
