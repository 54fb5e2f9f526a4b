//! Vesting command implementation.
//!
//! Computes vested units as of a date, or prints the full event timeline
//! for a grant.

use captable_core::types::Date;
use captable_models::vesting::{VestingFrequency, VestingSchedule};
use tracing::info;

use crate::{CliError, Result};

/// Run the vesting command
#[allow(clippy::too_many_arguments)]
pub fn run(
    units: u64,
    start: &str,
    cliff_months: u32,
    duration_months: u32,
    frequency: &str,
    as_of: Option<&str>,
    timeline: bool,
) -> Result<()> {
    let start = Date::parse(start)?;
    let frequency: VestingFrequency = frequency
        .parse()
        .map_err(CliError::InvalidArgument)?;
    let schedule = VestingSchedule::new(start, cliff_months, duration_months, frequency)?;

    info!("Vesting schedule: {} units, {} cliff / {} months, {}",
        units, cliff_months, duration_months, frequency);

    if timeline {
        print_timeline(&schedule, units);
        return Ok(());
    }

    let as_of = match as_of {
        Some(s) => Date::parse(s)?,
        None => Date::today(),
    };
    let vested = schedule.vested_units(units, as_of);

    println!();
    println!("As of {}:", as_of);
    println!("  Vested:   {:>12}", vested);
    println!("  Unvested: {:>12}", schedule.unvested_units(units, as_of));
    match schedule.next_vesting_date(as_of) {
        Some(next) => println!("  Next vesting date: {}", next),
        None => println!("  Fully vested"),
    }

    Ok(())
}

fn print_timeline(schedule: &VestingSchedule, units: u64) {
    println!();
    println!("┌────────────┬──────────────┬──────────────┐");
    println!("│ Date       │ Vesting      │ Cumulative   │");
    println!("├────────────┼──────────────┼──────────────┤");
    for event in schedule.events(units) {
        println!(
            "│ {} │ {:>12} │ {:>12} │",
            event.date, event.vested_units, event.cumulative_vested,
        );
    }
    println!("└────────────┴──────────────┴──────────────┘");
}
