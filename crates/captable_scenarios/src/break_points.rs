//! Break-point discovery over exit value ranges.

use std::collections::BTreeSet;

use captable_core::money::Cents;
use captable_models::securities::SecurityHolder;
use captable_waterfall::{ValidationError, ValidationIssue};

use crate::runner::{calculate_waterfall_scenarios, exit_grid};

/// Default number of samples for [`find_break_points`].
pub const DEFAULT_STEPS: usize = 100;

/// Finds exit values at which the set of paid holders changes.
///
/// The break-point set is seeded with every holder's full preference value
/// (`liquidation_amount * multiple`, when within range), then the waterfall
/// is sampled at `steps` evenly spaced exit values up to `max_value`; a
/// sample is recorded wherever its ordered list of holders with nonzero
/// payout differs from the previous sample's. The result is sorted and
/// deduplicated.
///
/// This is a deliberately coarse numerical search: a true break point
/// between two samples surfaces at the grid resolution, not at its exact
/// value, and a break confined to a single gap can be missed entirely.
/// Callers needing tighter answers raise `steps`.
///
/// # Errors
///
/// [`ValidationError`] on a malformed holder set, non-positive `max_value`,
/// or zero `steps`.
///
/// # Examples
///
/// ```
/// use captable_models::securities::{Participation, SecurityHolder, SecurityType};
/// use captable_scenarios::{find_break_points, DEFAULT_STEPS};
/// use rust_decimal::Decimal;
///
/// let holders = vec![
///     SecurityHolder::new("common", "Founders", SecurityType::Common, 8_000_000),
///     SecurityHolder::new("series-a", "Fund I", SecurityType::PreferredA, 2_000_000)
///         .with_preference(Decimal::ONE, 500_000_000)
///         .with_participation(Participation::Full)
///         .with_seniority(100),
/// ];
///
/// let points = find_break_points(&holders, 2_000_000_000, DEFAULT_STEPS).unwrap();
/// // The preference threshold is always present
/// assert!(points.contains(&500_000_000));
/// ```
pub fn find_break_points(
    holders: &[SecurityHolder],
    max_value: Cents,
    steps: usize,
) -> Result<Vec<Cents>, ValidationError> {
    let mut issues = Vec::new();
    if max_value <= 0 {
        issues.push(ValidationIssue::input(
            "maxValue",
            format!("max value must be positive, got {}", max_value),
        ));
    }
    if steps == 0 {
        issues.push(ValidationIssue::input("steps", "steps must be positive"));
    }
    if !issues.is_empty() {
        return Err(ValidationError::new(issues));
    }

    let mut points: BTreeSet<Cents> = holders
        .iter()
        .filter_map(SecurityHolder::preference_owed)
        .filter(|&owed| owed > 0 && owed <= max_value)
        .collect();

    let grid = exit_grid(max_value, steps);
    let samples = calculate_waterfall_scenarios(holders, &grid, false)?;

    let mut previous: Option<Vec<String>> = None;
    for sample in &samples {
        let signature: Vec<String> = sample
            .paid_holder_ids()
            .into_iter()
            .map(str::to_string)
            .collect();
        if let Some(ref prev) = previous {
            if *prev != signature {
                points.insert(sample.exit_value);
            }
        }
        previous = Some(signature);
    }

    Ok(points.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use captable_models::securities::{Participation, SecurityType};
    use rust_decimal::Decimal;

    fn holders() -> Vec<SecurityHolder> {
        vec![
            SecurityHolder::new("common", "Founders", SecurityType::Common, 8_000_000),
            SecurityHolder::new("series-a", "Fund I", SecurityType::PreferredA, 2_000_000)
                .with_preference(Decimal::ONE, 500_000_000)
                .with_participation(Participation::Full)
                .with_seniority(100),
        ]
    }

    #[test]
    fn test_seeds_include_preference_thresholds() {
        let points = find_break_points(&holders(), 2_000_000_000, 10).unwrap();
        assert!(points.contains(&500_000_000));
    }

    #[test]
    fn test_detects_common_entering_the_money() {
        // Below the preference only the preferred is paid; the first sample
        // above it pays common too, so a break lands at the grid point
        // following the threshold.
        let points = find_break_points(&holders(), 1_000_000_000, 10).unwrap();
        assert!(points.contains(&600_000_000));
    }

    #[test]
    fn test_sorted_and_deduplicated() {
        // Grid resolution makes 500m both a seed and a detected sample;
        // the output carries it once, in order.
        let points = find_break_points(&holders(), 1_000_000_000, 100).unwrap();
        assert!(points.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_seeds_beyond_range_are_dropped() {
        let points = find_break_points(&holders(), 100_000_000, 10).unwrap();
        assert!(!points.contains(&500_000_000));
    }

    #[test]
    fn test_no_preferences_no_break_points() {
        let plain = vec![SecurityHolder::new(
            "common",
            "Founders",
            SecurityType::Common,
            1_000_000,
        )];
        let points = find_break_points(&plain, 1_000_000_000, 20).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let err = find_break_points(&holders(), 0, 10).unwrap_err();
        assert!(err.mentions_field("maxValue"));

        let err = find_break_points(&holders(), 1_000, 0).unwrap_err();
        assert!(err.mentions_field("steps"));

        let err = find_break_points(&[], 1_000, 10).unwrap_err();
        assert!(err.mentions_field("holders"));
    }

    #[test]
    fn test_coarse_sampling_misses_narrow_breaks() {
        // With a single sample the whole interior of the range is one gap:
        // the only output is the seeded threshold.
        let points = find_break_points(&holders(), 2_000_000_000, 1).unwrap();
        assert_eq!(points, vec![500_000_000]);
    }
}
