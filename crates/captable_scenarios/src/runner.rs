//! Scenario grid evaluation.

use captable_core::money::Cents;
use captable_models::securities::SecurityHolder;
use captable_waterfall::{calculate_waterfall, ValidationError, WaterfallResult};
use rayon::prelude::*;

/// Minimum grid size before evaluations fan out across the thread pool.
///
/// Small grids are cheaper sequentially than the fork-join overhead.
pub const PARALLEL_THRESHOLD: usize = 32;

/// Evaluates the waterfall independently at each exit value.
///
/// Results are returned in the order of `exit_values`. Grids of
/// [`PARALLEL_THRESHOLD`] or more values run on the Rayon thread pool;
/// every evaluation is a pure function of its inputs, so the parallel and
/// sequential paths produce identical output.
///
/// # Errors
///
/// Propagates the engine's [`ValidationError`]; the holder set is the same
/// for every sample, so the first failure describes them all.
///
/// # Examples
///
/// ```
/// use captable_models::securities::{SecurityHolder, SecurityType};
/// use captable_scenarios::calculate_waterfall_scenarios;
///
/// let holders = vec![SecurityHolder::new("c", "C", SecurityType::Common, 1_000)];
/// let results = calculate_waterfall_scenarios(&holders, &[500, 1_500, 1_000], false).unwrap();
/// let exits: Vec<i64> = results.iter().map(|r| r.exit_value).collect();
/// assert_eq!(exits, vec![500, 1_500, 1_000]);
/// ```
pub fn calculate_waterfall_scenarios(
    holders: &[SecurityHolder],
    exit_values: &[Cents],
    convert_to_common: bool,
) -> Result<Vec<WaterfallResult>, ValidationError> {
    if exit_values.len() >= PARALLEL_THRESHOLD {
        exit_values
            .par_iter()
            .map(|&exit| calculate_waterfall(holders, exit, convert_to_common))
            .collect()
    } else {
        exit_values
            .iter()
            .map(|&exit| calculate_waterfall(holders, exit, convert_to_common))
            .collect()
    }
}

/// Builds `steps` evenly spaced exit values up to `max_value`.
///
/// Values are `k * max_value / steps` for `k = 1..=steps` (128-bit
/// multiply), so the final value is exactly `max_value`. Zero values and
/// duplicates, which arise when `max_value < steps`, are dropped; the grid
/// is strictly ascending and every value is a valid exit.
///
/// # Examples
///
/// ```
/// use captable_scenarios::exit_grid;
///
/// assert_eq!(exit_grid(1_000, 4), vec![250, 500, 750, 1_000]);
/// assert_eq!(exit_grid(3, 5), vec![1, 2, 3]);
/// assert!(exit_grid(0, 10).is_empty());
/// ```
pub fn exit_grid(max_value: Cents, steps: usize) -> Vec<Cents> {
    if max_value <= 0 || steps == 0 {
        return Vec::new();
    }
    let mut grid = Vec::with_capacity(steps);
    let mut previous = 0;
    for k in 1..=steps {
        let value = (max_value as i128 * k as i128 / steps as i128) as Cents;
        if value > previous {
            grid.push(value);
            previous = value;
        }
    }
    grid
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
    fn test_results_match_input_order() {
        let exits = vec![2_000_000_000, 1_000, 500_000_000];
        let results = calculate_waterfall_scenarios(&holders(), &exits, false).unwrap();
        let got: Vec<Cents> = results.iter().map(|r| r.exit_value).collect();
        assert_eq!(got, exits);
    }

    #[test]
    fn test_parallel_path_matches_sequential() {
        // A grid large enough to take the parallel path must agree with
        // per-value evaluation.
        let exits: Vec<Cents> = (1..=64).map(|k| k * 50_000_000).collect();
        assert!(exits.len() >= PARALLEL_THRESHOLD);
        let batch = calculate_waterfall_scenarios(&holders(), &exits, false).unwrap();
        for (exit, result) in exits.iter().zip(&batch) {
            let single = calculate_waterfall(&holders(), *exit, false).unwrap();
            assert_eq!(result, &single);
            assert_eq!(result.exit_value, *exit);
        }
    }

    #[test]
    fn test_each_sample_is_independent() {
        let exits = vec![500_000_000, 500_000_000];
        let results = calculate_waterfall_scenarios(&holders(), &exits, false).unwrap();
        assert_eq!(results[0], results[1]);
    }

    #[test]
    fn test_validation_error_propagates() {
        let err = calculate_waterfall_scenarios(&[], &[1_000], false).unwrap_err();
        assert!(err.mentions_field("holders"));

        // A bad exit value anywhere in the grid fails the batch
        let err = calculate_waterfall_scenarios(&holders(), &[1_000, 0], false).unwrap_err();
        assert!(err.mentions_field("exitValue"));
    }

    #[test]
    fn test_empty_grid_is_empty_result() {
        let results = calculate_waterfall_scenarios(&holders(), &[], false).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_exit_grid_even_spacing() {
        assert_eq!(exit_grid(1_000, 4), vec![250, 500, 750, 1_000]);
        assert_eq!(exit_grid(1_000_000_000, 2), vec![500_000_000, 1_000_000_000]);
    }

    #[test]
    fn test_exit_grid_ends_exactly_at_max() {
        for steps in [1usize, 3, 7, 100] {
            let grid = exit_grid(999_999_937, steps);
            assert_eq!(*grid.last().unwrap(), 999_999_937);
            assert!(grid.len() <= steps);
        }
    }

    #[test]
    fn test_exit_grid_strictly_ascending_and_positive() {
        let grid = exit_grid(3, 5);
        assert_eq!(grid, vec![1, 2, 3]);
        let grid = exit_grid(10_000, 100);
        assert!(grid.windows(2).all(|w| w[0] < w[1]));
        assert!(grid.iter().all(|&v| v > 0));
    }

    #[test]
    fn test_exit_grid_degenerate_inputs() {
        assert!(exit_grid(0, 10).is_empty());
        assert!(exit_grid(-5, 10).is_empty());
        assert!(exit_grid(1_000, 0).is_empty());
    }
}
