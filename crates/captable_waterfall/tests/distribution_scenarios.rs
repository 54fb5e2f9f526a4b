//! End-to-end distribution scenarios over realistic cap tables.

use captable_models::securities::{Participation, SecurityHolder, SecurityType};
use captable_waterfall::calculate_waterfall;
use rust_decimal::Decimal;

fn seed_round() -> Vec<SecurityHolder> {
    vec![
        SecurityHolder::new("common", "Founders", SecurityType::Common, 8_000_000),
        SecurityHolder::new("series-a", "Fund I", SecurityType::PreferredA, 2_000_000)
            .with_preference(Decimal::ONE, 500_000_000)
            .with_participation(Participation::Full)
            .with_seniority(100),
    ]
}

#[test]
fn sole_common_holder_receives_full_exit() {
    let holders = vec![SecurityHolder::new(
        "common",
        "Founders",
        SecurityType::Common,
        10_000_000,
    )];
    let result = calculate_waterfall(&holders, 1_000, false).unwrap();

    assert_eq!(result.distributions.len(), 1);
    assert_eq!(result.distributions[0].total, 1_000);
    assert_eq!(result.summary.total_distributed, 1_000);
    assert_eq!(result.summary.total_shares, 10_000_000);
    // 1000 cents over ten million shares: the per-share price is below one
    // cent and floors to zero.
    assert_eq!(result.distributions[0].implied_share_price, 0);
}

#[test]
fn exit_at_exactly_the_preference_goes_entirely_to_preferred() {
    let result = calculate_waterfall(&seed_round(), 500_000_000, false).unwrap();

    let series_a = result.distribution("series-a").unwrap();
    assert_eq!(series_a.liquidation_pref, 500_000_000);
    assert_eq!(series_a.total, 500_000_000);
    assert_eq!(series_a.percentage, Decimal::from(100));

    let common = result.distribution("common").unwrap();
    assert_eq!(common.total, 0);
    assert_eq!(common.common, 0);
    assert_eq!(result.summary.total_common, 0);
    assert_eq!(result.summary.total_distributed, 500_000_000);
}

#[test]
fn exit_above_the_preference_adds_participation() {
    let result = calculate_waterfall(&seed_round(), 2_400_000_000, false).unwrap();

    let series_a = result.distribution("series-a").unwrap();
    assert_eq!(series_a.liquidation_pref, 500_000_000);
    assert!(series_a.participation > 0);
    assert!(series_a.total > 500_000_000);

    // Fully participating at 20% of the as-converted pool: the residual
    // 1.9bn splits 380m / 1.52bn.
    assert_eq!(series_a.participation, 380_000_000);
    assert_eq!(result.distribution("common").unwrap().total, 1_520_000_000);
    assert_eq!(result.summary.total_distributed, 2_400_000_000);
}

#[test]
fn stacked_rounds_pay_seniority_first() {
    let holders = vec![
        SecurityHolder::new("common", "Founders", SecurityType::Common, 6_000_000),
        SecurityHolder::new("series-a", "Fund I", SecurityType::PreferredA, 2_000_000)
            .with_preference(Decimal::ONE, 300_000_000)
            .with_seniority(100),
        SecurityHolder::new("series-b", "Fund II", SecurityType::PreferredB, 2_000_000)
            .with_preference(Decimal::new(15, 1), 400_000_000)
            .with_seniority(200),
    ];

    // Only enough to cover the senior B preference (1.5x * 400m = 600m)
    // and part of A's.
    let result = calculate_waterfall(&holders, 700_000_000, false).unwrap();
    assert_eq!(result.distribution("series-b").unwrap().total, 600_000_000);
    assert_eq!(result.distribution("series-a").unwrap().total, 100_000_000);
    assert_eq!(result.distribution("common").unwrap().total, 0);
    assert_eq!(result.summary.total_distributed, 700_000_000);
}

#[test]
fn conversion_beats_preference_at_high_exits() {
    // At a large exit a 1x non-participating preferred is better off
    // converting: the engine computes both forms, the caller compares.
    let holders = vec![
        SecurityHolder::new("common", "Founders", SecurityType::Common, 8_000_000),
        SecurityHolder::new("series-a", "Fund I", SecurityType::PreferredA, 2_000_000)
            .with_preference(Decimal::ONE, 500_000_000)
            .with_seniority(100),
    ];

    let exit = 10_000_000_000;
    let as_preferred = calculate_waterfall(&holders, exit, false).unwrap();
    let as_converted = calculate_waterfall(&holders, exit, true).unwrap();

    let pref_total = as_preferred.distribution("series-a").unwrap().total;
    let conv_total = as_converted.distribution("series-a").unwrap().total;
    assert_eq!(pref_total, 500_000_000);
    assert_eq!(conv_total, 2_000_000_000); // 20% of the exit
    assert!(conv_total > pref_total);
}

#[test]
fn malformed_input_yields_aggregated_validation_error() {
    // Empty holder set
    let err = calculate_waterfall(&[], 1_000, false).unwrap_err();
    assert!(err.mentions_field("holders"));

    // Non-positive exit value
    let holders = vec![SecurityHolder::new(
        "common",
        "Founders",
        SecurityType::Common,
        1_000,
    )];
    let err = calculate_waterfall(&holders, 0, false).unwrap_err();
    assert!(err.mentions_field("exitValue"));

    // Several problems reported together
    let bad = vec![
        SecurityHolder::new("h-1", "A", SecurityType::Common, 0),
        SecurityHolder::new("h-2", "B", SecurityType::PreferredA, 1_000)
            .with_preference(Decimal::ONE, -5),
    ];
    let err = calculate_waterfall(&bad, -1, false).unwrap_err();
    assert!(err.len() >= 3);
}

#[test]
fn holder_records_are_not_mutated() {
    let holders = seed_round();
    let snapshot = holders.clone();
    let _ = calculate_waterfall(&holders, 2_400_000_000, false).unwrap();
    assert_eq!(holders, snapshot);
}
