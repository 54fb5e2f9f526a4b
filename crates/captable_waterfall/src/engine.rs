//! The three-pass exit waterfall.

use std::cmp::Reverse;

use captable_core::money::{allocate, cents_floor, Cents};
use captable_models::securities::{SecurityHolder, SecurityType};
use rust_decimal::Decimal;

use crate::distribution::{WaterfallDistribution, WaterfallResult, WaterfallSummary};
use crate::error::ValidationError;
use crate::validate;

/// Per-holder bucket accumulator, stack-scoped to one engine call.
///
/// Indexed in parallel with the input holder slice; built and discarded
/// within a single computation, never shared across calls.
#[derive(Debug, Clone, Copy, Default)]
struct Buckets {
    liquidation_pref: Cents,
    participation: Cents,
    common: Cents,
}

impl Buckets {
    #[inline]
    fn total(&self) -> Cents {
        self.liquidation_pref + self.participation + self.common
    }
}

/// Distributes `exit_value` across `holders` through the waterfall.
///
/// Passes run in order over the value remaining: liquidation preferences by
/// descending seniority, participation for participating preferred, then
/// the residual common distribution. With `convert_to_common` the
/// preference and participation passes are skipped entirely and the whole
/// exit value is split pro rata over as-converted shares.
///
/// Returns distributions sorted by total payout descending (stable), plus
/// bucket totals. Fails only on malformed input; every numeric edge case
/// (underwater preferences, exhausted proceeds, empty pools) is a valid
/// zero-bucket outcome.
///
/// # Errors
///
/// [`ValidationError`] aggregating all input problems: empty holder set,
/// non-positive exit value, zero share counts, negative or incoherent
/// preference/cap/strike terms, duplicate ids.
///
/// # Examples
///
/// ```
/// use captable_models::securities::{Participation, SecurityHolder, SecurityType};
/// use captable_waterfall::calculate_waterfall;
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
/// // At exactly the preference, the preferred takes everything
/// let result = calculate_waterfall(&holders, 500_000_000, false).unwrap();
/// assert_eq!(result.distribution("series-a").unwrap().total, 500_000_000);
/// assert_eq!(result.distribution("common").unwrap().total, 0);
/// ```
pub fn calculate_waterfall(
    holders: &[SecurityHolder],
    exit_value: Cents,
    convert_to_common: bool,
) -> Result<WaterfallResult, ValidationError> {
    validate::validate(holders, exit_value)?;

    let mut buckets = vec![Buckets::default(); holders.len()];
    let mut remaining = exit_value;

    if !convert_to_common {
        remaining = pay_liquidation_preferences(holders, &mut buckets, remaining);
        remaining = pay_participation(holders, &mut buckets, remaining);
    }
    distribute_common(holders, &mut buckets, remaining, exit_value, convert_to_common);

    Ok(assemble(holders, &buckets, exit_value))
}

/// Pass 1: liquidation preferences in descending seniority.
///
/// Ties keep input order (stable sort). Each holder with preference terms
/// is owed `liquidation_amount * multiple`, paid up to the value remaining;
/// the pass stops as soon as the proceeds are exhausted.
fn pay_liquidation_preferences(
    holders: &[SecurityHolder],
    buckets: &mut [Buckets],
    mut remaining: Cents,
) -> Cents {
    let mut order: Vec<usize> = (0..holders.len()).collect();
    order.sort_by_key(|&i| Reverse(holders[i].seniority));

    for i in order {
        if remaining == 0 {
            break;
        }
        if let Some(owed) = holders[i].preference_owed() {
            let paid = owed.min(remaining);
            if paid > 0 {
                buckets[i].liquidation_pref = paid;
                remaining -= paid;
            }
        }
    }
    remaining
}

/// Pass 2: participation for participating preferred holders.
///
/// Eligible receivers are holders with CAPPED/FULL participation whose
/// preference bucket was actually paid; the pool they share against also
/// counts every common holder and zero-strike option at as-converted
/// shares. A capped holder's combined preference + participation is clamped
/// to `liquidation_amount * participation_cap`; the clamped excess is not
/// redistributed within this pass and instead flows into pass 3.
fn pay_participation(
    holders: &[SecurityHolder],
    buckets: &mut [Buckets],
    mut remaining: Cents,
) -> Cents {
    if remaining == 0 {
        return remaining;
    }

    let receives: Vec<bool> = (0..holders.len())
        .map(|i| holders[i].participation.participates() && buckets[i].liquidation_pref > 0)
        .collect();

    let mut pool = Decimal::ZERO;
    for (i, holder) in holders.iter().enumerate() {
        let common_side =
            holder.security_type == SecurityType::Common || holder.is_zero_strike_option();
        if receives[i] || common_side {
            pool += holder.as_converted_shares();
        }
    }
    if pool <= Decimal::ZERO {
        return remaining;
    }

    let pass_value = Decimal::from(remaining);
    for (i, holder) in holders.iter().enumerate() {
        if !receives[i] {
            continue;
        }
        let mut payout = cents_floor(pass_value * holder.as_converted_shares() / pool);
        if let Some(cap_total) = holder.participation_cap_amount() {
            let headroom = (cap_total - buckets[i].liquidation_pref).max(0);
            payout = payout.min(headroom);
        }
        let payout = payout.min(remaining);
        if payout > 0 {
            buckets[i].participation = payout;
            remaining -= payout;
        }
    }
    remaining
}

/// Pass 3: residual common distribution.
///
/// Under full conversion the entire exit value is split over every holder
/// at as-converted shares, ignoring the earlier passes. Otherwise the
/// remaining value goes pro rata to common holders (full shares),
/// no-preference non-participating holders (as-converted), and options or
/// warrants whose strike is below the implied price over the
/// common pool estimate. An empty pool pays nothing and the residual is
/// reported undistributed.
fn distribute_common(
    holders: &[SecurityHolder],
    buckets: &mut [Buckets],
    remaining: Cents,
    exit_value: Cents,
    convert_to_common: bool,
) {
    if convert_to_common {
        let weights: Vec<Decimal> = holders.iter().map(|h| h.as_converted_shares()).collect();
        for (bucket, paid) in buckets.iter_mut().zip(allocate(exit_value, &weights)) {
            bucket.common = paid;
        }
        return;
    }
    if remaining <= 0 {
        return;
    }

    let mut weights = vec![Decimal::ZERO; holders.len()];
    for (i, holder) in holders.iter().enumerate() {
        if holder.security_type == SecurityType::Common {
            weights[i] = Decimal::from(holder.shares);
        } else if holder.is_zero_strike_option() {
            // A zero strike is in the money at any positive implied price.
            weights[i] = holder.as_converted_shares();
        } else if !holder.security_type.is_option_like()
            && !holder.participation.participates()
            && !holder.has_preference()
        {
            weights[i] = holder.as_converted_shares();
        }
    }

    // Struck options and warrants join only when in the money at the
    // implied price over the pool estimate; with no estimate the implied
    // price is undefined and they stay out.
    let pool_estimate: Decimal = weights.iter().sum();
    if pool_estimate > Decimal::ZERO {
        let implied_price = Decimal::from(exit_value) / pool_estimate;
        for (i, holder) in holders.iter().enumerate() {
            if holder.security_type.is_option_like()
                && Decimal::from(holder.strike_price.unwrap_or(0)) < implied_price
            {
                weights[i] = holder.as_converted_shares();
            }
        }
    }

    for (bucket, paid) in buckets.iter_mut().zip(allocate(remaining, &weights)) {
        bucket.common = paid;
    }
}

/// Builds the sorted result and summary from the filled buckets.
fn assemble(holders: &[SecurityHolder], buckets: &[Buckets], exit_value: Cents) -> WaterfallResult {
    let mut distributions: Vec<WaterfallDistribution> = holders
        .iter()
        .zip(buckets)
        .map(|(holder, bucket)| {
            let total = bucket.total();
            let percentage = (Decimal::from(total) * Decimal::ONE_HUNDRED
                / Decimal::from(exit_value))
            .round_dp(6);
            WaterfallDistribution {
                holder_id: holder.id.clone(),
                holder_name: holder.name.clone(),
                security_type: holder.security_type,
                shares: holder.shares,
                liquidation_pref: bucket.liquidation_pref,
                participation: bucket.participation,
                common: bucket.common,
                total,
                percentage,
                implied_share_price: total / holder.shares as Cents,
            }
        })
        .collect();
    distributions.sort_by(|a, b| b.total.cmp(&a.total));

    let summary = WaterfallSummary {
        total_distributed: buckets.iter().map(Buckets::total).sum(),
        total_liquidation_preference: buckets.iter().map(|b| b.liquidation_pref).sum(),
        total_participation: buckets.iter().map(|b| b.participation).sum(),
        total_common: buckets.iter().map(|b| b.common).sum(),
        total_shares: holders.iter().map(|h| h.shares).sum(),
    };

    WaterfallResult {
        exit_value,
        distributions,
        summary,
    }
}
