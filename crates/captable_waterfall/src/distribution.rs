//! Waterfall output records.
//!
//! These types form the in-process data contract consumed by the UI layer,
//! the report generator, and the tax estimator. Field names on the wire are
//! camelCase; money fields are integer cents; only the display-oriented
//! `percentage` is a decimal ratio.

use captable_core::money::Cents;
use captable_models::securities::SecurityType;
use rust_decimal::Decimal;

/// Per-holder payout for a single exit value.
///
/// Bucket amounts are each non-negative cents;
/// `total = liquidation_pref + participation + common`.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterfallDistribution {
    /// Id of the holder this payout belongs to.
    pub holder_id: String,
    /// Holder display name.
    pub holder_name: String,
    /// Security class of the position.
    pub security_type: SecurityType,
    /// Share count of the position.
    pub shares: u64,
    /// Amount received as liquidation preference.
    pub liquidation_pref: Cents,
    /// Amount received through participation.
    pub participation: Cents,
    /// Amount received in the residual common distribution.
    pub common: Cents,
    /// Total proceeds to this holder.
    pub total: Cents,
    /// Share of the exit, in percent. Display only.
    pub percentage: Decimal,
    /// Total proceeds divided by share count, in whole cents per share.
    /// Precision-limited: sub-cent share prices floor to zero.
    pub implied_share_price: Cents,
}

/// Bucket totals across all holders for one exit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterfallSummary {
    /// Sum of every holder's total payout.
    pub total_distributed: Cents,
    /// Sum of the liquidation preference buckets.
    pub total_liquidation_preference: Cents,
    /// Sum of the participation buckets.
    pub total_participation: Cents,
    /// Sum of the common distribution buckets.
    pub total_common: Cents,
    /// Total shares across all holders.
    pub total_shares: u64,
}

/// Complete distribution of one exit value across the holder set.
///
/// `distributions` is ordered by `total` descending (stable with respect to
/// input order). `summary.total_distributed` equals the exit value to
/// within one minor unit whenever a common-equivalent pool exists to absorb
/// the residual; no value is fabricated.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterfallResult {
    /// The exit value distributed.
    pub exit_value: Cents,
    /// Per-holder payouts, largest total first.
    pub distributions: Vec<WaterfallDistribution>,
    /// Bucket totals.
    pub summary: WaterfallSummary,
}

impl WaterfallResult {
    /// Looks up a holder's distribution by id.
    pub fn distribution(&self, holder_id: &str) -> Option<&WaterfallDistribution> {
        self.distributions.iter().find(|d| d.holder_id == holder_id)
    }

    /// Exit value not absorbed by any bucket.
    ///
    /// Non-zero only when no common-equivalent pool existed to receive the
    /// residual (a valid, degenerate state).
    pub fn undistributed(&self) -> Cents {
        self.exit_value - self.summary.total_distributed
    }

    /// Ids of holders with a nonzero payout, in distribution order.
    pub fn paid_holder_ids(&self) -> Vec<&str> {
        self.distributions
            .iter()
            .filter(|d| d.total > 0)
            .map(|d| d.holder_id.as_str())
            .collect()
    }
}
