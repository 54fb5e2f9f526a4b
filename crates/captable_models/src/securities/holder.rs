//! Security holder record.

use captable_core::money::{mul_multiple, Cents};
use rust_decimal::Decimal;

use super::{Participation, SecurityType};

fn default_conversion_ratio() -> Decimal {
    Decimal::ONE
}

/// A single position on the cap table, as presented to the waterfall.
///
/// Holders are caller-supplied snapshots: the engine never mutates them and
/// nothing is cached across calls. Share counts are the holder's *vested*
/// shares as of the exit date; unvested grants are resolved upstream by the
/// vesting calculator.
///
/// Optional terms default to "plain" securities: no liquidation preference,
/// no participation, 1:1 conversion, seniority 0.
///
/// # Examples
///
/// ```
/// use captable_models::securities::{Participation, SecurityHolder, SecurityType};
/// use rust_decimal::Decimal;
///
/// // 2x participating preferred, capped at 3x invested capital
/// let holder = SecurityHolder::new("inv-2", "Fund II", SecurityType::PreferredB, 1_000_000)
///     .with_preference(Decimal::TWO, 250_000_000)
///     .with_participation(Participation::Capped)
///     .with_participation_cap(Decimal::from(3))
///     .with_seniority(200);
///
/// assert_eq!(holder.preference_owed(), Some(500_000_000));
/// assert_eq!(holder.participation_cap_amount(), Some(750_000_000));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityHolder {
    /// Unique holder identifier.
    pub id: String,
    /// Holder display name.
    pub name: String,
    /// Security class of the position.
    pub security_type: SecurityType,
    /// Vested share count (must be positive).
    pub shares: u64,
    /// Liquidation preference multiple (e.g. 1.0, 2.0); absent means no
    /// preference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liquidation_preference: Option<Decimal>,
    /// Invested capital in cents; required when a preference is present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liquidation_amount: Option<Cents>,
    /// Participation rights after the preference is paid.
    #[serde(default)]
    pub participation: Participation,
    /// Participation cap multiple; required when participation is CAPPED.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participation_cap: Option<Decimal>,
    /// Preferred-to-common conversion ratio.
    #[serde(default = "default_conversion_ratio")]
    pub conversion_ratio: Decimal,
    /// Strike price in cents (options/warrants only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strike_price: Option<Cents>,
    /// Payout priority among preference holders; higher is paid first.
    /// Ties resolve in input order.
    #[serde(default)]
    pub seniority: i32,
}

impl SecurityHolder {
    /// Creates a plain holder with no preference or participation terms.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        security_type: SecurityType,
        shares: u64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            security_type,
            shares,
            liquidation_preference: None,
            liquidation_amount: None,
            participation: Participation::None,
            participation_cap: None,
            conversion_ratio: Decimal::ONE,
            strike_price: None,
            seniority: 0,
        }
    }

    /// Sets the liquidation preference multiple and invested capital.
    pub fn with_preference(mut self, multiple: Decimal, invested: Cents) -> Self {
        self.liquidation_preference = Some(multiple);
        self.liquidation_amount = Some(invested);
        self
    }

    /// Sets the participation rights.
    pub fn with_participation(mut self, participation: Participation) -> Self {
        self.participation = participation;
        self
    }

    /// Sets the participation cap multiple.
    pub fn with_participation_cap(mut self, cap: Decimal) -> Self {
        self.participation_cap = Some(cap);
        self
    }

    /// Sets the preferred-to-common conversion ratio.
    pub fn with_conversion_ratio(mut self, ratio: Decimal) -> Self {
        self.conversion_ratio = ratio;
        self
    }

    /// Sets the strike price (options/warrants).
    pub fn with_strike_price(mut self, strike: Cents) -> Self {
        self.strike_price = Some(strike);
        self
    }

    /// Sets the payout seniority.
    pub fn with_seniority(mut self, seniority: i32) -> Self {
        self.seniority = seniority;
        self
    }

    /// Returns true when both preference terms are present.
    #[inline]
    pub fn has_preference(&self) -> bool {
        self.liquidation_preference.is_some() && self.liquidation_amount.is_some()
    }

    /// Preference owed at an exit: `liquidation_amount * multiple`.
    ///
    /// `None` when either term is absent.
    pub fn preference_owed(&self) -> Option<Cents> {
        match (self.liquidation_preference, self.liquidation_amount) {
            (Some(multiple), Some(amount)) => Some(mul_multiple(amount, multiple)),
            _ => None,
        }
    }

    /// Ceiling on total proceeds for a capped participant:
    /// `liquidation_amount * participation_cap`.
    ///
    /// `None` unless both the cap and the invested amount are present.
    pub fn participation_cap_amount(&self) -> Option<Cents> {
        match (self.participation_cap, self.liquidation_amount) {
            (Some(cap), Some(amount)) => Some(mul_multiple(amount, cap)),
            _ => None,
        }
    }

    /// As-converted share count: `shares * conversion_ratio`.
    #[inline]
    pub fn as_converted_shares(&self) -> Decimal {
        Decimal::from(self.shares) * self.conversion_ratio
    }

    /// Returns true for a zero-strike option (economically common).
    #[inline]
    pub fn is_zero_strike_option(&self) -> bool {
        self.security_type.is_option_like() && self.strike_price.unwrap_or(0) == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let h = SecurityHolder::new("h-1", "Founder", SecurityType::Common, 100);
        assert_eq!(h.participation, Participation::None);
        assert_eq!(h.conversion_ratio, Decimal::ONE);
        assert_eq!(h.seniority, 0);
        assert!(!h.has_preference());
        assert_eq!(h.preference_owed(), None);
    }

    #[test]
    fn test_preference_owed() {
        let h = SecurityHolder::new("h-1", "Fund", SecurityType::PreferredA, 100)
            .with_preference(Decimal::new(15, 1), 1_000_000);
        assert_eq!(h.preference_owed(), Some(1_500_000));
    }

    #[test]
    fn test_participation_cap_amount() {
        let h = SecurityHolder::new("h-1", "Fund", SecurityType::PreferredA, 100)
            .with_preference(Decimal::ONE, 1_000_000)
            .with_participation(Participation::Capped)
            .with_participation_cap(Decimal::from(3));
        assert_eq!(h.participation_cap_amount(), Some(3_000_000));

        let no_cap = SecurityHolder::new("h-2", "Fund", SecurityType::PreferredA, 100)
            .with_preference(Decimal::ONE, 1_000_000);
        assert_eq!(no_cap.participation_cap_amount(), None);
    }

    #[test]
    fn test_as_converted_shares() {
        let h = SecurityHolder::new("h-1", "Fund", SecurityType::PreferredB, 1_000)
            .with_conversion_ratio(Decimal::new(15, 1));
        assert_eq!(h.as_converted_shares(), Decimal::from(1_500));
    }

    #[test]
    fn test_zero_strike_option() {
        let opt = SecurityHolder::new("h-1", "Pool", SecurityType::Option, 100);
        assert!(opt.is_zero_strike_option());

        let struck = SecurityHolder::new("h-2", "Pool", SecurityType::Option, 100)
            .with_strike_price(50);
        assert!(!struck.is_zero_strike_option());

        let common = SecurityHolder::new("h-3", "Founder", SecurityType::Common, 100);
        assert!(!common.is_zero_strike_option());
    }

    #[test]
    fn test_serde_camel_case_contract() {
        let h = SecurityHolder::new("inv-1", "Fund I", SecurityType::PreferredA, 2_000_000)
            .with_preference(Decimal::ONE, 500_000_000)
            .with_participation(Participation::Full)
            .with_seniority(100);

        let json = serde_json::to_value(&h).unwrap();
        assert_eq!(json["securityType"], "PREFERRED_A");
        assert_eq!(json["liquidationAmount"], 500_000_000i64);
        assert_eq!(json["participation"], "FULL");
        assert_eq!(json["seniority"], 100);

        let back: SecurityHolder = serde_json::from_value(json).unwrap();
        assert_eq!(back, h);
    }

    #[test]
    fn test_serde_optional_fields_default() {
        let json = r#"{
            "id": "h-1",
            "name": "Founder",
            "securityType": "COMMON",
            "shares": 8000000
        }"#;
        let h: SecurityHolder = serde_json::from_str(json).unwrap();
        assert_eq!(h.participation, Participation::None);
        assert_eq!(h.conversion_ratio, Decimal::ONE);
        assert_eq!(h.liquidation_preference, None);
        assert_eq!(h.seniority, 0);
    }
}
