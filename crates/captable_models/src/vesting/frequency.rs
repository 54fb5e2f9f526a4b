//! Vesting frequency enumeration.

use std::fmt;
use std::str::FromStr;

/// Vesting period length.
///
/// Determines how often units vest once the cliff has passed.
///
/// # Examples
///
/// ```
/// use captable_models::vesting::VestingFrequency;
///
/// let freq = VestingFrequency::Quarterly;
/// assert_eq!(freq.months_per_period(), 3);
/// assert_eq!(freq.periods_per_year(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VestingFrequency {
    /// Units vest every month.
    Monthly,
    /// Units vest every three months.
    Quarterly,
    /// Units vest every twelve months.
    Annually,
}

impl VestingFrequency {
    /// Returns the number of months in one vesting period.
    ///
    /// # Examples
    ///
    /// ```
    /// use captable_models::vesting::VestingFrequency;
    ///
    /// assert_eq!(VestingFrequency::Monthly.months_per_period(), 1);
    /// assert_eq!(VestingFrequency::Quarterly.months_per_period(), 3);
    /// assert_eq!(VestingFrequency::Annually.months_per_period(), 12);
    /// ```
    #[inline]
    pub fn months_per_period(&self) -> u32 {
        match self {
            VestingFrequency::Monthly => 1,
            VestingFrequency::Quarterly => 3,
            VestingFrequency::Annually => 12,
        }
    }

    /// Returns the number of vesting periods per year.
    #[inline]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            VestingFrequency::Monthly => 12,
            VestingFrequency::Quarterly => 4,
            VestingFrequency::Annually => 1,
        }
    }

    /// Returns the standard name for this frequency.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            VestingFrequency::Monthly => "Monthly",
            VestingFrequency::Quarterly => "Quarterly",
            VestingFrequency::Annually => "Annually",
        }
    }
}

impl fmt::Display for VestingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for VestingFrequency {
    type Err = String;

    /// Parses vesting frequency from string (case-insensitive).
    ///
    /// Supported formats:
    /// - Monthly: "monthly", "1m"
    /// - Quarterly: "quarterly", "3m"
    /// - Annually: "annually", "annual", "yearly", "1y"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "monthly" | "1m" => Ok(VestingFrequency::Monthly),
            "quarterly" | "3m" => Ok(VestingFrequency::Quarterly),
            "annually" | "annual" | "yearly" | "1y" | "12m" => Ok(VestingFrequency::Annually),
            _ => Err(format!("Unknown vesting frequency: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_months_per_period() {
        assert_eq!(VestingFrequency::Monthly.months_per_period(), 1);
        assert_eq!(VestingFrequency::Quarterly.months_per_period(), 3);
        assert_eq!(VestingFrequency::Annually.months_per_period(), 12);
    }

    #[test]
    fn test_periods_per_year() {
        assert_eq!(VestingFrequency::Monthly.periods_per_year(), 12);
        assert_eq!(VestingFrequency::Quarterly.periods_per_year(), 4);
        assert_eq!(VestingFrequency::Annually.periods_per_year(), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", VestingFrequency::Monthly), "Monthly");
        assert_eq!(format!("{}", VestingFrequency::Annually), "Annually");
    }

    #[test]
    fn test_from_str_valid() {
        assert_eq!(
            "monthly".parse::<VestingFrequency>().unwrap(),
            VestingFrequency::Monthly
        );
        assert_eq!(
            "Quarterly".parse::<VestingFrequency>().unwrap(),
            VestingFrequency::Quarterly
        );
        assert_eq!(
            "1y".parse::<VestingFrequency>().unwrap(),
            VestingFrequency::Annually
        );
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("weekly".parse::<VestingFrequency>().is_err());
        assert!("".parse::<VestingFrequency>().is_err());
    }

    #[test]
    fn test_serde_wire_names() {
        assert_eq!(
            serde_json::to_string(&VestingFrequency::Quarterly).unwrap(),
            "\"QUARTERLY\""
        );
        let parsed: VestingFrequency = serde_json::from_str("\"MONTHLY\"").unwrap();
        assert_eq!(parsed, VestingFrequency::Monthly);
    }
}
