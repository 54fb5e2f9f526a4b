//! Security class enumeration.

use std::fmt;
use std::str::FromStr;

/// Security class of a cap table position.
///
/// A closed enum: the compiler guarantees every class is handled in the
/// distribution passes. Unknown strings from external input are rejected at
/// parse time.
///
/// # Examples
///
/// ```
/// use captable_models::securities::SecurityType;
///
/// let t = SecurityType::PreferredB;
/// assert!(t.is_preferred());
/// assert_eq!(t.code(), "PREFERRED_B");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SecurityType {
    /// Common stock.
    Common,
    /// Series A preferred stock.
    PreferredA,
    /// Series B preferred stock.
    PreferredB,
    /// Series C preferred stock.
    PreferredC,
    /// Employee/advisor stock option.
    Option,
    /// Warrant.
    Warrant,
}

impl SecurityType {
    /// Returns the wire code for this security class.
    ///
    /// # Examples
    ///
    /// ```
    /// use captable_models::securities::SecurityType;
    ///
    /// assert_eq!(SecurityType::Common.code(), "COMMON");
    /// assert_eq!(SecurityType::PreferredA.code(), "PREFERRED_A");
    /// assert_eq!(SecurityType::Option.code(), "OPTION");
    /// ```
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            SecurityType::Common => "COMMON",
            SecurityType::PreferredA => "PREFERRED_A",
            SecurityType::PreferredB => "PREFERRED_B",
            SecurityType::PreferredC => "PREFERRED_C",
            SecurityType::Option => "OPTION",
            SecurityType::Warrant => "WARRANT",
        }
    }

    /// Returns the display name for this security class.
    ///
    /// # Examples
    ///
    /// ```
    /// use captable_models::securities::SecurityType;
    ///
    /// assert_eq!(SecurityType::PreferredA.name(), "Series A Preferred");
    /// ```
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            SecurityType::Common => "Common",
            SecurityType::PreferredA => "Series A Preferred",
            SecurityType::PreferredB => "Series B Preferred",
            SecurityType::PreferredC => "Series C Preferred",
            SecurityType::Option => "Option",
            SecurityType::Warrant => "Warrant",
        }
    }

    /// Returns true for the preferred series classes.
    #[inline]
    pub fn is_preferred(&self) -> bool {
        matches!(
            self,
            SecurityType::PreferredA | SecurityType::PreferredB | SecurityType::PreferredC
        )
    }

    /// Returns true for strike-bearing classes (options and warrants).
    #[inline]
    pub fn is_option_like(&self) -> bool {
        matches!(self, SecurityType::Option | SecurityType::Warrant)
    }
}

impl fmt::Display for SecurityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SecurityType {
    type Err = String;

    /// Parses a security class from string (case-insensitive).
    ///
    /// Supports the wire codes and common aliases:
    /// - Common: "COMMON"
    /// - Preferred series: "PREFERRED_A", "SERIES_A", etc.
    /// - Option: "OPTION"
    /// - Warrant: "WARRANT"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace(['-', ' '], "_").as_str() {
            "COMMON" => Ok(SecurityType::Common),
            "PREFERRED_A" | "SERIES_A" => Ok(SecurityType::PreferredA),
            "PREFERRED_B" | "SERIES_B" => Ok(SecurityType::PreferredB),
            "PREFERRED_C" | "SERIES_C" => Ok(SecurityType::PreferredC),
            "OPTION" => Ok(SecurityType::Option),
            "WARRANT" => Ok(SecurityType::Warrant),
            _ => Err(format!("Unknown security type: {}", s)),
        }
    }
}
