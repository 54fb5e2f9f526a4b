//! Preferred participation rights enumeration.

use std::fmt;
use std::str::FromStr;

/// Participation rights of a preferred holder.
///
/// Determines whether, after receiving its liquidation preference, a
/// preferred holder also shares pro rata in the remaining proceeds.
///
/// # Examples
///
/// ```
/// use captable_models::securities::Participation;
///
/// assert_eq!(Participation::default(), Participation::None);
/// assert!(Participation::Capped.participates());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Participation {
    /// No participation: preference only.
    #[default]
    None,
    /// Participates up to a cap multiple of invested capital.
    Capped,
    /// Participates without limit.
    Full,
}

impl Participation {
    /// Returns the wire code for this participation kind.
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            Participation::None => "NONE",
            Participation::Capped => "CAPPED",
            Participation::Full => "FULL",
        }
    }

    /// Returns true if the holder shares in proceeds beyond its preference.
    #[inline]
    pub fn participates(&self) -> bool {
        !matches!(self, Participation::None)
    }
}

impl fmt::Display for Participation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Participation {
    type Err = String;

    /// Parses participation rights from string (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NONE" => Ok(Participation::None),
            "CAPPED" => Ok(Participation::Capped),
            "FULL" => Ok(Participation::Full),
            _ => Err(format!("Unknown participation: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_none() {
        assert_eq!(Participation::default(), Participation::None);
    }

    #[test]
    fn test_participates() {
        assert!(!Participation::None.participates());
        assert!(Participation::Capped.participates());
        assert!(Participation::Full.participates());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Participation::Capped), "CAPPED");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("full".parse::<Participation>().unwrap(), Participation::Full);
        assert_eq!("NONE".parse::<Participation>().unwrap(), Participation::None);
        assert!("PARTIAL".parse::<Participation>().is_err());
    }

    #[test]
    fn test_serde_wire_names() {
        assert_eq!(
            serde_json::to_string(&Participation::Capped).unwrap(),
            "\"CAPPED\""
        );
        let parsed: Participation = serde_json::from_str("\"FULL\"").unwrap();
        assert_eq!(parsed, Participation::Full);
        let bad: Result<Participation, _> = serde_json::from_str("\"SOMETIMES\"");
        assert!(bad.is_err());
    }
}
