//! Command implementations.

pub mod break_points;
pub mod scenarios;
pub mod vesting;
pub mod waterfall;

use captable_models::securities::SecurityHolder;

use crate::{CliError, Result};

/// Loads a holders file: a JSON array of security holder records.
pub(crate) fn load_holders(path: &str) -> Result<Vec<SecurityHolder>> {
    if !std::path::Path::new(path).exists() {
        return Err(CliError::FileNotFound(path.to_string()));
    }
    let contents = std::fs::read_to_string(path)?;
    let holders: Vec<SecurityHolder> = serde_json::from_str(&contents)?;
    Ok(holders)
}

/// Formats cents as a dollar amount for table output.
pub(crate) fn fmt_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let dollars = abs / 100;
    let rest = abs % 100;

    // Thousands separators, right to left
    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}${}.{:02}", sign, grouped, rest)
}
