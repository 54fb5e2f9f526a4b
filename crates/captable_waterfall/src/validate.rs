//! Eager input validation.

use std::collections::HashSet;

use captable_core::money::Cents;
use captable_models::securities::{Participation, SecurityHolder};
use rust_decimal::Decimal;

use crate::error::{ValidationError, ValidationIssue};

/// Largest supported share count per holder (one trillion shares).
///
/// Keeps every pool sum and implied-price quotient inside exact decimal
/// range.
pub const MAX_SHARES: u64 = 1_000_000_000_000;

/// Checks a waterfall input before any arithmetic runs.
///
/// All problems are collected and returned together. Security classes and
/// participation kinds are closed enums, so "unrecognised type" is caught
/// at deserialisation of external input and cannot reach this function.
pub fn validate(holders: &[SecurityHolder], exit_value: Cents) -> Result<(), ValidationError> {
    let mut issues = Vec::new();

    if holders.is_empty() {
        issues.push(ValidationIssue::input(
            "holders",
            "holder set must not be empty",
        ));
    }
    if exit_value <= 0 {
        issues.push(ValidationIssue::input(
            "exitValue",
            format!("exit value must be positive, got {}", exit_value),
        ));
    }

    let mut seen_ids: HashSet<&str> = HashSet::with_capacity(holders.len());
    for (index, holder) in holders.iter().enumerate() {
        check_holder(index, holder, &mut issues);
        if !seen_ids.insert(holder.id.as_str()) {
            issues.push(ValidationIssue::holder(
                index,
                holder.id.clone(),
                "id",
                "duplicate holder id",
            ));
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(issues))
    }
}

fn check_holder(index: usize, holder: &SecurityHolder, issues: &mut Vec<ValidationIssue>) {
    let issue = |field, message: String| ValidationIssue::holder(index, holder.id.clone(), field, message);

    if holder.shares == 0 {
        issues.push(issue("shares", "shares must be positive".to_string()));
    } else if holder.shares > MAX_SHARES {
        issues.push(issue(
            "shares",
            format!("share count {} overflows the supported maximum of {}", holder.shares, MAX_SHARES),
        ));
    }

    match (holder.liquidation_preference, holder.liquidation_amount) {
        (Some(multiple), amount) => {
            if multiple < Decimal::ZERO {
                issues.push(issue(
                    "liquidationPreference",
                    format!("liquidation preference must not be negative, got {}", multiple),
                ));
            }
            if amount.is_none() {
                issues.push(issue(
                    "liquidationAmount",
                    "liquidation amount is required with a liquidation preference".to_string(),
                ));
            }
        }
        (None, Some(_)) => {
            issues.push(issue(
                "liquidationPreference",
                "liquidation preference is required with a liquidation amount".to_string(),
            ));
        }
        (None, None) => {}
    }
    if let Some(amount) = holder.liquidation_amount {
        if amount < 0 {
            issues.push(issue(
                "liquidationAmount",
                format!("liquidation amount must not be negative, got {}", amount),
            ));
        }
    }

    if holder.participation == Participation::Capped && holder.participation_cap.is_none() {
        issues.push(issue(
            "participationCap",
            "participation cap is required for CAPPED participation".to_string(),
        ));
    }
    if let Some(cap) = holder.participation_cap {
        if cap <= Decimal::ZERO {
            issues.push(issue(
                "participationCap",
                format!("participation cap must be positive, got {}", cap),
            ));
        }
    }

    if holder.conversion_ratio <= Decimal::ZERO {
        issues.push(issue(
            "conversionRatio",
            format!("conversion ratio must be positive, got {}", holder.conversion_ratio),
        ));
    }

    if let Some(strike) = holder.strike_price {
        if strike < 0 {
            issues.push(issue(
                "strikePrice",
                format!("strike price must not be negative, got {}", strike),
            ));
        }
    }
}
