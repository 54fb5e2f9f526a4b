//! Security holder records for exit distributions.
//!
//! This module provides:
//! - [`SecurityType`]: The closed set of security classes on the cap table
//! - [`Participation`]: Preferred participation rights (none/capped/full)
//! - [`SecurityHolder`]: A holder record with preference and conversion terms
//!
//! # Examples
//!
//! ```
//! use captable_models::securities::{Participation, SecurityHolder, SecurityType};
//! use rust_decimal::Decimal;
//!
//! // Series A: 1x preference on $5,000,000.00, fully participating
//! let series_a = SecurityHolder::new("inv-1", "Fund I", SecurityType::PreferredA, 2_000_000)
//!     .with_preference(Decimal::ONE, 500_000_000)
//!     .with_participation(Participation::Full)
//!     .with_seniority(100);
//!
//! assert_eq!(series_a.preference_owed(), Some(500_000_000));
//! ```

mod holder;
mod participation;
mod security_type;

pub use holder::SecurityHolder;
pub use participation::Participation;
pub use security_type::SecurityType;
