//! # captable_core: Foundation types for the cap table distribution engine
//!
//! ## Foundation Layer Role
//!
//! captable_core is the bottom layer of the workspace, providing:
//! - Calendar-date type with exact month arithmetic (`types::time`)
//! - Minor-unit money with centralized rounding (`money`)
//! - Structured error types (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! The foundation layer has no dependencies on other captable_* crates, with
//! minimal external dependencies:
//! - chrono: date arithmetic
//! - rust_decimal: exact decimal intermediates for money ratios
//! - serde: serialisation support
//!
//! ## Numeric Discipline
//!
//! Money is carried as `i64` minor currency units (cents). Intermediate
//! products and quotients use `rust_decimal::Decimal`; native binary floats
//! never touch any quantity that is summed into a distribution total.
//! Rounding happens only in the two functions of [`money`] that write
//! bucket values.
//!
//! ## Usage Examples
//!
//! ```rust
//! use captable_core::money::{allocate, Cents};
//! use captable_core::types::Date;
//! use rust_decimal::Decimal;
//!
//! // Exact calendar-month arithmetic
//! let start = Date::from_ymd(2025, 1, 31).unwrap();
//! let next = start.checked_add_months(1).unwrap();
//! assert_eq!(next, Date::from_ymd(2025, 2, 28).unwrap());
//!
//! // Conserving pro-rata allocation
//! let paid: Vec<Cents> = allocate(100, &[Decimal::ONE, Decimal::ONE, Decimal::ONE]);
//! assert_eq!(paid.iter().sum::<Cents>(), 100);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod money;
pub mod types;
