//! # captable_models: Securities and vesting schedules
//!
//! ## Model Layer Role
//!
//! captable_models sits above `captable_core` and defines the domain
//! records consumed by the distribution engine:
//! - Security holder records and security/participation enums (`securities`)
//! - Time-based vesting schedules and their event timelines (`vesting`)
//!
//! All types are plain immutable data: the engine layers above never mutate
//! a caller-supplied record, and every computation here is a pure function
//! of its inputs.
//!
//! ## Usage Examples
//!
//! ```rust
//! use captable_core::types::Date;
//! use captable_models::securities::{SecurityHolder, SecurityType};
//! use captable_models::vesting::{VestingFrequency, VestingSchedule};
//!
//! // A common holder
//! let founder = SecurityHolder::new("h-1", "Founder", SecurityType::Common, 8_000_000);
//! assert_eq!(founder.shares, 8_000_000);
//!
//! // A standard 4-year monthly schedule with a 1-year cliff
//! let schedule = VestingSchedule::new(
//!     Date::from_ymd(2025, 1, 1).unwrap(),
//!     12,
//!     48,
//!     VestingFrequency::Monthly,
//! )
//! .unwrap();
//! assert_eq!(schedule.vested_units(48_000, Date::from_ymd(2027, 1, 1).unwrap()), 24_000);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod securities;
pub mod vesting;
