//! Time-based vesting schedules.
//!
//! This module provides:
//! - [`VestingSchedule`]: An immutable cliff + periodic vesting schedule
//! - [`VestingEvent`]: One discrete vesting step on the schedule timeline
//! - [`VestingFrequency`]: Vesting period length (monthly/quarterly/annually)
//! - [`ScheduleError`]: Schedule construction errors
//!
//! Vesting is denominated in whole calendar months and computed with the
//! cumulative-floor rule: the vested total at any point is
//! `floor(total_units * vested_months / duration_months)`, which keeps the
//! cumulative count monotonic and lands exactly on `total_units` at the end
//! of the schedule regardless of divisibility.
//!
//! # Examples
//!
//! ```
//! use captable_core::types::Date;
//! use captable_models::vesting::{VestingFrequency, VestingSchedule};
//!
//! let schedule = VestingSchedule::new(
//!     Date::from_ymd(2025, 1, 1).unwrap(),
//!     12,
//!     48,
//!     VestingFrequency::Monthly,
//! )
//! .unwrap();
//!
//! // Nothing before the cliff, a quarter of the grant at the cliff
//! assert_eq!(schedule.vested_units(48_000, Date::from_ymd(2025, 12, 31).unwrap()), 0);
//! assert_eq!(schedule.vested_units(48_000, Date::from_ymd(2026, 1, 1).unwrap()), 12_000);
//! ```

mod error;
mod frequency;
mod schedule;

pub use error::ScheduleError;
pub use frequency::VestingFrequency;
pub use schedule::{VestingEvent, VestingSchedule};
