//! Vesting schedule construction errors.

use thiserror::Error;

/// Longest schedule accepted, in months (100 years).
///
/// Keeps date arithmetic comfortably inside chrono's representable range.
pub const MAX_DURATION_MONTHS: u32 = 1200;

/// Errors that can occur when constructing a vesting schedule.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Duration must be positive.
    #[error("Vesting duration must be positive, got {duration_months} months")]
    InvalidDuration {
        /// The rejected duration.
        duration_months: u32,
    },

    /// The cliff cannot extend past the end of the schedule.
    #[error("Cliff of {cliff_months} months exceeds duration of {duration_months} months")]
    CliffExceedsDuration {
        /// The cliff length.
        cliff_months: u32,
        /// The schedule duration.
        duration_months: u32,
    },

    /// Duration above the supported maximum.
    #[error("Vesting duration of {duration_months} months exceeds maximum of {max} months")]
    DurationTooLong {
        /// The rejected duration.
        duration_months: u32,
        /// The supported maximum.
        max: u32,
    },
}
