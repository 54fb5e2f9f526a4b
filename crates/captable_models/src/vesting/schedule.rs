//! Vesting schedule and event timeline.

use captable_core::types::Date;

use super::error::{ScheduleError, MAX_DURATION_MONTHS};
use super::frequency::VestingFrequency;

/// One discrete vesting step.
///
/// Produced by [`VestingSchedule::events`], never mutated; events are
/// ordered by date ascending and `cumulative_vested` is non-decreasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VestingEvent {
    /// Date the units vest.
    pub date: Date,
    /// Units vesting at this event.
    pub vested_units: u64,
    /// Cumulative units vested through this event.
    pub cumulative_vested: u64,
}

/// An immutable cliff + periodic vesting schedule.
///
/// Elapsed time is measured in exact whole calendar months (see
/// [`Date::months_until`]); no averaged-days approximation is used
/// anywhere. Before the cliff nothing is vested; at the cliff the accrued
/// fraction vests in one step; afterwards units vest at every period
/// boundary; at `duration_months` the grant is fully vested, exactly.
///
/// # Examples
///
/// ```
/// use captable_core::types::Date;
/// use captable_models::vesting::{VestingFrequency, VestingSchedule};
///
/// let schedule = VestingSchedule::new(
///     Date::from_ymd(2025, 1, 1).unwrap(),
///     12,
///     48,
///     VestingFrequency::Monthly,
/// )
/// .unwrap();
///
/// let timeline = schedule.events(48_000);
/// assert_eq!(timeline.len(), 37); // cliff + 36 monthly steps
/// assert_eq!(timeline[0].cumulative_vested, 12_000);
/// assert_eq!(timeline.last().unwrap().cumulative_vested, 48_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawVestingSchedule")]
pub struct VestingSchedule {
    start: Date,
    cliff_months: u32,
    duration_months: u32,
    frequency: VestingFrequency,
}

/// Unvalidated wire form of [`VestingSchedule`].
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawVestingSchedule {
    start: Date,
    cliff_months: u32,
    duration_months: u32,
    frequency: VestingFrequency,
}

impl TryFrom<RawVestingSchedule> for VestingSchedule {
    type Error = ScheduleError;

    fn try_from(raw: RawVestingSchedule) -> Result<Self, Self::Error> {
        VestingSchedule::new(
            raw.start,
            raw.cliff_months,
            raw.duration_months,
            raw.frequency,
        )
    }
}

impl VestingSchedule {
    /// Creates a vesting schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `duration_months` is zero
    /// - `cliff_months` exceeds `duration_months`
    /// - `duration_months` exceeds [`MAX_DURATION_MONTHS`]
    ///
    /// # Examples
    ///
    /// ```
    /// use captable_core::types::Date;
    /// use captable_models::vesting::{VestingFrequency, VestingSchedule};
    ///
    /// let start = Date::from_ymd(2025, 1, 1).unwrap();
    /// assert!(VestingSchedule::new(start, 12, 48, VestingFrequency::Monthly).is_ok());
    /// assert!(VestingSchedule::new(start, 12, 0, VestingFrequency::Monthly).is_err());
    /// assert!(VestingSchedule::new(start, 60, 48, VestingFrequency::Monthly).is_err());
    /// ```
    pub fn new(
        start: Date,
        cliff_months: u32,
        duration_months: u32,
        frequency: VestingFrequency,
    ) -> Result<Self, ScheduleError> {
        if duration_months == 0 {
            return Err(ScheduleError::InvalidDuration { duration_months });
        }
        if duration_months > MAX_DURATION_MONTHS {
            return Err(ScheduleError::DurationTooLong {
                duration_months,
                max: MAX_DURATION_MONTHS,
            });
        }
        if cliff_months > duration_months {
            return Err(ScheduleError::CliffExceedsDuration {
                cliff_months,
                duration_months,
            });
        }
        Ok(Self {
            start,
            cliff_months,
            duration_months,
            frequency,
        })
    }

    /// Returns the vesting commencement date.
    #[inline]
    pub fn start(&self) -> Date {
        self.start
    }

    /// Returns the cliff length in months.
    #[inline]
    pub fn cliff_months(&self) -> u32 {
        self.cliff_months
    }

    /// Returns the schedule duration in months.
    #[inline]
    pub fn duration_months(&self) -> u32 {
        self.duration_months
    }

    /// Returns the vesting frequency.
    #[inline]
    pub fn frequency(&self) -> VestingFrequency {
        self.frequency
    }

    /// Date of the cliff (first vesting step when a cliff is present).
    pub fn cliff_date(&self) -> Option<Date> {
        self.start.checked_add_months(self.cliff_months)
    }

    /// Date the schedule fully vests.
    pub fn end_date(&self) -> Option<Date> {
        self.start.checked_add_months(self.duration_months)
    }

    /// Months of vesting credit earned as of `as_of`.
    ///
    /// Zero before the cliff; clamped to `duration_months`; in between,
    /// credit accrues only at period boundaries measured from the cliff.
    fn vested_months(&self, as_of: Date) -> u32 {
        let elapsed = self.start.months_until(as_of);
        if elapsed < self.cliff_months as i32 {
            return 0;
        }
        if elapsed >= self.duration_months as i32 {
            return self.duration_months;
        }
        let period = self.frequency.months_per_period();
        let since_cliff = elapsed as u32 - self.cliff_months;
        self.cliff_months + (since_cliff / period) * period
    }

    /// Units vested as of `as_of`.
    ///
    /// Cumulative-floor rule: `floor(total_units * vested_months /
    /// duration_months)` with a 128-bit intermediate, so the cumulative
    /// count is monotonic, never exceeds `total_units`, and equals
    /// `total_units` exactly once `duration_months` have elapsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use captable_core::types::Date;
    /// use captable_models::vesting::{VestingFrequency, VestingSchedule};
    ///
    /// let schedule = VestingSchedule::new(
    ///     Date::from_ymd(2025, 1, 1).unwrap(),
    ///     12,
    ///     48,
    ///     VestingFrequency::Monthly,
    /// )
    /// .unwrap();
    ///
    /// // Two years in: half the grant
    /// assert_eq!(schedule.vested_units(48_000, Date::from_ymd(2027, 1, 1).unwrap()), 24_000);
    /// ```
    pub fn vested_units(&self, total_units: u64, as_of: Date) -> u64 {
        let vested_months = self.vested_months(as_of) as u128;
        let exact = (total_units as u128 * vested_months) / self.duration_months as u128;
        exact as u64
    }

    /// Units not yet vested as of `as_of`.
    pub fn unvested_units(&self, total_units: u64, as_of: Date) -> u64 {
        total_units - self.vested_units(total_units, as_of)
    }

    /// Month offsets from `start` at which vesting steps occur.
    ///
    /// Begins at the cliff (or the first ordinary period when there is no
    /// cliff) and ends exactly at `duration_months`.
    fn month_marks(&self) -> Vec<u32> {
        let period = self.frequency.months_per_period();
        let mut marks = Vec::new();
        let mut next = if self.cliff_months > 0 {
            self.cliff_months
        } else {
            period
        };
        loop {
            let mark = next.min(self.duration_months);
            marks.push(mark);
            if mark >= self.duration_months {
                break;
            }
            next += period;
        }
        marks
    }

    /// Enumerates the discrete vesting timeline for a grant.
    ///
    /// One event per vesting step from the cliff (inclusive) through full
    /// vesting; with no cliff the first event is the first ordinary period.
    /// The final event always carries `cumulative_vested == total_units`.
    pub fn events(&self, total_units: u64) -> Vec<VestingEvent> {
        let mut events = Vec::new();
        let mut previous = 0u64;
        for mark in self.month_marks() {
            let Some(date) = self.start.checked_add_months(mark) else {
                break;
            };
            let cumulative =
                (total_units as u128 * mark as u128 / self.duration_months as u128) as u64;
            events.push(VestingEvent {
                date,
                vested_units: cumulative - previous,
                cumulative_vested: cumulative,
            });
            previous = cumulative;
        }
        events
    }

    /// Next vesting date strictly after `as_of`, or `None` once the
    /// schedule has fully vested.
    ///
    /// # Examples
    ///
    /// ```
    /// use captable_core::types::Date;
    /// use captable_models::vesting::{VestingFrequency, VestingSchedule};
    ///
    /// let schedule = VestingSchedule::new(
    ///     Date::from_ymd(2025, 1, 1).unwrap(),
    ///     12,
    ///     48,
    ///     VestingFrequency::Monthly,
    /// )
    /// .unwrap();
    ///
    /// // Before the cliff the next step is the cliff itself
    /// assert_eq!(
    ///     schedule.next_vesting_date(Date::from_ymd(2025, 6, 1).unwrap()),
    ///     Some(Date::from_ymd(2026, 1, 1).unwrap())
    /// );
    /// // Fully vested: no further steps
    /// assert_eq!(schedule.next_vesting_date(Date::from_ymd(2029, 1, 1).unwrap()), None);
    /// ```
    pub fn next_vesting_date(&self, as_of: Date) -> Option<Date> {
        for mark in self.month_marks() {
            let date = self.start.checked_add_months(mark)?;
            if date > as_of {
                return Some(date);
            }
        }
        None
    }
}
