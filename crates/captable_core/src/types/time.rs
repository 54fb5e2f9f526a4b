//! Calendar-date type for vesting and distribution calculations.
//!
//! This module provides `Date`, a type-safe wrapper around
//! `chrono::NaiveDate` with exact calendar-month arithmetic. Vesting
//! schedules are denominated in whole months, so month differencing here is
//! calendar-exact; dividing elapsed days by an average month length drifts
//! near period boundaries and is deliberately not offered.
//!
//! # Examples
//!
//! ```
//! use captable_core::types::Date;
//!
//! let start = Date::from_ymd(2025, 1, 1).unwrap();
//! let later = Date::from_ymd(2026, 1, 1).unwrap();
//!
//! assert_eq!(start.months_until(later), 12);
//! ```

use chrono::{Datelike, Local, Months, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe calendar date wrapper around chrono::NaiveDate.
///
/// Provides ISO 8601 serialisation, day subtraction, and exact
/// calendar-month arithmetic. Dates carry no time-of-day component.
///
/// # Examples
///
/// ```
/// use captable_core::types::Date;
///
/// // Create from year, month, day
/// let date = Date::from_ymd(2025, 6, 15).unwrap();
/// assert_eq!(date.year(), 2025);
///
/// // Parse from ISO 8601 string
/// let parsed: Date = "2025-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// // Days between dates
/// let start = Date::from_ymd(2025, 1, 1).unwrap();
/// let end = Date::from_ymd(2025, 1, 11).unwrap();
/// assert_eq!(end - start, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Arguments
    /// * `year` - Year (e.g., 2025)
    /// * `month` - Month (1-12)
    /// * `day` - Day (1-31, depending on month)
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use captable_core::types::Date;
    ///
    /// let date = Date::from_ymd(2024, 2, 29).unwrap(); // leap year
    /// assert!(Date::from_ymd(2025, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Returns today's date based on local system time.
    pub fn today() -> Self {
        Date(Local::now().date_naive())
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Examples
    ///
    /// ```
    /// use captable_core::types::Date;
    ///
    /// let date = Date::parse("2025-06-15").unwrap();
    /// assert_eq!(date.month(), 6);
    /// assert!(Date::parse("not-a-date").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(e.to_string()))
    }

    /// Returns the underlying NaiveDate.
    ///
    /// Use this method when you need access to chrono's full API.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Advances the date by a number of calendar months.
    ///
    /// The day-of-month is clamped to the end of the target month, so a
    /// schedule anchored on the 31st lands on the 28th/29th/30th in shorter
    /// months. Returns `None` only if the resulting year is out of chrono's
    /// representable range.
    ///
    /// # Examples
    ///
    /// ```
    /// use captable_core::types::Date;
    ///
    /// let start = Date::from_ymd(2025, 1, 31).unwrap();
    /// assert_eq!(
    ///     start.checked_add_months(1).unwrap(),
    ///     Date::from_ymd(2025, 2, 28).unwrap()
    /// );
    /// ```
    pub fn checked_add_months(self, months: u32) -> Option<Date> {
        self.0.checked_add_months(Months::new(months)).map(Date)
    }

    /// Counts whole calendar months elapsed from `self` to `end`.
    ///
    /// A month is counted only once the same day-of-month (clamped to the
    /// end of shorter months) has been reached, consistent with
    /// [`Date::checked_add_months`]: `self` advanced by the returned count
    /// never lands after `end`. Negative when `end` is before `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use captable_core::types::Date;
    ///
    /// let start = Date::from_ymd(2025, 1, 15).unwrap();
    ///
    /// assert_eq!(start.months_until(Date::from_ymd(2025, 2, 14).unwrap()), 0);
    /// assert_eq!(start.months_until(Date::from_ymd(2025, 2, 15).unwrap()), 1);
    /// assert_eq!(start.months_until(Date::from_ymd(2026, 1, 15).unwrap()), 12);
    /// assert_eq!(start.months_until(Date::from_ymd(2024, 12, 15).unwrap()), -1);
    /// ```
    pub fn months_until(&self, end: Date) -> i32 {
        if end < *self {
            return -end.months_until(*self);
        }

        let raw = (end.year() - self.year()) * 12 + (end.month() as i32 - self.month() as i32);
        debug_assert!(raw >= 0);

        // Back off one month if the day-of-month has not been reached yet.
        match self.checked_add_months(raw as u32) {
            Some(candidate) if candidate > end => raw - 1,
            _ => raw,
        }
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// The result is positive if `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
