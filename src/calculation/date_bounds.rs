//! Minimum selectable dates for booking forms.
//!
//! The earliest check-in is today; the earliest check-out is the day after
//! the chosen check-in, or today when no check-in is chosen yet. "Today"
//! comes from a [`Clock`] so callers and tests control it.

use chrono::{Days, NaiveDate, Utc};
use serde::Serialize;

/// A source of the current calendar date.
pub trait Clock {
    /// Returns today's date.
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system time, reporting the UTC calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Clock that always reports the same date.
///
/// # Examples
///
/// ```
/// use stay_engine::calculation::{Clock, FixedClock};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// assert_eq!(FixedClock(date).today(), date);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// The earliest dates a booking form should allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateBounds {
    /// Earliest selectable check-in date.
    pub min_check_in: NaiveDate,
    /// Earliest selectable check-out date.
    pub min_check_out: NaiveDate,
}

/// Returns the earliest selectable check-in date: today.
pub fn min_check_in_date(clock: &dyn Clock) -> NaiveDate {
    clock.today()
}

/// Returns the earliest selectable check-out date.
///
/// # Examples
///
/// ```
/// use stay_engine::calculation::{FixedClock, min_check_out_date};
/// use chrono::NaiveDate;
///
/// let clock = FixedClock(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
/// let check_in = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
///
/// assert_eq!(
///     min_check_out_date(&clock, Some(check_in)),
///     NaiveDate::from_ymd_opt(2024, 6, 11).unwrap()
/// );
/// assert_eq!(
///     min_check_out_date(&clock, None),
///     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
/// );
/// ```
pub fn min_check_out_date(clock: &dyn Clock, check_in: Option<NaiveDate>) -> NaiveDate {
    match check_in {
        Some(date) => date.checked_add_days(Days::new(1)).unwrap_or(date),
        None => clock.today(),
    }
}

/// Returns both bounds for the currently chosen check-in.
pub fn date_bounds(clock: &dyn Clock, check_in: Option<NaiveDate>) -> DateBounds {
    DateBounds {
        min_check_in: min_check_in_date(clock),
        min_check_out: min_check_out_date(clock, check_in),
    }
}
