//! Calendar arithmetic for accrual windows.
//!
//! This module provides the month-length and anchor-date helpers used to
//! locate the start of an accrual window. Anchor days that do not exist in the
//! resolved month are clamped to that month's last day.

use chrono::{Datelike, NaiveDate};

use crate::error::{EngineError, EngineResult};

/// Returns the number of days in the given month (28 to 31).
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`] if `month` is not between 1 and 12.
///
/// # Example
///
/// ```
/// use salary_rate::calculation::days_in_month;
///
/// assert_eq!(days_in_month(2020, 2).unwrap(), 29);
/// assert_eq!(days_in_month(2021, 2).unwrap(), 28);
/// assert_eq!(days_in_month(2020, 4).unwrap(), 30);
/// assert_eq!(days_in_month(2020, 12).unwrap(), 31);
/// ```
pub fn days_in_month(year: i32, month: u32) -> EngineResult<u32> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(days_in_month_of)
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("invalid month {}-{:02}", year, month),
        })
}

/// Returns the `(year, month)` preceding the given month.
pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Returns the first day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> EngineResult<NaiveDate> {
    date.with_day(1)
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("cannot resolve first day of month for {}", date),
        })
}

/// Builds the date for `anchor_day` in the given month, clamping to the last
/// day of the month when the month is shorter than `anchor_day`.
///
/// # Example
///
/// ```
/// use salary_rate::calculation::anchor_date;
/// use chrono::NaiveDate;
///
/// // April has 30 days, so an anchor of 31 lands on the 30th.
/// assert_eq!(
///     anchor_date(2020, 4, 31).unwrap(),
///     NaiveDate::from_ymd_opt(2020, 4, 30).unwrap()
/// );
/// assert_eq!(
///     anchor_date(2020, 5, 25).unwrap(),
///     NaiveDate::from_ymd_opt(2020, 5, 25).unwrap()
/// );
/// ```
pub fn anchor_date(year: i32, month: u32, anchor_day: u32) -> EngineResult<NaiveDate> {
    let day = anchor_day.clamp(1, days_in_month(year, month)?);
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| EngineError::CalculationError {
        message: format!("invalid anchor date {}-{:02}-{:02}", year, month, day),
    })
}

/// Returns the number of days in the month containing `date`.
pub fn days_in_month_of(date: NaiveDate) -> u32 {
    u32::from(date.num_days_in_month())
}

/// Returns the whole number of calendar days from `start` to `end`.
///
/// Negative when `end` precedes `start`.
pub fn calendar_day_difference(end: NaiveDate, start: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days()
}
