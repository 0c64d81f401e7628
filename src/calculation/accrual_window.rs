//! Accrual window resolution.
//!
//! An accrual window runs from its start date up to and including the
//! reference date. Daily and monthly policies start on the first of the
//! reference month; the month-to-date policy starts on the most recent
//! payment (anchor) day.

use chrono::{Datelike, NaiveDate};

use crate::error::{EngineError, EngineResult};
use crate::models::{AccrualPolicy, AuditStep, SalaryRecord};

use super::calendar::{
    anchor_date, calendar_day_difference, days_in_month_of, first_of_month, previous_month,
};

/// Message attached to month-to-date records without a usable payment date.
pub const MISSING_ANCHOR_DAY_MESSAGE: &str = "Employee payment date is not set";

/// The span of days an accrual covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccrualWindow {
    /// The first day of the window.
    pub start: NaiveDate,
    /// The reference date closing the window.
    pub end: NaiveDate,
    /// Days counted towards the accrual, including the start day when the
    /// engine is configured to include the payment date.
    pub days_in_period: i64,
    /// Length of the calendar month containing `start`.
    pub days_in_start_month: u32,
}

/// The resolved window together with the audit step describing it.
#[derive(Debug, Clone)]
pub struct AccrualWindowResult {
    /// The resolved accrual window.
    pub window: AccrualWindow,
    /// The audit step recording the resolution.
    pub audit_step: AuditStep,
}

/// Determines the date an accrual window starts on.
///
/// For [`AccrualPolicy::MonthToDate`], a reference day before the anchor day
/// means the last payment happened in the previous month; otherwise it happened
/// this month. Anchor days past the end of the resolved month are clamped to
/// its last day.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPolicyConfiguration`] when the record uses
/// the month-to-date policy without a non-zero anchor day.
///
/// # Example
///
/// ```
/// use salary_rate::calculation::window_start;
/// use salary_rate::models::{AccrualPolicy, SalaryRecord};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let record = SalaryRecord::new(3, Decimal::new(30000, 0), AccrualPolicy::MonthToDate)
///     .with_anchor_day(25);
/// let today = NaiveDate::from_ymd_opt(2020, 5, 10).unwrap();
///
/// assert_eq!(
///     window_start(&record, today).unwrap(),
///     NaiveDate::from_ymd_opt(2020, 4, 25).unwrap()
/// );
/// ```
pub fn window_start(record: &SalaryRecord, today: NaiveDate) -> EngineResult<NaiveDate> {
    match record.accrual_policy {
        AccrualPolicy::Daily | AccrualPolicy::Monthly => first_of_month(today),
        AccrualPolicy::MonthToDate => {
            let anchor_day = record.usable_anchor_day().ok_or_else(|| {
                EngineError::InvalidPolicyConfiguration {
                    employee_id: record.id,
                    message: MISSING_ANCHOR_DAY_MESSAGE.to_string(),
                }
            })?;

            let (year, month) = if today.day() < anchor_day {
                previous_month(today.year(), today.month())
            } else {
                (today.year(), today.month())
            };

            anchor_date(year, month, anchor_day)
        }
    }
}

/// Resolves the accrual window for a record as of `today`.
///
/// `payment_date_inclusion` is added to the whole-day difference between
/// `today` and the window start, so with inclusion enabled the start day
/// itself counts.
pub fn resolve_accrual_window(
    record: &SalaryRecord,
    today: NaiveDate,
    payment_date_inclusion: bool,
    step_number: u32,
) -> EngineResult<AccrualWindowResult> {
    let start = window_start(record, today)?;
    let inclusion = i64::from(payment_date_inclusion);
    let elapsed = calendar_day_difference(today, start);

    let window = AccrualWindow {
        start,
        end: today,
        days_in_period: elapsed + inclusion,
        days_in_start_month: days_in_month_of(start),
    };

    let reasoning = match record.accrual_policy {
        AccrualPolicy::Daily | AccrualPolicy::Monthly => format!(
            "{} policy accrues from the first of the month: {} to {} is {} day(s) + {} = {} day(s)",
            record.accrual_policy, start, today, elapsed, inclusion, window.days_in_period
        ),
        AccrualPolicy::MonthToDate => format!(
            "Payment day {} last fell on {}: {} day(s) until {} + {} = {} day(s)",
            record.anchor_day.unwrap_or_default(),
            start,
            elapsed,
            today,
            inclusion,
            window.days_in_period
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "accrual_window".to_string(),
        rule_name: "Accrual Window".to_string(),
        input: serde_json::json!({
            "today": today.to_string(),
            "accrual_policy": record.accrual_policy.id(),
            "anchor_day": record.anchor_day,
            "payment_date_inclusion": payment_date_inclusion
        }),
        output: serde_json::json!({
            "window_start": start.to_string(),
            "days_in_period": window.days_in_period,
            "days_in_start_month": window.days_in_start_month
        }),
        reasoning,
    };

    Ok(AccrualWindowResult { window, audit_step })
}
