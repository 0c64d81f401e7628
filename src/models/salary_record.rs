//! Salary record model.
//!
//! This module defines the [`SalaryRecord`] the engine accrues against. It is
//! built by the caller from persisted employee data immediately before a
//! calculation and discarded afterwards.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AccrualPolicy;

/// An employee's salary terms as needed by the salary rate engine.
///
/// # Example
///
/// ```
/// use salary_rate::models::{AccrualPolicy, SalaryRecord};
/// use rust_decimal::Decimal;
///
/// let record = SalaryRecord::new(3, Decimal::new(30000, 0), AccrualPolicy::MonthToDate)
///     .with_anchor_day(25);
/// assert_eq!(record.anchor_day, Some(25));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRecord {
    /// Unique identifier for the employee.
    pub id: u64,
    /// The employee's username, echoed back unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// The employee's email, echoed back unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// The company the employee belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<u64>,
    /// The full-period base salary: a daily rate for [`AccrualPolicy::Daily`],
    /// a full-month rate otherwise.
    pub salary_amount: Decimal,
    /// The accrual policy that determines which formula applies.
    pub accrual_policy: AccrualPolicy,
    /// Day of month on which the employee is paid. Required for
    /// [`AccrualPolicy::MonthToDate`], ignored otherwise.
    #[serde(default)]
    pub anchor_day: Option<u32>,
}

impl SalaryRecord {
    /// Creates a record with no anchor day and no descriptive fields.
    pub fn new(id: u64, salary_amount: Decimal, accrual_policy: AccrualPolicy) -> Self {
        Self {
            id,
            username: None,
            email: None,
            company_id: None,
            salary_amount,
            accrual_policy,
            anchor_day: None,
        }
    }

    /// Sets the anchor (payment) day.
    pub fn with_anchor_day(mut self, anchor_day: u32) -> Self {
        self.anchor_day = Some(anchor_day);
        self
    }

    /// Returns the anchor day if it is set and non-zero.
    pub fn usable_anchor_day(&self) -> Option<u32> {
        self.anchor_day.filter(|day| *day > 0)
    }
}
