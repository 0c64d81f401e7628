//! Salary rate engine.
//!
//! This module turns a [`SalaryRecord`] and a reference date into the salary
//! accrued so far in the current accrual window. The engine is a pure
//! computation: it never reads a clock, so every call is reproducible for a
//! given `(record, today)` pair.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AccrualPolicy, AccrualResult, AuditStep, Company, CompanyPayroll, SalaryRecord,
};

use super::accrual_window::{AccrualWindow, resolve_accrual_window};
use super::rounding::round_currency;

/// Whether the window start day counts towards the accrual by default.
pub const DEFAULT_PAYMENT_DATE_INCLUSION: bool = true;

/// Computes prorated salary accruals.
///
/// The only setting is whether the window start (payment) day itself counts
/// as an accrued day. It is fixed when the engine is built, typically from
/// [`EngineConfig`] at start-up.
///
/// # Example
///
/// ```
/// use salary_rate::calculation::SalaryRateEngine;
/// use salary_rate::models::{AccrualPolicy, SalaryRecord};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let engine = SalaryRateEngine::default();
/// let record = SalaryRecord::new(2, Decimal::new(30000, 0), AccrualPolicy::Monthly);
/// let today = NaiveDate::from_ymd_opt(2020, 1, 10).unwrap();
///
/// let result = engine.compute_accrual(&record, today).unwrap();
/// assert_eq!(result.accrued_amount.to_string(), "9677.42");
/// assert_eq!(result.policy.description, "Monthly rate");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryRateEngine {
    payment_date_inclusion: bool,
}

impl Default for SalaryRateEngine {
    fn default() -> Self {
        Self::new(DEFAULT_PAYMENT_DATE_INCLUSION)
    }
}

impl SalaryRateEngine {
    /// Creates an engine with the given payment-date inclusion setting.
    pub fn new(payment_date_inclusion: bool) -> Self {
        Self {
            payment_date_inclusion,
        }
    }

    /// Creates an engine from the loaded engine configuration.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.payment_date_inclusion)
    }

    /// Returns true if the window start day counts as an accrued day.
    pub fn payment_date_inclusion(&self) -> bool {
        self.payment_date_inclusion
    }

    /// Computes the salary accrued by `record` as of `today`.
    ///
    /// Daily salaries accrue the full salary for every day in the window.
    /// Monthly salaries accrue `salary / days_in_month` per day, where the month
    /// is the one containing the window start. The amount is rounded once, to
    /// two decimal places, half away from zero.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPolicyConfiguration`] if the record uses
    /// [`AccrualPolicy::MonthToDate`] without a non-zero anchor day, and
    /// [`EngineError::CalculationError`] if the amount exceeds the range of
    /// [`Decimal`].
    pub fn compute_accrual(
        &self,
        record: &SalaryRecord,
        today: NaiveDate,
    ) -> EngineResult<AccrualResult> {
        let mut audit_trace = Vec::with_capacity(3);

        let window_result = resolve_accrual_window(record, today, self.payment_date_inclusion, 1)?;
        let window = window_result.window;
        audit_trace.push(window_result.audit_step);

        let (unrounded, proration_step) = prorate(record, &window, 2)?;
        audit_trace.push(proration_step);

        let accrued_amount = round_currency(unrounded);
        audit_trace.push(AuditStep {
            step_number: 3,
            rule_id: "currency_rounding".to_string(),
            rule_name: "Currency Rounding".to_string(),
            input: serde_json::json!({
                "amount": unrounded.normalize().to_string()
            }),
            output: serde_json::json!({
                "accrued_amount": accrued_amount.to_string()
            }),
            reasoning: format!(
                "${} rounded half away from zero to 2 decimal places = ${}",
                unrounded.normalize(),
                accrued_amount
            ),
        });

        debug!(
            employee_id = record.id,
            policy = %record.accrual_policy,
            window_start = %window.start,
            days_in_period = window.days_in_period,
            accrued_amount = %accrued_amount,
            "Computed salary accrual"
        );

        Ok(AccrualResult {
            record: record.clone(),
            as_of: today,
            accrued_amount,
            policy: record.accrual_policy.descriptor(),
            audit_trace,
        })
    }

    /// Computes the accruals of every employee of a company as of `today`.
    ///
    /// The first record that cannot be computed aborts the whole batch, as does
    /// a total that exceeds the range of [`Decimal`].
    pub fn compute_company_payroll(
        &self,
        company: Company,
        records: &[SalaryRecord],
        today: NaiveDate,
    ) -> EngineResult<CompanyPayroll> {
        let employees = records
            .iter()
            .map(|record| self.compute_accrual(record, today))
            .collect::<EngineResult<Vec<_>>>()?;

        let total = employees
            .iter()
            .try_fold(Decimal::ZERO, |total, e| total.checked_add(e.accrued_amount))
            .ok_or_else(|| EngineError::CalculationError {
                message: format!("total accrual of company {} overflows", company.id),
            })?;
        let total_accrued = round_currency(total);

        debug!(
            company_id = company.id,
            employees = employees.len(),
            total_accrued = %total_accrued,
            "Computed company payroll"
        );

        Ok(CompanyPayroll {
            company,
            as_of: today,
            employees,
            total_accrued,
        })
    }
}

/// Computes an accrual with the default engine settings.
///
/// # Example
///
/// ```
/// use salary_rate::calculation::compute_accrual;
/// use salary_rate::models::{AccrualPolicy, SalaryRecord};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let record = SalaryRecord::new(1, Decimal::new(700, 0), AccrualPolicy::Daily);
/// let result = compute_accrual(&record, NaiveDate::from_ymd_opt(2020, 1, 10).unwrap()).unwrap();
/// assert_eq!(result.accrued_amount.to_string(), "7000.00");
/// ```
pub fn compute_accrual(record: &SalaryRecord, today: NaiveDate) -> EngineResult<AccrualResult> {
    SalaryRateEngine::default().compute_accrual(record, today)
}

fn overflow(record: &SalaryRecord, window: &AccrualWindow) -> EngineError {
    EngineError::CalculationError {
        message: format!(
            "accrual of employee {} overflows: salary {} over {} day(s)",
            record.id,
            record.salary_amount.normalize(),
            window.days_in_period
        ),
    }
}

fn prorate(
    record: &SalaryRecord,
    window: &AccrualWindow,
    step_number: u32,
) -> EngineResult<(Decimal, AuditStep)> {
    let salary = record.salary_amount;
    let days = Decimal::from(window.days_in_period);

    if !record.accrual_policy.is_monthly() {
        let amount = salary
            .checked_mul(days)
            .ok_or_else(|| overflow(record, window))?;
        let step = AuditStep {
            step_number,
            rule_id: "daily_rate".to_string(),
            rule_name: "Daily Rate".to_string(),
            input: serde_json::json!({
                "salary_amount": salary.normalize().to_string(),
                "days_in_period": window.days_in_period
            }),
            output: serde_json::json!({
                "amount": amount.normalize().to_string()
            }),
            reasoning: format!(
                "${} x {} day(s) = ${}",
                salary.normalize(),
                window.days_in_period,
                amount.normalize()
            ),
        };
        return Ok((amount, step));
    }

    let divisor = Decimal::from(window.days_in_start_month);
    let amount = salary
        .checked_div(divisor)
        .and_then(|daily_rate| daily_rate.checked_mul(days))
        .ok_or_else(|| overflow(record, window))?;
    let step = AuditStep {
        step_number,
        rule_id: "monthly_proration".to_string(),
        rule_name: "Monthly Proration".to_string(),
        input: serde_json::json!({
            "salary_amount": salary.normalize().to_string(),
            "days_in_period": window.days_in_period,
            "days_in_start_month": window.days_in_start_month
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "${} / {} day(s) x {} day(s) = ${}",
            salary.normalize(),
            window.days_in_start_month,
            window.days_in_period,
            amount.normalize()
        ),
    };
    Ok((amount, step))
}
