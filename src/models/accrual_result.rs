//! Accrual result models for the salary rate engine.
//!
//! This module contains the [`AccrualResult`] type returned by the engine and the
//! [`AuditStep`] records that explain how each amount was reached.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{PolicyDescriptor, SalaryRecord};

/// A single step in the audit trace of an accrual calculation.
///
/// # Example
///
/// ```
/// use salary_rate::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "accrual_window".to_string(),
///     rule_name: "Accrual Window".to_string(),
///     input: serde_json::json!({"today": "2020-01-10"}),
///     output: serde_json::json!({"window_start": "2020-01-01"}),
///     reasoning: "Monthly policy accrues from the first of the month".to_string(),
/// };
/// assert_eq!(step.step_number, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number in the calculation.
    pub step_number: u32,
    /// A unique identifier for the rule applied.
    pub rule_id: String,
    /// A human-readable name for the rule.
    pub rule_name: String,
    /// The input values for this step.
    pub input: serde_json::Value,
    /// The output values from this step.
    pub output: serde_json::Value,
    /// A human-readable explanation of the calculation.
    pub reasoning: String,
}

/// The salary accrued by an employee as of a reference date.
///
/// Serializes as the original record's fields with the computed fields
/// alongside them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccrualResult {
    /// The record the accrual was computed for.
    #[serde(flatten)]
    pub record: SalaryRecord,
    /// The reference date the accrual was computed as of.
    pub as_of: NaiveDate,
    /// The accrued amount, always carrying exactly two decimal places.
    pub accrued_amount: Decimal,
    /// The policy that was applied.
    pub policy: PolicyDescriptor,
    /// The ordered steps that produced `accrued_amount`.
    pub audit_trace: Vec<AuditStep>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccrualPolicy;

    fn create_test_result() -> AccrualResult {
        AccrualResult {
            record: SalaryRecord::new(1, Decimal::new(700, 0), AccrualPolicy::Daily),
            as_of: NaiveDate::from_ymd_opt(2020, 1, 10).unwrap(),
            accrued_amount: Decimal::new(700000, 2),
            policy: AccrualPolicy::Daily.descriptor(),
            audit_trace: vec![],
        }
    }

    #[test]
    fn test_serialize_flattens_record_fields() {
        let json = serde_json::to_value(create_test_result()).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["salary_amount"], "700");
        assert_eq!(json["accrual_policy"], 1);
        assert_eq!(json["accrued_amount"], "7000.00");
        assert_eq!(json["as_of"], "2020-01-10");
        assert_eq!(json["policy"]["id"], 1);
        assert_eq!(json["policy"]["description"], "Daily rate");
        assert!(json.get("record").is_none());
    }

    #[test]
    fn test_deserialize_result() {
        let json = serde_json::to_string(&create_test_result()).unwrap();
        let result: AccrualResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result.record.id, 1);
        assert_eq!(result.accrued_amount, Decimal::new(7000, 0));
        assert_eq!(result.policy.description, "Daily rate");
    }
}
