//! Request types for the salary rate API.
//!
//! This module defines the JSON request structures for the `/salary-rate`
//! and `/company/salary-rates` endpoints, and the input checks applied before
//! records reach the engine.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{AccrualPolicy, Company, SalaryRecord};

/// Largest anchor day accepted from callers.
pub const MAX_ANCHOR_DAY: u32 = 31;

/// Request body for the `/salary-rate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRateRequest {
    /// The employee's salary terms.
    pub employee: SalaryRecordRequest,
    /// The reference date. Defaults to today.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// Request body for the `/company/salary-rates` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyPayrollRequest {
    /// The company the employees belong to.
    pub company: CompanyRequest,
    /// The company's employees.
    #[serde(default)]
    pub employees: Vec<SalaryRecordRequest>,
    /// The reference date shared by all employees. Defaults to today.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// Company information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyRequest {
    /// Unique identifier for the company.
    pub id: u64,
    /// The company name.
    pub name: String,
    /// The company address.
    #[serde(default)]
    pub address: String,
}

/// Employee salary terms in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRecordRequest {
    /// Unique identifier for the employee.
    pub id: u64,
    /// The employee's username.
    #[serde(default)]
    pub username: Option<String>,
    /// The employee's email.
    #[serde(default)]
    pub email: Option<String>,
    /// The company the employee belongs to.
    #[serde(default)]
    pub company_id: Option<u64>,
    /// The full-period base salary.
    pub salary_amount: Decimal,
    /// The accrual policy identifier (1, 2 or 3).
    pub accrual_policy: AccrualPolicy,
    /// The payment day of month.
    #[serde(default)]
    pub anchor_day: Option<u32>,
}

impl SalaryRecordRequest {
    /// Checks the fields the engine expects callers to have validated.
    ///
    /// A zero anchor day is let through: whether it is usable depends on the
    /// accrual policy, which is the engine's decision.
    pub fn validate(&self) -> EngineResult<()> {
        if self.salary_amount < Decimal::ZERO {
            return Err(EngineError::InvalidEmployee {
                field: "salary_amount".to_string(),
                message: "must not be negative".to_string(),
            });
        }

        if let Some(day) = self.anchor_day {
            if day > MAX_ANCHOR_DAY {
                return Err(EngineError::InvalidEmployee {
                    field: "anchor_day".to_string(),
                    message: format!("must be between 1 and {}, got {}", MAX_ANCHOR_DAY, day),
                });
            }
        }

        Ok(())
    }
}

impl CompanyPayrollRequest {
    /// Validates every employee, naming the offending entry on failure.
    pub fn validate(&self) -> EngineResult<()> {
        for (index, employee) in self.employees.iter().enumerate() {
            employee.validate().map_err(|err| match err {
                EngineError::InvalidEmployee { field, message } => EngineError::InvalidEmployee {
                    field: format!("employees[{}].{}", index, field),
                    message,
                },
                other => other,
            })?;
        }
        Ok(())
    }
}

impl From<SalaryRecordRequest> for SalaryRecord {
    fn from(req: SalaryRecordRequest) -> Self {
        SalaryRecord {
            id: req.id,
            username: req.username,
            email: req.email,
            company_id: req.company_id,
            salary_amount: req.salary_amount,
            accrual_policy: req.accrual_policy,
            anchor_day: req.anchor_day,
        }
    }
}

impl From<CompanyRequest> for Company {
    fn from(req: CompanyRequest) -> Self {
        Company {
            id: req.id,
            name: req.name,
            address: req.address,
        }
    }
}
