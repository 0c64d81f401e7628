//! Company models.
//!
//! A company groups employees; [`CompanyPayroll`] is the company view with
//! every employee's accrued salary as of one reference date.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AccrualResult;

/// A company employing salaried staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Unique identifier for the company.
    pub id: u64,
    /// The company name.
    pub name: String,
    /// The company address.
    #[serde(default)]
    pub address: String,
}

/// A company together with its employees' accruals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyPayroll {
    /// The company the employees belong to.
    #[serde(flatten)]
    pub company: Company,
    /// The reference date shared by every accrual.
    pub as_of: NaiveDate,
    /// One accrual per employee, in input order.
    pub employees: Vec<AccrualResult>,
    /// Sum of the employees' rounded accrued amounts.
    pub total_accrued: Decimal,
}
