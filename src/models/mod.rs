//! Core data models for the salary rate engine.
//!
//! This module contains all the domain models used throughout the engine.

mod accrual_policy;
mod accrual_result;
mod company;
mod salary_record;

pub use accrual_policy::{AccrualPolicy, PolicyDescriptor};
pub use accrual_result::{AccrualResult, AuditStep};
pub use company::{Company, CompanyPayroll};
pub use salary_record::SalaryRecord;
