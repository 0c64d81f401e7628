//! Salary Rate Engine
//!
//! This crate computes the salary an employee has accrued as of a reference
//! date under a daily, monthly, or monthly-with-payment-date policy, and
//! exposes the computation over a small HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
