//! Error types for the salary rate engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing salary accruals.

use thiserror::Error;

/// The main error type for the salary rate engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use salary_rate::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/salary-rate.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/salary-rate.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The employee's accrual policy cannot be applied with the data on record,
    /// e.g. a month-to-date policy without a payment date.
    #[error("Invalid policy configuration for employee {employee_id}: {message}")]
    InvalidPolicyConfiguration {
        /// The ID of the employee whose record is inconsistent.
        employee_id: u64,
        /// A description of what is missing or wrong.
        message: String,
    },

    /// An accrual policy identifier outside the known set.
    #[error("Unknown accrual policy: {value}")]
    UnknownAccrualPolicy {
        /// The raw identifier that was supplied.
        value: u8,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
