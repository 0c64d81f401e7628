//! Accrual policy model and its descriptor table.
//!
//! This module defines the closed set of salary accrual policies. Each policy
//! is identified by a stable small integer that is never renumbered, which is
//! also its wire representation.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The rule governing how a period salary converts into an as-of-today amount.
///
/// # Example
///
/// ```
/// use salary_rate::models::AccrualPolicy;
///
/// let policy = AccrualPolicy::try_from(3).unwrap();
/// assert_eq!(policy, AccrualPolicy::MonthToDate);
/// assert_eq!(policy.description(), "Monthly rate with payment date");
/// assert_eq!(serde_json::to_string(&policy).unwrap(), "3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum AccrualPolicy {
    /// The salary is a daily rate; every elapsed day accrues the full amount.
    Daily = 1,
    /// The salary is a monthly rate accruing from the first of the month.
    Monthly = 2,
    /// The salary is a monthly rate accruing from the employee's payment date.
    MonthToDate = 3,
}

impl AccrualPolicy {
    /// Returns the stable numeric identifier of this policy.
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Returns the human-readable description of this policy.
    pub fn description(self) -> &'static str {
        match self {
            AccrualPolicy::Daily => "Daily rate",
            AccrualPolicy::Monthly => "Monthly rate",
            AccrualPolicy::MonthToDate => "Monthly rate with payment date",
        }
    }

    /// Returns the descriptor echoed alongside a computed accrual.
    pub fn descriptor(self) -> PolicyDescriptor {
        PolicyDescriptor {
            id: self.id(),
            description: self.description().to_string(),
        }
    }

    /// Returns true if the policy prorates a monthly salary over the days of a month.
    pub fn is_monthly(self) -> bool {
        matches!(self, AccrualPolicy::Monthly | AccrualPolicy::MonthToDate)
    }
}

impl TryFrom<u8> for AccrualPolicy {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(AccrualPolicy::Daily),
            2 => Ok(AccrualPolicy::Monthly),
            3 => Ok(AccrualPolicy::MonthToDate),
            _ => Err(EngineError::UnknownAccrualPolicy { value }),
        }
    }
}

impl From<AccrualPolicy> for u8 {
    fn from(policy: AccrualPolicy) -> Self {
        policy.id()
    }
}

impl std::fmt::Display for AccrualPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccrualPolicy::Daily => write!(f, "daily"),
            AccrualPolicy::Monthly => write!(f, "monthly"),
            AccrualPolicy::MonthToDate => write!(f, "month_to_date"),
        }
    }
}

/// The policy identifier and description attached to every accrual result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyDescriptor {
    /// The stable numeric identifier of the policy.
    pub id: u8,
    /// The human-readable description of the policy.
    pub description: String,
}
