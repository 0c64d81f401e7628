//! HTTP API module for the salary rate service.
//!
//! This module provides the REST API endpoints that expose the salary rate
//! engine to callers.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CompanyPayrollRequest, CompanyRequest, MAX_ANCHOR_DAY, SalaryRateRequest, SalaryRecordRequest,
};
pub use response::{ApiError, ApiErrorResponse};
pub use state::{AppState, Clock, FixedClock, SystemClock};
