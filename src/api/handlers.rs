//! HTTP request handlers for the salary rate API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{Company, SalaryRecord};

use super::request::{CompanyPayrollRequest, SalaryRateRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/salary-rate", post(salary_rate_handler))
        .route("/company/salary-rates", post(company_salary_rates_handler))
        .with_state(state)
}

/// Handler for POST /salary-rate endpoint.
///
/// Computes the salary one employee has accrued as of the requested date,
/// or today when no date is given.
async fn salary_rate_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalaryRateRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary rate request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Err(err) = request.employee.validate() {
        warn!(correlation_id = %correlation_id, error = %err, "Request validation failed");
        return error_response(err);
    }

    let today = request.as_of.unwrap_or_else(|| state.today());
    let record: SalaryRecord = request.employee.into();

    let start_time = Instant::now();
    match state.engine().compute_accrual(&record, today) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = record.id,
                policy = %record.accrual_policy,
                as_of = %today,
                accrued_amount = %result.accrued_amount,
                duration_us = start_time.elapsed().as_micros(),
                "Salary rate computed successfully"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = record.id,
                error = %err,
                "Salary rate computation failed"
            );
            error_response(err)
        }
    }
}

/// Handler for POST /company/salary-rates endpoint.
///
/// Computes the accruals of every employee of a company against the same
/// reference date.
async fn company_salary_rates_handler(
    State(state): State<AppState>,
    payload: Result<Json<CompanyPayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing company salary rates request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Err(err) = request.validate() {
        warn!(correlation_id = %correlation_id, error = %err, "Request validation failed");
        return error_response(err);
    }

    let today = request.as_of.unwrap_or_else(|| state.today());
    let company: Company = request.company.into();
    let records: Vec<SalaryRecord> = request.employees.into_iter().map(Into::into).collect();

    let start_time = Instant::now();
    let company_id = company.id;
    match state
        .engine()
        .compute_company_payroll(company, &records, today)
    {
        Ok(payroll) => {
            info!(
                correlation_id = %correlation_id,
                company_id,
                employees_count = records.len(),
                as_of = %today,
                total_accrued = %payroll.total_accrued,
                duration_us = start_time.elapsed().as_micros(),
                "Company salary rates computed successfully"
            );
            json_response(StatusCode::OK, payroll)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                company_id,
                error = %err,
                "Company salary rates computation failed"
            );
            error_response(err)
        }
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(err: EngineError) -> Response {
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

/// Translates a JSON extraction failure into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else if body_text.contains("Unknown accrual policy") {
                ApiError::unknown_accrual_policy(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    json_response(StatusCode::BAD_REQUEST, error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::state::FixedClock;
    use crate::config::ConfigLoader;
    use crate::models::{AccrualResult, CompanyPayroll};
    use axum::body::Body;
    use axum::http::Request;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::new(ConfigLoader::default())
            .with_clock(FixedClock(NaiveDate::from_ymd_opt(2020, 5, 10).unwrap()))
    }

    async fn post_json(uri: &str, body: String) -> (StatusCode, Vec<u8>) {
        let router = create_router(create_test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_salary_rate_uses_clock_when_as_of_missing() {
        let body = r#"{"employee": {"id": 3, "salary_amount": "30000", "accrual_policy": 3, "anchor_day": 25}}"#;
        let (status, body) = post_json("/salary-rate", body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        let result: AccrualResult = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.as_of, NaiveDate::from_ymd_opt(2020, 5, 10).unwrap());
        assert_eq!(result.accrued_amount, Decimal::from_str("16000.00").unwrap());
    }

    #[tokio::test]
    async fn test_salary_rate_prefers_as_of() {
        let body = r#"{
            "employee": {"id": 1, "salary_amount": "700", "accrual_policy": 1},
            "as_of": "2020-01-30"
        }"#;
        let (status, body) = post_json("/salary-rate", body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        let result: AccrualResult = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.accrued_amount, Decimal::from_str("21000.00").unwrap());
    }

    #[tokio::test]
    async fn test_missing_anchor_day_returns_400() {
        let body = r#"{"employee": {"id": 3, "salary_amount": "30000", "accrual_policy": 3}}"#;
        let (status, body) = post_json("/salary-rate", body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_POLICY_CONFIGURATION");
        assert_eq!(error.message, "Employee payment date is not set");
    }

    #[tokio::test]
    async fn test_unknown_policy_returns_400() {
        let body = r#"{"employee": {"id": 1, "salary_amount": "700", "accrual_policy": 9}}"#;
        let (status, body) = post_json("/salary-rate", body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "UNKNOWN_ACCRUAL_POLICY");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let (status, body) = post_json("/salary-rate", "{ not json".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_field_returns_validation_error() {
        let body = r#"{"employee": {"id": 1, "accrual_policy": 1}}"#;
        let (status, body) = post_json("/salary-rate", body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("missing field"));
    }

    #[tokio::test]
    async fn test_company_salary_rates() {
        let body = r#"{
            "company": {"id": 1, "name": "Acme"},
            "employees": [
                {"id": 1, "salary_amount": "700", "accrual_policy": 1},
                {"id": 2, "salary_amount": "30000", "accrual_policy": 2}
            ],
            "as_of": "2020-04-30"
        }"#;
        let (status, body) = post_json("/company/salary-rates", body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        let payroll: CompanyPayroll = serde_json::from_slice(&body).unwrap();
        assert_eq!(payroll.employees.len(), 2);
        // 700 x 30 + 30000 for the full month of April
        assert_eq!(payroll.total_accrued, Decimal::from_str("51000.00").unwrap());
    }
}
