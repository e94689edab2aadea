//! HTTP request handlers for the compensation engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_monthly_salary_with_bounds, split_compensation};
use crate::error::EngineResult;
use crate::formatting::{format_indian_currency, format_indian_grouping, number_to_words};
use crate::models::CompensationPolicy;

use super::request::{AmountRequest, MonthlySalaryRequest, SplitRequest};
use super::response::{
    ApiError, ApiErrorResponse, CalculationEnvelope, FormatResponse, WordsResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/split", post(split_handler))
        .route("/monthly-salary", post(monthly_salary_handler))
        .route("/words", post(words_handler))
        .route("/format", post(format_handler))
        .with_state(state)
}

/// Handler for POST /split.
///
/// Splits a compensation total under the requested policy.
async fn split_handler(payload: Result<Json<SplitRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing split request");

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    let result = request
        .policy
        .parse::<CompensationPolicy>()
        .and_then(|policy| split_compensation(policy, request.total));
    respond(correlation_id, "split", start_time, result)
}

/// Handler for POST /monthly-salary.
///
/// Prorates fixed pay for one month. A missing `year` or `month` is taken
/// from the state's clock before the engine is called.
async fn monthly_salary_handler(
    State(state): State<AppState>,
    payload: Result<Json<MonthlySalaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing monthly salary request");

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let (year, month) = match (request.year, request.month) {
        (Some(year), Some(month)) => (year, month),
        (year, month) => {
            let current = state.current_month();
            (year.unwrap_or(current.year), month.unwrap_or(current.month))
        }
    };

    let start_time = Instant::now();
    let result = calculate_monthly_salary_with_bounds(
        request.ctc,
        request.fixed_pay,
        year,
        month,
        request.leave_count,
        state.config().year_bounds(),
    );
    respond(correlation_id, "monthly_salary", start_time, result)
}

/// Handler for POST /words.
async fn words_handler(payload: Result<Json<AmountRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing words request");

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    let result = number_to_words(request.value).map(|words| WordsResponse {
        value: request.value,
        words,
    });
    respond(correlation_id, "words", start_time, result)
}

/// Handler for POST /format.
async fn format_handler(
    State(state): State<AppState>,
    payload: Result<Json<AmountRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing format request");

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    let result = FormatResponse {
        value: request.value,
        grouped: format_indian_grouping(request.value),
        currency: format_indian_currency(request.value, state.config().currency()),
    };
    respond(correlation_id, "format", start_time, Ok(result))
}

/// Turns a JSON extraction failure into a 400 response.
fn parse_payload<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    let rejection = match payload {
        Ok(Json(request)) => return Ok(request),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
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
    Err(ApiErrorResponse::bad_request(error).into_response())
}

/// Wraps an engine result in the success envelope or an error response.
fn respond<T: Serialize>(
    correlation_id: Uuid,
    operation: &str,
    start_time: Instant,
    result: EngineResult<T>,
) -> Response {
    match result {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                operation,
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            let envelope = CalculationEnvelope::new(correlation_id, Utc::now(), result);
            (StatusCode::OK, Json(envelope)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                operation,
                error = %err,
                "Calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}
