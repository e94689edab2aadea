//! Response types for the compensation engine API.
//!
//! This module defines the success envelope, the endpoint-specific result
//! bodies, and the error response structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;

/// Wrapper around every successful result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationEnvelope<T> {
    /// Unique identifier of this calculation, also used as the log correlation id.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// The calculation result.
    pub result: T,
}

impl<T> CalculationEnvelope<T> {
    /// Wraps a result with the current engine version.
    pub fn new(calculation_id: Uuid, timestamp: DateTime<Utc>, result: T) -> Self {
        Self {
            calculation_id,
            timestamp,
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            result,
        }
    }
}

/// Result body of the `/words` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordsResponse {
    /// The amount that was converted.
    pub value: Decimal,
    /// The amount in words.
    pub words: String,
}

/// Result body of the `/format` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatResponse {
    /// The amount that was formatted.
    pub value: Decimal,
    /// Indian digit grouping of the integer part, e.g. `12,34,567`.
    pub grouped: String,
    /// The amount in the configured currency format.
    pub currency: String,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response for a request body that could not be used.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::InvalidAmount { field, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_AMOUNT",
                    message,
                    format!("Field '{}' must be zero or positive", field),
                ),
            },
            EngineError::InvalidRange { field, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_RANGE",
                    message,
                    format!("Field '{}' is outside its permitted range", field),
                ),
            },
            EngineError::PolicyInfeasible { component, .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "POLICY_INFEASIBLE",
                    message,
                    format!(
                        "The total is too small to cover the fixed components before '{}'",
                        component
                    ),
                ),
            },
            EngineError::OutOfDomain { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("OUT_OF_DOMAIN", message),
            },
            EngineError::ConfigNotFound { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            EngineError::ConfigParseError { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    message,
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_infeasible_policy_is_unprocessable() {
        let engine_error = EngineError::PolicyInfeasible {
            policy: "appraisal".to_string(),
            component: "special_allowance".to_string(),
            shortfall: Decimal::from_str("19200").unwrap(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(api_error.error.code, "POLICY_INFEASIBLE");
        assert!(api_error.error.message.contains("19200"));
    }

    #[test]
    fn test_validation_errors_are_bad_requests() {
        let cases = [
            (EngineError::invalid_amount("ctc", Decimal::NEGATIVE_ONE), "INVALID_AMOUNT"),
            (EngineError::invalid_range("month", "13"), "INVALID_RANGE"),
            (
                EngineError::OutOfDomain {
                    value: "1e12".to_string(),
                    limit: "1e12".to_string(),
                },
                "OUT_OF_DOMAIN",
            ),
        ];
        for (engine_error, code) in cases {
            let api_error: ApiErrorResponse = engine_error.into();
            assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
            assert_eq!(api_error.error.code, code);
        }
    }

    #[test]
    fn test_config_errors_are_server_errors() {
        let api_error: ApiErrorResponse = EngineError::ConfigNotFound {
            path: "config/engine.yaml".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }

    #[test]
    fn test_envelope_carries_engine_version() {
        let envelope = CalculationEnvelope::new(Uuid::new_v4(), Utc::now(), "ok");
        assert_eq!(envelope.engine_version, env!("CARGO_PKG_VERSION"));
    }
}
