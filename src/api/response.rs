//! Error response types for the MinWinTid mock API.
//!
//! This module defines the error response structures and the mapping from
//! [`MockError`] to HTTP status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::MockError;

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

    /// Creates a malformed-date error response.
    pub fn malformed_date(parameter: &str, value: &str) -> Self {
        Self::with_details(
            "MALFORMED_DATE",
            format!("Malformed date in '{}': '{}'", parameter, value),
            "Dates must use the YYYY-MM-DD format",
        )
    }

    /// Creates a missing-parameter error response.
    pub fn missing_parameter(detail: impl Into<String>) -> Self {
        Self::new("MISSING_PARAMETER", detail)
    }

    /// Creates an invalid-query error response for undecodable parameters.
    pub fn invalid_query(detail: impl Into<String>) -> Self {
        Self::new("INVALID_QUERY", detail)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<MockError> for ApiErrorResponse {
    fn from(error: MockError) -> Self {
        match error {
            MockError::MalformedDate { parameter, value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::malformed_date(&parameter, &value),
            },
            MockError::MissingParameter { detail } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::missing_parameter(detail),
            },
            MockError::Config { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            MockError::Serialization { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "ENCODING_ERROR",
                    "Failed to encode timesheet payload",
                    message,
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_malformed_date_maps_to_bad_request() {
        let mock_error = MockError::MalformedDate {
            parameter: "fra_dato".to_string(),
            value: "bogus".to_string(),
        };
        let api_error: ApiErrorResponse = mock_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "MALFORMED_DATE");
        assert!(api_error.error.message.contains("fra_dato"));
    }

    #[test]
    fn test_missing_parameter_maps_to_bad_request() {
        let mock_error = MockError::MissingParameter {
            detail: "missing field `ident`".to_string(),
        };
        let api_error: ApiErrorResponse = mock_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "MISSING_PARAMETER");
    }

    #[test]
    fn test_serialization_error_maps_to_internal() {
        let mock_error = MockError::Serialization {
            message: "boom".to_string(),
        };
        let api_error: ApiErrorResponse = mock_error.into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "ENCODING_ERROR");
    }
}
