//! Application error handling
//!
//! This module provides unified error handling for the API,
//! converting engine and internal errors to appropriate HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use calorie_planner_shared::EngineError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Message shown for failures that are not the user's fault
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    #[error("Malformed input: {message}")]
    MalformedInput { field: String, message: String },

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match &err {
            EngineError::MalformedInput { field } => ApiError::MalformedInput {
                field: field.clone(),
                message: err.to_string(),
            },
            EngineError::OutOfRange(v) => ApiError::Validation {
                field: v.field.clone(),
                message: v.message.clone(),
            },
            EngineError::Internal(msg) => ApiError::Internal(anyhow::anyhow!(msg.clone())),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. }
            | ApiError::MalformedInput { .. }
            | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => "VALIDATION_ERROR",
            ApiError::MalformedInput { .. } | ApiError::MalformedBody(_) => "MALFORMED_INPUT",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Message safe to show to the user. Internal details are never exposed.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Validation { message, .. } | ApiError::MalformedInput { message, .. } => {
                message.clone()
            }
            ApiError::MalformedBody(msg) | ApiError::NotFound(msg) => msg.clone(),
            ApiError::Internal(_) => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn field(&self) -> Option<&str> {
        match self {
            ApiError::Validation { field, .. } | ApiError::MalformedInput { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(err) = &self {
            error!("Internal error: {:?}", err);
        }

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                code: self.code().to_string(),
                message: self.user_message(),
                field: self.field().map(str::to_string),
            },
        });

        (self.status(), body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use calorie_planner_shared::validation::ValidationError;

    #[test]
    fn test_validation_error_status() {
        let error = ApiError::Validation {
            field: "age".to_string(),
            message: "Age must be between 15 and 100 years.".to_string(),
        };
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_status() {
        let error = ApiError::NotFound("Metrics are disabled".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_from_engine_out_of_range() {
        let err: ApiError = EngineError::OutOfRange(ValidationError::new(
            "days",
            "Days available must be between 1 and 7.",
        ))
        .into();
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert_eq!(err.field(), Some("days"));
        assert_eq!(err.user_message(), "Days available must be between 1 and 7.");
    }

    #[test]
    fn test_from_engine_malformed() {
        let err: ApiError = EngineError::malformed("height").into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "MALFORMED_INPUT");
        assert_eq!(err.user_message(), "Invalid numeric input provided for Height.");
    }

    #[test]
    fn test_malformed_body_has_no_field() {
        let err = ApiError::MalformedBody("Request body must be a JSON object.".to_string());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "MALFORMED_INPUT");
        assert_eq!(err.field(), None);
    }

    #[test]
    fn test_internal_error_hides_details() {
        let err: ApiError = EngineError::Internal("BMI is not finite: NaN".to_string()).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
        assert_eq!(err.field(), None);
    }
}
