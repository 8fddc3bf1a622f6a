//! # HTTP API Errors
//!
//! Error types for the HTTP surface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::validation::FieldError;

/// Result type for controller operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Controller errors
///
/// Only two client error kinds exist: an id that does not resolve in the
/// target collection, and one or more violated field rules. Both are
/// surfaced directly as status + JSON body; nothing propagates further and
/// nothing is retried.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Id does not resolve in the target collection
    #[error("{0} not found")]
    NotFound(&'static str),

    /// One or more field rules violated
    #[error("request validation failed")]
    Validation(Vec<FieldError>),

    /// Internal error (poisoned store lock)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            // {message: "<Resource> not found"}
            ApiError::NotFound(_) | ApiError::Internal(_) => {
                json!({ "message": self.to_string() })
            }
            // {error: [{value, msg, param, location}, ...]}
            ApiError::Validation(errors) => json!({ "error": errors }),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::NotFound("User").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Validation(Vec::new()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Internal("test".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(ApiError::NotFound("Fruit").to_string(), "Fruit not found");
    }

    #[test]
    fn test_validation_body_shape() {
        let entry = FieldError {
            value: Value::String(String::new()),
            msg: "Color must not be empty.".to_string(),
            param: "color".to_string(),
            location: "body".to_string(),
        };
        let err = ApiError::Validation(vec![entry]);

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
