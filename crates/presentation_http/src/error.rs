//! API error handling
//!
//! Maps application errors onto HTTP statuses. Internal errors keep their
//! message generic so provider details never leak to the caller.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            Self::ServiceUnavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, "service_unavailable", msg)
            },
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg),
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(e) => Self::BadRequest(e.to_string()),
            ApplicationError::Provider(msg) | ApplicationError::ExternalService(msg) => {
                Self::ServiceUnavailable(msg)
            },
            ApplicationError::Configuration(msg) | ApplicationError::Internal(msg) => {
                Self::Internal(msg)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_bad_request_message() {
        let err = ApiError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");
    }

    #[test]
    fn api_error_internal_message() {
        let err = ApiError::Internal("unexpected".to_string());
        assert_eq!(err.to_string(), "Internal error: unexpected");
    }

    #[test]
    fn error_response_serialization() {
        let resp = ErrorResponse {
            error: "Bad request".to_string(),
            code: "bad_request".to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("code"));
    }

    #[test]
    fn application_error_domain_converts_to_bad_request() {
        let source = ApplicationError::Domain(domain::DomainError::EmptyArticle);
        let result: ApiError = source.into();
        assert!(matches!(result, ApiError::BadRequest(_)));
    }

    #[test]
    fn application_error_external_service_converts() {
        let source = ApplicationError::ExternalService("api down".to_string());
        let result: ApiError = source.into();
        assert!(matches!(result, ApiError::ServiceUnavailable(_)));
    }

    #[test]
    fn application_error_internal_converts() {
        let source = ApplicationError::Internal("Error transcribing audio".to_string());
        let result: ApiError = source.into();
        assert!(matches!(result, ApiError::Internal(_)));
    }

    #[test]
    fn application_error_configuration_converts_to_internal() {
        let source = ApplicationError::Configuration("bad config".to_string());
        let result: ApiError = source.into();
        assert!(matches!(result, ApiError::Internal(_)));
    }

    #[test]
    fn into_response_bad_request() {
        let err = ApiError::BadRequest("invalid".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn into_response_not_found() {
        let err = ApiError::NotFound("resource".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn into_response_service_unavailable() {
        let err = ApiError::ServiceUnavailable("down".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn into_response_internal() {
        let err = ApiError::Internal("crash".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
