//! API error handling
//!
//! Every failure is rendered as `{"error": <message>, "code": <code>}`.
//! Messages of client and configuration errors are passed through verbatim;
//! transport failures collapse to a single generic message.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned when the provider could not be reached
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch weather data";

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Upstream error ({status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("Failed to fetch weather data")]
    FetchFailed,
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Configuration(_) | Self::FetchFailed => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            },
        }
    }

    /// Machine-readable error code
    pub const fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "bad_request",
            Self::Configuration(_) => "configuration_error",
            Self::Upstream { .. } => "upstream_error",
            Self::FetchFailed => "fetch_failed",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();
        let message = match self {
            Self::BadRequest(msg) | Self::Configuration(msg) => msg,
            Self::Upstream { message, .. } => message,
            Self::FetchFailed => FETCH_FAILED_MESSAGE.to_string(),
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
            ApplicationError::Configuration(msg) => Self::Configuration(msg),
            ApplicationError::Upstream { status, message } => Self::Upstream { status, message },
            ApplicationError::ExternalService(_) | ApplicationError::Internal(_) => {
                Self::FetchFailed
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::DomainError;

    #[test]
    fn api_error_bad_request_message() {
        let err = ApiError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");
    }

    #[test]
    fn api_error_fetch_failed_message() {
        assert_eq!(ApiError::FetchFailed.to_string(), FETCH_FAILED_MESSAGE);
    }

    #[test]
    fn error_response_serialization() {
        let resp = ErrorResponse {
            error: "Bad request".to_string(),
            code: "bad_request".to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"error":"Bad request","code":"bad_request"}"#);
    }

    #[test]
    fn domain_error_converts_to_bad_request() {
        let result: ApiError = ApplicationError::Domain(DomainError::MissingQuery).into();
        assert!(matches!(
            result,
            ApiError::BadRequest(ref msg) if msg == "Query parameter \"q\" is required"
        ));
    }

    #[test]
    fn configuration_error_keeps_message() {
        let result: ApiError =
            ApplicationError::Configuration(application::API_KEY_MISSING.to_string()).into();
        assert!(matches!(
            result,
            ApiError::Configuration(ref msg) if msg == application::API_KEY_MISSING
        ));
        assert_eq!(result.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn transport_errors_collapse_to_fetch_failed() {
        let external: ApiError =
            ApplicationError::ExternalService("connection refused".into()).into();
        let internal: ApiError = ApplicationError::Internal("eof while parsing".into()).into();
        assert!(matches!(external, ApiError::FetchFailed));
        assert!(matches!(internal, ApiError::FetchFailed));
    }

    #[test]
    fn upstream_status_is_relayed() {
        let err: ApiError = ApplicationError::Upstream {
            status: 404,
            message: "city not found".into(),
        }
        .into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.code(), "upstream_error");
    }

    #[test]
    fn invalid_upstream_status_becomes_bad_gateway() {
        let err = ApiError::Upstream {
            status: 42,
            message: "weird".into(),
        };
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn into_response_bad_request() {
        let response = ApiError::BadRequest("invalid".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn into_response_fetch_failed() {
        let response = ApiError::FetchFailed.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
