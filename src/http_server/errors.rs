//! # HTTP Errors
//!
//! Error type for the JSON API. Page routes never fail; unknown pages
//! render the 404 page instead.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::observability::{log_event_with_fields, Event};

pub type DashboardResult<T> = Result<T, DashboardError>;

#[derive(Debug, Clone, Error)]
pub enum DashboardError {
    /// No API endpoint at this path
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Navigation lookups need an absolute path
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DashboardError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DashboardError::NotFound(_) => StatusCode::NOT_FOUND,
            DashboardError::InvalidPath(_) => StatusCode::BAD_REQUEST,
            DashboardError::Serialization(_) | DashboardError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Serialization(err.to_string())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&DashboardError> for ErrorResponse {
    fn from(err: &DashboardError) -> Self {
        Self {
            error: err.to_string(),
            code: err.status_code().as_u16(),
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();
        log_event_with_fields(
            Event::ApiError,
            &[("error", &message), ("status", status.as_str())],
        );
        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            DashboardError::NotFound("/api/x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            DashboardError::InvalidPath("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            DashboardError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_response_body() {
        let body = ErrorResponse::from(&DashboardError::NotFound("/api/x".into()));
        assert_eq!(body.code, 404);
        assert_eq!(body.error, "Resource not found: /api/x");
    }

    #[test]
    fn test_into_response_status() {
        let response = DashboardError::InvalidPath("budgets".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
