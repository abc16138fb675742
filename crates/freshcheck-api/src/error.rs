//! HTTP error response conversion
//!
//! Handlers return `Result<impl IntoResponse, HttpAppError>`. `AppError`
//! values convert into `HttpAppError` so they render consistently
//! (status, body, logging). The body always carries a machine-checkable
//! `error` field; upstream-status errors additionally pass the upstream
//! body through as `message`, and connection failures carry `details`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use freshcheck_core::{AppError, LogLevel};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    /// Upstream body text when the webhook returned a non-200 status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Transport failure detail when the webhook could not be reached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Wrapper type for AppError to implement IntoResponse
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for AppError (external type from freshcheck-core)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<anyhow::Error> for HttpAppError {
    fn from(err: anyhow::Error) -> Self {
        HttpAppError(AppError::Internal(err.to_string()))
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type = error_type, "Error occurred");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type = error_type, "Error occurred");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_type = error_type, "Error occurred");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        log_error(app_error);

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = ErrorResponse {
            error: app_error.client_message(),
            message: match app_error {
                AppError::UpstreamStatus { body, .. } => Some(body.clone()),
                _ => None,
            },
            details: match app_error {
                AppError::UpstreamUnreachable(details) => Some(details.clone()),
                _ => None,
            },
        };

        (status, Json(body)).into_response()
    }
}
