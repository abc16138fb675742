//! Error types module
//!
//! All request-facing failures are unified under the `AppError` enum.
//! Client input errors map to 400-class responses; upstream transport
//! errors are classified distinctly so operators can tell a timeout from
//! a bad status or a malformed body. Each variant knows its HTTP status,
//! its client-facing message, and the level it should be logged at.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Expected errors like validation failures
    Debug,
    /// Upstream faults worth operator attention
    Warn,
    /// Unexpected failures
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Upstream answered with a non-200 status. The status is mirrored to
    /// the caller and the upstream body is passed through for diagnosis.
    #[error("n8n service returned status code: {status}")]
    UpstreamStatus { status: u16, body: String },

    /// Could not reach the upstream at all: timeout, DNS, refusal, reset.
    #[error("Failed to connect to n8n service: {0}")]
    UpstreamUnreachable(String),

    /// Upstream answered 200 but the body was not valid JSON.
    #[error("Invalid response format from n8n")]
    UpstreamFormat,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status code to return. Upstream statuses are mirrored.
    pub fn http_status_code(&self) -> u16 {
        match self {
            AppError::InvalidInput(_) => 400,
            AppError::UpstreamStatus { status, .. } => *status,
            AppError::UpstreamUnreachable(_) => 503,
            AppError::UpstreamFormat => 500,
            AppError::Internal(_) => 500,
        }
    }

    /// Client-facing message for the `error` field of the response body.
    pub fn client_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::UpstreamStatus { status, .. } => {
                format!("n8n service returned status code: {}", status)
            }
            AppError::UpstreamUnreachable(_) => "Failed to connect to n8n service".to_string(),
            AppError::UpstreamFormat => "Invalid response format from n8n".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::UpstreamStatus { .. } => "UpstreamStatus",
            AppError::UpstreamUnreachable(_) => "UpstreamUnreachable",
            AppError::UpstreamFormat => "UpstreamFormat",
            AppError::Internal(_) => "Internal",
        }
    }

    pub fn log_level(&self) -> LogLevel {
        match self {
            AppError::InvalidInput(_) => LogLevel::Debug,
            AppError::UpstreamStatus { .. } => LogLevel::Warn,
            AppError::UpstreamUnreachable(_) => LogLevel::Warn,
            AppError::UpstreamFormat => LogLevel::Error,
            AppError::Internal(_) => LogLevel::Error,
        }
    }
}
