//! Server error types

use axum::http::StatusCode;
use thiserror::Error;

use crate::packet::InvoiceDecodeError;
use crate::validation::ValidationError;

/// Fixed client-facing message for any rejected payload
pub const INVALID_PAYLOAD_MESSAGE: &str = "Invalid payload format";

/// Client-facing message for every 5xx error
pub const SERVER_ERROR_MESSAGE: &str = "Internal server error";

/// Main server error type
#[derive(Debug, Error)]
pub enum ServerError {
    // ========== Payload Errors ==========
    /// Payload failed structural validation
    ///
    /// The reason stays server-side; clients only see the fixed message.
    #[error("invalid payload: {0}")]
    InvalidPayload(#[from] ValidationError),

    /// Raw invoice body could not be decoded
    #[error("invalid invoice: {0}")]
    InvalidInvoice(#[from] InvoiceDecodeError),

    // ========== Upstream Errors ==========
    /// Gateway unreachable or returned an unreadable response
    #[error("upstream error: {0}")]
    Upstream(String),

    /// Gateway rejected the packet
    #[error("packet rejected by gateway: {0}")]
    Rejected(String),

    // ========== Server Errors ==========
    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Server result type alias
pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            ServerError::InvalidPayload(_) | ServerError::InvalidInvoice(_) => {
                StatusCode::BAD_REQUEST
            }

            // 502 Bad Gateway
            ServerError::Upstream(_) | ServerError::Rejected(_) => StatusCode::BAD_GATEWAY,

            // 500 Internal Server Error
            ServerError::Internal(_) | ServerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code for logs
    pub fn error_code(&self) -> &'static str {
        match self {
            ServerError::InvalidPayload(_) => "INVALID_PAYLOAD",
            ServerError::InvalidInvoice(_) => "INVALID_INVOICE",
            ServerError::Upstream(_) => "UPSTREAM_ERROR",
            ServerError::Rejected(_) => "REJECTED",
            ServerError::Internal(_) => "INTERNAL_ERROR",
            ServerError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Message safe to return to HTTP clients
    ///
    /// Server-side failures never expose their details.
    pub fn public_message(&self) -> String {
        match self {
            ServerError::InvalidPayload(_) => INVALID_PAYLOAD_MESSAGE.to_string(),
            other if other.status_code().is_server_error() => SERVER_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for ServerError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ServerError::Upstream(format!("timeout: {}", e))
        } else if e.is_connect() {
            ServerError::Upstream(format!("connection failed: {}", e))
        } else {
            ServerError::Upstream(e.to_string())
        }
    }
}

impl From<std::io::Error> for ServerError {
    fn from(e: std::io::Error) -> Self {
        ServerError::Internal(e.to_string())
    }
}
