//! Error types for the tone service
//!
//! Every failure is reported to clients as
//! `{ "success": false, "error": { "message", "code" } }`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Tone Error Enum ==
/// Unified error type for the tone service. The cache itself never fails.
#[derive(Error, Debug)]
pub enum ToneError {
    /// Malformed, missing or empty request data
    #[error("{0}")]
    InvalidInput(String),

    /// Text longer than the accepted maximum after trimming
    #[error("Text exceeds maximum length of {max} characters")]
    TextTooLong { max: usize },

    /// No credential configured for the text-generation service
    #[error("API key not configured")]
    Unconfigured,

    /// The text-generation service answered with a failure status
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// Unexpected failure while processing
    #[error("{0}")]
    Internal(String),
}

impl ToneError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            ToneError::InvalidInput(_) => "INVALID_INPUT",
            ToneError::TextTooLong { .. } => "TEXT_TOO_LONG",
            ToneError::Unconfigured => "MISSING_KEY",
            ToneError::Upstream { .. } => "API_ERROR",
            ToneError::Internal(_) => "SERVER_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ToneError::InvalidInput(_) | ToneError::TextTooLong { .. } => StatusCode::BAD_REQUEST,
            ToneError::Unconfigured | ToneError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ToneError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ToneError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "success": false,
            "error": {
                "message": self.to_string(),
                "code": self.code(),
            }
        }));

        (self.status(), body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the tone service.
pub type Result<T> = std::result::Result<T, ToneError>;
