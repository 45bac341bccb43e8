//! Error body shapes for the attendance reconciliation API.
//!
//! Failing endpoints answer with a JSON body of `{code, message, details?}`
//! so callers can branch on `code` without parsing prose. Engine errors
//! map onto that shape through [`ApiErrorResponse`].

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Stable error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Extra context, where a code and message alone would be cryptic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates an error body with no detail line.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates an error body with a detail line.
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

    /// A request that parsed as JSON but failed validation.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// A request body that did not parse as JSON.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// A reporting window whose end precedes its start.
    pub fn invalid_window(start: impl std::fmt::Display, end: impl std::fmt::Display) -> Self {
        Self::with_details(
            "INVALID_WINDOW",
            format!("Invalid reporting window: {} to {}", start, end),
            "The window end date precedes its start date",
        )
    }
}

/// An [`ApiError`] paired with the HTTP status it travels under.
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

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let (status, body) = match &error {
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidConfig { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CONFIG_ERROR", "Configuration error", error.to_string()),
            ),
            // Unparseable fields and missing identities normally surface as
            // per-row diagnostics rather than whole-request failures; this
            // mapping covers callers that bubble them instead.
            EngineError::DateParseError { .. }
            | EngineError::TimeParseError { .. }
            | EngineError::MissingJoinKey { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::validation_error(error.to_string()),
            ),
        };
        ApiErrorResponse {
            status,
            error: body,
        }
    }
}
