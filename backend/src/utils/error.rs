use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_i18n::t;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use super::i18n::get_locale;
use crate::services::triage::TriageError;

/// API Error surfaced to HTTP clients
///
/// Model failures never reach this type; the triage layer turns them into a
/// degraded reply, so every variant here is a client error.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Body is not JSON at all (syntax, content type, size)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Well-formed JSON that does not fit `ChatRequest`
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Message must not be empty")]
    EmptyMessage,
}

impl ApiError {
    pub fn error_code(&self) -> i32 {
        match self {
            Self::ValidationError(_) => 4001,
            Self::InvalidInput(_) => 4002,
            Self::EmptyMessage => 4003,
        }
    }

    /// Machine-readable extras for the response body
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            Self::InvalidInput(reason) => Some(json!({ "reason": reason })),
            _ => None,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => Self::InvalidInput(e.body_text()),
            other => Self::ValidationError(other.body_text()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Get localized error message based on current locale
    pub fn localized_message(&self) -> String {
        let locale = get_locale();
        match self {
            Self::ValidationError(details) => {
                t!("validation.failed", locale = &locale, details = details).to_string()
            },
            Self::InvalidInput(_) => t!("validation.invalid_input", locale = &locale).to_string(),
            Self::EmptyMessage => t!("chat.empty_message", locale = &locale).to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        let response = ApiErrorResponse {
            code: self.error_code(),
            message: self.localized_message(),
            details: self.details(),
        };

        (StatusCode::BAD_REQUEST, Json(response)).into_response()
    }
}

impl From<TriageError> for ApiError {
    fn from(err: TriageError) -> Self {
        match err {
            TriageError::EmptyMessage => ApiError::EmptyMessage,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
