//! REST API error types
//!
//! These errors produce the uniform `{"status":"error","message":...}` JSON
//! body with the matching HTTP status code.

use ed_nlp::NlpError;
use ed_sheets::SheetsError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub status: &'static str,
    pub message: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or empty required field (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// Bad credentials (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Unknown user (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Store or model layer not reachable / not loaded (500)
    #[error("Upstream unavailable: {message} {location}")]
    UpstreamUnavailable {
        message: String,
        location: ErrorLocation,
    },

    /// Store API call failed (500)
    #[error("Upstream call failed: {message} {location}")]
    Upstream {
        message: String,
        location: ErrorLocation,
    },

    /// Inference call failed (500)
    #[error("Analysis failed: {message} {location}")]
    Analysis {
        message: String,
        location: ErrorLocation,
    },

    /// Anything else (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, message) = match self {
            ApiError::Validation { message, .. } => (StatusCode::BAD_REQUEST, message),
            ApiError::Unauthorized { message, .. } => (StatusCode::UNAUTHORIZED, message),
            ApiError::NotFound { message, .. } => (StatusCode::NOT_FOUND, message),
            ApiError::UpstreamUnavailable { message, .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            ApiError::Upstream { message, .. } => (StatusCode::INTERNAL_SERVER_ERROR, message),
            ApiError::Analysis { message, .. } => (StatusCode::INTERNAL_SERVER_ERROR, message),
            ApiError::Internal { message, .. } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (
            status,
            Json(ApiErrorResponse {
                status: "error",
                message,
            }),
        )
            .into_response()
    }
}

/// Convert store errors to API errors
impl From<SheetsError> for ApiError {
    #[track_caller]
    fn from(e: SheetsError) -> Self {
        // Don't expose store internals to clients
        log::error!("Store error: {}", e);

        match e {
            SheetsError::Unavailable { .. } => ApiError::UpstreamUnavailable {
                message: "Spreadsheet service is unavailable".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            SheetsError::MissingSheet { title, .. } => ApiError::Upstream {
                message: format!("Spreadsheet is missing the '{}' sheet", title),
                location: ErrorLocation::from(Location::caller()),
            },
            SheetsError::Api { .. } | SheetsError::Http { .. } | SheetsError::Malformed { .. } => {
                ApiError::Upstream {
                    message: "Spreadsheet API call failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

/// Convert inference errors to API errors
impl From<NlpError> for ApiError {
    #[track_caller]
    fn from(e: NlpError) -> Self {
        log::error!("Inference error: {}", e);

        ApiError::Analysis {
            message: "Diary analysis failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
