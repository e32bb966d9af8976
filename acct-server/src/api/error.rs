//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes. The absorb-vs-abort policy
//! lives in the handlers: the anonymous bootstrap never surfaces an
//! error to the client, while the authentication callback maps every
//! failure through this type and issues no session.

use acct_auth::AuthError;
use acct_identity::IdentityError;

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
    pub error: ApiErrorBody,
}

/// Inner error body with code and message
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "UNAUTHORIZED")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// Authentication failed (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
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

        let (status, body) = match self {
            ApiError::Validation { message, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                },
            ),
            ApiError::Unauthorized { message, .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "UNAUTHORIZED".into(),
                    message,
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

impl From<IdentityError> for ApiError {
    #[track_caller]
    fn from(source: IdentityError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match source {
            IdentityError::Validation { message, .. } => Self::Validation { message, location },
            denied @ IdentityError::AuthorizationDenied { .. } => Self::Unauthorized {
                message: denied.to_string(),
                location,
            },
            storage @ IdentityError::Storage { .. } => Self::Internal {
                message: storage.to_string(),
                location,
            },
        }
    }
}

impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(source: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match source {
            AuthError::JwtEncode { .. } => Self::Internal {
                message: source.to_string(),
                location,
            },
            _ => Self::Unauthorized {
                message: source.to_string(),
                location,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
