//! HTTP error responses
//!
//! Every failure is turned into a status code and a short plain-text body at
//! the request boundary. Internal detail is logged, never sent to clients.

use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

use super::assets::AssetError;
use crate::validation::{InputError, SchemaValidationError};

/// Error type returned by request handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Form body or query string could not be decoded
    #[error("Malformed request: {message}")]
    MalformedRequest { status: StatusCode, message: String },

    #[error("{0}")]
    InputTooLarge(#[from] InputError),

    #[error("{0}")]
    Validation(#[from] SchemaValidationError),

    #[error("Not Found")]
    NotFound,

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedRequest { status, .. } => *status,
            ApiError::InputTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Validation(SchemaValidationError::InvalidSchema(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        let status = rejection.status();
        ApiError::MalformedRequest {
            status: if status.is_client_error() {
                status
            } else {
                StatusCode::BAD_REQUEST
            },
            message: rejection.body_text(),
        }
    }
}

impl From<AssetError> for ApiError {
    fn from(err: AssetError) -> Self {
        match err {
            AssetError::NotFound(_) | AssetError::InvalidPath(_) => ApiError::NotFound,
            AssetError::ReadError(..) => ApiError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::Internal(detail) => {
                error!(error = %detail, "Request failed");
                "Internal Server Error".to_string()
            }
            ApiError::NotFound | ApiError::MethodNotAllowed => self.to_string(),
            other => {
                warn!(status = status.as_u16(), error = %other, "Rejected request");
                other.to_string()
            }
        };
        (status, body).into_response()
    }
}
