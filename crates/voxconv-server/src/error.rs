//! HTTP error responses.

use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{error, warn};
use voxconv_core::ErrorResponse;

use crate::converter::ConverterError;

/// Errors returned by the `/convert` endpoint, rendered as `{"detail": ...}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A required multipart field was not sent.
    #[error("Missing form field: {0}")]
    MissingField(&'static str),

    /// The uploaded file is not audio.
    #[error("Invalid file type. Please upload an audio file.")]
    InvalidFileType,

    /// The request body is over the configured size cap.
    #[error("Uploaded file is too large.")]
    TooLarge,

    /// The request body could not be read as multipart form data.
    #[error("{message}")]
    Upload {
        /// Status chosen by the multipart parser (400, 413...).
        status: StatusCode,
        /// Parser message.
        message: String,
    },

    /// No conversion backend is available.
    #[error("{0}")]
    NotImplemented(String),

    /// Anything else.
    #[error("An unexpected error occurred: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MissingField(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InvalidFileType => StatusCode::BAD_REQUEST,
            Self::TooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Upload { status, .. } => *status,
            Self::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError {
    /// Multipart parser failure; length-limit failures get their own message.
    fn upload(status: StatusCode, message: String) -> Self {
        if status == StatusCode::PAYLOAD_TOO_LARGE {
            Self::TooLarge
        } else {
            Self::Upload { status, message }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(%status, "Conversion request failed: {}", self);
        } else {
            warn!(%status, "Conversion request rejected: {}", self);
        }
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        Self::upload(rejection.status(), rejection.body_text())
    }
}

impl From<MultipartError> for ApiError {
    fn from(e: MultipartError) -> Self {
        Self::upload(e.status(), e.body_text())
    }
}

impl From<ConverterError> for ApiError {
    fn from(e: ConverterError) -> Self {
        match e {
            ConverterError::NotImplemented => Self::NotImplemented(e.to_string()),
            ConverterError::Failed(message) => Self::Internal(message),
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(e: std::io::Error) -> Self {
        Self::Internal(e.to_string())
    }
}
