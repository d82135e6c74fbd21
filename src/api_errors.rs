use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use derive_more::Display;
use serde_json::json;

use crate::errors::AppError;

/// Errors as seen by HTTP clients. Server-side failures carry a fixed
/// message only; the underlying cause is logged where the error is built.
#[derive(Debug, Display)]
pub enum ApiError {
    #[display("{_0}")]
    NotFound(String),

    #[display("{_0}")]
    BadRequest(String),

    #[display("{_0}")]
    InternalServerError(&'static str),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

impl ApiError {
    pub fn not_found() -> Self {
        ApiError::NotFound("Not found".to_string())
    }

    /// Maps a domain error onto its HTTP shape. `failure` is the only text a
    /// client sees for storage and internal errors.
    pub fn from_app_error(err: AppError, failure: &'static str) -> Self {
        match err {
            AppError::NotFound(msg) => ApiError::NotFound(msg),
            AppError::ValidationError(msg) => ApiError::BadRequest(msg),
            AppError::StorageError(_) | AppError::InternalError(_) => {
                tracing::error!(error = %err, "{}", failure);
                ApiError::InternalServerError(failure)
            }
        }
    }
}
