use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use galleria_core::UpstreamError;
use thiserror::Error;
use tracing::{debug, error};

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid {0} parameter: must be a positive number")]
    InvalidParameter(&'static str),
    #[error("Invalid query string: {0}")]
    InvalidQuery(String),
    #[error("Missing image hash")]
    MissingImageHash,
    #[error("Image not found")]
    ImageNotFound,
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingParameter(_)
            | AppError::InvalidParameter(_)
            | AppError::InvalidQuery(_)
            | AppError::MissingImageHash => StatusCode::BAD_REQUEST,
            AppError::ImageNotFound => StatusCode::NOT_FOUND,
            AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            debug!(error = %self, status = status.as_u16(), "rejected request");
        }

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
