use crate::error::{AppError, Result};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::debug;

/// Redirects a short image link to the upstream URL it stands for.
pub async fn image_handler(
    Path(hash): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    if hash.is_empty() {
        return Err(AppError::MissingImageHash);
    }

    let original_url = state
        .content()
        .resolve_image(&hash)
        .ok_or(AppError::ImageNotFound)?;

    debug!(hash = %hash, url = %original_url, "redirecting short link");
    Ok((StatusCode::FOUND, [(header::LOCATION, original_url)]).into_response())
}

/// Answers `/api/v1/img` requests that carry no hash segment.
pub async fn missing_image_hash_handler() -> Result<Response> {
    Err(AppError::MissingImageHash)
}
