use crate::error::{AppError, Result};
use crate::model::ContentParams;
use crate::state::AppState;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, Uri};
use axum::Json;
use galleria_core::{ContentQuery, ContentResponse, DEFAULT_LIMIT};

const FORWARDED_PROTO: &str = "x-forwarded-proto";

pub async fn content_handler(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
    params: std::result::Result<Query<ContentParams>, QueryRejection>,
) -> Result<Json<ContentResponse>> {
    let Query(params) = params.map_err(|e| AppError::InvalidQuery(e.body_text()))?;
    let query = validate(params)?;

    let base_url = match state.public_base_url() {
        Some(base_url) => base_url.to_owned(),
        None => request_base_url(&uri, &headers),
    };

    let response = state.content().get_content(&query, &base_url).await?;
    Ok(Json(response))
}

/// Checks the raw parameters in the order they are reported to clients.
fn validate(params: ContentParams) -> Result<ContentQuery> {
    let product_id = params
        .product_id
        .filter(|v| !v.is_empty())
        .ok_or(AppError::MissingParameter("productID"))?;
    let requestor = params
        .requestor
        .filter(|v| !v.is_empty())
        .ok_or(AppError::MissingParameter("requestor"))?;
    let limit = parse_limit(params.limit.as_deref())?;

    Ok(ContentQuery::new(product_id, requestor, limit))
}

/// Parses `limit` leniently: the leading integer counts, trailing junk is
/// ignored (`"12abc"` is 12, `"1.5"` is 1). Absent or empty means the default.
fn parse_limit(raw: Option<&str>) -> Result<u32> {
    let raw = match raw {
        None | Some("") => return Ok(DEFAULT_LIMIT),
        Some(raw) => raw,
    };

    leading_integer(raw)
        .filter(|value| *value > 0)
        .and_then(|value| u32::try_from(value).ok())
        .ok_or(AppError::InvalidParameter("limit"))
}

fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let value: i64 = rest[..end].parse().ok()?;

    Some(if negative { -value } else { value })
}

/// `{scheme}://{host}` of the inbound request, or empty when there is no host.
/// Only `http` and `https` are taken from `x-forwarded-proto`.
fn request_base_url(uri: &Uri, headers: &HeaderMap) -> String {
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .or_else(|| uri.authority().map(|authority| authority.as_str()));

    let Some(host) = host.filter(|host| !host.is_empty()) else {
        return String::new();
    };

    let scheme = headers
        .get(FORWARDED_PROTO)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .and_then(|scheme| {
            ["http", "https"]
                .into_iter()
                .find(|known| known.eq_ignore_ascii_case(scheme))
        })
        .unwrap_or("http");

    format!("{}://{}", scheme, host)
}
