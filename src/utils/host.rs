//! Request host extraction for short-URL assembly.

use crate::error::AppError;
use axum::http::{HeaderMap, header};

/// Extracts the host (including any port) from the `Host` header.
///
/// The short URL returned by the API is assembled at the HTTP boundary from
/// the host the client actually used, so ports are kept as-is.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the `Host` header is missing or not
/// valid UTF-8.
pub fn extract_host(headers: &HeaderMap) -> Result<String, AppError> {
    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("Missing Host header", serde_json::json!({})))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header", serde_json::json!({})))?;

    Ok(host.to_string())
}
