//! Handler for QR code generation.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, header},
    response::IntoResponse,
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::host::extract_host;
use crate::utils::qr_code;

/// Returns a PNG QR code encoding the short URL.
///
/// # Endpoint
///
/// `GET /qr/{code}`
///
/// The image encodes the short URL (not the destination), rendered with
/// error-correction level L, 10px modules, and a 4-module quiet zone.
/// Deactivated links still get a QR code; only unknown codes are rejected.
///
/// # Errors
///
/// Returns 404 if the short code doesn't exist.
pub async fn qr_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let host = extract_host(&headers)?;

    let link = state.shorten_service.get_link(&code).await?;
    let short_url = state.short_url(&host, &link.short_code);

    let png = qr_code::render_png(&short_url).map_err(|e| {
        AppError::internal(
            "Failed to render QR code",
            json!({ "reason": e.to_string() }),
        )
    })?;

    Ok((
        [
            (header::CONTENT_TYPE, "image/png".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("inline; filename={}_qr.png", link.short_code),
            ),
        ],
        png,
    ))
}
