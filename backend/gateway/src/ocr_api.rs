//! `POST /ocr` handler.
//!
//! Extracts image bytes from the request body, forwards them to the
//! provider, and shapes the annotation list into the response contract.
//! Every failure becomes a JSON error object with a 4xx/5xx status.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use tracing::{error, info};

use ocrelay_core::{extract_image_bytes, OcrError, OcrResponse};

use crate::server::GatewayState;

pub async fn process_ocr(
    State(state): State<GatewayState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    match run_ocr(&state, &headers, &body).await {
        Ok(result) => Json(result).into_response(),
        Err(err) => error_response(&err),
    }
}

async fn run_ocr(
    state: &GatewayState,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<OcrResponse, OcrError> {
    let provider = state.provider.clone().ok_or(OcrError::ClientUnavailable)?;

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());
    let image = extract_image_bytes(content_type, body)?;

    info!(image_bytes = image.len(), "Processing OCR request");
    let regions = provider.detect_text(&image).await?;

    let result = OcrResponse::from_regions(regions);
    info!(
        detections = result.detection_count,
        text_len = result.text.len(),
        "OCR completed"
    );
    Ok(result)
}

/// Convert a relay error into the JSON error contract.
fn error_response(err: &OcrError) -> Response {
    let status =
        StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
        error!(error = %err, "OCR request failed");
    }
    (
        status,
        Json(json!({ "error": err.to_string(), "success": false })),
    )
        .into_response()
}
