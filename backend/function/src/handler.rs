use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use serde_json::json;
use tracing::{error, info};

use ocrelay_core::{extract_image_bytes, OcrError, OcrProvider, OcrResponse};
use ocrelay_vision::{GoogleVisionClient, VisionCredentials, ENGINE_NAME};

/// Builds a provider for one request. Fails when credentials are absent,
/// which the handler reports as an unavailable client.
pub type ProviderFactory =
    Arc<dyn Fn() -> Result<Arc<dyn OcrProvider>, OcrError> + Send + Sync>;

/// Router with the default factory: a fresh Vision client per request,
/// credentials re-discovered from the environment on every cold start.
pub fn function_router() -> Router {
    function_router_with(Arc::new(|| {
        let credentials = VisionCredentials::from_env().ok_or(OcrError::ClientUnavailable)?;
        Ok(Arc::new(GoogleVisionClient::new(credentials)) as Arc<dyn OcrProvider>)
    }))
}

/// Router with an injected provider factory.
pub fn function_router_with(factory: ProviderFactory) -> Router {
    Router::new()
        .route("/api/ocr", post(process_ocr).get(health))
        .route("/api/ocr/health", get(health))
        .fallback(not_found)
        .with_state(factory)
}

async fn process_ocr(
    State(factory): State<ProviderFactory>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    match run_ocr(&factory, &headers, &body).await {
        Ok(result) => Json(result).into_response(),
        Err(err) => error_response(&err),
    }
}

async fn run_ocr(
    factory: &ProviderFactory,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<OcrResponse, OcrError> {
    let provider = factory()?;

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

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "ocr_engine": ENGINE_NAME,
        "service": "OCR Relay Function",
    }))
}

async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Not found", "success": false })),
    )
        .into_response()
}

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
