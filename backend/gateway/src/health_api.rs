//! Gateway liveness and readiness endpoints.

use axum::extract::State;
use axum::response::Json;
use serde_json::{json, Value};

use crate::server::GatewayState;

const OCR_ENGINE: &str = "Google Vision API";

/// Handler for `GET /`.
pub async fn root() -> Json<Value> {
    Json(json!({
        "status": "running",
        "service": "OCR Relay",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Handler for `GET /health`. Unhealthy when the Vision client could not
/// be initialized at startup.
pub async fn health(State(state): State<GatewayState>) -> Json<Value> {
    match &state.provider {
        Some(_) => Json(json!({
            "status": "healthy",
            "ocr_engine": OCR_ENGINE,
            "client_initialized": true,
        })),
        None => Json(json!({
            "status": "unhealthy",
            "ocr_engine": OCR_ENGINE,
            "error": "Vision client not initialized. Check credentials.",
        })),
    }
}
