//! Main HTTP gateway server.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use ocrelay_core::OcrProvider;

use crate::{health_api, ocr_api};

/// Application state shared across routes.
///
/// `provider` is `None` when credential discovery failed at startup; OCR
/// requests then answer 503 and the health endpoint reports unhealthy.
#[derive(Clone)]
pub struct GatewayState {
    pub provider: Option<Arc<dyn OcrProvider>>,
}

/// Build the gateway router with all routes.
pub fn build_router(state: GatewayState) -> Router {
    Router::new()
        .route("/ocr", post(ocr_api::process_ocr))
        .route("/", get(health_api::root))
        .route("/health", get(health_api::health))
        .with_state(state)
}

/// Start the Axum HTTP server for the gateway.
pub async fn start_server(addr: SocketAddr, router: Router) -> Result<()> {
    info!("Gateway HTTP server listening on {}", addr);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
