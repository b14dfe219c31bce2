//! OCR Relay Gateway HTTP Server
//!
//! The persistent surface: one Vision client initialized at startup and
//! shared across requests. Exposes `POST /ocr` plus liveness endpoints.

pub mod health_api;
pub mod ocr_api;
pub mod server;

pub use server::{build_router, start_server, GatewayState};
