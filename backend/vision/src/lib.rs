//! Google Cloud Vision client for the OCR relay.
//!
//! Talks to the `images:annotate` REST endpoint with `TEXT_DETECTION` and
//! maps the annotation list into the relay's provider-neutral regions.

pub mod api;
pub mod client;
pub mod credentials;

pub use client::GoogleVisionClient;
pub use credentials::VisionCredentials;

/// Engine name reported by health endpoints.
pub const ENGINE_NAME: &str = "Google Vision API";
