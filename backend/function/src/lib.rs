//! Function-per-request surface of the OCR relay.
//!
//! Mirrors the gateway's contract under `/api/ocr`, but constructs the
//! Vision client inside the handler on every call — the cold-start
//! semantics of a serverless deployment, kept here so both surfaces stay
//! behaviorally identical where it matters.

pub mod handler;

pub use handler::{function_router, function_router_with, ProviderFactory};
