//! Wire types for the Vision `images:annotate` REST endpoint.
//!
//! Only the fields the relay reads are modeled; everything else in the
//! provider response is ignored during deserialization.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct BatchAnnotateRequest {
    pub requests: Vec<AnnotateImageRequest>,
}

#[derive(Debug, Serialize)]
pub struct AnnotateImageRequest {
    pub image: Image,
    pub features: Vec<Feature>,
}

#[derive(Debug, Serialize)]
pub struct Image {
    /// Base64-encoded image bytes.
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: String,
}

impl BatchAnnotateRequest {
    /// Single-image TEXT_DETECTION request.
    pub fn text_detection(content: String) -> Self {
        Self {
            requests: vec![AnnotateImageRequest {
                image: Image { content },
                features: vec![Feature {
                    kind: "TEXT_DETECTION".to_string(),
                }],
            }],
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct BatchAnnotateResponse {
    #[serde(default)]
    pub responses: Vec<AnnotateImageResponse>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateImageResponse {
    #[serde(default)]
    pub text_annotations: Vec<EntityAnnotation>,
    pub error: Option<Status>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityAnnotation {
    #[serde(default)]
    pub description: String,
    pub bounding_poly: Option<BoundingPoly>,
}

#[derive(Debug, Deserialize)]
pub struct BoundingPoly {
    #[serde(default)]
    pub vertices: Vec<Vertex>,
}

/// Polygon corner. Vision omits zero-valued coordinates, so both default.
#[derive(Debug, Default, Deserialize)]
pub struct Vertex {
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
}

/// Per-image error status (`google.rpc.Status`).
#[derive(Debug, Deserialize)]
pub struct Status {
    pub code: Option<i32>,
    #[serde(default)]
    pub message: String,
}
