use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::Client;
use tracing::debug;

use ocrelay_core::{OcrError, OcrProvider, TextRegion};

use crate::api::{AnnotateImageResponse, BatchAnnotateRequest, BatchAnnotateResponse};
use crate::credentials::VisionCredentials;

const PROVIDER_NAME: &str = "google-vision";
const DEFAULT_BASE_URL: &str = "https://vision.googleapis.com/v1";

/// Google Cloud Vision OCR provider.
pub struct GoogleVisionClient {
    client: Client,
    credentials: VisionCredentials,
    base_url: String,
}

impl GoogleVisionClient {
    pub fn new(credentials: VisionCredentials) -> Self {
        Self {
            client: Client::new(),
            credentials,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn provider_error(message: impl Into<String>) -> OcrError {
        OcrError::Provider {
            provider: PROVIDER_NAME.to_string(),
            message: message.into(),
        }
    }
}

#[async_trait]
impl OcrProvider for GoogleVisionClient {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn detect_text(&self, image: &[u8]) -> Result<Vec<TextRegion>, OcrError> {
        let body = BatchAnnotateRequest::text_detection(BASE64.encode(image));

        debug!(image_bytes = image.len(), "Sending annotate request to Vision");

        let mut request = self
            .client
            .post(format!("{}/images:annotate", self.base_url))
            .json(&body);
        request = match &self.credentials {
            VisionCredentials::ApiKey(key) => request.query(&[("key", key.as_str())]),
            VisionCredentials::AccessToken(token) => request.bearer_auth(token),
        };

        let response = request
            .send()
            .await
            .map_err(|e| Self::provider_error(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(Self::provider_error(format!(
                "returned {status}: {error_body}"
            )));
        }

        let batch: BatchAnnotateResponse = response
            .json()
            .await
            .map_err(|e| Self::provider_error(format!("invalid response body: {e}")))?;

        let image_response = batch.responses.into_iter().next().unwrap_or_default();
        regions_from(image_response)
    }
}

/// Map one per-image annotate response into provider-neutral regions.
fn regions_from(response: AnnotateImageResponse) -> Result<Vec<TextRegion>, OcrError> {
    if let Some(status) = response.error {
        return Err(GoogleVisionClient::provider_error(status.message));
    }

    Ok(response
        .text_annotations
        .into_iter()
        .map(|annotation| {
            let bounds = annotation
                .bounding_poly
                .map(|poly| poly.vertices.iter().map(|v| [v.x, v.y]).collect())
                .unwrap_or_default();
            TextRegion::new(annotation.description, bounds)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{BoundingPoly, EntityAnnotation, Status, Vertex};

    fn annotation(text: &str, corners: &[(i32, i32)]) -> EntityAnnotation {
        EntityAnnotation {
            description: text.to_string(),
            bounding_poly: Some(BoundingPoly {
                vertices: corners.iter().map(|&(x, y)| Vertex { x, y }).collect(),
            }),
        }
    }

    #[test]
    fn maps_annotations_in_order() {
        let response = AnnotateImageResponse {
            text_annotations: vec![
                annotation("FULL TEXT", &[(0, 0), (100, 0), (100, 50), (0, 50)]),
                annotation("FULL", &[(0, 0), (40, 0), (40, 50), (0, 50)]),
            ],
            error: None,
        };
        let regions = regions_from(response).unwrap();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].text, "FULL TEXT");
        assert_eq!(regions[1].bounds[1], [40, 0]);
    }

    #[test]
    fn empty_annotations_map_to_no_regions() {
        let regions = regions_from(AnnotateImageResponse::default()).unwrap();
        assert!(regions.is_empty());
    }

    #[test]
    fn missing_bounding_poly_yields_empty_bounds() {
        let response = AnnotateImageResponse {
            text_annotations: vec![EntityAnnotation {
                description: "word".into(),
                bounding_poly: None,
            }],
            error: None,
        };
        let regions = regions_from(response).unwrap();
        assert!(regions[0].bounds.is_empty());
    }

    #[test]
    fn per_image_error_becomes_provider_error() {
        let response = AnnotateImageResponse {
            text_annotations: vec![],
            error: Some(Status {
                code: Some(7),
                message: "permission denied".into(),
            }),
        };
        let err = regions_from(response).unwrap_err();
        assert_eq!(err.http_status(), 500);
        assert!(err.to_string().contains("permission denied"));
    }
}
