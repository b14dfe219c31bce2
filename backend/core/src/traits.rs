use async_trait::async_trait;

use crate::error::OcrError;
use crate::types::TextRegion;

/// Trait for OCR providers the relay can delegate to.
///
/// Implementations perform the actual text detection remotely; the relay
/// only reshapes their output.
#[async_trait]
pub trait OcrProvider: Send + Sync {
    /// Provider name (e.g., "google-vision").
    fn name(&self) -> &str;

    /// Detect text in the given image bytes.
    ///
    /// Returns the provider's annotation list in order: full text first,
    /// then the individual detections. An image with no recognizable text
    /// yields an empty vector.
    async fn detect_text(&self, image: &[u8]) -> Result<Vec<TextRegion>, OcrError>;
}
