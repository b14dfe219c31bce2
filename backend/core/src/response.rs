//! Response shaping for OCR results.
//!
//! Maps a provider's annotation list into the JSON contract returned to
//! callers: the first annotation is the full text, the rest become
//! individual detections.

use serde::{Deserialize, Serialize};

use crate::types::TextRegion;

/// Google Vision supplies no per-word confidence, so a fixed score is
/// substituted for every detection.
pub const PLACEHOLDER_CONFIDENCE: f64 = 95.0;

/// One detected text region in the response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Detection {
    pub text: String,
    pub confidence: f64,
    /// Four `[x, y]` corner points of the bounding polygon.
    pub bbox: Vec<[i32; 2]>,
}

/// The JSON body returned to callers on a successful OCR request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrResponse {
    pub success: bool,
    pub text: String,
    pub confidence: f64,
    pub detections: Vec<Detection>,
    pub detection_count: usize,
}

impl OcrResponse {
    /// Result for an image in which the provider found no text at all.
    pub fn empty() -> Self {
        Self {
            success: true,
            text: String::new(),
            confidence: 0.0,
            detections: Vec::new(),
            detection_count: 0,
        }
    }

    /// Shape a provider annotation list into the response contract.
    ///
    /// The first region holds the entire detected text; every following
    /// region becomes a detection carrying the placeholder confidence.
    /// The reported confidence is the average over detections, rounded to
    /// two decimals, defaulting to the placeholder when no individual
    /// detections exist.
    pub fn from_regions(regions: Vec<TextRegion>) -> Self {
        let mut regions = regions.into_iter();
        let full_text = match regions.next() {
            Some(region) => region.text,
            None => return Self::empty(),
        };

        let detections: Vec<Detection> = regions
            .map(|region| Detection {
                text: region.text,
                confidence: PLACEHOLDER_CONFIDENCE,
                bbox: region.bounds,
            })
            .collect();

        let confidence = if detections.is_empty() {
            PLACEHOLDER_CONFIDENCE
        } else {
            let total: f64 = detections.iter().map(|d| d.confidence).sum();
            round2(total / detections.len() as f64)
        };

        Self {
            success: true,
            text: full_text,
            confidence,
            detection_count: detections.len(),
            detections,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(text: &str) -> TextRegion {
        TextRegion::new(text, vec![[0, 0], [10, 0], [10, 10], [0, 10]])
    }

    #[test]
    fn no_annotations_yields_empty_success() {
        let resp = OcrResponse::from_regions(vec![]);
        assert!(resp.success);
        assert_eq!(resp.text, "");
        assert_eq!(resp.confidence, 0.0);
        assert_eq!(resp.detection_count, 0);
        assert!(resp.detections.is_empty());
    }

    #[test]
    fn first_annotation_is_full_text() {
        let resp = OcrResponse::from_regions(vec![
            region("OLD TOM GIN 43% ABV"),
            region("OLD"),
            region("TOM"),
        ]);
        assert_eq!(resp.text, "OLD TOM GIN 43% ABV");
        assert_eq!(resp.detection_count, 2);
        assert_eq!(resp.detections.len(), resp.detection_count);
        assert_eq!(resp.detections[0].text, "OLD");
    }

    #[test]
    fn confidence_averages_to_placeholder() {
        let resp = OcrResponse::from_regions(vec![region("full"), region("full")]);
        assert_eq!(resp.confidence, PLACEHOLDER_CONFIDENCE);
        assert_eq!(resp.detections[0].confidence, PLACEHOLDER_CONFIDENCE);
    }

    #[test]
    fn full_text_only_defaults_confidence() {
        // One annotation means full text with zero detections.
        let resp = OcrResponse::from_regions(vec![region("lonely")]);
        assert!(resp.success);
        assert_eq!(resp.text, "lonely");
        assert_eq!(resp.detection_count, 0);
        assert_eq!(resp.confidence, PLACEHOLDER_CONFIDENCE);
    }

    #[test]
    fn serializes_contract_fields() {
        let resp = OcrResponse::from_regions(vec![region("ab"), region("ab")]);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["detection_count"], 1);
        assert_eq!(json["detections"][0]["bbox"][1][0], 10);
    }
}
