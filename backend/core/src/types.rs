use serde::{Deserialize, Serialize};

/// A single text region reported by an OCR provider.
///
/// The first region in a provider result conventionally holds the full
/// recognized text of the image; subsequent regions are the individual
/// words or blocks with their bounding polygons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextRegion {
    pub text: String,
    /// Corner points of the bounding polygon, `[x, y]` pairs.
    pub bounds: Vec<[i32; 2]>,
}

impl TextRegion {
    pub fn new(text: impl Into<String>, bounds: Vec<[i32; 2]>) -> Self {
        Self {
            text: text.into(),
            bounds,
        }
    }
}
