pub mod error;
pub mod extract;
pub mod multipart;
pub mod response;
pub mod traits;
pub mod types;

pub use error::OcrError;
pub use extract::extract_image_bytes;
pub use response::{Detection, OcrResponse, PLACEHOLDER_CONFIDENCE};
pub use traits::OcrProvider;
pub use types::TextRegion;
