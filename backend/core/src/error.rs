use thiserror::Error;

/// Top-level error type for the OCR relay.
#[derive(Debug, Error)]
pub enum OcrError {
    #[error("{0}")]
    BadRequest(String),

    #[error("OCR provider error ({provider}): {message}")]
    Provider { provider: String, message: String },

    #[error("OCR client not initialized. Please check your credentials.")]
    ClientUnavailable,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OcrError {
    /// HTTP status this error maps to at the handler boundary.
    pub fn http_status(&self) -> u16 {
        match self {
            OcrError::BadRequest(_) => 400,
            OcrError::Provider { .. } => 500,
            OcrError::ClientUnavailable => 503,
            OcrError::Other(_) => 500,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        OcrError::BadRequest(message.into())
    }
}
