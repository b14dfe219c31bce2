//! Credential discovery for the Vision client.
//!
//! The REST endpoint accepts either an API key query parameter or a
//! pre-issued OAuth bearer token; both are read from the environment.
//! When neither is set the relay runs with no client and reports itself
//! unhealthy instead of failing at startup.

use std::fmt;

/// How the Vision client authenticates.
#[derive(Clone)]
pub enum VisionCredentials {
    /// `?key=` query parameter.
    ApiKey(String),
    /// `Authorization: Bearer` header.
    AccessToken(String),
}

impl VisionCredentials {
    /// Discover credentials from `GOOGLE_VISION_API_KEY` or
    /// `GOOGLE_VISION_ACCESS_TOKEN`, in that order.
    pub fn from_env() -> Option<Self> {
        if let Ok(key) = std::env::var("GOOGLE_VISION_API_KEY") {
            if !key.is_empty() {
                return Some(VisionCredentials::ApiKey(key));
            }
        }
        if let Ok(token) = std::env::var("GOOGLE_VISION_ACCESS_TOKEN") {
            if !token.is_empty() {
                return Some(VisionCredentials::AccessToken(token));
            }
        }
        None
    }
}

// Secrets must never reach logs, so Debug redacts the value.
impl fmt::Debug for VisionCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisionCredentials::ApiKey(_) => write!(f, "VisionCredentials::ApiKey(***)"),
            VisionCredentials::AccessToken(_) => write!(f, "VisionCredentials::AccessToken(***)"),
        }
    }
}
