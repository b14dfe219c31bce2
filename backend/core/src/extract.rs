//! Image extraction from incoming request bodies.
//!
//! Both relay surfaces accept the same three body encodings: JSON with a
//! base64 `image` field, `multipart/form-data` with a `file` part, or raw
//! image bytes.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Deserialize;

use crate::error::OcrError;
use crate::multipart;

#[derive(Deserialize)]
struct JsonImageBody {
    image: Option<String>,
}

/// Extract image bytes from a request body, dispatching on Content-Type.
///
/// Unrecognized content types are treated as a raw image upload. An empty
/// result in any branch is a bad request.
pub fn extract_image_bytes(content_type: Option<&str>, body: &[u8]) -> Result<Vec<u8>, OcrError> {
    if body.is_empty() {
        return Err(OcrError::bad_request("No content in request"));
    }

    let content_type = content_type.unwrap_or("");

    let image = if content_type.contains("application/json") {
        decode_json_image(body)?
    } else if content_type.contains("multipart/form-data") {
        let boundary = multipart::parse_boundary(content_type)?;
        multipart::extract_file_part(&boundary, body)?
    } else {
        body.to_vec()
    };

    if image.is_empty() {
        return Err(OcrError::bad_request("No image data received"));
    }
    Ok(image)
}

fn decode_json_image(body: &[u8]) -> Result<Vec<u8>, OcrError> {
    let parsed: JsonImageBody = serde_json::from_slice(body)
        .map_err(|e| OcrError::bad_request(format!("Invalid JSON: {e}")))?;

    let encoded = parsed
        .image
        .ok_or_else(|| OcrError::bad_request("No 'image' field in JSON request"))?;

    BASE64
        .decode(encoded.as_bytes())
        .map_err(|e| OcrError::bad_request(format!("Error decoding base64 image: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_body_with_base64_image() {
        let body = serde_json::json!({ "image": BASE64.encode(b"fake png") }).to_string();
        let image = extract_image_bytes(Some("application/json"), body.as_bytes()).unwrap();
        assert_eq!(image, b"fake png");
    }

    #[test]
    fn json_body_missing_image_field() {
        let body = br#"{"picture": "abcd"}"#;
        let err = extract_image_bytes(Some("application/json"), body).unwrap_err();
        assert_eq!(err.http_status(), 400);
        assert!(err.to_string().contains("'image' field"));
    }

    #[test]
    fn json_body_invalid_base64() {
        let body = br#"{"image": "!!not-base64!!"}"#;
        let err = extract_image_bytes(Some("application/json"), body).unwrap_err();
        assert_eq!(err.http_status(), 400);
    }

    #[test]
    fn invalid_json_is_bad_request() {
        let err = extract_image_bytes(Some("application/json"), b"{nope").unwrap_err();
        assert_eq!(err.http_status(), 400);
        assert!(err.to_string().contains("Invalid JSON"));
    }

    #[test]
    fn raw_body_passes_through() {
        let image = extract_image_bytes(Some("image/png"), b"\x89PNG").unwrap();
        assert_eq!(image, b"\x89PNG");
    }

    #[test]
    fn missing_content_type_treated_as_raw() {
        let image = extract_image_bytes(None, b"\xff\xd8jpeg").unwrap();
        assert_eq!(image, b"\xff\xd8jpeg");
    }

    #[test]
    fn empty_body_is_bad_request() {
        let err = extract_image_bytes(Some("image/png"), b"").unwrap_err();
        assert_eq!(err.http_status(), 400);
    }

    #[test]
    fn multipart_body_round_trips() {
        let boundary = "bbb";
        let mut body = Vec::new();
        body.extend_from_slice(b"--bbb\r\n");
        body.extend_from_slice(b"Content-Disposition: form-data; name=\"file\"\r\n\r\n");
        body.extend_from_slice(b"pixels");
        body.extend_from_slice(b"\r\n--bbb--\r\n");
        let ct = format!("multipart/form-data; boundary={boundary}");
        let image = extract_image_bytes(Some(&ct), &body).unwrap();
        assert_eq!(image, b"pixels");
    }
}
