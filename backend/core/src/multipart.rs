//! Minimal `multipart/form-data` parsing for the OCR upload path.
//!
//! Only enough of RFC 7578 is implemented to pull the `file` part out of a
//! browser or curl upload: boundary extraction from the Content-Type header
//! and a byte-level split on the boundary marker.

use crate::error::OcrError;

const FILE_PART_MARKER: &[u8] = b"Content-Disposition: form-data; name=\"file\"";

/// Extract the boundary parameter from a multipart Content-Type header.
pub fn parse_boundary(content_type: &str) -> Result<String, OcrError> {
    let boundary = content_type
        .split_once("boundary=")
        .map(|(_, rest)| rest)
        .ok_or_else(|| OcrError::bad_request("No boundary in multipart request"))?;

    let boundary = boundary
        .strip_prefix('"')
        .and_then(|b| b.strip_suffix('"'))
        .unwrap_or(boundary);

    Ok(boundary.to_string())
}

/// Pull the body of the `file` part out of a multipart payload.
///
/// Parts are delimited by `--<boundary>`; the part body starts after the
/// blank line terminating its headers and carries one trailing CRLF that
/// belongs to the framing, not the file.
pub fn extract_file_part(boundary: &str, body: &[u8]) -> Result<Vec<u8>, OcrError> {
    let marker = [b"--", boundary.as_bytes()].concat();

    for part in split_on(body, &marker) {
        if !contains(part, FILE_PART_MARKER) {
            continue;
        }
        if let Some(header_end) = find(part, b"\r\n\r\n") {
            let mut content = &part[header_end + 4..];
            if content.ends_with(b"\r\n") {
                content = &content[..content.len() - 2];
            }
            if content.is_empty() {
                break;
            }
            return Ok(content.to_vec());
        }
    }

    Err(OcrError::bad_request(
        "No image data found in multipart request",
    ))
}

fn split_on<'a>(haystack: &'a [u8], sep: &[u8]) -> Vec<&'a [u8]> {
    let mut parts = Vec::new();
    let mut rest = haystack;
    while let Some(at) = find(rest, sep) {
        parts.push(&rest[..at]);
        rest = &rest[at + sep.len()..];
    }
    parts.push(rest);
    parts
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    find(haystack, needle).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(boundary: &str, name: &str, content: &[u8]) -> Vec<u8> {
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"; filename=\"label.png\"\r\n")
                .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: image/png\r\n\r\n");
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
        body
    }

    #[test]
    fn parses_plain_boundary() {
        let b = parse_boundary("multipart/form-data; boundary=----curl123").unwrap();
        assert_eq!(b, "----curl123");
    }

    #[test]
    fn parses_quoted_boundary() {
        let b = parse_boundary("multipart/form-data; boundary=\"abc def\"").unwrap();
        assert_eq!(b, "abc def");
    }

    #[test]
    fn missing_boundary_is_bad_request() {
        let err = parse_boundary("multipart/form-data").unwrap_err();
        assert_eq!(err.http_status(), 400);
    }

    #[test]
    fn extracts_file_part() {
        let body = payload("xyz", "file", b"\x89PNG fake bytes");
        let content = extract_file_part("xyz", &body).unwrap();
        assert_eq!(content, b"\x89PNG fake bytes");
    }

    #[test]
    fn wrong_field_name_is_bad_request() {
        let body = payload("xyz", "document", b"\x89PNG fake bytes");
        let err = extract_file_part("xyz", &body).unwrap_err();
        assert_eq!(err.http_status(), 400);
    }

    #[test]
    fn empty_file_part_is_bad_request() {
        let body = payload("xyz", "file", b"");
        let err = extract_file_part("xyz", &body).unwrap_err();
        assert_eq!(err.http_status(), 400);
    }

    #[test]
    fn binary_content_with_crlf_survives() {
        let content = b"before\r\nafter\r\n";
        let body = payload("xyz", "file", content);
        let extracted = extract_file_part("xyz", &body).unwrap();
        assert_eq!(extracted, content);
    }
}
