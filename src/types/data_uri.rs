//! `data:<mime>;base64,` payloads.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{Result, StudioError};

pub const PNG_MIME: &str = "image/png";
pub const JPEG_MIME: &str = "image/jpeg";

/// Helpers for base64 data URIs carried in the JSON bodies.
pub struct DataUri;

impl DataUri {
    /// The literal prefix for a MIME type, e.g. `data:image/png;base64,`.
    pub fn prefix(mime_type: &str) -> String {
        format!("data:{mime_type};base64,")
    }

    /// Encode bytes as a data URI with the given MIME type.
    pub fn encode(mime_type: &str, bytes: &[u8]) -> String {
        format!("{}{}", Self::prefix(mime_type), STANDARD.encode(bytes))
    }

    /// Decode a data URI, requiring exactly the prefix for `expected_mime`.
    pub fn decode(value: &str, expected_mime: &str) -> Result<Vec<u8>> {
        let prefix = Self::prefix(expected_mime);
        let payload = value
            .strip_prefix(prefix.as_str())
            .ok_or_else(|| StudioError::DataUriPrefix {
                expected: prefix.clone(),
            })?;
        Ok(STANDARD.decode(payload)?)
    }
}
