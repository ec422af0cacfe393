//! Transport encoding for document content
//!
//! Document text travels inside the JSON body as standard base64 over its
//! UTF-8 bytes.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::domain::DomainError;

/// Encodes text for the `file_base64` field
pub fn encode_content(content: &str) -> Result<String, DomainError> {
    let encoded = STANDARD.encode(content.as_bytes());

    // Non-empty input never encodes to nothing; treat it as a failure if it does
    if encoded.is_empty() && !content.is_empty() {
        return Err(DomainError::encoding("content encoded to an empty payload"));
    }

    Ok(encoded)
}

/// Reverses [`encode_content`]
pub fn decode_content(encoded: &str) -> Result<String, DomainError> {
    let bytes = STANDARD
        .decode(encoded)
        .map_err(|e| DomainError::encoding(format!("Invalid base64: {}", e)))?;

    String::from_utf8(bytes)
        .map_err(|e| DomainError::encoding(format!("Decoded content is not UTF-8: {}", e)))
}
