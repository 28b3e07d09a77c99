//! Base64URL transcoding for text and binary payloads.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;

use crate::codec::{CodecError, CodecResult};

/// Encode UTF-8 text as unpadded Base64URL.
pub fn encode_base64_url(text: &str) -> String {
    buffer_to_base64_url(text.as_bytes())
}

/// Decode Base64URL back into UTF-8 text.
pub fn decode_base64_url(encoded: &str) -> CodecResult<String> {
    let bytes = base64_url_to_buffer(encoded)?;
    String::from_utf8(bytes).map_err(|e| CodecError::InvalidUtf8(e.to_string()))
}

/// Encode raw bytes as unpadded Base64URL.
pub fn buffer_to_base64_url(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode Base64URL into raw bytes.
///
/// The URL alphabet is mapped back onto the standard one and `=` padding is
/// restored before decoding, so padded input and the standard `+`/`/`
/// characters are accepted as well.
pub fn base64_url_to_buffer(encoded: &str) -> CodecResult<Vec<u8>> {
    if encoded.is_empty() {
        return Ok(Vec::new());
    }

    let mut standard: String = encoded
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    while standard.len() % 4 != 0 {
        standard.push('=');
    }

    STANDARD
        .decode(standard.as_bytes())
        .map_err(|e| CodecError::InvalidBase64(e.to_string()))
}
