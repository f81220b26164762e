use serde::de::DeserializeOwned;

use crate::error::EsploraError;
use crate::types::BlockHeight;

/// Decode a JSON body. The body is echoed into the error for debugging.
pub(super) fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, EsploraError> {
    serde_json::from_slice(body).map_err(|e| {
        EsploraError::Decode(format!(
            "invalid JSON response: {e}; body={}",
            String::from_utf8_lossy(body)
        ))
    })
}

/// Decode a plain-text body. The text is returned as-is, whitespace included.
pub(super) fn decode_text(body: Vec<u8>) -> Result<String, EsploraError> {
    String::from_utf8(body)
        .map_err(|e| EsploraError::Decode(format!("response is not valid UTF-8: {e}")))
}

/// Parse the `/blocks/tip/height` body. Surrounding whitespace is tolerated.
pub(super) fn parse_block_height(text: &str) -> Result<BlockHeight, EsploraError> {
    text.trim()
        .parse::<u32>()
        .map(BlockHeight)
        .map_err(|e| EsploraError::Decode(format!("invalid tip height `{text}`: {e}")))
}
