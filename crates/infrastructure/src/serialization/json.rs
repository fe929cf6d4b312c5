//! JSON decoding helpers.

use serde::de::DeserializeOwned;

/// Error type for serialization operations.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// JSON deserialization failed.
    #[error("JSON deserialization failed: {0}")]
    Deserialize(#[from] serde_json::Error),
}

/// Deserializes JSON from bytes.
///
/// A leading UTF-8 byte order mark is ignored.
///
/// # Errors
///
/// Returns an error if the JSON is invalid or doesn't match the expected type.
pub fn from_json_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SerializationError> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    Ok(serde_json::from_slice(bytes)?)
}
