use serde::de::DeserializeOwned;
use thiserror::Error;

/// Why a request was turned away before reaching the assist functions.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Invalid request format: {0}")]
    InvalidRequest(#[from] serde_json::Error),

    /// Carries the guidance message shown to the client.
    #[error("{0}")]
    MissingField(&'static str),
}

/// Decodes a JSON body without looking at the `Content-Type` header.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, RequestError> {
    Ok(serde_json::from_slice(body)?)
}

/// Rejects an empty required field with `message`.
pub fn require<'a>(field: &'a str, message: &'static str) -> Result<&'a str, RequestError> {
    if field.is_empty() {
        return Err(RequestError::MissingField(message));
    }
    Ok(field)
}
