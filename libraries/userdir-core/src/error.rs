//! Error types for record normalization
use thiserror::Error;

/// Result type alias using `NormalizeError`
pub type Result<T> = std::result::Result<T, NormalizeError>;

/// Errors produced while turning an external payload into a `UserRecord`
#[derive(Error, Debug)]
pub enum NormalizeError {
    /// Payload is missing a required field or has one of the wrong type
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// Neither the composite identifier nor the email yields an id
    #[error("Malformed payload: no identifier and no email to fall back on")]
    MissingIdentifier,
}

impl From<serde_json::Error> for NormalizeError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedPayload(err.to_string())
    }
}
