//! Record normalizer for the random-user source.

use crate::error::{NormalizeError, Result};
use crate::types::{ExternalId, ExternalUserPayload, UserRecord};
use tracing::trace;

/// Convert a typed random-user payload into a `UserRecord`.
///
/// All fields are copied as-is; only the `id` is derived (see [`derive_id`]).
///
/// # Errors
/// Returns `MissingIdentifier` when the payload has neither a usable
/// composite id nor an email.
pub fn normalize(raw: ExternalUserPayload) -> Result<UserRecord> {
    let id = derive_id(raw.id.as_ref(), &raw.email).ok_or(NormalizeError::MissingIdentifier)?;
    trace!(id = %id, "Normalized random user");

    Ok(UserRecord {
        id,
        name: raw.name,
        email: raw.email,
        phone: raw.phone,
        gender: raw.gender,
        picture: raw.picture,
        location: raw.location,
        dob: raw.dob,
    })
}

/// Validate an untyped JSON payload against the random-user schema, then
/// normalize it.
///
/// # Errors
/// Returns `MalformedPayload` when a required field or nested object is
/// missing or has the wrong type.
pub fn normalize_value(raw: serde_json::Value) -> Result<UserRecord> {
    let payload: ExternalUserPayload = serde_json::from_value(raw)?;
    normalize(payload)
}

/// Derive the identifier of a random-user record.
///
/// `name + value` (no separator) when both are non-empty, otherwise the
/// email, otherwise `None`.
pub fn derive_id(id: Option<&ExternalId>, email: &str) -> Option<String> {
    let composite = id.and_then(|id| match (id.name.as_deref(), id.value.as_deref()) {
        (Some(name), Some(value)) if !name.is_empty() && !value.is_empty() => {
            Some(format!("{}{}", name, value))
        }
        _ => None,
    });

    composite.or_else(|| (!email.is_empty()).then(|| email.to_string()))
}
