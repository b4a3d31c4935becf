//! Third-party random-user payload
use serde::Deserialize;

use super::user::{Dob, Location, Name, Picture};

/// One element of the random-user source's `results` list
///
/// Only the fields the directory uses are declared; everything else the
/// generator sends (street, coordinates, login, registered, ...) is ignored.
/// Every declared field except `id` is required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExternalUserPayload {
    #[serde(default)]
    pub id: Option<ExternalId>,
    pub email: String,
    pub name: Name,
    pub phone: String,
    pub gender: String,
    pub picture: Picture,
    pub location: Location,
    pub dob: Dob,
}

/// National identifier as reported by the generator
///
/// The generator sends `null` values for nationalities without one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ExternalId {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

impl ExternalId {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
        }
    }
}
