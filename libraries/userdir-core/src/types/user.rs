//! User record domain types
use serde::{Deserialize, Serialize};

/// Canonical profile record shown and persisted by the directory
///
/// Records coming from the random-user source get their `id` from the
/// normalizer; records coming from the managed service carry whatever id the
/// service assigned. The service may send it as `_id`, `id`, or both; `_id`
/// wins when both are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserRecordWire")]
pub struct UserRecord {
    /// Stable unique identifier
    pub id: String,

    pub name: Name,

    /// Contact email, also the identifier fallback
    pub email: String,

    pub phone: String,

    pub gender: String,

    pub picture: Picture,

    pub location: Location,

    pub dob: Dob,
}

/// Shape of a user record as the managed service may send it
#[derive(Deserialize)]
struct UserRecordWire {
    #[serde(rename = "_id", default)]
    document_id: Option<String>,
    #[serde(default)]
    id: Option<String>,
    name: Name,
    email: String,
    phone: String,
    gender: String,
    picture: Picture,
    location: Location,
    dob: Dob,
}

impl TryFrom<UserRecordWire> for UserRecord {
    type Error = String;

    fn try_from(wire: UserRecordWire) -> Result<Self, Self::Error> {
        let id = wire
            .document_id
            .or(wire.id)
            .ok_or_else(|| "missing field `id` (or `_id`)".to_string())?;

        Ok(Self {
            id,
            name: wire.name,
            email: wire.email,
            phone: wire.phone,
            gender: wire.gender,
            picture: wire.picture,
            location: wire.location,
            dob: wire.dob,
        })
    }
}

/// Person name parts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub title: String,
    pub first: String,
    pub last: String,
}

impl Name {
    /// Title, first and last name joined by spaces, skipping empty parts
    pub fn full(&self) -> String {
        [&self.title, &self.first, &self.last]
            .iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Profile image URLs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    pub thumbnail: String,
    pub large: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub country: String,
    pub city: String,
    pub state: String,
}

/// Date of birth
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dob {
    /// Date as supplied by the source (usually ISO 8601)
    pub date: String,
    pub age: u32,
}

/// Partial update of a `UserRecord`
///
/// Only the fields that are set are sent. Nested objects are replaced whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Name>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<Picture>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<Dob>,
}

impl UserPatch {
    /// Create an empty patch
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply the set fields onto `user`, leaving its id untouched
    pub fn apply_to(&self, user: &mut UserRecord) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            user.phone = phone.clone();
        }
        if let Some(gender) = &self.gender {
            user.gender = gender.clone();
        }
        if let Some(picture) = &self.picture {
            user.picture = picture.clone();
        }
        if let Some(location) = &self.location {
            user.location = location.clone();
        }
        if let Some(dob) = &self.dob {
            user.dob = dob.clone();
        }
    }
}
