//! User Directory Core
//!
//! Platform-agnostic types and pure logic shared by the directory client and
//! its front-ends.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `UserRecord`, `UserPatch` and the third-party
//!   `ExternalUserPayload` shape
//! - **Normalizer**: converts random-user payloads into `UserRecord`s
//! - **Store**: `UserStore`, the injectable list of loaded users
//!
//! # Example
//!
//! ```rust
//! use userdir_core::{normalize_value, UserStore, UserSource};
//!
//! let raw = serde_json::json!({
//!     "id": { "name": "SSN", "value": "123-45-6789" },
//!     "email": "jane@example.com",
//!     "name": { "title": "Ms", "first": "Jane", "last": "Doe" },
//!     "phone": "555-0100",
//!     "gender": "female",
//!     "picture": { "thumbnail": "t.jpg", "large": "l.jpg" },
//!     "location": { "country": "US", "city": "Austin", "state": "Texas" },
//!     "dob": { "date": "1990-01-01T00:00:00.000Z", "age": 34 }
//! });
//!
//! let user = normalize_value(raw).unwrap();
//! assert_eq!(user.id, "SSN123-45-6789");
//!
//! let mut store = UserStore::new();
//! store.set(vec![user]);
//! store.set_source(UserSource::Random);
//! assert_eq!(store.len(), 1);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod normalize;
pub mod store;
pub mod types;

pub use error::{NormalizeError, Result};
pub use normalize::{derive_id, normalize, normalize_value};
pub use store::{UserSource, UserStore};
pub use types::{
    Dob, ExternalId, ExternalUserPayload, Location, Name, Picture, UserPatch, UserRecord,
};
