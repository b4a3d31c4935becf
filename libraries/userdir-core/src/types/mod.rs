mod external;
mod user;

pub use external::{ExternalId, ExternalUserPayload};
pub use user::{Dob, Location, Name, Picture, UserPatch, UserRecord};
