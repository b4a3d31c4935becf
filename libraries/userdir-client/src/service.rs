//! Trait seam over the access layer.

use crate::client::UserDirectoryClient;
use crate::error::Result;
use async_trait::async_trait;
use userdir_core::{UserPatch, UserRecord};

/// The six user directory operations.
///
/// Front-ends depend on this trait rather than on [`UserDirectoryClient`]
/// so they can run against a fake.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Fetch one normalized batch from the random-user source
    async fn fetch_random_users(&self) -> Result<Vec<UserRecord>>;

    async fn fetch_all_users(&self) -> Result<Vec<UserRecord>>;

    async fn fetch_user_by_id(&self, id: &str) -> Result<UserRecord>;

    /// Save a user; returns the stored record
    async fn create_user(&self, user: &UserRecord) -> Result<UserRecord>;

    async fn update_user(&self, id: &str, patch: &UserPatch) -> Result<UserRecord>;

    async fn delete_user(&self, id: &str) -> Result<()>;
}

#[async_trait]
impl UserService for UserDirectoryClient {
    async fn fetch_random_users(&self) -> Result<Vec<UserRecord>> {
        UserDirectoryClient::fetch_random_users(self).await
    }

    async fn fetch_all_users(&self) -> Result<Vec<UserRecord>> {
        UserDirectoryClient::fetch_all_users(self).await
    }

    async fn fetch_user_by_id(&self, id: &str) -> Result<UserRecord> {
        UserDirectoryClient::fetch_user_by_id(self, id).await
    }

    async fn create_user(&self, user: &UserRecord) -> Result<UserRecord> {
        UserDirectoryClient::create_user(self, user).await
    }

    async fn update_user(&self, id: &str, patch: &UserPatch) -> Result<UserRecord> {
        UserDirectoryClient::update_user(self, id, patch).await
    }

    async fn delete_user(&self, id: &str) -> Result<()> {
        UserDirectoryClient::delete_user(self, id).await
    }
}
