//! Managed user service operations.

use crate::client::{join_segments, read_json, send};
use crate::error::{Operation, Result};
use reqwest::Client;
use tracing::{debug, info};
use url::Url;
use userdir_core::{UserPatch, UserRecord};

/// Client for the managed user service's `/users` resource.
pub struct ManagedUserClient<'a> {
    http: &'a Client,
    base_url: &'a Url,
}

impl<'a> ManagedUserClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a Url) -> Self {
        Self { http, base_url }
    }

    fn collection_url(&self) -> Result<Url> {
        join_segments(self.base_url, &["users"])
    }

    fn user_url(&self, id: &str) -> Result<Url> {
        join_segments(self.base_url, &["users", id])
    }

    /// Get every saved user.
    pub async fn list(&self) -> Result<Vec<UserRecord>> {
        let operation = Operation::FetchAllUsers;
        let url = self.collection_url()?;
        debug!(url = %url, "Fetching saved users");

        let response = send(operation, self.http.get(url)).await?;
        let users: Vec<UserRecord> = read_json(operation, response).await?;

        debug!(count = users.len(), "Fetched saved users");
        Ok(users)
    }

    /// Get a single saved user by ID.
    pub async fn get(&self, id: &str) -> Result<UserRecord> {
        let operation = Operation::FetchUserById;
        let url = self.user_url(id)?;
        debug!(url = %url, user_id = %id, "Fetching user");

        let response = send(operation, self.http.get(url)).await?;
        read_json(operation, response).await
    }

    /// Save a user. The service may assign a different id.
    pub async fn create(&self, user: &UserRecord) -> Result<UserRecord> {
        let operation = Operation::CreateUser;
        let url = self.collection_url()?;
        debug!(url = %url, user_id = %user.id, "Saving user");

        let response = send(operation, self.http.post(url).json(user)).await?;
        let saved: UserRecord = read_json(operation, response).await?;

        info!(user_id = %saved.id, email = %saved.email, "User saved");
        Ok(saved)
    }

    /// Apply a partial update. Only the fields set in `patch` are sent.
    pub async fn update(&self, id: &str, patch: &UserPatch) -> Result<UserRecord> {
        let operation = Operation::UpdateUser;
        let url = self.user_url(id)?;
        debug!(url = %url, user_id = %id, "Updating user");

        let response = send(operation, self.http.put(url).json(patch)).await?;
        let updated: UserRecord = read_json(operation, response).await?;

        info!(user_id = %updated.id, "User updated");
        Ok(updated)
    }

    /// Delete a saved user. Any 2xx counts as success; the body is ignored.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let operation = Operation::DeleteUser;
        let url = self.user_url(id)?;
        debug!(url = %url, user_id = %id, "Deleting user");

        send(operation, self.http.delete(url)).await?;

        info!(user_id = %id, "User deleted");
        Ok(())
    }
}
