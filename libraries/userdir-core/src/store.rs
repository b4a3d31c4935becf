//! In-memory list of the users currently loaded by a front-end.

use crate::types::UserRecord;
use tracing::debug;

/// Where the users held by a [`UserStore`] came from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UserSource {
    /// Freshly generated by the random-user source
    #[default]
    Random,
    /// Loaded from the managed-user service
    Saved,
}

/// Owned, injectable list of users.
///
/// There is no global instance: whoever drives the UI creates one and
/// passes it where it is needed.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: Vec<UserRecord>,
    source: UserSource,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All loaded users, in load order
    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    /// Look up a loaded user by id
    pub fn get(&self, id: &str) -> Option<&UserRecord> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Replace the whole list
    pub fn set(&mut self, users: Vec<UserRecord>) {
        debug!(count = users.len(), "Replacing stored users");
        self.users = users;
    }

    /// Replace the user with the same id, or append it
    pub fn upsert(&mut self, user: UserRecord) {
        match self.users.iter_mut().find(|existing| existing.id == user.id) {
            Some(existing) => *existing = user,
            None => self.users.push(user),
        }
    }

    /// Remove every user with the given id. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.users.len();
        self.users.retain(|user| user.id != id);
        let removed = self.users.len() != before;
        debug!(id = %id, removed, "Removing stored user");
        removed
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn source(&self) -> UserSource {
        self.source
    }

    pub fn set_source(&mut self, source: UserSource) {
        self.source = source;
    }
}
