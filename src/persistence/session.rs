//! Logged-in user context
//!
//! Stores the current user as a JSON record under one key, so a session
//! survives as long as its backing store.

use super::kv::KeyValueStore;
use super::PersistenceResult;
use crate::graph::User;

/// Current-user holder over a [`KeyValueStore`]
#[derive(Debug, Clone)]
pub struct SessionStore<S: KeyValueStore> {
    kv: S,
    key: String,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(kv: S, key: impl Into<String>) -> Self {
        Self { kv, key: key.into() }
    }

    pub fn login(&self, user: &User) -> PersistenceResult<()> {
        self.kv.put(&self.key, &serde_json::to_string(user)?)
    }

    /// The logged-in user, if any
    pub fn current_user(&self) -> PersistenceResult<Option<User>> {
        match self.kv.get(&self.key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn logout(&self) -> PersistenceResult<()> {
        self.kv.remove(&self.key)
    }
}
