//! User store trait + in-memory implementation.

use std::collections::HashMap;
use std::sync::RwLock;

use soletrack_core::UserId;

use crate::{StoreError, User};

/// User persistence boundary.
///
/// Implementations must:
/// - enforce email uniqueness on `create` (case-insensitive)
/// - perform each operation atomically with respect to other callers
pub trait UserStore: Send + Sync {
    /// Insert a new user; rejects an already-registered email.
    fn create(&self, user: User) -> Result<User, StoreError>;

    /// Replace an existing user record by id.
    fn save(&self, user: User) -> Result<User, StoreError>;

    /// Remove a user by id (hard delete, no tombstone).
    fn delete(&self, id: UserId) -> Result<(), StoreError>;

    fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError>;

    fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    fn list_all(&self) -> Result<Vec<User>, StoreError>;
}

/// In-memory user store.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(_: impl core::fmt::Debug) -> StoreError {
    StoreError::Storage("lock poisoned".to_string())
}

impl UserStore for InMemoryUserStore {
    fn create(&self, user: User) -> Result<User, StoreError> {
        let mut users = self.users.write().map_err(poisoned)?;

        // Uniqueness is re-checked under the write lock; the pre-check at the
        // request boundary is only a fast path.
        if users
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(&user.email))
        {
            return Err(StoreError::DuplicateEmail);
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    fn save(&self, user: User) -> Result<User, StoreError> {
        let mut users = self.users.write().map_err(poisoned)?;
        if !users.contains_key(&user.id) {
            return Err(StoreError::NotFound);
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    fn delete(&self, id: UserId) -> Result<(), StoreError> {
        let mut users = self.users.write().map_err(poisoned)?;
        users.remove(&id).map(|_| ()).ok_or(StoreError::NotFound)
    }

    fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.get(&id).cloned())
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    fn list_all(&self) -> Result<Vec<User>, StoreError> {
        let users = self.users.read().map_err(poisoned)?;
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by_key(|u| u.created_at);
        Ok(all)
    }
}
