use std::sync::{Arc, RwLock};

use log::debug;

use crate::session::store::{SessionStore, SessionStoreError, StoredSession};

/// In-memory implementation of SessionStore
///
/// Useful for tests and for embedders that do not want anything on disk.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    session: Arc<RwLock<Option<StoredSession>>>,
}

impl InMemorySessionStore {
    /// Create a new empty InMemorySessionStore
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn load(&self) -> Result<Option<StoredSession>, SessionStoreError> {
        let session = self.session.read().map_err(|e| {
            SessionStoreError::StorageError(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(session.clone())
    }

    fn save(&self, stored: &StoredSession) -> Result<(), SessionStoreError> {
        let mut session = self.session.write().map_err(|e| {
            SessionStoreError::StorageError(format!("Failed to acquire write lock: {}", e))
        })?;

        *session = Some(stored.clone());
        debug!("Saved session for {}", stored.user.email);

        Ok(())
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        let mut session = self.session.write().map_err(|e| {
            SessionStoreError::StorageError(format!("Failed to acquire write lock: {}", e))
        })?;

        *session = None;
        debug!("Cleared stored session");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{User, UserType};

    fn sample_session() -> StoredSession {
        StoredSession {
            user: User {
                id: "u1".to_string(),
                email: "a@b.com".to_string(),
                name: "alice".to_string(),
                user_type: UserType::Creator,
            },
            token: "t1".to_string(),
        }
    }

    #[test]
    fn starts_empty() {
        let store = InMemorySessionStore::new();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn save_then_load_returns_the_pair() {
        let store = InMemorySessionStore::new();
        let stored = sample_session();

        store.save(&stored).unwrap();
        assert_eq!(store.load().unwrap(), Some(stored));
    }

    #[test]
    fn clear_removes_the_pair_and_is_idempotent() {
        let store = InMemorySessionStore::new();
        store.save(&sample_session()).unwrap();

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);

        // Clearing an already-empty store is fine
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }
}
