use std::fmt::Debug;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::errors::BasixError;
use crate::types::User;

/// Error type for session store operations
#[derive(Error, Debug)]
pub enum SessionStoreError {
    /// Error occurred during a store operation
    #[error("Storage error: {0}")]
    StorageError(String),

    /// The stored document exists but cannot be parsed
    #[error("Stored session is not valid: {0}")]
    InvalidData(String),
}

impl From<SessionStoreError> for BasixError {
    fn from(e: SessionStoreError) -> Self {
        BasixError::StorageError(e.to_string())
    }
}

/// The durable mirror of an authenticated session.
///
/// The original web client kept two sibling localStorage entries
/// (`basix_user` and `basix_token`); here they form one document so the pair
/// can never be half-written or half-removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub user: User,
    pub token: String,
}

/// Trait defining the interface for durable session stores
pub trait SessionStore: Send + Sync + Debug {
    /// Load the persisted user+token pair, if one is present
    fn load(&self) -> Result<Option<StoredSession>, SessionStoreError>;

    /// Persist the pair, replacing any previous session
    fn save(&self, session: &StoredSession) -> Result<(), SessionStoreError>;

    /// Remove the pair; clearing an absent session is not an error
    fn clear(&self) -> Result<(), SessionStoreError>;
}

/// Type alias for Arc-wrapped SessionStore trait objects
pub type SessionStoreRef = Arc<dyn SessionStore>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UserType;

    #[test]
    fn stored_session_roundtrips_with_wire_field_names() {
        let stored = StoredSession {
            user: User {
                id: "u1".to_string(),
                email: "a@b.com".to_string(),
                name: "alice".to_string(),
                user_type: UserType::Investor,
            },
            token: "t1".to_string(),
        };

        let json = serde_json::to_string(&stored).unwrap();
        assert!(json.contains("\"userType\":\"investor\""));

        let parsed: StoredSession = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, stored);
    }

    #[test]
    fn stored_session_rejects_missing_token() {
        // A document with only the user half of the pair must not parse
        let json = r#"{"user":{"id":"u1","email":"a@b.com","name":"alice","userType":"creator"}}"#;
        assert!(serde_json::from_str::<StoredSession>(json).is_err());
    }
}
