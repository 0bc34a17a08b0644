//! Session management for the BASIX client
//!
//! This module owns "who is logged in": the in-memory session state, the
//! durable stores that mirror it across restarts, and the `SessionManager`
//! that mediates between consumers and the remote identity API. It defines a
//! `SessionStore` trait that can be implemented by different storage
//! backends.

pub mod adapters;
pub mod manager;
pub mod store;

pub use adapters::{FileSessionStore, InMemorySessionStore};
pub use manager::{SessionListener, SessionManager, SessionState};
pub use store::{SessionStore, SessionStoreError, SessionStoreRef, StoredSession};
