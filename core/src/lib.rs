// Core BASIX client functionality:
// - API client for the identity endpoints
// - Session state, durable stores, and the session manager
// - Investment alert book
// - Configuration loading
// - Shared error types

// Export client module - API client for the identity service
pub mod client;
pub use client::*;

// Export types module - User and wire data structures
pub mod types;
pub use types::*;

// Export config module - Configuration loading
pub mod config;
pub use config::*;

// Export errors module - Shared error types
pub mod errors;
pub use errors::*;

// Export session module - Session state and durable stores
pub mod session;
pub use session::{
    FileSessionStore, InMemorySessionStore, SessionListener, SessionManager, SessionState,
    SessionStore, SessionStoreError, SessionStoreRef, StoredSession,
};

// Export alerts module - Durable investment alert book
pub mod alerts;
pub use alerts::{AlertBook, AlertType, InvestmentAlert};
