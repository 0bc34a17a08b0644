use std::fmt;
use std::sync::{Arc, RwLock};

use log::{debug, warn};
use serde_json::Value;
use uuid::Uuid;

use crate::client::IdentityClient;
use crate::config::BasixConfig;
use crate::errors::BasixResult;
use crate::session::store::{SessionStoreRef, StoredSession};
use crate::types::{LoginRequest, LoginResponse, RegisterRequest, Registration, User, UserType};

/// Snapshot of the session as consumers see it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// The authenticated user; `None` means anonymous
    pub user: Option<User>,
    /// True only while a login, register, or logout call is in flight
    pub is_loading: bool,
}

/// Callback invoked after every session state change
pub type SessionListener = Box<dyn Fn(&SessionState) + Send + Sync>;

/// Single source of truth for "who is logged in".
///
/// Mediates between consumers and the remote identity API, mirrors the
/// session into a durable store on successful login, and notifies
/// subscribers after every state change. There is no retry, token refresh,
/// or expiry check: a restored token is trusted until an explicit logout.
pub struct SessionManager {
    client: IdentityClient,
    store: SessionStoreRef,
    state: Arc<RwLock<SessionState>>,
    listeners: Arc<RwLock<Vec<Arc<dyn Fn(&SessionState) + Send + Sync>>>>,
}

impl fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionManager")
            .field("client", &self.client)
            .field("store", &self.store)
            .field("state", &self.state)
            // Skip non-Debug listeners
            .finish_non_exhaustive()
    }
}

impl SessionManager {
    /// Create a manager over the given durable store.
    ///
    /// The state starts as loading until `restore` has run, matching the
    /// startup sequence of the original client.
    pub fn new(config: &BasixConfig, store: SessionStoreRef) -> Self {
        Self::with_client(IdentityClient::new(config), store)
    }

    /// Create a manager with an explicitly constructed API client
    pub fn with_client(client: IdentityClient, store: SessionStoreRef) -> Self {
        Self {
            client,
            store,
            state: Arc::new(RwLock::new(SessionState {
                user: None,
                is_loading: true,
            })),
            listeners: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Restore a previously persisted session.
    ///
    /// Called once at startup. Purely local: the stored token is trusted
    /// as-is, with no server-side validation. Always ends with the loading
    /// flag cleared.
    pub fn restore(&self) {
        match self.store.load() {
            Ok(Some(stored)) => {
                debug!("Restored session for {}", stored.user.email);
                self.update(|state| {
                    state.user = Some(stored.user);
                    state.is_loading = false;
                });
            }
            Ok(None) => {
                self.update(|state| state.is_loading = false);
            }
            Err(e) => {
                // Unreadable session data falls back to anonymous; the stale
                // document is removed so the next start is clean.
                warn!("Discarding unreadable stored session: {}", e);
                if let Err(e) = self.store.clear() {
                    warn!("Failed to remove stored session: {}", e);
                }
                self.update(|state| state.is_loading = false);
            }
        }
    }

    /// Authenticate against the identity API and persist the session.
    ///
    /// On a non-2xx response the error carries the server message (or
    /// "Login failed") and the current state is left untouched.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        user_type: UserType,
    ) -> BasixResult<User> {
        self.update(|state| state.is_loading = true);

        let request = LoginRequest {
            username: email.to_string(),
            password: password.to_string(),
            user_type,
        };

        match self.client.login(&request).await {
            Ok(response) => {
                let user = Self::user_from_response(&response, user_type);
                self.persist(&user, response.token.as_deref());
                self.update(|state| {
                    state.user = Some(user.clone());
                    state.is_loading = false;
                });
                Ok(user)
            }
            Err(e) => {
                self.update(|state| state.is_loading = false);
                Err(e)
            }
        }
    }

    /// Create an account, then immediately establish a session with the same
    /// credentials. Returns the raw registration response body.
    ///
    /// The register-then-login pairing is an explicit two-step orchestration
    /// here; a failure in either step surfaces to the caller with the state
    /// left anonymous.
    pub async fn register(&self, registration: &Registration) -> BasixResult<Value> {
        self.update(|state| state.is_loading = true);

        let request = RegisterRequest {
            username: registration.name.clone(),
            email: registration.email.clone(),
            password: registration.password.clone(),
            user_type: registration.user_type,
        };

        match self.client.register(&request).await {
            Ok(body) => {
                let login_result = self
                    .login(
                        &registration.email,
                        &registration.password,
                        registration.user_type,
                    )
                    .await;
                self.update(|state| state.is_loading = false);
                login_result?;
                Ok(body)
            }
            Err(e) => {
                self.update(|state| state.is_loading = false);
                Err(e)
            }
        }
    }

    /// End the session.
    ///
    /// The remote call is best-effort: transport and storage failures are
    /// logged and swallowed, never surfaced, so the caller always ends up
    /// logged out locally. Safe to call repeatedly.
    pub async fn logout(&self) {
        self.update(|state| state.is_loading = true);

        let token = match self.store.load() {
            Ok(stored) => stored.map(|s| s.token),
            Err(_) => None,
        };

        if let Err(e) = self.client.logout(token.as_deref()).await {
            warn!("Logout request failed: {}", e);
        }

        if let Err(e) = self.store.clear() {
            warn!("Failed to clear stored session: {}", e);
        }

        self.update(|state| {
            state.user = None;
            state.is_loading = false;
        });
    }

    /// Current session snapshot
    pub fn state(&self) -> SessionState {
        match self.state.read() {
            Ok(state) => state.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// The authenticated user, if any
    pub fn current_user(&self) -> Option<User> {
        self.state().user
    }

    /// True iff a user is logged in
    pub fn is_authenticated(&self) -> bool {
        self.state().user.is_some()
    }

    /// True while a login, register, or logout call is in flight
    pub fn is_loading(&self) -> bool {
        self.state().is_loading
    }

    /// Register a listener invoked after every state change.
    ///
    /// Listeners run outside the registry lock, so a listener may itself
    /// call `subscribe`.
    pub fn subscribe(&self, listener: SessionListener) {
        let mut listeners = match self.listeners.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        listeners.push(Arc::from(listener));
    }

    fn user_from_response(response: &LoginResponse, user_type: UserType) -> User {
        User {
            // The backend may omit the id; generate one so the record is
            // always complete
            id: response
                .user
                .id
                .clone()
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            email: response.user.email.clone(),
            name: response.user.username.clone(),
            user_type,
        }
    }

    /// Mirror a fresh login into the durable store.
    ///
    /// Without a token the pair could never be restored, so nothing is
    /// written rather than leaving half a session on disk.
    fn persist(&self, user: &User, token: Option<&str>) {
        match token {
            Some(token) => {
                let stored = StoredSession {
                    user: user.clone(),
                    token: token.to_string(),
                };
                if let Err(e) = self.store.save(&stored) {
                    warn!("Failed to persist session: {}", e);
                }
            }
            None => debug!("No token issued; session not persisted"),
        }
    }

    fn update(&self, f: impl FnOnce(&mut SessionState)) {
        let snapshot = match self.state.write() {
            Ok(mut state) => {
                f(&mut state);
                state.clone()
            }
            Err(poisoned) => {
                // Recover the lock; the two-field state stays consistent
                let mut state = poisoned.into_inner();
                f(&mut state);
                state.clone()
            }
        };
        self.notify(&snapshot);
    }

    fn notify(&self, state: &SessionState) {
        // Snapshot the registry and drop the lock before invoking anything;
        // listeners are free to subscribe from inside the callback
        let listeners = {
            let guard = match self.listeners.read() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            guard.clone()
        };
        for listener in listeners {
            listener(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::adapters::InMemorySessionStore;
    use crate::session::store::SessionStore;
    use crate::types::UserType;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn seeded_store() -> SessionStoreRef {
        let store = InMemorySessionStore::new();
        store
            .save(&StoredSession {
                user: User {
                    id: "u1".to_string(),
                    email: "a@b.com".to_string(),
                    name: "alice".to_string(),
                    user_type: UserType::Creator,
                },
                token: "t1".to_string(),
            })
            .unwrap();
        Arc::new(store)
    }

    fn manager_over(store: SessionStoreRef) -> SessionManager {
        // Unroutable origin; these tests never touch the network
        SessionManager::with_client(IdentityClient::with_base_url("http://127.0.0.1:9"), store)
    }

    #[test]
    fn starts_loading_until_restore_runs() {
        let manager = manager_over(Arc::new(InMemorySessionStore::new()));
        assert!(manager.is_loading());

        manager.restore();
        assert!(!manager.is_loading());
        assert!(!manager.is_authenticated());
    }

    #[test]
    fn restore_reproduces_the_stored_user_without_network() {
        let manager = manager_over(seeded_store());
        manager.restore();

        let user = manager.current_user().unwrap();
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.name, "alice");
        assert!(manager.is_authenticated());
    }

    #[test]
    fn a_listener_can_subscribe_another_listener() {
        let manager = Arc::new(manager_over(Arc::new(InMemorySessionStore::new())));

        let inner_calls = Arc::new(AtomicUsize::new(0));
        let inner_calls_clone = Arc::clone(&inner_calls);
        let manager_clone = Arc::clone(&manager);
        manager.subscribe(Box::new(move |_| {
            let inner_calls = Arc::clone(&inner_calls_clone);
            manager_clone.subscribe(Box::new(move |_| {
                inner_calls.fetch_add(1, Ordering::SeqCst);
            }));
        }));

        // First notification registers the inner listener from inside the
        // outer one; the second must reach it
        manager.restore();
        manager.restore();

        assert!(inner_calls.load(Ordering::SeqCst) > 0);
    }

    #[test]
    fn listeners_observe_state_changes() {
        let manager = manager_over(seeded_store());

        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(RwLock::new(None));
        let calls_clone = Arc::clone(&calls);
        let seen_clone = Arc::clone(&seen);
        manager.subscribe(Box::new(move |state| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
            *seen_clone.write().unwrap() = Some(state.clone());
        }));

        manager.restore();

        assert!(calls.load(Ordering::SeqCst) > 0);
        let last = seen.read().unwrap().clone().unwrap();
        assert!(last.user.is_some());
        assert!(!last.is_loading);
    }
}
