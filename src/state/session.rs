//! Session store: the single owner of the `{token, user}` pair.
//!
//! SYSTEM CONTEXT
//! ==============
//! Seeded from durable storage at startup and mutated only by the auth
//! gateway and the request wrapper's 401 handler. Handles are cheap clones
//! of one shared state; the UI thread is the only thread, so a `RefCell`
//! suffices.
//!
//! INVARIANTS
//! ==========
//! Token and user are written together and cleared together, in memory and
//! in durable storage. A half-persisted pair found at startup is discarded.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::ClientConfig;
use crate::net::types::{User, UserPatch};
use crate::state::auth::AuthState;
use crate::util::storage::{self, SessionStorage, Stored};

type Listener = Rc<dyn Fn(&AuthState)>;

struct Inner {
    state: AuthState,
    listeners: Vec<Listener>,
}

/// Shared handle to the current session.
#[derive(Clone)]
pub struct SessionStore {
    inner: Rc<RefCell<Inner>>,
    storage: Rc<dyn SessionStorage>,
    token_key: Rc<str>,
    user_key: Rc<str>,
}

impl SessionStore {
    /// Create an uninitialized store (`loading = true`, anonymous).
    pub fn new(storage: Rc<dyn SessionStorage>, config: &ClientConfig) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner { state: AuthState::default(), listeners: Vec::new() })),
            storage,
            token_key: config.token_key.as_str().into(),
            user_key: config.user_key.as_str().into(),
        }
    }

    /// Load the persisted session and clear the loading flag.
    pub fn initialize(&self) {
        let token = self.storage.get_item(&self.token_key).filter(|t| !t.is_empty());
        let user = match storage::load_json::<User>(self.storage.as_ref(), &self.user_key) {
            Stored::Present(user) => Some(user),
            Stored::Missing | Stored::Corrupt => None,
        };

        let next = match (token, user) {
            (Some(token), Some(user)) => {
                log::debug!("restored persisted session");
                AuthState::active(token, user)
            }
            (None, None) => AuthState::anonymous(),
            _ => {
                log::warn!("discarding partial persisted session");
                self.remove_persisted();
                AuthState::anonymous()
            }
        };
        self.commit(|state| *state = next);
    }

    /// Replace the session in memory and durable storage.
    pub fn set_session(&self, token: String, user: User) {
        self.storage.set_item(&self.token_key, &token);
        storage::save_json(self.storage.as_ref(), &self.user_key, &user);
        self.commit(|state| *state = AuthState::active(token, user));
    }

    /// Remove the session from memory and durable storage.
    pub fn clear_session(&self) {
        self.remove_persisted();
        self.commit(|state| *state = AuthState::anonymous());
    }

    /// Shallow-merge `patch` into the current user and persist it.
    ///
    /// Returns `false` without touching anything when no session is active.
    pub fn merge_user(&self, patch: &UserPatch) -> bool {
        let merged = {
            let inner = self.inner.borrow();
            if !inner.state.is_authenticated() {
                return false;
            }
            let Some(mut user) = inner.state.user.clone() else {
                return false;
            };
            user.apply(patch);
            user
        };
        storage::save_json(self.storage.as_ref(), &self.user_key, &merged);
        self.commit(|state| state.user = Some(merged));
        true
    }

    pub fn snapshot(&self) -> AuthState {
        self.inner.borrow().state.clone()
    }

    pub fn token(&self) -> Option<String> {
        let inner = self.inner.borrow();
        if inner.state.is_authenticated() { inner.state.token.clone() } else { None }
    }

    pub fn user(&self) -> Option<User> {
        let inner = self.inner.borrow();
        if inner.state.is_authenticated() { inner.state.user.clone() } else { None }
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.borrow().state.is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.borrow().state.loading
    }

    /// Register a callback run with the new state after every mutation.
    pub fn on_change<F>(&self, listener: F)
    where
        F: Fn(&AuthState) + 'static,
    {
        self.inner.borrow_mut().listeners.push(Rc::new(listener));
    }

    fn remove_persisted(&self) {
        self.storage.remove_item(&self.token_key);
        self.storage.remove_item(&self.user_key);
    }

    fn commit(&self, mutate: impl FnOnce(&mut AuthState)) {
        // Listeners may read the store, so release the borrow before calling them.
        let (snapshot, listeners) = {
            let mut inner = self.inner.borrow_mut();
            mutate(&mut inner.state);
            (inner.state.clone(), inner.listeners.clone())
        };
        for listener in listeners {
            listener(&snapshot);
        }
    }
}
