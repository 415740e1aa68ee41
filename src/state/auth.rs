//! Auth-session snapshot for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrored into an `RwSignal<AuthState>` so route guards, the role router,
//! and user-aware components re-render when the session changes. The session
//! store is the only writer.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Role, User};

/// Authentication state: the session pair plus the startup loading flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<User>,
    /// True until the persisted session has been read at startup.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { token: None, user: None, loading: true }
    }
}

impl AuthState {
    /// Anonymous state with loading finished.
    pub fn anonymous() -> Self {
        Self { token: None, user: None, loading: false }
    }

    /// Active state with loading finished.
    pub fn active(token: String, user: User) -> Self {
        Self { token: Some(token), user: Some(user), loading: false }
    }

    /// A session counts only when both halves are present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    /// Role of the authenticated user, if any.
    pub fn role(&self) -> Option<Role> {
        if !self.is_authenticated() {
            return None;
        }
        self.user.as_ref().and_then(|u| u.role)
    }
}
