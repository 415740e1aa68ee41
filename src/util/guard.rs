//! Route guard shared by every protected view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components must apply identical unauthenticated redirect behavior,
//! and must neither render nor redirect while the session is still loading.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes::AppRoute;
use crate::state::auth::AuthState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still loading: render nothing, do not redirect.
    Checking,
    RedirectToLogin,
    Allow,
}

pub fn guard_decision(state: &AuthState) -> GuardDecision {
    if state.loading {
        GuardDecision::Checking
    } else if state.is_authenticated() {
        GuardDecision::Allow
    } else {
        GuardDecision::RedirectToLogin
    }
}

/// Redirect to `/login` whenever auth has loaded and no session is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if guard_decision(&auth.get()) == GuardDecision::RedirectToLogin {
            navigate(AppRoute::Login.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
