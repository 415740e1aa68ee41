//! Wrapper that renders its children only for an authenticated session.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::guard::{GuardDecision, guard_decision, install_unauth_redirect};

/// Protected route content.
///
/// Renders nothing while the session is loading, redirects to `/login`
/// once it has loaded without a session, and renders `children` otherwise.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    move || match guard_decision(&auth.get()) {
        GuardDecision::Allow => children().into_any(),
        GuardDecision::Checking | GuardDecision::RedirectToLogin => ().into_any(),
    }
}
