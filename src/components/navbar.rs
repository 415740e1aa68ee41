//! Top navigation bar with session-aware links and logout.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::routes::{AppRoute, landing_route};
use crate::services::use_services;
use crate::state::auth::AuthState;

/// Links shown for `state`, as `(route, label)`.
pub fn nav_links(state: &AuthState) -> Vec<(AppRoute, &'static str)> {
    if state.loading {
        return Vec::new();
    }
    if !state.is_authenticated() {
        return vec![(AppRoute::Login, "Login"), (AppRoute::Register, "Register")];
    }
    let landing = landing_route(state);
    let label = if landing == AppRoute::Home { "Home" } else { "Dashboard" };
    vec![(landing, label), (AppRoute::Profile, "Profile")]
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let services = use_services();
    let navigate = use_navigate();

    let on_logout = move |_| {
        services.with_value(|s| s.auth.logout());
        navigate(AppRoute::Login.path(), NavigateOptions::default());
    };

    let links = move || {
        nav_links(&auth.get())
            .into_iter()
            .map(|(route, label)| view! { <A href=route.path()>{label}</A> })
            .collect::<Vec<_>>()
    };

    let user_label = move || {
        let user = auth.get().user?;
        let role = user.role.map(Role::label).unwrap_or_default();
        Some(format!("{} ({role})", user.display_name()))
    };

    view! {
        <nav class="navbar">
            <span class="navbar__brand">"Bug Tracker"</span>
            <div class="navbar__links">{links}</div>
            <span class="navbar__spacer"></span>
            <Show when=move || auth.get().is_authenticated()>
                <span class="navbar__user">{user_label}</span>
                <button class="btn btn--secondary" on:click=on_logout.clone()>
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
