//! Login page: email, password and role picker.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::routes::{AppRoute, post_login_path};
use crate::services::use_services;

pub const MISSING_CREDENTIALS: &str = "Email and password are required.";

/// Trimmed email and raw password, or the message to show.
///
/// # Errors
///
/// Returns [`MISSING_CREDENTIALS`] when either field is blank.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.trim().is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let services = use_services();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
                Ok(input) => input,
                Err(message) => {
                    error.set(Some(message.to_owned()));
                    return;
                }
            };
        let selected = role.get_untracked();
        let gateway = services.with_value(|s| s.auth.clone());
        let navigate = navigate.clone();
        busy.set(true);
        error.set(None);

        leptos::task::spawn_local(async move {
            match gateway.login(&email_value, &password_value, selected).await {
                Ok(()) => navigate(post_login_path(selected), NavigateOptions::default()),
                Err(message) => error.set(Some(message)),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Sign in"</h1>
                <Show when=move || error.get().is_some()>
                    <p class="auth-card__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <label>
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <RolePicker role=role/>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                </button>
                <p class="auth-card__alt">
                    "No account? " <A href=AppRoute::Register.path()>"Register"</A>
                </p>
            </form>
        </div>
    }
}

/// Role `<select>` bound to `role`. Unknown values fall back to the default role.
#[component]
pub fn RolePicker(role: RwSignal<Role>) -> impl IntoView {
    view! {
        <label>
            "Role"
            <select
                prop:value=move || role.get().as_str()
                on:change=move |ev| role.set(event_target_value(&ev).parse().unwrap_or_default())
            >
                {Role::ALL
                    .into_iter()
                    .map(|r| view! { <option value=r.as_str()>{r.label()}</option> })
                    .collect::<Vec<_>>()}
            </select>
        </label>
    }
}
