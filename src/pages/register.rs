//! Registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::login::RolePicker;
use crate::net::types::{RegisterRequest, Role};
use crate::routes::{AppRoute, post_login_path};
use crate::services::use_services;

pub const MISSING_FIELDS: &str = "All fields are required.";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match.";

/// Raw registration form values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

impl RegisterForm {
    /// Build the request body, or the message to show.
    ///
    /// # Errors
    ///
    /// [`MISSING_FIELDS`] when any field is blank, [`PASSWORD_MISMATCH`]
    /// when the confirmation differs.
    pub fn validate(&self) -> Result<RegisterRequest, &'static str> {
        let first_name = self.first_name.trim();
        let last_name = self.last_name.trim();
        let email = self.email.trim();
        if [first_name, last_name, email, self.password.trim()].iter().any(|v| v.is_empty()) {
            return Err(MISSING_FIELDS);
        }
        if self.password != self.confirm_password {
            return Err(PASSWORD_MISMATCH);
        }
        Ok(RegisterRequest {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            email: email.to_owned(),
            password: self.password.clone(),
            role: self.role,
        })
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let services = use_services();
    let navigate = use_navigate();

    let form = RwSignal::new(RegisterForm::default());
    let role = RwSignal::new(Role::default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let mut values = form.get_untracked();
        values.role = role.get_untracked();
        let request = match values.validate() {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        let gateway = services.with_value(|s| s.auth.clone());
        let navigate = navigate.clone();
        busy.set(true);
        error.set(None);

        leptos::task::spawn_local(async move {
            match gateway.register(&request).await {
                Ok(()) => navigate(post_login_path(request.role), NavigateOptions::default()),
                Err(message) => error.set(Some(message)),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Create account"</h1>
                <Show when=move || error.get().is_some()>
                    <p class="auth-card__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <label>
                    "First name"
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.first_name.clone())
                        on:input=move |ev| form.update(|f| f.first_name = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Last name"
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.last_name.clone())
                        on:input=move |ev| form.update(|f| f.last_name = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Email"
                    <input
                        type="email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Confirm password"
                    <input
                        type="password"
                        prop:value=move || form.with(|f| f.confirm_password.clone())
                        on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                    />
                </label>
                <RolePicker role=role/>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Register" }}
                </button>
                <p class="auth-card__alt">
                    "Already registered? " <A href=AppRoute::Login.path()>"Sign in"</A>
                </p>
            </form>
        </div>
    }
}
