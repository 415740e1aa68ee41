//! Profile page: view account details and edit name and email.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::net::types::{Role, User, UserPatch};
use crate::services::use_services;
use crate::state::auth::AuthState;

pub const NO_CHANGES: &str = "No changes to save.";
pub const EMAIL_REQUIRED: &str = "Email cannot be empty.";
pub const PROFILE_SAVED: &str = "Profile updated.";

/// Patch holding only the fields that differ from `current`.
///
/// Blank names are treated as unchanged.
///
/// # Errors
///
/// [`EMAIL_REQUIRED`] for a blank email, [`NO_CHANGES`] when nothing differs.
pub fn build_profile_patch(
    current: &User,
    first_name: &str,
    last_name: &str,
    email: &str,
) -> Result<UserPatch, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err(EMAIL_REQUIRED);
    }
    let changed = |value: &str, existing: Option<&str>| {
        let value = value.trim();
        (!value.is_empty() && Some(value) != existing).then(|| value.to_owned())
    };
    let patch = UserPatch {
        first_name: changed(first_name, current.first_name.as_deref()),
        last_name: changed(last_name, current.last_name.as_deref()),
        email: (email != current.email).then(|| email.to_owned()),
    };
    if patch.is_empty() {
        return Err(NO_CHANGES);
    }
    Ok(patch)
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let services = use_services();

    let initial = auth.get_untracked().user.unwrap_or_default();
    let first_name = RwSignal::new(initial.first_name.clone().unwrap_or_default());
    let last_name = RwSignal::new(initial.last_name.clone().unwrap_or_default());
    let email = RwSignal::new(initial.email.clone());
    let notice = RwSignal::new(None::<(bool, String)>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let current = auth.get_untracked().user.unwrap_or_default();
        let patch = match build_profile_patch(
            &current,
            &first_name.get_untracked(),
            &last_name.get_untracked(),
            &email.get_untracked(),
        ) {
            Ok(patch) => patch,
            Err(message) => {
                notice.set(Some((false, message.to_owned())));
                return;
            }
        };
        let gateway = services.with_value(|s| s.auth.clone());
        busy.set(true);
        notice.set(None);

        leptos::task::spawn_local(async move {
            match gateway.update_profile(&patch).await {
                Ok(()) => notice.set(Some((true, PROFILE_SAVED.to_owned()))),
                Err(message) => notice.set(Some((false, message))),
            }
            busy.set(false);
        });
    };

    let role = move || auth.get().user.and_then(|u| u.role).map(Role::label).unwrap_or("-");
    let member_since = move || auth.get().user.map(|u| u.created_at).unwrap_or_default();
    let notice_class = move || match notice.get() {
        Some((true, _)) => "profile-page__notice profile-page__notice--ok",
        _ => "profile-page__notice profile-page__notice--error",
    };

    view! {
        <div class="profile-page">
            <h1>"Profile"</h1>
            <dl class="profile-page__facts">
                <dt>"Role"</dt>
                <dd>{role}</dd>
                <dt>"Member since"</dt>
                <dd>{member_since}</dd>
            </dl>
            <form class="profile-page__form" on:submit=on_submit>
                <Show when=move || notice.get().is_some()>
                    <p class=notice_class>{move || notice.get().map(|(_, m)| m).unwrap_or_default()}</p>
                </Show>
                <label>
                    "First name"
                    <input
                        type="text"
                        prop:value=move || first_name.get()
                        on:input=move |ev| first_name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Last name"
                    <input
                        type="text"
                        prop:value=move || last_name.get()
                        on:input=move |ev| last_name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Save" }}
                </button>
            </form>
        </div>
    }
}
