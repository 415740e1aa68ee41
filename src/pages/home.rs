//! Home page: the bug list with a status filter.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::bug_table::BugTable;
use crate::net::bugs::{ALL_STATUSES, BUG_STATUSES, BugQuery};
use crate::net::types::BugListing;
use crate::services::use_services;
use crate::util::dialog;

pub const DELETE_BUG_PROMPT: &str = "Are you sure you want to delete this bug?";

/// One-line description of what a listing shows.
pub fn listing_summary(listing: &BugListing) -> String {
    let shown = listing.bugs().len();
    match listing {
        BugListing::Page(page) => format!("Showing {shown} of {} bugs", page.total_elements),
        BugListing::List(_) if shown == 1 => "1 bug".to_owned(),
        BugListing::List(_) => format!("{shown} bugs"),
    }
}

/// Status label for the filter `<select>` (`IN_PROGRESS` -> `In progress`).
pub fn status_label(status: &str) -> String {
    let lower = status.to_ascii_lowercase().replace('_', " ");
    let mut chars = lower.chars();
    chars.next().map_or_else(String::new, |first| first.to_ascii_uppercase().to_string() + chars.as_str())
}

#[component]
pub fn HomePage() -> impl IntoView {
    let services = use_services();
    let status = RwSignal::new(ALL_STATUSES.to_owned());

    let listing = LocalResource::new(move || {
        let query = BugQuery::default().with_status(&status.get());
        let bugs = services.with_value(|s| s.bugs.clone());
        async move { bugs.list_bugs(&query).await }
    });

    let notice = RwSignal::new(None::<String>);
    let on_delete = Callback::new(move |id: i64| {
        if !dialog::confirm(DELETE_BUG_PROMPT) {
            return;
        }
        let bugs = services.with_value(|s| s.bugs.clone());
        leptos::task::spawn_local(async move {
            match bugs.delete_bug(id).await {
                Ok(()) => {
                    notice.set(Some(format!("Bug #{id} deleted.")));
                    listing.refetch();
                }
                Err(err) => notice.set(Some(err.to_string())),
            }
        });
    });

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"Bugs"</h1>
                <label class="home-page__filter">
                    "Status"
                    <select
                        prop:value=move || status.get()
                        on:change=move |ev| status.set(event_target_value(&ev))
                    >
                        <option value=ALL_STATUSES>"All"</option>
                        {BUG_STATUSES
                            .into_iter()
                            .map(|s| view! { <option value=s>{status_label(s)}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
            </header>

            <Show when=move || notice.get().is_some()>
                <p class="home-page__notice">{move || notice.get().unwrap_or_default()}</p>
            </Show>

            <Suspense fallback=move || view! { <p>"Loading bugs..."</p> }>
                {move || {
                    listing
                        .get()
                        .map(|result| match result {
                            Ok(listing) => {
                                let summary = listing_summary(&listing);
                                view! {
                                    <p class="home-page__summary">{summary}</p>
                                    <BugTable bugs=listing.into_bugs() empty_text="No bugs found." on_delete=on_delete/>
                                }
                                    .into_any()
                            }
                            Err(err) => view! { <p class="home-page__error">{err.to_string()}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}
