//! Read-only bug table shared by the home page and dashboards.

#[cfg(test)]
#[path = "bug_table_test.rs"]
mod bug_table_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Bug;
use crate::routes::bug_detail_path;

/// Placeholder for absent optional columns.
const BLANK: &str = "-";

/// Short date for the "Created" column (`2024-05-01T10:00:00Z` -> `2024-05-01`).
pub fn short_date(raw: &str) -> &str {
    raw.split_once('T').map_or(raw, |(date, _)| date)
}

/// `IN_PROGRESS` -> `in-progress`, for status badge modifiers.
pub fn status_class(status: &str) -> String {
    status.trim().to_ascii_lowercase().replace('_', "-")
}

/// Bug rows linking to their detail view. With `on_delete`, each row also
/// gets a delete button that reports the bug id.
#[component]
pub fn BugTable(
    bugs: Vec<Bug>,
    #[prop(into)] empty_text: String,
    #[prop(optional)] on_delete: Option<Callback<i64>>,
) -> impl IntoView {
    if bugs.is_empty() {
        return view! { <p class="bug-table__empty">{empty_text}</p> }.into_any();
    }

    let rows = bugs
        .into_iter()
        .map(|bug| {
            let id_label = bug.bug_id.map_or_else(|| BLANK.to_owned(), |id| format!("#{id}"));
            let status = bug.status.unwrap_or_default();
            let badge = format!("badge badge--{}", status_class(&status));
            let created = bug.created_date.as_deref().map_or(BLANK, short_date).to_owned();
            let actions = bug.bug_id.map(|id| {
                let delete = on_delete.map(|cb| {
                    view! {
                        <button class="btn btn--danger btn--small" on:click=move |_| cb.run(id)>
                            "Delete"
                        </button>
                    }
                });
                view! {
                    <A href=bug_detail_path(id)>"View"</A>
                    {delete}
                }
            });
            view! {
                <tr>
                    <td class="bug-table__id">{id_label}</td>
                    <td>{bug.title}</td>
                    <td><span class=badge>{status}</span></td>
                    <td>{bug.priority.unwrap_or_else(|| BLANK.to_owned())}</td>
                    <td>{bug.reporter.unwrap_or_else(|| BLANK.to_owned())}</td>
                    <td>{created}</td>
                    <td class="bug-table__actions">{actions}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <table class="bug-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Title"</th>
                    <th>"Status"</th>
                    <th>"Priority"</th>
                    <th>"Reporter"</th>
                    <th>"Created"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
    .into_any()
}
