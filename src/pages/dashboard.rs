//! Role dashboards: developer work queue and tester verification queue.
//!
//! Each section is filled from `/bugs/status/{status}` for its statuses, so
//! every matching bug is shown without paging.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::bug_table::BugTable;
use crate::error::ApiError;
use crate::net::bugs::BugsApi;
use crate::net::types::Bug;
use crate::services::use_services;
use crate::state::auth::AuthState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardKind {
    Developer,
    Tester,
}

/// One table on a dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub heading: &'static str,
    pub statuses: &'static [&'static str],
    pub empty_text: &'static str,
}

impl DashboardKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::Developer => "Developer Dashboard",
            Self::Tester => "Tester Dashboard",
        }
    }

    pub fn sections(self) -> [Section; 2] {
        match self {
            Self::Developer => [
                Section {
                    heading: "Assigned to fix",
                    statuses: &["ASSIGNED", "IN_PROGRESS"],
                    empty_text: "Nothing assigned.",
                },
                Section { heading: "Fixed", statuses: &["FIXED"], empty_text: "No fixed bugs yet." },
            ],
            Self::Tester => [
                Section {
                    heading: "Awaiting testing",
                    statuses: &["AWAITING_TESTING", "FIXED"],
                    empty_text: "Nothing to test.",
                },
                Section { heading: "Tested", statuses: &["PASSED", "FAILED"], empty_text: "No test results yet." },
            ],
        }
    }
}

/// Load both sections of `kind`, one status request at a time.
///
/// # Errors
///
/// The first failed status request fails the whole dashboard.
pub async fn load_sections(bugs: &BugsApi, kind: DashboardKind) -> Result<[Vec<Bug>; 2], ApiError> {
    let mut loaded: [Vec<Bug>; 2] = Default::default();
    for (slot, section) in loaded.iter_mut().zip(kind.sections()) {
        for status in section.statuses {
            slot.extend(bugs.bugs_by_status(status).await?);
        }
    }
    Ok(loaded)
}

#[component]
pub fn DeveloperDashboardPage() -> impl IntoView {
    view! { <Dashboard kind=DashboardKind::Developer/> }
}

#[component]
pub fn TesterDashboardPage() -> impl IntoView {
    view! { <Dashboard kind=DashboardKind::Tester/> }
}

#[component]
fn Dashboard(kind: DashboardKind) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let services = use_services();

    let sections = LocalResource::new(move || {
        let bugs = services.with_value(|s| s.bugs.clone());
        async move { load_sections(&bugs, kind).await }
    });

    let greeting = move || auth.get().user.map(|u| format!("Welcome, {}", u.display_name())).unwrap_or_default();
    let [open, done] = kind.sections();

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{kind.title()}</h1>
                <p>{greeting}</p>
            </header>
            <Suspense fallback=move || view! { <p>"Loading bugs..."</p> }>
                {move || {
                    sections
                        .get()
                        .map(|result| match result {
                            Ok([first, second]) => {
                                view! {
                                    <section class="dashboard-page__section">
                                        <h2>{format!("{} ({})", open.heading, first.len())}</h2>
                                        <BugTable bugs=first empty_text=open.empty_text/>
                                    </section>
                                    <section class="dashboard-page__section">
                                        <h2>{format!("{} ({})", done.heading, second.len())}</h2>
                                        <BugTable bugs=second empty_text=done.empty_text/>
                                    </section>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                view! { <p class="dashboard-page__error">{err.to_string()}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
