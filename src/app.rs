//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::protected_route::ProtectedRoute;
use crate::pages::bug_detail::BugDetailPage;
use crate::pages::dashboard::{DeveloperDashboardPage, TesterDashboardPage};
use crate::pages::{home::HomePage, login::LoginPage, profile::ProfilePage, register::RegisterPage};
use crate::routes::{AppRoute, landing_route};
use crate::services::{Services, provide_services};
use crate::state::auth::AuthState;
use crate::util::guard::{GuardDecision, guard_decision};

/// Root application component.
///
/// Provides the service bundle and the reactive session mirror, restores
/// any persisted session, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let services = Services::for_browser();
    let session = services.session.clone();
    provide_services(services);

    // Restore after mount so the first render is never blocked on storage.
    Effect::new(move || session.initialize());

    view! {
        <Title text="Bug Tracker"/>

        <Router>
            <Navbar/>
            <main class="main-content">
                <Routes fallback=|| view! { <Redirect path="/"/> }>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("") view=RootLanding/>
                    <Route
                        path=StaticSegment("home")
                        view=|| view! { <ProtectedRoute><HomePage/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("developer-dashboard")
                        view=|| view! { <ProtectedRoute><DeveloperDashboardPage/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("tester-dashboard")
                        view=|| view! { <ProtectedRoute><TesterDashboardPage/></ProtectedRoute> }
                    />
                    <Route
                        path=(StaticSegment("view"), ParamSegment("id"))
                        view=|| view! { <ProtectedRoute><BugDetailPage/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("profile")
                        view=|| view! { <ProtectedRoute><ProfilePage/></ProtectedRoute> }
                    />
                </Routes>
            </main>
        </Router>
    }
}

/// `/`: sends each session to its landing route. Users land in place.
#[component]
fn RootLanding() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    move || {
        let state = auth.get();
        if guard_decision(&state) == GuardDecision::Checking {
            return ().into_any();
        }
        match landing_route(&state) {
            AppRoute::Home => view! { <HomePage/> }.into_any(),
            route => view! { <Redirect path=route.path()/> }.into_any(),
        }
    }
}
