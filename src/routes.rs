//! Application routes and the role router.
//!
//! The role router is a pure function of the session snapshot: it is
//! re-evaluated whenever the root path renders and never has side effects.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::net::types::Role;
use crate::state::auth::AuthState;

/// Root path; renders the landing view chosen by the role router.
pub const ROOT_PATH: &str = "/";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Login,
    Register,
    Home,
    DeveloperDashboard,
    TesterDashboard,
    Profile,
}

impl AppRoute {
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Home => "/home",
            Self::DeveloperDashboard => "/developer-dashboard",
            Self::TesterDashboard => "/tester-dashboard",
            Self::Profile => "/profile",
        }
    }

    /// Whether the route requires an active session.
    pub fn is_protected(self) -> bool {
        !matches!(self, Self::Login | Self::Register)
    }
}

/// Landing view for the current session.
pub fn landing_route(state: &AuthState) -> AppRoute {
    if !state.is_authenticated() {
        return AppRoute::Login;
    }
    landing_for_role(state.role())
}

/// Destination after a successful login/register with `role`.
pub fn post_login_route(role: Role) -> AppRoute {
    landing_for_role(Some(role))
}

/// Where to navigate after login/register. Users without a dashboard go
/// through `/` so the role router picks their view.
pub fn post_login_path(role: Role) -> &'static str {
    match post_login_route(role) {
        AppRoute::Home => ROOT_PATH,
        route => route.path(),
    }
}

/// Detail view for one bug.
pub fn bug_detail_path(id: i64) -> String {
    format!("/view/{id}")
}

fn landing_for_role(role: Option<Role>) -> AppRoute {
    match role {
        Some(Role::Developer) => AppRoute::DeveloperDashboard,
        Some(Role::Tester) => AppRoute::TesterDashboard,
        Some(Role::User) | None => AppRoute::Home,
    }
}
