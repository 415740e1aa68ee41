//! Auth gateway: the only caller of the `/auth/*` endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! Translates login/register/profile responses into session-store updates.
//! Views call these and render the `Err` string directly.
//!
//! ERROR HANDLING
//! ==============
//! Every operation returns `Result<(), String>` and never panics: a rejected
//! request yields the server's `error`/`message` or a per-operation fallback,
//! and anything that prevents reading a response yields `"Network error"`.
//!
//! The submitted role is trusted for routing; the server's `user.role` wins
//! only when it sends one.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::rc::Rc;

use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use super::transport::{HttpRequest, Method, Transport};
use super::types::{AuthResponse, LoginRequest, RegisterRequest, Role, User, UserPatch};
use crate::config::ClientConfig;
use crate::error::{ApiError, NETWORK_ERROR};
use crate::state::session::SessionStore;
use crate::util::navigate::Navigator;

const LOGIN_PATH: &str = "/auth/login";
const REGISTER_PATH: &str = "/auth/register";
const PROFILE_PATH: &str = "/auth/profile";

const LOGIN_FAILED: &str = "Login failed";
const REGISTRATION_FAILED: &str = "Registration failed";
const PROFILE_UPDATE_FAILED: &str = "Profile update failed";
const NOT_LOGGED_IN: &str = "Not logged in";

/// Status plus a best-effort JSON body.
struct Exchange {
    ok: bool,
    status: u16,
    body: Option<serde_json::Value>,
}

#[derive(Clone)]
pub struct AuthGateway {
    config: Rc<ClientConfig>,
    session: SessionStore,
    transport: Rc<dyn Transport>,
    navigator: Rc<dyn Navigator>,
}

impl AuthGateway {
    pub fn new(
        config: &ClientConfig,
        session: SessionStore,
        transport: Rc<dyn Transport>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self { config: Rc::new(config.clone()), session, transport, navigator }
    }

    /// Log in and establish a session.
    ///
    /// # Errors
    ///
    /// Returns the message to display when the login did not succeed.
    pub async fn login(&self, email: &str, password: &str, role: Role) -> Result<(), String> {
        let request = LoginRequest { email, password, role };
        let exchange = self.exchange(Method::Post, LOGIN_PATH, &request, None).await?;
        if !exchange.ok {
            log::warn!("login rejected with status {}", exchange.status);
            return Err(rejection_message(exchange.body.as_ref(), LOGIN_FAILED));
        }

        let (token, response) = parse_auth_response(exchange.body)?;
        let user = normalize_login_user(&response, email, role, now_rfc3339());
        log::info!("logged in as {}", user.role.unwrap_or_default());
        self.session.set_session(token, user);
        Ok(())
    }

    /// Create an account and establish a session.
    ///
    /// # Errors
    ///
    /// Returns the message to display when registration did not succeed.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), String> {
        let exchange = self.exchange(Method::Post, REGISTER_PATH, request, None).await?;
        if !exchange.ok {
            log::warn!("registration rejected with status {}", exchange.status);
            return Err(rejection_message(exchange.body.as_ref(), REGISTRATION_FAILED));
        }

        let (token, response) = parse_auth_response(exchange.body)?;
        let user = normalize_registered_user(&response, request, now_rfc3339());
        log::info!("registered as {}", request.role);
        self.session.set_session(token, user);
        Ok(())
    }

    /// End the session locally. No network call.
    pub fn logout(&self) {
        self.session.clear_session();
        log::info!("logged out");
    }

    /// Send `patch` to the backend and merge it into the stored user.
    ///
    /// # Errors
    ///
    /// Returns the message to display when the update did not succeed,
    /// including when no session is active. A 401 ends the session and
    /// forces the login view, like any other authenticated call.
    pub async fn update_profile(&self, patch: &UserPatch) -> Result<(), String> {
        let Some(token) = self.session.token() else {
            return Err(NOT_LOGGED_IN.to_owned());
        };
        let exchange = self.exchange(Method::Put, PROFILE_PATH, patch, Some(&token)).await?;
        if exchange.status == 401 {
            log::info!("profile update returned 401; ending session");
            self.session.clear_session();
            self.navigator.redirect_to_login();
            return Err(ApiError::Unauthorized.to_string());
        }
        if !exchange.ok {
            log::warn!("profile update rejected with status {}", exchange.status);
            return Err(rejection_message(exchange.body.as_ref(), PROFILE_UPDATE_FAILED));
        }
        if !self.session.merge_user(patch) {
            // Logged out while the request was in flight.
            return Err(NOT_LOGGED_IN.to_owned());
        }
        Ok(())
    }

    async fn exchange<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<Exchange, String> {
        let body = serde_json::to_string(body).map_err(|e| {
            log::warn!("{path} body encode failed: {e}");
            NETWORK_ERROR.to_owned()
        })?;
        let mut headers = vec![("Content-Type".to_owned(), "application/json".to_owned())];
        if let Some(token) = token {
            headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
        let request = HttpRequest { method, url: self.config.url(path), headers, body: Some(body) };

        let response = self.transport.send(request).await.map_err(|e| {
            log::warn!("{path} failed: {e}");
            NETWORK_ERROR.to_owned()
        })?;
        Ok(Exchange {
            ok: response.ok(),
            status: response.status,
            body: serde_json::from_str(&response.body).ok(),
        })
    }
}

/// Decode a success body and require a non-empty token.
fn parse_auth_response(body: Option<serde_json::Value>) -> Result<(String, AuthResponse), String> {
    let response: AuthResponse = body
        .and_then(|value| serde_json::from_value(value).ok())
        .ok_or_else(|| {
            log::warn!("auth response was not a JSON object");
            NETWORK_ERROR.to_owned()
        })?;
    match response.token.clone().filter(|t| !t.is_empty()) {
        Some(token) => Ok((token, response)),
        None => {
            log::warn!("auth response carried no token");
            Err(NETWORK_ERROR.to_owned())
        }
    }
}

/// Server's `error` or `message` string, else `fallback`.
fn rejection_message(body: Option<&serde_json::Value>, fallback: &str) -> String {
    body.and_then(|b| {
        ["error", "message"]
            .into_iter()
            .find_map(|key| b.get(key).and_then(|v| v.as_str()).filter(|s| !s.is_empty()))
    })
    .unwrap_or(fallback)
    .to_owned()
}

/// Server-supplied fields first, then the submitted email and role.
fn normalize_login_user(response: &AuthResponse, email: &str, role: Role, now: String) -> User {
    let server = response.user.clone().unwrap_or_default();
    User {
        id: server.id.or_else(|| response.id.clone()),
        email: server.email.filter(|e| !e.is_empty()).unwrap_or_else(|| email.to_owned()),
        first_name: server.first_name.or_else(|| response.first_name.clone()),
        last_name: server.last_name.or_else(|| response.last_name.clone()),
        role: Some(server.role.and_then(|r| r.parse().ok()).unwrap_or(role)),
        created_at: server.created_at.unwrap_or(now),
    }
}

/// Submitted identity with the server's id and creation time.
fn normalize_registered_user(response: &AuthResponse, request: &RegisterRequest, now: String) -> User {
    let server = response.user.clone().unwrap_or_default();
    User {
        id: server.id.or_else(|| response.id.clone()),
        email: request.email.clone(),
        first_name: Some(request.first_name.clone()),
        last_name: Some(request.last_name.clone()),
        role: Some(request.role),
        created_at: server.created_at.unwrap_or(now),
    }
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default()
}
