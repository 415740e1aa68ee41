//! Authenticated request wrapper for every non-auth backend call.
//!
//! SYSTEM CONTEXT
//! ==============
//! Attaches the session's bearer token, treats 401 as session expiry (clear
//! the session, force the login view), and normalizes error payloads into a
//! single displayable message.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here panics or escapes as anything but an [`ApiError`]. Error-body
//! scraping is best-effort: a JSON `message`, then an HTML `<title>`/`<h1>`,
//! then a generic status line.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use std::rc::Rc;
use std::sync::LazyLock;

use regex::Regex;
use serde::de::DeserializeOwned;

use super::transport::{HttpRequest, HttpResponse, Method, Transport};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::state::session::SessionStore;
use crate::util::navigate::Navigator;

const CONTENT_TYPE: &str = "Content-Type";
const AUTHORIZATION: &str = "Authorization";
const JSON_MIME: &str = "application/json";

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<title>(.*?)</title>").expect("valid title regex"));
static H1_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<h1>(.*?)</h1>").expect("valid h1 regex"));

/// Caller-supplied method, body, and extra headers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub method: Option<Method>,
    pub body: Option<String>,
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self { method: Some(Method::Get), ..Self::default() }
    }

    pub fn delete() -> Self {
        Self { method: Some(Method::Delete), ..Self::default() }
    }

    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }
}

/// Successful response payload.
#[derive(Clone, Debug, PartialEq)]
pub enum ResponseBody {
    Json(serde_json::Value),
    Text(String),
}

/// Backend client that reads the bearer token from the session store.
#[derive(Clone)]
pub struct ApiClient {
    config: Rc<ClientConfig>,
    session: SessionStore,
    transport: Rc<dyn Transport>,
    navigator: Rc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        config: &ClientConfig,
        session: SessionStore,
        transport: Rc<dyn Transport>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self { config: Rc::new(config.clone()), session, transport, navigator }
    }

    /// Resolve `path` and `options` into the request that will be sent.
    pub fn build_request(&self, path: &str, options: RequestOptions) -> HttpRequest {
        HttpRequest {
            method: options.method.unwrap_or(Method::Get),
            url: self.config.url(path),
            headers: merge_headers(options.headers, self.session.token().as_deref()),
            body: options.body,
        }
    }

    /// Send a request and normalize the outcome.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Unauthorized`] on 401, after clearing the session and
    ///   redirecting to the login view.
    /// - [`ApiError::Status`] on any other non-success status.
    /// - [`ApiError::Network`] when the request fails or a JSON body is invalid.
    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<ResponseBody, ApiError> {
        let request = self.build_request(path, options);
        let method = request.method;
        log::debug!("{} {}", method.as_str(), request.url);

        let response = self.transport.send(request).await.map_err(|e| {
            log::warn!("{} {path} failed: {e}", method.as_str());
            ApiError::Network
        })?;

        if response.status == 401 {
            log::info!("{} {path} returned 401; ending session", method.as_str());
            self.session.clear_session();
            self.navigator.redirect_to_login();
            return Err(ApiError::Unauthorized);
        }

        if !response.ok() {
            let message = error_message(&response);
            log::warn!("{} {path} returned {}: {message}", method.as_str(), response.status);
            return Err(ApiError::Status { status: response.status, message });
        }

        decode_success(response)
    }

    /// `GET path` and decode the JSON body as `T`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`]; a body that does not decode as `T` is a
    /// [`ApiError::Network`].
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.request(path, RequestOptions::get()).await?;
        decode_as(body)
    }

    /// `DELETE path`, ignoring any response body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.request(path, RequestOptions::delete()).await.map(|_| ())
    }
}

/// JSON content-type default, caller overrides, then the bearer token.
fn merge_headers(caller: Vec<(String, String)>, token: Option<&str>) -> Vec<(String, String)> {
    let mut headers = vec![(CONTENT_TYPE.to_owned(), JSON_MIME.to_owned())];
    for (name, value) in caller {
        set_header(&mut headers, name, value);
    }
    if let Some(token) = token {
        set_header(&mut headers, AUTHORIZATION.to_owned(), format!("Bearer {token}"));
    }
    headers
}

fn set_header(headers: &mut Vec<(String, String)>, name: String, value: String) {
    if let Some(slot) = headers.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(&name)) {
        slot.1 = value;
    } else {
        headers.push((name, value));
    }
}

fn decode_success(response: HttpResponse) -> Result<ResponseBody, ApiError> {
    if !response.is_json() {
        return Ok(ResponseBody::Text(response.body));
    }
    if response.body.trim().is_empty() {
        return Ok(ResponseBody::Json(serde_json::Value::Null));
    }
    serde_json::from_str(&response.body).map(ResponseBody::Json).map_err(|e| {
        log::warn!("response declared JSON but did not parse: {e}");
        ApiError::Network
    })
}

fn decode_as<T: DeserializeOwned>(body: ResponseBody) -> Result<T, ApiError> {
    let decoded = match body {
        ResponseBody::Json(value) => serde_json::from_value(value),
        ResponseBody::Text(text) => serde_json::from_str(&text),
    };
    decoded.map_err(|e| {
        log::warn!("response body has unexpected shape: {e}");
        ApiError::Network
    })
}

/// Best displayable message for a failed response.
pub(crate) fn error_message(response: &HttpResponse) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(&response.body) {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            if !message.is_empty() {
                return message.to_owned();
            }
        }
    } else if let Some(fragment) = scrape_html_message(&response.body) {
        return fragment;
    }
    status_fallback(response.status)
}

fn scrape_html_message(text: &str) -> Option<String> {
    [&*TITLE_RE, &*H1_RE].into_iter().find_map(|re| {
        re.captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
    })
}

pub(crate) fn status_fallback(status: u16) -> String {
    format!("HTTP error! status: {status}")
}
