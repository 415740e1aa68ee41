//! Scripted backend and recording navigator shared by unit tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;

use crate::config::ClientConfig;
use crate::net::transport::{HttpRequest, HttpResponse, Transport, TransportError};
use crate::net::types::{Role, User, UserId};
use crate::state::session::SessionStore;
use crate::util::navigate::Navigator;
use crate::util::storage::MemoryStorage;

/// Replays queued responses in order and records every request.
#[derive(Clone, Default)]
pub struct MockTransport {
    responses: Rc<RefCell<VecDeque<Result<HttpResponse, TransportError>>>>,
    requests: Rc<RefCell<Vec<HttpRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_json(&self, status: u16, body: serde_json::Value) {
        self.push(status, Some("application/json"), &body.to_string());
    }

    pub fn push(&self, status: u16, content_type: Option<&str>, body: &str) {
        self.responses.borrow_mut().push_back(Ok(HttpResponse {
            status,
            content_type: content_type.map(str::to_owned),
            body: body.to_owned(),
        }));
    }

    pub fn push_failure(&self) {
        self.responses
            .borrow_mut()
            .push_back(Err(TransportError("connection refused".to_owned())));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests.borrow().last().cloned().expect("no request sent")
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no scripted response".to_owned())))
    }
}

/// Counts forced login redirects.
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    redirects: Rc<Cell<usize>>,
}

impl RecordingNavigator {
    pub fn redirects(&self) -> usize {
        self.redirects.get()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect_to_login(&self) {
        self.redirects.set(self.redirects.get() + 1);
    }
}

pub fn config() -> ClientConfig {
    ClientConfig::with_base_url("http://api.test").expect("valid test url")
}

pub fn session_over(storage: &MemoryStorage) -> SessionStore {
    let store = SessionStore::new(Rc::new(storage.clone()), &config());
    store.initialize();
    store
}

pub fn dummy_user(role: Role) -> User {
    User {
        id: Some(UserId::Number(42)),
        email: "a@x.com".to_owned(),
        first_name: Some("Ada".to_owned()),
        last_name: Some("Lovelace".to_owned()),
        role: Some(role),
        created_at: "2024-01-01T00:00:00Z".to_owned(),
    }
}
