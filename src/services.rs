//! Dependency-injected service bundle shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionStore` handle is shared by the auth gateway (writer), the
//! request wrapper (reader, and writer on 401), and the UI (reader). The
//! bundle holds `Rc`s, so it lives in a local `StoredValue`.

#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

use std::rc::Rc;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::auth::AuthGateway;
use crate::net::bugs::BugsApi;
use crate::net::request::ApiClient;
use crate::net::transport::{self, Transport};
use crate::state::auth::AuthState;
use crate::state::session::SessionStore;
use crate::util::navigate::{BrowserNavigator, Navigator};
use crate::util::storage::{self, SessionStorage};

/// Copyable context handle for [`Services`].
pub type ServicesHandle = StoredValue<Services, LocalStorage>;

#[derive(Clone)]
pub struct Services {
    pub config: Rc<ClientConfig>,
    pub session: SessionStore,
    pub auth: AuthGateway,
    pub api: ApiClient,
    pub bugs: BugsApi,
}

impl Services {
    pub fn new(
        config: ClientConfig,
        storage: Rc<dyn SessionStorage>,
        transport: Rc<dyn Transport>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        let session = SessionStore::new(storage, &config);
        let auth = AuthGateway::new(&config, session.clone(), transport.clone(), navigator.clone());
        let api = ApiClient::new(&config, session.clone(), transport, navigator);
        let bugs = BugsApi::new(api.clone());
        Self { config: Rc::new(config), session, auth, api, bugs }
    }

    /// Services wired to whatever the current build can reach.
    pub fn for_browser() -> Self {
        Self::new(
            ClientConfig::from_env(),
            storage::default_storage(),
            transport::default_transport(),
            Rc::new(BrowserNavigator),
        )
    }
}

/// Provide `services` and a reactive mirror of its session to the tree.
///
/// The returned signal follows every session-store mutation.
pub fn provide_services(services: Services) -> RwSignal<AuthState> {
    let auth = RwSignal::new(services.session.snapshot());
    services.session.on_change(move |state| auth.set(state.clone()));
    provide_context(auth);
    provide_context::<ServicesHandle>(StoredValue::new_local(services));
    auth
}

pub fn use_services() -> ServicesHandle {
    expect_context::<ServicesHandle>()
}
