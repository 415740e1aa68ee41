//! Forced navigation used when a backend call reveals an expired session.
//!
//! Ordinary navigation goes through the router; this is the full-page
//! redirect the request wrapper performs on a 401, outside any component.

use crate::routes::AppRoute;

pub trait Navigator {
    /// Send the browser to the login view.
    fn redirect_to_login(&self);
}

/// Redirects via `window.location`; a no-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect_to_login(&self) {
        #[cfg(feature = "csr")]
        {
            let Some(window) = web_sys::window() else {
                log::warn!("no window; cannot redirect to {}", AppRoute::Login.path());
                return;
            };
            if window.location().set_href(AppRoute::Login.path()).is_err() {
                log::warn!("redirect to {} failed", AppRoute::Login.path());
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("redirect to {} skipped outside the browser", AppRoute::Login.path());
        }
    }
}
