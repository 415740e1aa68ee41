//! Blocking browser confirmation prompt for destructive actions.

/// Ask the user to confirm `message`. Always `false` outside the browser.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.confirm_with_message(message).ok()).unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        log::debug!("confirm skipped outside the browser: {message}");
        false
    }
}
