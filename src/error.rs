//! Error taxonomy for backend calls and client configuration.
//!
//! ERROR HANDLING
//! ==============
//! `ApiError` displays as the exact message a view should show, so callers
//! can render `err.to_string()` directly in a notification.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Message shown for any transport or response-decoding failure.
pub const NETWORK_ERROR: &str = "Network error";

/// Failures produced by the authenticated request wrapper.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered 401; the session has been cleared.
    #[error("Authentication failed")]
    Unauthorized,

    /// Any other non-success status, with the best message we could extract.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The request never completed or its body could not be decoded.
    #[error("Network error")]
    Network,
}

impl ApiError {
    /// HTTP status carried by the error, when there was a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Status { status, .. } => Some(*status),
            Self::Network => None,
        }
    }
}

/// Rejected client configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("api base url is empty")]
    EmptyBaseUrl,

    #[error("api base url must start with http:// or https://: {0}")]
    InvalidScheme(String),
}
