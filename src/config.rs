//! Client configuration resolved at build time.
//!
//! The browser has no process environment, so the backend URL is baked in
//! from `BUGTRACKER_API_BASE_URL` when the WASM bundle is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TOKEN_KEY: &str = "token";
pub const DEFAULT_USER_KEY: &str = "userData";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin without a trailing slash.
    pub api_base_url: String,
    /// Durable-storage key holding the bearer token.
    pub token_key: String,
    /// Durable-storage key holding the serialized user record.
    pub user_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            token_key: DEFAULT_TOKEN_KEY.to_owned(),
            user_key: DEFAULT_USER_KEY.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Build config from compile-time environment variables.
    ///
    /// Optional:
    /// - `BUGTRACKER_API_BASE_URL`: backend origin (default `http://localhost:8080`)
    ///
    /// An invalid value is logged and replaced by the default.
    pub fn from_env() -> Self {
        match option_env!("BUGTRACKER_API_BASE_URL") {
            Some(raw) => Self::with_base_url(raw).unwrap_or_else(|e| {
                log::warn!("ignoring BUGTRACKER_API_BASE_URL: {e}");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Build config pointing at `raw` with default storage keys.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the URL is blank or not http(s).
    pub fn with_base_url(raw: &str) -> Result<Self, ConfigError> {
        Ok(Self { api_base_url: normalize_base_url(raw)?, ..Self::default() })
    }

    /// Absolute URL for a backend-relative `path`.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.api_base_url)
        } else {
            format!("{}/{path}", self.api_base_url)
        }
    }

    /// Public URL of an uploaded attachment stored under `filename`.
    pub fn upload_url(&self, filename: &str) -> String {
        self.url(&format!("/uploads/{}", urlencoding::encode(filename)))
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyBaseUrl);
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidScheme(trimmed.to_owned()));
    }
    Ok(trimmed.to_owned())
}
