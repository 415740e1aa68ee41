//! Typed bug endpoints, all routed through the authenticated request wrapper.
//!
//! Creating and editing bugs goes through multipart uploads owned by the
//! backend form flow; this module covers reads and deletes.

#[cfg(test)]
#[path = "bugs_test.rs"]
mod bugs_test;

use super::request::ApiClient;
use super::types::{AttachmentKind, Bug, BugListing, SortDirection};
use crate::error::ApiError;

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_SORT_BY: &str = "createdDate";

/// Status filter value meaning "no filter".
pub const ALL_STATUSES: &str = "all";

/// Lifecycle statuses the backend assigns, in workflow order.
pub const BUG_STATUSES: [&str; 7] =
    ["OPEN", "ASSIGNED", "IN_PROGRESS", "FIXED", "AWAITING_TESTING", "PASSED", "FAILED"];

/// Query for `GET /bugs`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BugQuery {
    /// Zero-based page index.
    pub page: u32,
    pub size: u32,
    pub sort_by: String,
    pub direction: SortDirection,
    /// When set (and not `all`), the backend returns an unpaginated list.
    pub status: Option<String>,
}

impl Default for BugQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort_by: DEFAULT_SORT_BY.to_owned(),
            direction: SortDirection::default(),
            status: None,
        }
    }
}

impl BugQuery {
    #[must_use]
    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_owned());
        self
    }

    /// Active status filter, ignoring blanks and `all`.
    pub fn status_filter(&self) -> Option<&str> {
        self.status
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case(ALL_STATUSES))
    }

    pub fn to_path(&self) -> String {
        if let Some(status) = self.status_filter() {
            return format!("/bugs?status={}", urlencoding::encode(status));
        }
        format!(
            "/bugs?page={}&size={}&sortBy={}&direction={}",
            self.page,
            self.size.max(1),
            urlencoding::encode(&self.sort_by),
            self.direction.as_str()
        )
    }
}

#[derive(Clone)]
pub struct BugsApi {
    api: ApiClient,
}

impl BugsApi {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// # Errors
    ///
    /// Propagates [`ApiError`] from the request wrapper.
    pub async fn list_bugs(&self, query: &BugQuery) -> Result<BugListing, ApiError> {
        self.api.get_json(&query.to_path()).await
    }

    /// # Errors
    ///
    /// Propagates [`ApiError`] from the request wrapper.
    pub async fn bugs_by_status(&self, status: &str) -> Result<Vec<Bug>, ApiError> {
        self.api.get_json(&format!("/bugs/status/{}", urlencoding::encode(status))).await
    }

    /// # Errors
    ///
    /// Propagates [`ApiError`] from the request wrapper.
    pub async fn get_bug(&self, id: i64) -> Result<Bug, ApiError> {
        self.api.get_json(&format!("/bugs/{id}")).await
    }

    /// # Errors
    ///
    /// Propagates [`ApiError`] from the request wrapper.
    pub async fn delete_bug(&self, id: i64) -> Result<(), ApiError> {
        self.api.delete(&format!("/bugs/{id}")).await
    }

    /// # Errors
    ///
    /// Propagates [`ApiError`] from the request wrapper.
    pub async fn delete_attachment(&self, id: i64, filename: &str, kind: AttachmentKind) -> Result<(), ApiError> {
        let path = format!("/bugs/{id}/attachments/{}?type={}", urlencoding::encode(filename), kind.as_str());
        self.api.delete(&path).await
    }
}
