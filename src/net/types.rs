//! Wire DTOs for the bug-tracker backend.
//!
//! DESIGN
//! ======
//! Persisted and outgoing types use the backend's camelCase names so the
//! stored `userData` record stays readable by any other client of the same
//! origin. Incoming payloads are parsed leniently: optional fields tolerate
//! `null` and absent keys because the backend owns these schemas.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// IDENTITY
// =============================================================================

/// Role a user selects when logging in or registering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[default]
    User,
    Developer,
    Tester,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::User, Role::Developer, Role::Tester];

    /// Wire value (`USER`, `DEVELOPER`, `TESTER`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Developer => "DEVELOPER",
            Self::Tester => "TESTER",
        }
    }

    /// Human-readable label for role pickers.
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Developer => "Developer",
            Self::Tester => "Tester",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USER" => Ok(Self::User),
            "DEVELOPER" => Ok(Self::Developer),
            "TESTER" => Ok(Self::Tester),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// Backend user id; numeric today, but accepted as text too.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// The logged-in user as persisted alongside the bearer token.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Unset routes to the default home view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// RFC 3339 creation timestamp.
    #[serde(default)]
    pub created_at: String,
}

impl User {
    /// "First Last", falling back to the email when no name is known.
    pub fn display_name(&self) -> String {
        let full = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if full.is_empty() { self.email.clone() } else { full }
    }

    /// Shallow-merge the fields present in `patch`.
    pub fn apply(&mut self, patch: &UserPatch) {
        if let Some(first) = &patch.first_name {
            self.first_name = Some(first.clone());
        }
        if let Some(last) = &patch.last_name {
            self.last_name = Some(last.clone());
        }
        if let Some(email) = &patch.email {
            self.email.clone_from(email);
        }
    }
}

/// Partial profile update sent to `PUT /auth/profile`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.email.is_none()
    }
}

// =============================================================================
// AUTH PAYLOADS
// =============================================================================

/// Body of `POST /auth/login`.
#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub role: Role,
}

/// Body of `POST /auth/register`. No `Debug`: it carries a password.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// User fields as the backend may return them; every field optional.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerUser {
    pub id: Option<UserId>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<String>,
    pub created_at: Option<String>,
}

/// Success body of the login/register endpoints.
///
/// Some backends return identity fields at the top level instead of under
/// `user`; both shapes are accepted.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthResponse {
    pub token: Option<String>,
    pub user: Option<ServerUser>,
    pub id: Option<UserId>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

// =============================================================================
// BUGS
// =============================================================================

/// A bug report as returned by `/bugs` endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bug {
    #[serde(default)]
    pub bug_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub reporter: Option<String>,
    /// ISO date (`YYYY-MM-DD`).
    #[serde(default)]
    pub created_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub image_urls: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub document_urls: Vec<String>,
}

/// One page of bugs, mirroring the backend's page object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BugPage {
    #[serde(deserialize_with = "deserialize_null_default")]
    pub content: Vec<Bug>,
    pub total_pages: u32,
    pub total_elements: u64,
    /// Zero-based page index.
    pub number: u32,
    pub size: u32,
}

/// Result of listing bugs: paginated, or a plain list when status-filtered.
///
/// `List` is tried first: a derived struct also accepts JSON arrays, so an
/// empty array would otherwise parse as an empty page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum BugListing {
    List(Vec<Bug>),
    Page(BugPage),
}

impl BugListing {
    pub fn bugs(&self) -> &[Bug] {
        match self {
            Self::Page(page) => &page.content,
            Self::List(list) => list,
        }
    }

    pub fn into_bugs(self) -> Vec<Bug> {
        match self {
            Self::Page(page) => page.content,
            Self::List(list) => list,
        }
    }

    /// Page count; a plain list counts as a single page.
    pub fn total_pages(&self) -> u32 {
        match self {
            Self::Page(page) => page.total_pages,
            Self::List(_) => 1,
        }
    }

    pub fn total_elements(&self) -> u64 {
        match self {
            Self::Page(page) => page.total_elements,
            Self::List(list) => list.len() as u64,
        }
    }
}

/// Sort order for paginated listings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Which attachment list a file belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttachmentKind {
    Image,
    Document,
}

impl AttachmentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Document => "document",
        }
    }
}

fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
