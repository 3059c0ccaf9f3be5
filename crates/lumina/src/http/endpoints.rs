//! Endpoint paths and wire types shared by several modules.

use serde::{Deserialize, Serialize};

// ============================================================================
// Endpoint Paths
// ============================================================================

pub const SIGNUP: &str = "/auth/signup";

pub const LOGIN: &str = "/auth/login";

/// Current user's profile (GET to read, PUT to update).
pub const ME: &str = "/auth/me";

pub const BOOKS: &str = "/books";

// ============================================================================
// Request/Response Types
// ============================================================================

/// Form body for the login endpoint.
///
/// The server expects OAuth2 password-form field names, so the email goes in
/// `username`.
#[derive(Serialize)]
pub struct LoginForm<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Response from the login endpoint.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Query string for the book listing.
#[derive(Debug, Serialize)]
pub struct BooksQuery {
    pub page: u32,
}

/// Error body returned with non-success statuses.
///
/// `detail` is either a plain message or, for request validation failures,
/// a list of `{loc, msg, type}` entries.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Flatten `detail` into a single human-readable message.
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
            serde_json::Value::Array(entries) => {
                let messages: Vec<&str> = entries
                    .iter()
                    .filter_map(|entry| entry.get("msg").and_then(|m| m.as_str()))
                    .collect();
                if messages.is_empty() {
                    None
                } else {
                    Some(messages.join("; "))
                }
            }
            _ => None,
        }
    }
}
