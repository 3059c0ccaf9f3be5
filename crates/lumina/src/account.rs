//! Account signup and profile operations.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::Result;
use crate::http::ApiClient;
use crate::http::endpoints::{ME, SIGNUP};

/// A user's profile as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Signup request body.
#[derive(Clone, Serialize)]
pub struct NewAccount {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

impl NewAccount {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        full_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            full_name: full_name.into(),
        }
    }
}

// Intentionally hide password in Debug output
impl fmt::Debug for NewAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewAccount")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("full_name", &self.full_name)
            .finish()
    }
}

/// Partial profile update. Only the full name can be changed.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileUpdate {
    pub full_name: String,
}

impl ProfileUpdate {
    pub fn full_name(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
        }
    }
}

/// Register a new account.
#[instrument(skip(client, account), fields(email = %account.email))]
pub async fn signup(client: &ApiClient, account: &NewAccount) -> Result<Profile> {
    debug!("Creating account");
    client.post(SIGNUP, account).await
}

/// Fetch the profile of the logged-in user.
#[instrument(skip(client))]
pub async fn me(client: &ApiClient) -> Result<Profile> {
    debug!("Fetching profile");
    client.get(ME, &()).await
}

/// Update the logged-in user's profile.
#[instrument(skip(client))]
pub async fn update_me(client: &ApiClient, update: &ProfileUpdate) -> Result<Profile> {
    debug!("Updating profile");
    client.put(ME, update).await
}
