//! Session management for the LuminaLib API.

use reqwest::header::AUTHORIZATION;
use tracing::{debug, info, instrument, warn};

use crate::account::{self, NewAccount, Profile};
use crate::error::{AuthError, Error, TransportError};
use crate::http::ApiClient;
use crate::http::endpoints::{LOGIN, LoginForm, LoginResponse};

use super::credentials::Credentials;
use super::tokens::AccessToken;

/// Message used when a failed login carries no server detail.
const LOGIN_FAILED: &str = "login failed";

/// The single source of truth for "is there a credential, and what is it".
///
/// The session keeps no copy of the token. Every accessor reads the
/// client's [`TokenStore`](crate::TokenStore), the same store the client
/// consults per request and clears on a 401, so the session can never
/// report a token the client has already dropped.
///
/// Sessions are cheap to clone; clones share the client and its store.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use lumina::{ApiClient, ApiUrl, Credentials, MemoryTokenStore, Session};
///
/// # async fn example() -> Result<(), lumina::Error> {
/// let client = ApiClient::new(ApiUrl::from_env()?, Arc::new(MemoryTokenStore::new()))?;
/// let session = Session::restore(client);
/// session.login(Credentials::new("alice@example.com", "hunter2")).await?;
/// assert!(session.is_authenticated());
///
/// session.logout();
/// assert!(!session.is_authenticated());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Session {
    client: ApiClient,
}

impl Session {
    /// Build a session on top of whatever token durable storage holds.
    ///
    /// No request is made. A restored token is trusted until the server
    /// rejects it.
    pub fn restore(client: ApiClient) -> Self {
        debug!(
            restored = client.stored_token().is_some(),
            "Session initialized"
        );
        Self { client }
    }

    /// Exchange credentials for a token and keep it.
    ///
    /// The credentials are sent form-encoded. On success the token is written
    /// to durable storage, so the next request through the client already
    /// carries it.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::LoginFailed`] for a non-success response or an
    /// unreadable body, carrying the server's `detail` when it sent one. A
    /// blank `access_token` counts as unreadable. Transport and storage
    /// failures are returned as such.
    #[instrument(skip(self, credentials), fields(email = %credentials.email()))]
    pub async fn login(&self, credentials: Credentials) -> Result<(), Error> {
        info!("Logging in");

        let form = LoginForm {
            username: credentials.email(),
            password: credentials.password(),
        };

        let response: LoginResponse = self
            .client
            .post_form(LOGIN, &form)
            .await
            .map_err(login_error)?;

        debug!(token_type = ?response.token_type, "Login accepted");

        if response.access_token.trim().is_empty() {
            warn!("Login response carried an empty access token");
            return Err(AuthError::LoginFailed {
                message: LOGIN_FAILED.to_string(),
            }
            .into());
        }

        self.client
            .store()
            .save(&AccessToken::new(response.access_token))?;

        info!("Logged in");
        Ok(())
    }

    /// Create an account and log straight into it.
    #[instrument(skip(self, account), fields(email = %account.email))]
    pub async fn signup_and_login(&self, account: &NewAccount) -> Result<Profile, Error> {
        let profile = account::signup(&self.client, account).await?;
        self.login(Credentials::new(&account.email, &account.password))
            .await?;
        Ok(profile)
    }

    /// Forget the credential everywhere.
    ///
    /// Removes the token from durable storage and drops any default
    /// `Authorization` header on the client. Storage failures are logged,
    /// never returned.
    pub fn logout(&self) {
        if let Err(e) = self.client.store().clear() {
            warn!(error = %e, "Failed to remove stored token");
        }

        self.client.remove_default_header(&AUTHORIZATION);
        info!("Logged out");
    }

    /// The token currently held, if any.
    pub fn token(&self) -> Option<AccessToken> {
        self.client.stored_token()
    }

    /// Whether a token is held. Says nothing about whether the server still
    /// accepts it.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// The held token, or [`AuthError::NotAuthenticated`].
    pub fn require_token(&self) -> Result<AccessToken, AuthError> {
        self.token().ok_or(AuthError::NotAuthenticated)
    }

    /// The HTTP client this session drives.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

/// Map a failed login exchange onto the error the caller sees.
fn login_error(err: Error) -> Error {
    match err {
        Error::Api(api) => AuthError::LoginFailed {
            message: api.detail.unwrap_or_else(|| LOGIN_FAILED.to_string()),
        }
        .into(),
        Error::Transport(TransportError::Decode { .. }) => AuthError::LoginFailed {
            message: LOGIN_FAILED.to_string(),
        }
        .into(),
        other => other,
    }
}

// Custom Debug impl that hides sensitive data
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("client", &self.client)
            .field("authenticated", &self.is_authenticated())
            .field("token", &"[REDACTED]")
            .finish()
    }
}
