//! Durable token storage.
//!
//! The store holds at most one raw bearer token. [`ApiClient`](crate::ApiClient)
//! reads it before every request and [`Session`](crate::Session) writes it on
//! login and removes it on logout.

mod file;

use std::sync::{Mutex, PoisonError};

pub use file::FileTokenStore;

use crate::Result;
use crate::auth::AccessToken;

/// A persistent slot for the current bearer token.
pub trait TokenStore: Send + Sync {
    /// Returns the stored token, if any.
    fn load(&self) -> Result<Option<AccessToken>>;

    /// Replaces the stored token.
    fn save(&self, token: &AccessToken) -> Result<()>;

    /// Removes the stored token. Removing an absent token is not an error.
    fn clear(&self) -> Result<()>;
}

/// In-process token store that does not survive a restart.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<AccessToken>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `token`.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(AccessToken::new(token))),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<AccessToken>> {
        Ok(self
            .token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&self, token: &AccessToken) -> Result<()> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}
