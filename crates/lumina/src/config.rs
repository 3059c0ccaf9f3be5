//! Client configuration.

use crate::Result;
use crate::types::ApiUrl;

/// Environment variable holding the API base address.
pub const API_URL_ENV: &str = "LUMINA_API_URL";

/// Base address used when [`API_URL_ENV`] is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("lumina/", env!("CARGO_PKG_VERSION"));

/// Settings for building an [`ApiClient`](crate::ApiClient).
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_url: ApiUrl,
    pub user_agent: String,
}

impl ApiConfig {
    pub fn new(api_url: ApiUrl) -> Self {
        Self {
            api_url,
            user_agent: USER_AGENT.to_string(),
        }
    }

    /// Configuration taken from the process environment.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(ApiUrl::from_env()?))
    }

    /// Configuration for an explicit base address setting; absent or blank
    /// means [`DEFAULT_API_URL`].
    pub fn from_setting(value: Option<&str>) -> Result<Self> {
        Ok(Self::new(ApiUrl::from_setting(value)?))
    }
}
