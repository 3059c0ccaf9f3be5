//! API HTTP client implementation.

use std::sync::{Arc, PoisonError, RwLock};

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, info, instrument, trace, warn};

use super::endpoints::ErrorBody;
use crate::auth::AccessToken;
use crate::config::ApiConfig;
use crate::error::{ApiError, Error, InvalidInputError};
use crate::storage::TokenStore;
use crate::types::ApiUrl;

/// How a request relates to the stored credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Auth {
    /// Attach the stored token and forget it on 401.
    Bearer,
    /// Credentials exchange: no token attached, 401 leaves the store alone.
    Anonymous,
}

/// HTTP client for the LuminaLib API.
///
/// Cheap to clone; clones share the connection pool, the default headers and
/// the token store.
///
/// Every request re-reads the token store, so a login or logout is visible
/// on the very next call. A 401 removes the stored token and the failure is
/// still returned to the caller.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    client: reqwest::Client,
    base: ApiUrl,
    store: Arc<dyn TokenStore>,
    default_headers: RwLock<HeaderMap>,
}

impl ApiClient {
    /// Create a client for `base` backed by `store`.
    pub fn new(base: ApiUrl, store: Arc<dyn TokenStore>) -> Result<Self, Error> {
        Self::from_config(ApiConfig::new(base), store)
    }

    pub fn from_config(config: ApiConfig, store: Arc<dyn TokenStore>) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                client,
                base: config.api_url,
                store,
                default_headers: RwLock::new(HeaderMap::new()),
            }),
        })
    }

    /// Returns the base URL this client is configured for.
    pub fn base_url(&self) -> &ApiUrl {
        &self.inner.base
    }

    /// Returns the durable token store shared with the session.
    pub fn store(&self) -> &Arc<dyn TokenStore> {
        &self.inner.store
    }

    /// Add a header sent with every subsequent request.
    pub fn set_default_header(&self, name: HeaderName, value: &str) -> Result<(), Error> {
        let value = HeaderValue::from_str(value).map_err(|_| InvalidInputError::Header {
            name: name.to_string(),
        })?;
        self.inner
            .default_headers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name, value);
        Ok(())
    }

    /// Stop sending a default header. Returns whether one was set.
    pub fn remove_default_header(&self, name: &HeaderName) -> bool {
        self.inner
            .default_headers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name)
            .is_some()
    }

    /// The token currently in durable storage.
    ///
    /// An unreadable store counts as "no token".
    pub fn stored_token(&self) -> Option<AccessToken> {
        match self.inner.store.load() {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "Failed to read stored token");
                None
            }
        }
    }

    /// Make a GET request with query parameters.
    #[instrument(skip(self, query), fields(api = %self.inner.base))]
    pub async fn get<Q, R>(&self, path: &str, query: &Q) -> Result<R, Error>
    where
        Q: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!(path, "GET");
        let request = self.request(Method::GET, path).query(query);
        self.send(request, Auth::Bearer).await
    }

    /// Make a POST request with a JSON body.
    #[instrument(skip(self, body), fields(api = %self.inner.base))]
    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, Error>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!(path, "POST");
        let request = self.request(Method::POST, path).json(body);
        self.send(request, Auth::Bearer).await
    }

    /// Make a PUT request with a JSON body.
    #[instrument(skip(self, body), fields(api = %self.inner.base))]
    pub async fn put<B, R>(&self, path: &str, body: &B) -> Result<R, Error>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!(path, "PUT");
        let request = self.request(Method::PUT, path).json(body);
        self.send(request, Auth::Bearer).await
    }

    /// Make a POST request with an `application/x-www-form-urlencoded` body.
    ///
    /// Used for the login exchange, whose endpoint does not accept JSON. No
    /// bearer token is attached and a 401 does not touch the token store.
    #[instrument(skip(self, form), fields(api = %self.inner.base))]
    pub async fn post_form<F, R>(&self, path: &str, form: &F) -> Result<R, Error>
    where
        F: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!(path, "POST (form)");
        let request = self.request(Method::POST, path).form(form);
        self.send(request, Auth::Anonymous).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.inner.base.endpoint(path);
        self.inner.client.request(method, url)
    }

    /// Build the header set for one request: defaults first, then the stored
    /// bearer token, which replaces any default `Authorization`.
    fn headers_for(&self, auth: Auth) -> Result<HeaderMap, Error> {
        let mut headers = self
            .inner
            .default_headers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        if auth == Auth::Bearer
            && let Some(token) = self.stored_token()
        {
            let mut value =
                HeaderValue::from_str(&token.bearer()).map_err(|_| InvalidInputError::Header {
                    name: AUTHORIZATION.to_string(),
                })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }

    async fn send<R: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        auth: Auth,
    ) -> Result<R, Error> {
        let headers = self.headers_for(auth)?;
        let response = request.headers(headers).send().await?;

        let status = response.status();
        trace!(status = %status, "API response");

        if status.is_success() {
            let body = response.json::<R>().await?;
            return Ok(body);
        }

        if status == StatusCode::UNAUTHORIZED && auth == Auth::Bearer {
            self.forget_token();
        }

        Err(Error::Api(Self::parse_error_response(response).await))
    }

    /// Drop the stored token after the server rejected it.
    fn forget_token(&self) {
        info!("Server rejected credential, clearing stored token");
        if let Err(e) = self.inner.store.clear() {
            warn!(error = %e, "Failed to clear stored token");
        }
    }

    async fn parse_error_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();

        match response.json::<ErrorBody>().await {
            Ok(body) => ApiError::new(status, body.message()),
            Err(_) => ApiError::new(status, None),
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base", &self.inner.base)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryTokenStore;

    fn client(store: MemoryTokenStore) -> ApiClient {
        let base = ApiUrl::new("http://localhost:8000").unwrap();
        ApiClient::new(base, Arc::new(store)).unwrap()
    }

    #[test]
    fn client_creation() {
        let api = client(MemoryTokenStore::new());
        assert_eq!(api.base_url().as_str(), "http://localhost:8000/");
    }

    #[test]
    fn bearer_header_reads_store_each_time() {
        let api = client(MemoryTokenStore::new());
        assert!(!api.headers_for(Auth::Bearer).unwrap().contains_key(AUTHORIZATION));

        api.store().save(&AccessToken::new("t1")).unwrap();
        let headers = api.headers_for(Auth::Bearer).unwrap();
        assert_eq!(headers[AUTHORIZATION], "Bearer t1");

        api.store().clear().unwrap();
        assert!(!api.headers_for(Auth::Bearer).unwrap().contains_key(AUTHORIZATION));
    }

    #[test]
    fn anonymous_requests_skip_token() {
        let api = client(MemoryTokenStore::with_token("t1"));
        assert!(!api.headers_for(Auth::Anonymous).unwrap().contains_key(AUTHORIZATION));
    }

    #[test]
    fn stored_token_overrides_default_authorization() {
        let api = client(MemoryTokenStore::with_token("fresh"));
        api.set_default_header(AUTHORIZATION, "Bearer stale").unwrap();

        let headers = api.headers_for(Auth::Bearer).unwrap();
        assert_eq!(headers.get_all(AUTHORIZATION).iter().count(), 1);
        assert_eq!(headers[AUTHORIZATION], "Bearer fresh");
    }

    #[test]
    fn default_headers_can_be_removed() {
        let api = client(MemoryTokenStore::new());
        api.set_default_header(AUTHORIZATION, "Bearer x").unwrap();
        assert_eq!(api.headers_for(Auth::Bearer).unwrap()[AUTHORIZATION], "Bearer x");

        assert!(api.remove_default_header(&AUTHORIZATION));
        assert!(!api.headers_for(Auth::Bearer).unwrap().contains_key(AUTHORIZATION));
        assert!(!api.remove_default_header(&AUTHORIZATION));
    }

    #[test]
    fn invalid_default_header_value_is_rejected() {
        let api = client(MemoryTokenStore::new());
        let result = api.set_default_header(AUTHORIZATION, "bad\nvalue");
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn debug_does_not_leak_token() {
        let api = client(MemoryTokenStore::with_token("secret-token"));
        let debug = format!("{:?}", api);
        assert!(!debug.contains("secret-token"));
    }
}
