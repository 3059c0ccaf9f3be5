//! lumina - LuminaLib book catalog client
//!
//! This library talks to the LuminaLib catalog and authentication API.
//! Requests go through a single [`ApiClient`], which attaches the stored
//! bearer token and forgets it when the server rejects it. The [`Session`]
//! owns the login/logout lifecycle on top of that client.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use lumina::{ApiClient, ApiUrl, Credentials, FileTokenStore, Session};
//!
//! # async fn example() -> Result<(), lumina::Error> {
//! let base = ApiUrl::from_env()?;
//! let store = Arc::new(FileTokenStore::new("/tmp/lumina/token"));
//! let client = ApiClient::new(base, store)?;
//!
//! let session = Session::restore(client);
//! session
//!     .login(Credentials::new("alice@example.com", "hunter2"))
//!     .await?;
//!
//! let page = lumina::books::list_books(session.client(), Some(1)).await?;
//! for book in page.items {
//!     println!("{}", book.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod account;
pub mod auth;
pub mod books;
pub mod config;
pub mod error;
pub mod http;
pub mod storage;
pub mod types;

// Re-export primary types at crate root for convenience
pub use account::{NewAccount, Profile, ProfileUpdate};
pub use auth::{AccessToken, Credentials, Session};
pub use books::{Book, BookPage};
pub use config::ApiConfig;
pub use error::Error;
pub use http::ApiClient;
pub use storage::{FileTokenStore, MemoryTokenStore, TokenStore};
pub use types::ApiUrl;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
