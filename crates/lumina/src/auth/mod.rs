//! Authentication types and session management.
//!
//! A [`Session`] is the single source of truth for whether a credential is
//! held and what it is.

mod credentials;
mod session;
mod tokens;

pub use credentials::Credentials;
pub use session::Session;
pub use tokens::AccessToken;
