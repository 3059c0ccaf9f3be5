//! Error types for the lumina library.
//!
//! This module provides a unified error type with explicit variants for
//! transport, authentication, API rejection, storage, and input validation
//! errors.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The unified error type for lumina operations.
///
/// Callers can match on the variant to tell a dead network apart from a
/// rejected credential or a server-side validation failure.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout, undecodable body).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Authentication errors raised by the session itself.
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Non-success response from the API.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Input validation errors (base URL, header values).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// Durable token storage errors.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl Error {
    /// Returns true if the server answered 401.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Api(e) if e.is_unauthorized())
    }

    /// The server-supplied message for this failure, if there is one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Error::Api(e) => e.detail.as_deref(),
            Error::Auth(AuthError::LoginFailed { message }) => Some(message),
            _ => None,
        }
    }

    /// A message suitable for showing to a person: the server detail when
    /// present, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Response body could not be decoded.
    #[error("invalid response body: {message}")]
    Decode { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else if err.is_decode() {
            TransportError::Decode {
                message: err.to_string(),
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(TransportError::from(err))
    }
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The login exchange did not produce a token.
    #[error("{message}")]
    LoginFailed { message: String },

    /// An operation needed a token and none is held.
    #[error("not logged in")]
    NotAuthenticated,
}

/// A non-success response from the API.
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// `detail` message from the server, if any.
    pub detail: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref detail) = self.detail {
            write!(f, ": {}", detail)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: u16, detail: Option<String>) -> Self {
        Self { status, detail }
    }

    /// The credential was missing, expired or rejected.
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    /// Validation or business rejection (4xx).
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    /// Unexpected server failure (5xx).
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Value cannot be sent as an HTTP header.
    #[error("invalid header value for '{name}'")]
    Header { name: String },
}

/// Durable token storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read token from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write token to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to remove token at {}: {source}", path.display())]
    Remove {
        path: PathBuf,
        source: std::io::Error,
    },
}
