//! HTTP client wrapper for the LuminaLib API.
//!
//! All traffic goes through [`ApiClient`], which owns the base address, the
//! default headers and the bearer-token interception.

mod client;
pub(crate) mod endpoints;

pub use client::ApiClient;
