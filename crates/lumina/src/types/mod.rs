//! Validated value types.
//!
//! These types check their invariants at construction time, so code that
//! holds one never has to re-validate it.

mod api_url;

pub use api_url::ApiUrl;
