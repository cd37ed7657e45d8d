//! Domain-scoped cookie storage.
//!
//! This module provides the session state carried between requests:
//! - `CookieRecord`: one captured cookie (name, value, domain)
//! - `CookieJar`: the in-memory store, filterable by host domain suffix
//! - `Set-Cookie` parsing for responses

mod parse;
mod types;

// Re-export public API
pub use types::{CookieJar, CookieRecord};
pub(crate) use parse::cookies_from_headers;
