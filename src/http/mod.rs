//! Browser-style HTTP session plumbing.
//!
//! This module provides:
//! - `Request`: a single-use request with an optional borrowed cookie jar
//! - `Response`: status, ordered headers, body and issued cookies
//! - `HttpClient`: sends requests, propagates cookies, resolves redirects
//! - `redirect_target`: the `Location` resolution rule used for each hop

mod executor;
mod redirects;
mod request;
mod response;

// Re-export public API
pub use executor::HttpClient;
pub use redirects::redirect_target;
pub use request::Request;
pub use response::Response;

#[cfg(test)]
mod tests;
