//! Configuration constants.
//!
//! This module defines the constants used throughout the crate, including
//! endpoint templates, redirect limits and request defaults.

use reqwest::Method;

// Redirect handling
/// Maximum number of redirect hops to follow
/// Prevents infinite redirect loops and excessive request chains
pub const MAX_REDIRECT_HOPS: usize = 10;

/// HTTP status codes treated as redirects.
///
/// Every one of them is followed as a `GET`, the way browsers handle a
/// redirect after a form `POST`.
pub const REDIRECT_STATUS_CODES: [u16; 5] = [301, 302, 303, 307, 308];

/// Verbs the request executor is willing to send.
pub const SUPPORTED_METHODS: [Method; 2] = [Method::GET, Method::POST];

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for HTTP requests.
///
/// The chat site serves reduced markup to clients it does not recognise as
/// browsers, so a desktop Chrome string is used unless overridden.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Endpoint paths (host is prepended with the configured scheme)
/// Path of the plain-text rendering of a message.
pub const MESSAGE_TEXT_PATH: &str = "/message/{id}?plain=true";
/// Path of the revision history page of a message.
pub const MESSAGE_HISTORY_PATH: &str = "/messages/{id}/history";

/// Maximum HTML preview length in characters for debugging (500 chars)
/// Used when logging a history page that yielded no revisions
pub const MAX_HTML_PREVIEW_CHARS: usize = 500;

// HTTP status codes (for clarity and consistency)
/// The only status that counts as a successful message fetch.
pub const HTTP_STATUS_OK: u16 = 200;

// Environment variables read by `Config::from_env`
/// Overrides the User-Agent header.
pub const ENV_USER_AGENT: &str = "CHAT_USER_AGENT";
/// Overrides the per-request timeout.
pub const ENV_TIMEOUT_SECONDS: &str = "CHAT_TIMEOUT_SECONDS";
/// Overrides the redirect hop bound.
pub const ENV_MAX_REDIRECT_HOPS: &str = "CHAT_MAX_REDIRECT_HOPS";
/// Overrides the scheme used to build endpoint URLs.
pub const ENV_SCHEME: &str = "CHAT_SCHEME";
/// Overrides the log level.
pub const ENV_LOG_LEVEL: &str = "CHAT_LOG_LEVEL";
/// Overrides the log format.
pub const ENV_LOG_FORMAT: &str = "CHAT_LOG_FORMAT";
