//! HTTP header constants.
//!
//! Header names and values attached to every outgoing request so the chat
//! site treats the client like a navigating browser.

/// Accept header value sent with every request
pub const ACCEPT_VALUE: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,text/plain;q=0.8,*/*;q=0.7";

/// Accept-Language header value sent with every request
pub const ACCEPT_LANGUAGE_VALUE: &str = "en-US,en;q=0.9";

/// Name of the response header carrying a redirect target
pub const HEADER_LOCATION: &str = "Location";

/// Name of the response header carrying server-issued cookies
pub const HEADER_SET_COOKIE: &str = "Set-Cookie";

