//! chat_history library: browser-style session plumbing and message history
//! reconstruction for a web chat site.
//!
//! This library issues authenticated requests with domain-scoped cookie
//! propagation, follows redirects by hand while keeping the session's
//! cookies, and rebuilds a message's edit history and star/pin metadata from
//! the server-rendered history page.
//!
//! # Example
//!
//! ```no_run
//! use chat_history::{message_exists, Config, CookieJar, CookieRecord, HttpClient, Message};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpClient::new(&Config::default())?;
//! let mut jar = CookieJar::from_records(vec![CookieRecord::new(
//!     "acct",
//!     "t=...",
//!     ".stackexchange.com",
//! )]);
//!
//! if message_exists(&client, "chat.stackexchange.com", 12345, Some(&mut jar)) {
//!     let message = Message::fetch(&client, "chat.stackexchange.com", 12345, Some(&mut jar))?;
//!     println!("{} (by {}, {} stars)", message, message.author_name(), message.stars());
//!     for revision in message.revisions() {
//!         println!("  {} {}: {}", revision.timestamp, revision.author_name, revision.text);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Threading
//!
//! Everything is blocking and runs on the caller's thread. Every send may
//! update the `CookieJar`, which has no internal locking: keep one jar per
//! session owner, or guard it with a single-writer lock.

#![warn(missing_docs)]

pub mod config;
mod cookies;
mod error_handling;
mod http;
pub mod initialization;
mod message;
mod utils;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, UrlScheme};
pub use cookies::{CookieJar, CookieRecord};
pub use error_handling::{ChatError, ConfigValidationError, ErrorKind, InitializationError};
pub use http::{redirect_target, HttpClient, Request, Response};
pub use message::{
    extract_star_pin, fetch_message_text, fetch_text_with_status, message_exists,
    message_history_url, message_text_url, parse_history, user_id_from_profile_href, Message,
    Revision, StarPin, TextFetch,
};
