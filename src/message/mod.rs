//! Chat message retrieval and history reconstruction.
//!
//! This module provides:
//! - Existence checks and plain-text fetches for a message id
//! - Revision history parsing from the server-rendered history page
//! - Star count and pinning-user extraction
//! - The immutable `Message` aggregate built from all of the above

mod fetch;
mod history;
mod model;
mod profile;
mod stars;

// Re-export public API
pub use fetch::{
    fetch_message_text, fetch_text_with_status, message_exists, message_history_url,
    message_text_url, TextFetch,
};
pub use history::{parse_history, Revision};
pub use model::Message;
pub use profile::user_id_from_profile_href;
pub use stars::{extract_star_pin, StarPin};
