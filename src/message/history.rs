//! Revision history parsing.
//!
//! The history page lists one block per revision, newest first, after the
//! second `<h2>` of `#content`. Each block holds the revision source text,
//! a profile link to its author and a display timestamp. Pin and unpin events
//! appear as blocks with no source text and are skipped.

use std::sync::LazyLock;

use log::debug;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

use crate::error_handling::ChatError;
use crate::utils::{element_text, first_match, parse_selector_with_fallback};

use super::profile::user_id_from_profile_href;

// CSS selector strings
const REVISION_BLOCK_SELECTOR_STR: &str = "#content h2:nth-of-type(2) ~ div";
const MESSAGE_SOURCE_SELECTOR_STR: &str = ".message-source";
const AUTHOR_LINK_SELECTOR_STR: &str = "a";
const TIMESTAMP_SELECTOR_STR: &str = ".timestamp";

static REVISION_BLOCK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_with_fallback(REVISION_BLOCK_SELECTOR_STR, "revision blocks")
});
static MESSAGE_SOURCE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_with_fallback(MESSAGE_SOURCE_SELECTOR_STR, "revision text")
});
static AUTHOR_LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_with_fallback(AUTHOR_LINK_SELECTOR_STR, "revision author")
});
static TIMESTAMP_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_with_fallback(TIMESTAMP_SELECTOR_STR, "revision timestamp")
});

/// One historical version of a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Revision {
    /// Source text of this version
    pub text: String,
    /// Id of the user who wrote this version
    pub author_id: i64,
    /// Display name of the user who wrote this version
    pub author_name: String,
    /// Timestamp as displayed by the site (e.g. `"yst 14:02"`); not parsed
    pub timestamp: String,
}

/// Parses the history page of message `message_id` into its revisions,
/// oldest first.
///
/// # Errors
///
/// - `MalformedAuthorLink` if a revision's author link is missing or does not
///   carry a numeric user id
/// - `NoRevisions` if no block has revision text
pub fn parse_history(document: &Html, message_id: u64) -> Result<Vec<Revision>, ChatError> {
    let mut revisions = Vec::new();

    // Blocks arrive newest first; prepending leaves the oldest at index 0
    for block in document.select(&REVISION_BLOCK_SELECTOR) {
        match parse_revision_block(&block)? {
            Some(revision) => revisions.insert(0, revision),
            None => debug!("Skipping history block without text for message {message_id}"),
        }
    }

    if revisions.is_empty() {
        return Err(ChatError::NoRevisions { id: message_id });
    }
    debug!(
        "Parsed {} revision(s) for message {message_id}",
        revisions.len()
    );
    Ok(revisions)
}

/// Reads one history block. Returns `Ok(None)` for administrative blocks
/// (no revision text).
fn parse_revision_block(block: &ElementRef<'_>) -> Result<Option<Revision>, ChatError> {
    let text = first_match(block, &MESSAGE_SOURCE_SELECTOR)
        .map(|source| element_text(&source))
        .unwrap_or_default();
    if text.is_empty() {
        return Ok(None);
    }

    let author_link = first_match(block, &AUTHOR_LINK_SELECTOR)
        .ok_or_else(|| ChatError::MalformedAuthorLink("<missing>".to_string()))?;
    let href = author_link.value().attr("href").unwrap_or_default();
    let author_id = user_id_from_profile_href(href)
        .ok_or_else(|| ChatError::MalformedAuthorLink(href.to_string()))?;
    let author_name = element_text(&author_link).trim().to_string();

    let timestamp = first_match(block, &TIMESTAMP_SELECTOR)
        .map(|ts| element_text(&ts).trim().to_string())
        .unwrap_or_default();

    Ok(Some(Revision {
        text,
        author_id,
        author_name,
        timestamp,
    }))
}
